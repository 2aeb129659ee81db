//! ナビゲーション
//!
//! モバイルメニューの開閉と、スクロール位置に応じたナビリンクのハイライト。

use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};

use crate::utils::dom::{self, lock_body_scroll, query, query_all, set_class};
use crate::PageContext;

// ============================================
// モバイルメニュー
// ============================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

fn render_menu(state: MenuState, hamburger: &Element, menu: &Element) {
    set_class(hamburger, "active", state.open);
    set_class(menu, "active", state.open);
    lock_body_scroll(state.open);
}

pub fn init_menu(_ctx: PageContext) -> Option<()> {
    let hamburger = query(".hamburger")?;
    let menu = query(".nav-menu")?;
    let state = Rc::new(Cell::new(MenuState::default()));

    // 状態が変わったときだけ DOM に反映する
    let update: Rc<dyn Fn(fn(MenuState) -> MenuState)> = {
        let (state, hamburger, menu) = (state.clone(), hamburger.clone(), menu.clone());
        Rc::new(move |transition| {
            let next = transition(state.get());
            if next != state.get() {
                state.set(next);
                render_menu(next, &hamburger, &menu);
            }
        })
    };

    {
        let update = update.clone();
        EventListener::new(&hamburger, "click", move |_| update(MenuState::toggled)).forget();
    }

    // リンクを押したら閉じる
    for link in query_all(".nav-link") {
        let update = update.clone();
        EventListener::new(&link, "click", move |_| update(MenuState::closed)).forget();
    }

    let document = dom::document()?;

    // メニューの外側をクリックしたら閉じる
    {
        let update = update.clone();
        let (hamburger, menu) = (hamburger.clone(), menu.clone());
        EventListener::new(&document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = hamburger.contains(target.as_ref()) || menu.contains(target.as_ref());
            if !inside {
                update(MenuState::closed);
            }
        })
        .forget();
    }

    EventListener::new(&document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .map(|e| e.key() == "Escape")
            .unwrap_or(false);
        if is_escape && state.get().open {
            update(MenuState::closed);
        }
    })
    .forget();

    Some(())
}

// ============================================
// スクロール連動（ナビバー・セクションハイライト）
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// 現在位置を含むセクション（複数該当する場合は後のもの）
pub fn active_section(scroll_y: f64, sections: &[SectionBox], offset: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.top - offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

fn measure_sections(sections: &[Element]) -> Vec<SectionBox> {
    sections
        .iter()
        .filter_map(|s| {
            let html = s.dyn_ref::<HtmlElement>()?;
            Some(SectionBox {
                id: s.id(),
                top: f64::from(html.offset_top()),
                height: f64::from(s.client_height()),
            })
        })
        .collect()
}

pub fn init_scroll_spy(ctx: PageContext) -> Option<()> {
    let navbar = dom::get_by_id("navbar");
    let sections = query_all("section[id]");
    let links = query_all(".nav-link");
    if navbar.is_none() && sections.is_empty() {
        return None;
    }

    let (offset, scrolled_px) = ctx
        .config
        .with_value(|c| (c.section_highlight_offset_px, c.navbar_scrolled_px));
    let window = dom::window()?;

    EventListener::new(&window, "scroll", move |_| {
        let y = dom::scroll_y();

        if let Some(navbar) = &navbar {
            set_class(navbar, "scrolled", y > scrolled_px);
        }

        // レイアウトが変わりうるので毎回測る
        let boxes = measure_sections(&sections);
        let current = active_section(y, &boxes, offset).map(|id| format!("#{}", id));
        for link in &links {
            let is_current = current.is_some() && link.get_attribute("href") == current;
            set_class(link, "active", is_current);
        }
    })
    .forget();

    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox { id: "home".into(), top: 0.0, height: 700.0 },
            SectionBox { id: "about".into(), top: 700.0, height: 600.0 },
            SectionBox { id: "projects".into(), top: 1300.0, height: 900.0 },
        ]
    }

    #[test]
    fn test_menu_toggle_is_idempotent_pairwise() {
        let state = MenuState::default();
        assert!(state.toggled().open);
        assert_eq!(state.toggled().toggled(), state);
        assert!(!state.toggled().closed().open);
    }

    #[test]
    fn test_active_section_uses_offset() {
        let s = sections();
        assert_eq!(active_section(0.0, &s, 100.0), Some("home"));
        // about は 600 から（700 - 100）
        assert_eq!(active_section(599.0, &s, 100.0), Some("home"));
        assert_eq!(active_section(600.0, &s, 100.0), Some("about"));
        assert_eq!(active_section(1250.0, &s, 100.0), Some("projects"));
    }

    #[test]
    fn test_no_section_past_end() {
        assert_eq!(active_section(5000.0, &sections(), 100.0), None);
    }

    #[test]
    fn test_overlapping_sections_prefer_later() {
        let s = vec![
            SectionBox { id: "a".into(), top: 0.0, height: 1000.0 },
            SectionBox { id: "b".into(), top: 200.0, height: 300.0 },
        ];
        assert_eq!(active_section(300.0, &s, 100.0), Some("b"));
    }
}
