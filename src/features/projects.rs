//! プロジェクト一覧（フィルターと詳細モーダル）

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::animation::transition::{visible_cards, WILDCARD_FILTER};
use crate::animation::{CardVisual, FilterChoreography};
use crate::components::open_project_modal;
use crate::models::ProjectDetails;
use crate::utils::dom::{query_all, query_all_in, set_class, set_styles, text_of};
use crate::utils::log_trace::log_info;
use crate::PageContext;

// ============================================
// フィルター
// ============================================

pub fn init_project_filter(ctx: PageContext) -> Option<()> {
    let buttons = Rc::new(query_all(".filter-btn"));
    if buttons.is_empty() {
        return None;
    }
    let cards = Rc::new(query_all(".project-card"));
    let choreo = Rc::new(RefCell::new(FilterChoreography::new()));
    let (exit_ms, stagger_ms) = ctx.config.with_value(|c| (c.filter_exit_ms, c.filter_stagger_ms));

    for button in buttons.iter() {
        let (buttons, cards, choreo) = (buttons.clone(), cards.clone(), choreo.clone());
        let selected = button.clone();

        EventListener::new(button, "click", move |_| {
            // active は常に一つだけ
            for b in buttons.iter() {
                set_class(b, "active", b == &selected);
            }

            let filter = selected
                .get_attribute("data-filter")
                .unwrap_or_else(|| WILDCARD_FILTER.to_string());
            let generation = choreo.borrow_mut().select();
            log_info("filter", &format!("select {} (gen {})", filter, generation));

            for card in cards.iter() {
                set_styles(card, CardVisual::Shrunk.styles());
            }

            let (cards, choreo) = (cards.clone(), choreo.clone());
            Timeout::new(exit_ms, move || {
                // 後から別のフィルターが選ばれていたら何もしない
                if !choreo.borrow_mut().begin_enter(generation) {
                    let phase = choreo.borrow().phase();
                    log_info("filter", &format!("superseded {} (now {:?})", filter, phase));
                    return;
                }

                let categories: Vec<Option<String>> =
                    cards.iter().map(|card| card.get_attribute("data-category")).collect();
                let categories: Vec<Option<&str>> = categories.iter().map(|c| c.as_deref()).collect();
                let visible = visible_cards(&filter, &categories);

                let mut shown = Vec::new();
                for (index, card) in cards.iter().enumerate() {
                    let matches = visible.contains(&index);
                    set_styles(card, CardVisual::Laid { shown: matches }.styles());
                    if matches {
                        shown.push(card.clone());
                    }
                }

                Timeout::new(stagger_ms, move || {
                    if !choreo.borrow_mut().settle(generation) {
                        return;
                    }
                    for card in &shown {
                        set_styles(card, CardVisual::Revealed.styles());
                    }
                })
                .forget();
            })
            .forget();
        })
        .forget();
    }

    Some(())
}

// ============================================
// 詳細モーダル
// ============================================

/// カード内の要素から詳細を組み立てる
pub fn project_details(card: &Element) -> ProjectDetails {
    ProjectDetails {
        title: text_of(card, ".project-title"),
        description: text_of(card, ".project-description"),
        tech: query_all_in(card, ".tech-tag")
            .iter()
            .filter_map(|tag| tag.text_content())
            .collect(),
        image: text_of(card, ".image-placeholder"),
    }
}

/// リンク（またはその内側）がクリックされたか
fn clicked_link(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

pub fn init_project_modals(ctx: PageContext) -> Option<()> {
    let cards = query_all(".project-card");
    if cards.is_empty() {
        return None;
    }

    for card in cards {
        let source = card.clone();
        EventListener::new(&card, "click", move |event| {
            if clicked_link(event) {
                return;
            }
            open_project_modal(ctx, project_details(&source));
        })
        .forget();
    }

    Some(())
}
