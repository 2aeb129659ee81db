//! ページ内リンクのスムーススクロール

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::utils::dom::{self, query, query_all, smooth_scroll_to};
use crate::utils::log_trace::log_info;
use crate::PageContext;

/// スクロール先のセレクタ。`#` 単体や `#` で始まらないものは None
pub fn fragment_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// 固定ヘッダーの高さ分だけ手前に止める
pub fn scroll_offset(element_top: f64, header_height: f64) -> f64 {
    element_top - header_height
}

pub fn init_smooth_scroll(ctx: PageContext) -> Option<()> {
    let anchors = query_all(r##"a[href^="#"]"##);
    if anchors.is_empty() {
        return None;
    }
    let header = ctx.config.with_value(|c| c.header_offset_px);

    for anchor in anchors {
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(selector) = fragment_target(&href) else {
                    return;
                };
                // 存在しない要素・不正なセレクタは無視
                let Some(target) = query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
                    return;
                };

                smooth_scroll_to(scroll_offset(f64::from(target.offset_top()), header));

                // ページジャンプなしで URL を更新
                if let Some(history) = dom::window().and_then(|w| w.history().ok()) {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
                }
                log_info("scroll", &format!("navigate {}", href));
            },
        )
        .forget();
    }

    Some(())
}
