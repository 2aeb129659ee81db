//! スクロールで要素を表示するアニメーション

use web_sys::Element;

use crate::animation::RevealTracker;
use crate::utils::dom::{observe_entering, query_all, set_class, set_styles, ObserveOptions};
use crate::PageContext;

const CARD_SELECTOR: &str = ".skill-category, .project-card, .timeline-item, .contact-info, .contact-form";
const FADE_TAG_SELECTOR: &str = ".skill-category, .project-card, .timeline-item, .stat, .contact-item";

const CARD_HIDDEN: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "all 0.6s ease"),
];
const CARD_SHOWN: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// 要素ごとに一度だけ `apply` を呼ぶ監視を張る
fn reveal_once<F>(elements: Vec<Element>, threshold: f64, apply: F) -> Option<()>
where
    F: Fn(&Element) + 'static,
{
    if elements.is_empty() {
        return None;
    }
    let mut tracker = RevealTracker::new(elements.len());
    let targets = elements.clone();
    observe_entering(&elements, Some(ObserveOptions::inset(threshold)), move |el, _| {
        let fired = targets
            .iter()
            .position(|t| t == el)
            .map(|i| tracker.fire(i))
            .unwrap_or(false);
        if fired {
            apply(el);
        }
    })
    .map(|_| ())
}

/// カード類を下からフェードイン
pub fn init_card_reveal(_ctx: PageContext) -> Option<()> {
    let cards = query_all(CARD_SELECTOR);
    for card in &cards {
        set_styles(card, CARD_HIDDEN);
    }
    reveal_once(cards, 0.1, |el| set_styles(el, CARD_SHOWN))
}

/// `fade-in` クラスの要素に `visible` を付ける
pub fn init_fade_in(_ctx: PageContext) -> Option<()> {
    for el in query_all(FADE_TAG_SELECTOR) {
        set_class(&el, "fade-in", true);
    }
    reveal_once(query_all(".fade-in"), 0.1, |el| set_class(el, "visible", true))
}
