//! スキルバーとパーセンテージカウンター

use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::animation::{CounterAnimation, RevealTracker};
use crate::utils::dom::{self, observe_entering, query_all, query_in, set_style, ObserveOptions};
use crate::utils::log_trace::log_warn;
use crate::PageContext;

/// `data-level` の先頭の整数部分を 0〜100 に収めて読む（"85.5" → 85, "80%" → 80）
pub fn parse_level(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    // 桁あふれは上限に丸められるので最大値扱い
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { 0 } else { value.min(100) })
}

pub fn init_skills(ctx: PageContext) -> Option<()> {
    let skills = query_all(".skill-progress");
    if skills.is_empty() {
        return None;
    }
    let (bar_delay, counter_ms) = ctx
        .config
        .with_value(|c| (c.skill_bar_delay_ms, c.skill_counter_ms));

    let targets = skills.clone();
    let mut tracker = RevealTracker::new(skills.len());

    observe_entering(&skills, Some(ObserveOptions::inset(0.5)), move |el, observer| {
        let Some(index) = targets.iter().position(|t| t == el) else {
            return;
        };
        if !tracker.fire(index) {
            return;
        }
        observer.unobserve(el);

        let Some(level) = el.get_attribute("data-level").as_deref().and_then(parse_level) else {
            log_warn("skills", "data-level が数値ではないためスキップ");
            return;
        };

        let bar = el.clone();
        Timeout::new(bar_delay, move || set_style(&bar, "width", &format!("{}%", level))).forget();

        let label = el
            .closest(".skill-item")
            .ok()
            .flatten()
            .and_then(|item| query_in(&item, ".skill-percentage"));
        if let Some(label) = label {
            animate_counter(label, CounterAnimation::new(0, level, counter_ms));
        }
    })?;

    Some(())
}

/// requestAnimationFrame でカウンターを進める
pub fn animate_counter(el: Element, mut anim: CounterAnimation) {
    let Some(window) = dom::window() else {
        return;
    };

    let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame_cb.clone();
    let win = window.clone();

    *frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let frame = anim.frame(timestamp);
        el.set_text_content(Some(&frame.label()));
        if frame.done {
            // 自身への参照を外して解放する
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(cb) = next.borrow().as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = frame_cb.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("80"), Some(80));
        assert_eq!(parse_level(" 95 "), Some(95));
        assert_eq!(parse_level("120"), Some(100));
        assert_eq!(parse_level("-5"), Some(0));
        assert_eq!(parse_level("high"), None);
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("-"), None);
    }

    #[test]
    fn test_parse_level_reads_leading_integer() {
        assert_eq!(parse_level("85.5"), Some(85));
        assert_eq!(parse_level("80%"), Some(80));
        assert_eq!(parse_level("+70"), Some(70));
        assert_eq!(parse_level("99999999999999999999"), Some(100));
        assert_eq!(parse_level(".5"), None);
    }

    #[test]
    fn test_level_80_counter_ends_at_80_percent() {
        let level = parse_level("80").unwrap();
        let mut anim = CounterAnimation::new(0, level, 1500);
        assert_eq!(anim.frame(500.0).label(), "0%");
        let last = anim.frame(2000.0);
        assert!(last.done);
        assert_eq!(last.label(), "80%");
        assert_eq!(format!("{}%", level), "80%");
    }
}
