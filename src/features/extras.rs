//! フッターの年表示と浮遊要素

use gloo::events::EventListener;

use crate::utils::dom::{get_by_id, query_all, set_styles};
use crate::utils::{current_year, random_unit};
use crate::PageContext;

pub fn init_footer_year(_ctx: PageContext) -> Option<()> {
    let el = get_by_id("current-year")?;
    el.set_text_content(Some(&current_year().to_string()));
    Some(())
}

/// (animation-delay, animation-duration) 秒
pub fn floating_timing(index: usize, random: f64) -> (f64, f64) {
    (index as f64 * 0.5, 3.0 + random.clamp(0.0, 1.0) * 2.0)
}

pub fn init_floating_elements(_ctx: PageContext) -> Option<()> {
    let elements = query_all(".floating-element");
    if elements.is_empty() {
        return None;
    }

    for (index, el) in elements.into_iter().enumerate() {
        let (delay, duration) = floating_timing(index, random_unit());
        let delay = format!("{}s", delay);
        let duration = format!("{}s", duration);
        set_styles(
            &el,
            &[("animation-delay", delay.as_str()), ("animation-duration", duration.as_str())],
        );

        let hovered = el.clone();
        EventListener::new(&el, "mouseenter", move |_| {
            set_styles(&hovered, &[("transform", "scale(1.2)"), ("z-index", "10")]);
        })
        .forget();

        let left = el.clone();
        EventListener::new(&el, "mouseleave", move |_| {
            set_styles(&left, &[("transform", ""), ("z-index", "")]);
        })
        .forget();
    }

    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_timing() {
        assert_eq!(floating_timing(0, 0.0), (0.0, 3.0));
        assert_eq!(floating_timing(3, 0.5), (1.5, 4.0));
        let (_, duration) = floating_timing(1, 0.999);
        assert!(duration < 5.0);
    }
}
