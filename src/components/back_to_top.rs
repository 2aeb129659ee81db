//! トップへ戻るボタン

use gloo::events::EventListener;
use leptos::*;

use crate::utils::dom;
use crate::PageContext;

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not found");
    let threshold = ctx.config.with_value(|c| c.back_to_top_threshold_px);

    let (visible, set_visible) = create_signal(back_to_top_visible(dom::scroll_y(), threshold));

    if let Some(window) = dom::window() {
        EventListener::new(&window, "scroll", move |_| {
            let next = back_to_top_visible(dom::scroll_y(), threshold);
            if visible.get_untracked() != next {
                set_visible.set(next);
            }
        })
        .forget();
    }

    view! {
        <button
            class="back-to-top"
            class:visible=move || visible.get()
            aria-label="Back to top"
            on:click=move |_| dom::smooth_scroll_to(0.0)
        >
            <i class="fas fa-chevron-up"></i>
        </button>
    }
}
