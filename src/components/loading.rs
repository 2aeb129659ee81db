//! ローディング画面
//!
//! load イベントと最低表示時間の両方を待ってからフェードアウトし、取り外す。

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::animation::{SplashGate, SplashPhase};
use crate::utils::dom;
use crate::utils::log_trace::log_info;
use crate::PageContext;

/// ゲートを更新し、フェードが始まったら取り外しを予約する
fn advance_splash(gate: RwSignal<SplashGate>, fade_ms: u32, step: impl FnOnce(&mut SplashGate) -> bool) {
    let mut fading = false;
    gate.update(|g| fading = step(g));
    if fading {
        log_info("splash", "fade out");
        Timeout::new(fade_ms, move || {
            gate.update(|g| {
                g.finish_fade();
            });
        })
        .forget();
    }
}

#[component]
pub fn LoadingSplash() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not found");
    let (title, subtitle, min_ms, fade_ms) = ctx.config.with_value(|c| {
        (c.splash_title.clone(), c.splash_subtitle.clone(), c.splash_min_ms, c.splash_fade_ms)
    });

    let gate = create_rw_signal(SplashGate::new());

    // wasm の読み込みが load より遅れた場合はすでに complete になっている
    let already_loaded = dom::document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(true);
    if already_loaded {
        advance_splash(gate, fade_ms, SplashGate::mark_loaded);
    } else if let Some(window) = dom::window() {
        EventListener::once(&window, "load", move |_| {
            advance_splash(gate, fade_ms, SplashGate::mark_loaded);
        })
        .forget();
    }

    spawn_local(async move {
        TimeoutFuture::new(min_ms).await;
        advance_splash(gate, fade_ms, SplashGate::mark_min_elapsed);
    });

    let removed = create_memo(move |_| gate.with(|g| g.phase() == SplashPhase::Removed));
    let fading = move || gate.with(|g| g.phase() == SplashPhase::Fading);

    view! {
        {move || (!removed.get()).then(|| view! {
            <div class="loading-screen" class:hidden=fading>
                <div class="loading-content">
                    <div class="loading-spinner"></div>
                    <h3>{title.clone()}</h3>
                    <p>{subtitle.clone()}</p>
                </div>
            </div>
        })}
    }
}
