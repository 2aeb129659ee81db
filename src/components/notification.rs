//! 通知バナー
//!
//! 同時に表示されるのは一つだけ。5秒で自動的に閉じ、×ボタンで即座に閉じる。

use gloo::timers::callback::Timeout;
use leptos::*;

use crate::components::overlay::OverlayId;
use crate::models::{NotificationData, Severity};
use crate::utils::log_trace::log_info;
use crate::PageContext;

/// 通知を表示する（既存の通知は破棄）
pub fn show_notification(ctx: PageContext, message: impl Into<String>, severity: Severity) {
    let data = NotificationData::new(message, severity);
    log_info("notification", &format!("[{}] {}", severity.css_suffix(), data.message));

    let mut id = 0;
    ctx.notification.update(|slot| id = slot.acquire(data));

    let (show_delay, auto_hide) = ctx
        .config
        .with_value(|c| (c.overlay_show_delay_ms, c.notification_auto_hide_ms));

    Timeout::new(show_delay, move || {
        ctx.notification.update(|slot| {
            slot.show(id);
        });
    })
    .forget();

    // 前回の自動非表示タイマーは置き換えで破棄（＝取り消し）される
    ctx.notification_timer
        .set_value(Some(Timeout::new(auto_hide, move || hide_notification(ctx, id))));
}

/// ×ボタン: 自動非表示タイマーを取り消してから閉じる
pub fn dismiss_notification(ctx: PageContext, id: OverlayId) {
    ctx.notification_timer.update_value(|timer| {
        timer.take();
    });
    hide_notification(ctx, id);
}

fn hide_notification(ctx: PageContext, id: OverlayId) {
    let mut leaving = false;
    ctx.notification.update(|slot| leaving = slot.begin_release(id));
    if !leaving {
        return;
    }

    let transition = ctx.config.with_value(|c| c.overlay_transition_ms);
    Timeout::new(transition, move || {
        ctx.notification.update(|slot| {
            slot.finish_release(id);
        });
    })
    .forget();
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not found");
    let slot = ctx.notification;

    // 表示フェーズの変化では要素を作り直さない
    let current = create_memo(move |_| slot.with(|s| s.active().map(|o| (o.id, o.data.clone()))));

    view! {
        {move || current.get().map(|(id, data)| {
            let shown = move || slot.with(|s| s.is_shown(id));
            view! {
                <div
                    class=format!("notification notification-{}", data.severity.css_suffix())
                    class:show=shown
                    role="status"
                >
                    <div class="notification-content">
                        <i class=data.severity.icon_class()></i>
                        <span class="notification-message">{data.message.clone()}</span>
                        <button
                            class="notification-close"
                            aria-label="Close notification"
                            on:click=move |_| dismiss_notification(ctx, id)
                        >
                            "×"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
