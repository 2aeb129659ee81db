//! プロジェクト詳細モーダル
//!
//! ×ボタン、オーバーレイのクリック、Escape のどれで閉じても同じ退出処理を通る。

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::models::ProjectDetails;
use crate::utils::dom;
use crate::utils::log_trace::log_info;
use crate::PageContext;

pub fn open_project_modal(ctx: PageContext, details: ProjectDetails) {
    log_info("modal", &format!("open: {}", details.title));

    let mut id = 0;
    ctx.modal.update(|slot| id = slot.acquire(details));

    let show_delay = ctx.config.with_value(|c| c.overlay_show_delay_ms);
    Timeout::new(show_delay, move || {
        let mut shown = false;
        ctx.modal.update(|slot| shown = slot.show(id));
        if shown {
            dom::lock_body_scroll(true);
        }
    })
    .forget();
}

pub fn close_project_modal(ctx: PageContext) {
    let Some(id) = ctx.modal.with_untracked(|slot| slot.active_id()) else {
        return;
    };

    let mut leaving = false;
    ctx.modal.update(|slot| leaving = slot.begin_release(id));
    if !leaving {
        return;
    }

    let transition = ctx.config.with_value(|c| c.overlay_transition_ms);
    Timeout::new(transition, move || {
        let mut removed = false;
        ctx.modal.update(|slot| removed = slot.finish_release(id));
        // 別のモーダルに置き換わっていればスクロールロックはそちらに任せる
        if removed {
            dom::lock_body_scroll(false);
        }
    })
    .forget();
}

#[component]
pub fn ProjectModal() -> impl IntoView {
    let ctx = use_context::<PageContext>().expect("PageContext not found");
    let slot = ctx.modal;

    // Escape で閉じる（ページ全体で一つだけ登録）
    if let Some(document) = dom::document() {
        EventListener::new(&document, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .map(|e| e.key() == "Escape")
                .unwrap_or(false);
            if is_escape {
                close_project_modal(ctx);
            }
        })
        .forget();
    }

    let current = create_memo(move |_| slot.with(|s| s.active().map(|o| (o.id, o.data.clone()))));

    view! {
        {move || current.get().map(|(id, details)| {
            let active = move || slot.with(|s| s.is_shown(id));
            view! {
                <div class="project-modal" class:active=active role="dialog" aria-modal="true">
                    // オーバーレイ（クリックで閉じる）
                    <div class="modal-overlay" on:click=move |_| close_project_modal(ctx)></div>

                    <div class="modal-content">
                        <button class="modal-close" aria-label="Close" on:click=move |_| close_project_modal(ctx)>
                            "×"
                        </button>
                        <div class="modal-image">{details.image.clone()}</div>
                        <div class="modal-body">
                            <h2>{details.title.clone()}</h2>
                            <p>{details.description.clone()}</p>
                            <div class="modal-tech">
                                {details.tech.iter().map(|t| view! {
                                    <span class="tech-tag">{t.clone()}</span>
                                }).collect_view()}
                            </div>
                            <div class="modal-actions">
                                <a href="#" class="btn btn-primary">
                                    <i class="fas fa-external-link-alt"></i>" Live Demo"
                                </a>
                                <a href="#" class="btn btn-secondary">
                                    <i class="fab fa-github"></i>" Source Code"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
