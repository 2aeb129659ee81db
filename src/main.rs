mod animation;
mod components;
mod config;
mod features;
mod models;
mod styles;
mod utils;
mod validation;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use leptos::*;

use components::overlay::OverlaySlot;
use components::{BackToTop, LoadingSplash, NotificationHost, ProjectModal};
use config::PageConfig;
use models::{NotificationData, ProjectDetails, Theme};
use utils::log_trace::log_info;

// ============================================
// ページ全体の状態
// ============================================

/// 各機能で共有する状態（Copy なのでクロージャにそのまま渡せる）
#[derive(Clone, Copy)]
pub struct PageContext {
    pub config: StoredValue<PageConfig>,
    pub notification: RwSignal<OverlaySlot<NotificationData>>,
    /// 通知の自動非表示タイマー（破棄で取り消し）
    pub notification_timer: StoredValue<Option<Timeout>>,
    pub modal: RwSignal<OverlaySlot<ProjectDetails>>,
    pub theme: RwSignal<Theme>,
}

impl PageContext {
    fn new(config: PageConfig) -> Self {
        Self {
            config: store_value(config),
            notification: create_rw_signal(OverlaySlot::new()),
            notification_timer: store_value(None),
            modal: create_rw_signal(OverlaySlot::new()),
            theme: create_rw_signal(Theme::default()),
        }
    }
}

// ============================================
// ルート（オーバーレイ類を body に追加）
// ============================================

#[component]
fn PageRoot() -> impl IntoView {
    let ctx = PageContext::new(PageConfig::load());
    provide_context(ctx);

    styles::inject_all();
    features::init_all(ctx);

    view! {
        <LoadingSplash />
        <NotificationHost />
        <ProjectModal />
        <BackToTop />
    }
}

fn start() {
    log_info("page", "start");
    mount_to_body(PageRoot);
}

fn main() {
    console_error_panic_hook::set_once();

    // DOM 構築前なら DOMContentLoaded を待つ
    match utils::dom::document() {
        Some(document) if document.ready_state() == "loading" => {
            EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
        }
        _ => start(),
    }
}
