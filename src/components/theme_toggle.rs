//! ダークモード切り替え
//!
//! テーマは body の `dark-mode` クラスで表し、localStorage に保存する。

use leptos::*;
use wasm_bindgen::JsCast;

use crate::components::notification::show_notification;
use crate::models::{Severity, Theme};
use crate::utils::dom;
use crate::utils::log_trace::{log_info, log_warn};
use crate::utils::storage::{load_theme, toggle_theme, LocalPreferences};
use crate::PageContext;

const DARK_MODE_CLASS: &str = "dark-mode";

fn apply_theme(theme: Theme) {
    if let Some(body) = dom::body() {
        dom::set_class(&body, DARK_MODE_CLASS, theme.is_dark());
    }
}

/// 保存済みテーマを反映し、ナビゲーションにトグルボタンを追加する
pub fn init_theme(ctx: PageContext) -> Option<()> {
    let key = ctx.config.with_value(|c| c.theme_storage_key.clone());
    let theme = load_theme(&LocalPreferences, &key);
    ctx.theme.set(theme);
    // ボタンの設置場所がなくてもテーマ自体は復元する
    apply_theme(theme);
    log_info("theme", &format!("restored: {}", theme.as_str()));

    let Some(container) = dom::query(".nav-container").and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log_warn("theme", ".nav-container がないためトグルボタンは省略");
        return None;
    };
    leptos::mount_to(container, move || view! { <ThemeToggle ctx=ctx /> });
    Some(())
}

#[component]
pub fn ThemeToggle(ctx: PageContext) -> impl IntoView {
    let theme = ctx.theme;

    let on_toggle = move |_| {
        let key = ctx.config.with_value(|c| c.theme_storage_key.clone());
        let next = toggle_theme(theme.get_untracked(), &mut LocalPreferences, &key);
        theme.set(next);
        apply_theme(next);
        log_info("theme", &format!("switched to {}", next.as_str()));
        show_notification(ctx, next.announcement(), Severity::Info);
    };

    view! {
        <button class="theme-toggle" aria-label="Toggle dark mode" on:click=on_toggle>
            <i class=move || theme.get().icon_class()></i>
        </button>
    }
}
