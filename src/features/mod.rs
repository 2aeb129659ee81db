//! ページ機能モジュール
//!
//! 外部のマークアップにイベントを結び付ける。必要な要素がなければ
//! その機能だけ黙ってスキップする。

pub mod contact;
pub mod extras;
pub mod nav;
pub mod projects;
pub mod reveal;
pub mod scroll;
pub mod skills;
pub mod typewriter;

use crate::components::init_theme;
use crate::utils::log_trace::{log_info, log_warn};
use crate::PageContext;

type FeatureInit = fn(PageContext) -> Option<()>;

const FEATURES: &[(&str, FeatureInit)] = &[
    ("menu", nav::init_menu),
    ("smooth-scroll", scroll::init_smooth_scroll),
    ("skills", skills::init_skills),
    ("project-filter", projects::init_project_filter),
    ("contact", contact::init_contact_form),
    ("scroll-spy", nav::init_scroll_spy),
    ("card-reveal", reveal::init_card_reveal),
    ("typewriter", typewriter::init_typewriter),
    ("project-modal", projects::init_project_modals),
    ("theme", init_theme),
    ("footer-year", extras::init_footer_year),
    ("fade-in", reveal::init_fade_in),
    ("floating", extras::init_floating_elements),
];

/// すべての機能を初期化する
pub fn init_all(ctx: PageContext) {
    for (name, init) in FEATURES {
        match init(ctx) {
            Some(()) => log_info(name, "initialized"),
            None => log_warn(name, "対象要素が見つからないためスキップ"),
        }
    }
}
