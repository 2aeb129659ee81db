//! ページ設定
//!
//! すべてのタイミング定数・しきい値をまとめる。
//! `<script type="application/json" id="page-config">` があれば部分的に上書きできる。

use serde::Deserialize;
use thiserror::Error;

use crate::utils::log_trace::log_warn;

const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("設定JSONの解析失敗: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// 固定ヘッダーの高さ（スムーススクロールの補正）
    pub header_offset_px: f64,
    pub section_highlight_offset_px: f64,
    pub navbar_scrolled_px: f64,
    pub back_to_top_threshold_px: f64,

    pub skill_bar_delay_ms: u32,
    pub skill_counter_ms: u32,

    pub filter_exit_ms: u32,
    pub filter_stagger_ms: u32,

    /// 追加から表示クラス付与までの待ち（CSS トランジションを効かせるため）
    pub overlay_show_delay_ms: u32,
    pub notification_auto_hide_ms: u32,
    /// 通知・モーダル共通の退出トランジション時間
    pub overlay_transition_ms: u32,

    pub submit_latency_ms: u32,
    pub form_nudge_ms: u32,

    pub splash_min_ms: u32,
    pub splash_fade_ms: u32,
    pub splash_title: String,
    pub splash_subtitle: String,

    pub typewriter_pre_delay_ms: u32,
    pub typewriter_min_delay_ms: u32,
    pub typewriter_jitter_ms: u32,
    pub typewriter_caret_ms: u32,

    pub theme_storage_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset_px: 80.0,
            section_highlight_offset_px: 100.0,
            navbar_scrolled_px: 100.0,
            back_to_top_threshold_px: 500.0,
            skill_bar_delay_ms: 200,
            skill_counter_ms: 1500,
            filter_exit_ms: 300,
            filter_stagger_ms: 100,
            overlay_show_delay_ms: 10,
            notification_auto_hide_ms: 5000,
            overlay_transition_ms: 400,
            submit_latency_ms: 2000,
            form_nudge_ms: 300,
            splash_min_ms: 1500,
            splash_fade_ms: 500,
            splash_title: "Sikha bhujel".to_string(),
            splash_subtitle: "Web Developer Portfolio".to_string(),
            typewriter_pre_delay_ms: 1000,
            typewriter_min_delay_ms: 100,
            typewriter_jitter_ms: 50,
            typewriter_caret_ms: 500,
            theme_storage_key: "theme".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// ページ内の設定ブロックを読み込む（無い場合・壊れている場合は既定値）
    pub fn load() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log_warn("config", &format!("{} (既定値を使用)", e));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"header_offset_px": 64, "splash_min_ms": 900}"#).unwrap();
        assert_eq!(config.header_offset_px, 64.0);
        assert_eq!(config.splash_min_ms, 900);
        assert_eq!(config.notification_auto_hide_ms, 5000);
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(PageConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }
}
