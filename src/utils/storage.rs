//! LocalStorage 設定管理
//!
//! 永続化する値はテーマ設定ひとつだけ。

use crate::models::Theme;
use crate::utils::log_trace::log_error;

/// キー・値形式の設定ストア
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// ブラウザの localStorage
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(key, value).is_err() {
                    // プライベートブラウズや容量超過では保存できない
                    log_error("storage", &format!("failed to save {}", key));
                }
            }
        }
    }
}

/// 保存済みテーマを読み込み（未保存ならライト）
pub fn load_theme(store: &impl PreferenceStore, key: &str) -> Theme {
    Theme::from_stored(store.get(key).as_deref())
}

/// テーマを反転して保存し、新しいテーマを返す
pub fn toggle_theme(current: Theme, store: &mut impl PreferenceStore, key: &str) -> Theme {
    let next = current.toggled();
    store.set(key, next.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryPreferences(HashMap<String, String>);

    impl PreferenceStore for MemoryPreferences {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_default_theme_is_light() {
        let store = MemoryPreferences::default();
        assert_eq!(load_theme(&store, "theme"), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = MemoryPreferences::default();
        let theme = toggle_theme(Theme::Light, &mut store, "theme");
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(load_theme(&store, "theme"), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut store = MemoryPreferences::default();
        store.set("theme", "light");
        let original = load_theme(&store, "theme");

        let once = toggle_theme(original, &mut store, "theme");
        let twice = toggle_theme(once, &mut store, "theme");

        assert_eq!(twice, original);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
    }
}
