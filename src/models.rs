//! データ構造体モジュール

// ============================================
// テーマ
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 保存値から復元（"dark" 以外はすべてライト扱い）
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// トグルボタンのアイコン（ダーク時は太陽、ライト時は月）
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    pub fn announcement(self) -> &'static str {
        match self {
            Theme::Light => "Light mode enabled",
            Theme::Dark => "Dark mode enabled",
        }
    }
}

// ============================================
// 通知
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn css_suffix(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Severity::Success => "fas fa-check-circle",
            Severity::Error => "fas fa-exclamation-circle",
            Severity::Info => "fas fa-info-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationData {
    pub message: String,
    pub severity: Severity,
}

impl NotificationData {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

// ============================================
// プロジェクト詳細（モーダル表示用）
// ============================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDetails {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    /// 画像プレースホルダのテキスト
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_theme_toggle_icons() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_default_severity_is_info() {
        let data = NotificationData::new("hello", Severity::default());
        assert_eq!(data.severity, Severity::Info);
        assert_eq!(data.severity.css_suffix(), "info");
    }
}
