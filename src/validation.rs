//! お問い合わせフォームの入力チェック

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// フィールドに課されるルール
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub email: bool,
}

/// `local@domain.tld` 形式のみ確認（RFC 完全準拠ではない）
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
        .is_match(email)
}

/// 1フィールドの検証。値は前後の空白を除いて判定する
pub fn validate_field(value: &str, rules: FieldRules) -> Result<(), FieldError> {
    let value = value.trim();
    if rules.required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if rules.email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// 有効かつ空でない場合だけ `valid` 表示にする
pub fn shows_valid_mark(value: &str, outcome: &Result<(), FieldError>) -> bool {
    outcome.is_ok() && !value.trim().is_empty()
}

/// フォーム全体の検証結果（失敗したフィールドのインデックス）
pub fn failing_fields<'a, I>(fields: I) -> Vec<(usize, FieldError)>
where
    I: IntoIterator<Item = (&'a str, FieldRules)>,
{
    fields
        .into_iter()
        .enumerate()
        .filter_map(|(i, (value, rules))| validate_field(value, rules).err().map(|e| (i, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: FieldRules = FieldRules { required: true, email: false };
    const EMAIL: FieldRules = FieldRules { required: true, email: true };
    const OPTIONAL_EMAIL: FieldRules = FieldRules { required: false, email: true };

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_required_field() {
        assert_eq!(validate_field("", REQUIRED), Err(FieldError::Required));
        assert_eq!(validate_field("   ", REQUIRED), Err(FieldError::Required));
        assert_eq!(validate_field("Hi", REQUIRED), Ok(()));
        assert_eq!(validate_field("", FieldRules::default()), Ok(()));
    }

    #[test]
    fn test_email_field() {
        assert_eq!(validate_field("not-an-email", EMAIL), Err(FieldError::InvalidEmail));
        assert_eq!(validate_field("", EMAIL), Err(FieldError::Required));
        assert_eq!(validate_field("", OPTIONAL_EMAIL), Ok(()));
        assert_eq!(validate_field("  jane@example.com ", EMAIL), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_valid_mark() {
        assert!(shows_valid_mark("x", &Ok(())));
        assert!(!shows_valid_mark("", &Ok(())));
        assert!(!shows_valid_mark("x", &Err(FieldError::Required)));
    }

    #[test]
    fn test_form_with_empty_required_field_fails() {
        let failures = failing_fields([
            ("Jane", REQUIRED),
            ("jane@example.com", EMAIL),
            ("", REQUIRED),
        ]);
        assert_eq!(failures, vec![(2, FieldError::Required)]);
    }

    #[test]
    fn test_form_with_invalid_email_fails() {
        let failures = failing_fields([("Jane", REQUIRED), ("not-an-email", EMAIL), ("Hello", REQUIRED)]);
        assert_eq!(failures, vec![(1, FieldError::InvalidEmail)]);
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let failures = failing_fields([("", REQUIRED), ("not-an-email", EMAIL), ("", REQUIRED)]);
        assert_eq!(
            failures,
            vec![(0, FieldError::Required), (1, FieldError::InvalidEmail), (2, FieldError::Required)]
        );
    }

    #[test]
    fn test_complete_form_passes() {
        assert!(failing_fields([("Jane", REQUIRED), ("jane@example.com", EMAIL)]).is_empty());
    }
}
