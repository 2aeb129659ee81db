//! ユーティリティモジュール

pub mod dom;
pub mod log_trace;
pub mod storage;

/// [0, 1) の乱数
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// 現在の西暦年
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
