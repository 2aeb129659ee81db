//! 時系列トレースログシステム
//! 各機能の初期化・操作イベントを記録し、コンソールにも出力する
//!
//! 永続化はしない（localStorage はテーマ設定専用）。

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use wasm_bindgen::prelude::*;

const MAX_LOG_ENTRIES: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub category: String, // "nav", "filter", "contact", "theme", etc.
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogTrace {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        LogTrace {
            logs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn log(&mut self, level: &str, category: &str, message: &str, data: Option<serde_json::Value>) {
        let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();

        // コンソールにも出力
        let line = JsValue::from_str(&format!("[{}] {}", category, message));
        match level {
            "error" => web_sys::console::error_1(&line),
            "warn" => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }

        self.push(LogEntry {
            timestamp,
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            data,
        });
    }

    /// リングバッファに追加（上限を超えたら古いものから捨てる）
    pub fn push(&mut self, entry: LogEntry) {
        if self.logs.len() >= self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn clear(&mut self) {
        self.logs.clear();
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new()
    }
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("info", category, message, None);
    });
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("info", category, message, Some(data));
    });
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("warn", category, message, None);
    });
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().log("error", category, message, None);
    });
}

pub fn clear_logs() {
    LOG_TRACE.with(|trace| {
        trace.borrow_mut().clear();
    });
}

pub fn get_logs_json() -> String {
    LOG_TRACE.with(|trace| trace.borrow().get_logs_json())
}

/// デバッグ用: ブラウザのコンソールから `page_logs_json()` で取得
#[wasm_bindgen]
pub fn page_logs_json() -> String {
    get_logs_json()
}

/// デバッグ用: ログをクリア
#[wasm_bindgen]
pub fn page_logs_clear() {
    clear_logs();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
            level: "info".to_string(),
            category: "test".to_string(),
            message: message.to_string(),
            data: None,
        }
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut trace = LogTrace::with_capacity(2);
        trace.push(entry("a"));
        trace.push(entry("b"));
        trace.push(entry("c"));
        let parsed: Vec<LogEntry> = serde_json::from_str(&trace.get_logs_json()).unwrap();
        let messages: Vec<String> = parsed.into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_logs_json() {
        let mut trace = LogTrace::with_capacity(4);
        assert_eq!(trace.get_logs_json(), "[]");
        trace.push(entry("hello"));
        let parsed: Vec<LogEntry> = serde_json::from_str(&trace.get_logs_json()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].message, "hello");
        trace.clear();
        assert_eq!(trace.get_logs_json(), "[]");
    }
}
