//! タイプライター効果の進行管理

/// 1文字ずつ表示するタイプライター
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
    min_delay_ms: u32,
    jitter_ms: u32,
}

impl Typewriter {
    pub fn new(text: &str, min_delay_ms: u32, jitter_ms: u32) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
            min_delay_ms,
            jitter_ms,
        }
    }

    /// 1文字進めて、表示すべきテキストを返す。打ち終わっていれば None
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.visible_text())
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }

    /// 次の文字までの待ち時間。`random` は [0, 1) の乱数
    pub fn next_delay_ms(&self, random: f64) -> u32 {
        let jitter = (random.clamp(0.0, 1.0) * f64::from(self.jitter_ms)).floor() as u32;
        // random が 1.0 ちょうどでも上限未満に収める
        self.min_delay_ms + jitter.min(self.jitter_ms.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_at_a_time() {
        let mut tw = Typewriter::new("Rust", 100, 50);
        assert_eq!(tw.visible_text(), "");
        assert_eq!(tw.advance().as_deref(), Some("R"));
        assert_eq!(tw.advance().as_deref(), Some("Ru"));
        assert_eq!(tw.advance().as_deref(), Some("Rus"));
        assert_eq!(tw.advance().as_deref(), Some("Rust"));
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("日本", 100, 50);
        assert_eq!(tw.advance().as_deref(), Some("日"));
        assert_eq!(tw.advance().as_deref(), Some("日本"));
    }

    #[test]
    fn test_delay_range() {
        let tw = Typewriter::new("x", 100, 50);
        assert_eq!(tw.next_delay_ms(0.0), 100);
        assert_eq!(tw.next_delay_ms(0.5), 125);
        assert_eq!(tw.next_delay_ms(0.999_999), 149);
        assert_eq!(tw.next_delay_ms(1.0), 149);
    }

    #[test]
    fn test_empty_text_is_done() {
        let mut tw = Typewriter::new("", 100, 50);
        assert!(tw.is_done());
        assert_eq!(tw.advance(), None);
    }
}
