//! 数値カウンターの補間

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterFrame {
    pub value: i64,
    pub done: bool,
}

impl CounterFrame {
    pub fn label(&self) -> String {
        format!("{}%", self.value)
    }
}

/// `start` から `end` まで `duration_ms` かけて進むカウンター
///
/// 最初のフレームのタイムスタンプを開始時刻とする。
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    start: i64,
    end: i64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration_ms: u32) -> Self {
        Self {
            start,
            end,
            duration_ms: f64::from(duration_ms),
            started_at: None,
        }
    }

    /// フレームのタイムスタンプ（ms）から表示値を求める
    pub fn frame(&mut self, timestamp: f64) -> CounterFrame {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((timestamp - started_at) / self.duration_ms).clamp(0.0, 1.0)
        };
        let span = (self.end - self.start) as f64;
        let value = (progress * span + self.start as f64).floor() as i64;
        CounterFrame {
            value,
            done: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_starts_at_zero() {
        let mut anim = CounterAnimation::new(0, 80, 1500);
        let frame = anim.frame(12_345.6);
        assert_eq!(frame.value, 0);
        assert!(!frame.done);
    }

    #[test]
    fn test_midway_is_floored() {
        let mut anim = CounterAnimation::new(0, 80, 1500);
        anim.frame(1000.0);
        // 0.5 * 80 = 40, 0.51 * 80 = 40.8 -> 40
        assert_eq!(anim.frame(1750.0).value, 40);
        assert_eq!(anim.frame(1765.0).value, 40);
    }

    #[test]
    fn test_ends_exactly_on_target() {
        for &start in &[0.0, 16.5, 98_765.0] {
            let mut anim = CounterAnimation::new(0, 80, 1500);
            anim.frame(start);
            let last = anim.frame(start + 1500.0);
            assert!(last.done);
            assert_eq!(last.label(), "80%");
        }
    }

    #[test]
    fn test_late_frame_is_clamped() {
        let mut anim = CounterAnimation::new(0, 93, 1500);
        anim.frame(0.0);
        let frame = anim.frame(10_000.0);
        assert_eq!(frame.value, 93);
        assert!(frame.done);
    }

    #[test]
    fn test_values_never_decrease() {
        let mut anim = CounterAnimation::new(0, 57, 1500);
        let mut last = -1;
        let mut t = 0.0;
        loop {
            let frame = anim.frame(t);
            assert!(frame.value >= last);
            last = frame.value;
            if frame.done {
                break;
            }
            t += 16.7;
        }
        assert_eq!(last, 57);
    }
}
