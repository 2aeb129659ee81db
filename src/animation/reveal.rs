//! 表示トリガーの一回限りフラグ

/// 要素ごとの `pending → fired` 状態
///
/// 監視解除に頼らず、発火済みの要素への再交差はここで弾く。
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    fired: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            fired: vec![false; count],
        }
    }

    /// 初回だけ true を返す。範囲外は false
    pub fn fire(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut tracker = RevealTracker::new(2);
        assert!(tracker.fire(1));
        assert!(!tracker.fire(1));
        // 他の要素は影響を受けない
        assert!(tracker.fire(0));
        assert!(!tracker.fire(0));
        assert!(!tracker.fire(1));
    }

    #[test]
    fn test_out_of_range() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.fire(5));
        assert!(tracker.fire(0));
    }
}
