//! ローディング画面の表示ゲート
//!
//! ページ読み込み完了と最低表示時間の両方がそろって初めてフェードを始める。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    Visible,
    Fading,
    Removed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SplashGate {
    loaded: bool,
    min_elapsed: bool,
    phase: SplashPhase,
}

impl SplashGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// load イベント。フェード開始に遷移したら true
    pub fn mark_loaded(&mut self) -> bool {
        self.loaded = true;
        self.try_fade()
    }

    /// 最低表示時間の経過。フェード開始に遷移したら true
    pub fn mark_min_elapsed(&mut self) -> bool {
        self.min_elapsed = true;
        self.try_fade()
    }

    /// フェード完了 → 取り外し
    pub fn finish_fade(&mut self) -> bool {
        if self.phase == SplashPhase::Fading {
            self.phase = SplashPhase::Removed;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    fn try_fade(&mut self) -> bool {
        if self.phase == SplashPhase::Visible && self.loaded && self.min_elapsed {
            self.phase = SplashPhase::Fading;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (フェード開始, 取り外し) の時刻。すべて起動からの ms
    fn splash_timeline(load_at_ms: u32, min_ms: u32, fade_ms: u32) -> (u32, u32) {
        let fade_start = load_at_ms.max(min_ms);
        (fade_start, fade_start + fade_ms)
    }

    #[test]
    fn test_fast_load_waits_for_minimum() {
        let mut gate = SplashGate::new();
        // 200ms で load
        assert!(!gate.mark_loaded());
        assert_eq!(gate.phase(), SplashPhase::Visible);
        // 1500ms で最低表示時間
        assert!(gate.mark_min_elapsed());
        assert_eq!(gate.phase(), SplashPhase::Fading);
        assert!(gate.finish_fade());
        assert_eq!(gate.phase(), SplashPhase::Removed);

        assert_eq!(splash_timeline(200, 1500, 500), (1500, 2000));
    }

    #[test]
    fn test_slow_load() {
        let mut gate = SplashGate::new();
        assert!(!gate.mark_min_elapsed());
        assert!(gate.mark_loaded());
        assert_eq!(splash_timeline(3200, 1500, 500), (3200, 3700));
    }

    #[test]
    fn test_finish_before_fade_is_ignored() {
        let mut gate = SplashGate::new();
        assert!(!gate.finish_fade());
        assert_eq!(gate.phase(), SplashPhase::Visible);
    }

    #[test]
    fn test_duplicate_events_fade_once() {
        let mut gate = SplashGate::new();
        gate.mark_loaded();
        assert!(gate.mark_min_elapsed());
        assert!(!gate.mark_loaded());
        assert!(!gate.mark_min_elapsed());
    }
}
