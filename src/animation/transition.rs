//! プロジェクトフィルターの遷移状態機械
//!
//! `Idle → Exiting → Entering → Idle`。新しい選択は世代番号を進め、
//! 古い世代の遅延ステップは何もしない。

pub const WILDCARD_FILTER: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Exiting,
    Entering,
}

#[derive(Debug, Clone, Default)]
pub struct FilterChoreography {
    generation: u64,
    phase: TransitionPhase,
}

impl FilterChoreography {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい選択で退出を始め、この遷移の世代番号を返す
    pub fn select(&mut self) -> u64 {
        self.generation += 1;
        self.phase = TransitionPhase::Exiting;
        self.generation
    }

    /// 退出完了 → 入場開始。古い世代なら false
    pub fn begin_enter(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.phase == TransitionPhase::Exiting {
            self.phase = TransitionPhase::Entering;
            true
        } else {
            false
        }
    }

    /// 入場完了 → Idle。古い世代なら false
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.phase == TransitionPhase::Entering {
            self.phase = TransitionPhase::Idle;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }
}

/// カードがフィルターに一致するか（"all" は全件一致）
pub fn card_matches(filter: &str, category: Option<&str>) -> bool {
    filter == WILDCARD_FILTER || category == Some(filter)
}

/// 遷移完了後に表示されるカードのインデックス
pub fn visible_cards(filter: &str, categories: &[Option<&str>]) -> Vec<usize> {
    categories
        .iter()
        .enumerate()
        .filter(|(_, category)| card_matches(filter, **category))
        .map(|(i, _)| i)
        .collect()
}

/// カードの見た目（状態 → インラインスタイル）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisual {
    /// 縮小・透明化（退出）
    Shrunk,
    /// レイアウト上の表示/非表示
    Laid { shown: bool },
    /// 元の大きさに戻す（入場）
    Revealed,
}

impl CardVisual {
    pub fn styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            CardVisual::Shrunk => &[("transform", "scale(0.8)"), ("opacity", "0")],
            CardVisual::Laid { shown: true } => &[("display", "block")],
            CardVisual::Laid { shown: false } => &[("display", "none")],
            CardVisual::Revealed => &[
                ("transform", "scale(1)"),
                ("opacity", "1"),
                ("transition", "all 0.5s cubic-bezier(0.175, 0.885, 0.32, 1.275)"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [Option<&str>; 5] = [Some("web"), Some("mobile"), Some("web"), None, Some("design")];

    #[test]
    fn test_visible_cards_match_selection() {
        for filter in ["web", "mobile", "design", "missing"] {
            let visible = visible_cards(filter, &CATEGORIES);
            let expected: Vec<usize> = CATEGORIES
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == Some(filter))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(visible, expected, "filter {}", filter);
        }
    }

    #[test]
    fn test_wildcard_shows_all() {
        assert_eq!(visible_cards("all", &CATEGORIES), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_full_cycle() {
        let mut choreo = FilterChoreography::new();
        assert_eq!(choreo.phase(), TransitionPhase::Idle);
        let gen = choreo.select();
        assert_eq!(choreo.phase(), TransitionPhase::Exiting);
        assert!(choreo.begin_enter(gen));
        assert_eq!(choreo.phase(), TransitionPhase::Entering);
        assert!(choreo.settle(gen));
        assert_eq!(choreo.phase(), TransitionPhase::Idle);
        // 完了後の遅延ステップは再実行されない
        assert!(!choreo.settle(gen));
    }

    #[test]
    fn test_rapid_reselect_supersedes() {
        let mut choreo = FilterChoreography::new();
        let first = choreo.select();
        let second = choreo.select();

        // 最初の選択の遅延ステップは無効
        assert!(!choreo.begin_enter(first));
        assert!(!choreo.settle(first));
        assert_eq!(choreo.phase(), TransitionPhase::Exiting);

        assert!(choreo.begin_enter(second));
        assert!(choreo.settle(second));
        assert_eq!(choreo.phase(), TransitionPhase::Idle);
    }

    #[test]
    fn test_reselect_during_enter() {
        let mut choreo = FilterChoreography::new();
        let first = choreo.select();
        assert!(choreo.begin_enter(first));
        let second = choreo.select();
        assert!(!choreo.settle(first));
        assert_eq!(choreo.phase(), TransitionPhase::Exiting);
        assert!(choreo.begin_enter(second));
    }

    #[test]
    fn test_card_visual_styles() {
        assert!(CardVisual::Laid { shown: false }.styles().contains(&("display", "none")));
        assert!(CardVisual::Revealed.styles().contains(&("opacity", "1")));
        assert!(CardVisual::Shrunk.styles().contains(&("transform", "scale(0.8)")));
    }
}
