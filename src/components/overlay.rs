//! 一時オーバーレイの所有スロット
//!
//! 通知・モーダルは同時に一つだけ。`acquire` で既存のものを破棄してから作り、
//! 閉じ方（タイムアウト、×ボタン、オーバーレイ、Escape）に関係なく
//! `begin_release` → `finish_release` の同じ経路で解放する。

pub type OverlayId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// DOM に追加済み、表示トランジション前
    Entering,
    Shown,
    /// 退出トランジション中
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay<T> {
    pub id: OverlayId,
    pub data: T,
    pub phase: OverlayPhase,
}

#[derive(Debug, Clone)]
pub struct OverlaySlot<T> {
    next_id: OverlayId,
    active: Option<Overlay<T>>,
}

impl<T> Default for OverlaySlot<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            active: None,
        }
    }
}

impl<T> OverlaySlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のインスタンスを破棄して新しく確保する
    pub fn acquire(&mut self, data: T) -> OverlayId {
        self.next_id += 1;
        self.active = Some(Overlay {
            id: self.next_id,
            data,
            phase: OverlayPhase::Entering,
        });
        self.next_id
    }

    pub fn show(&mut self, id: OverlayId) -> bool {
        match self.active.as_mut() {
            Some(o) if o.id == id && o.phase == OverlayPhase::Entering => {
                o.phase = OverlayPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// 退出開始。すでに退出中・別インスタンスなら false
    pub fn begin_release(&mut self, id: OverlayId) -> bool {
        match self.active.as_mut() {
            Some(o) if o.id == id && o.phase != OverlayPhase::Leaving => {
                o.phase = OverlayPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// 退出完了で取り外す
    pub fn finish_release(&mut self, id: OverlayId) -> bool {
        match &self.active {
            Some(o) if o.id == id && o.phase == OverlayPhase::Leaving => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> Option<&Overlay<T>> {
        self.active.as_ref()
    }

    pub fn active_id(&self) -> Option<OverlayId> {
        self.active.as_ref().map(|o| o.id)
    }

    pub fn phase_of(&self, id: OverlayId) -> Option<OverlayPhase> {
        self.active.as_ref().filter(|o| o.id == id).map(|o| o.phase)
    }

    pub fn is_shown(&self, id: OverlayId) -> bool {
        self.phase_of(id) == Some(OverlayPhase::Shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_replaces_first() {
        let mut slot = OverlaySlot::new();
        let first = slot.acquire("first");
        slot.show(first);
        let second = slot.acquire("second");

        assert_eq!(slot.active().map(|o| o.data), Some("second"));
        assert_eq!(slot.phase_of(second), Some(OverlayPhase::Entering));
        assert_eq!(slot.phase_of(first), None);
    }

    #[test]
    fn test_stale_release_is_ignored() {
        let mut slot = OverlaySlot::new();
        let first = slot.acquire(1);
        let second = slot.acquire(2);

        // 古いインスタンスのタイマーが後から発火しても新しいものは残る
        assert!(!slot.begin_release(first));
        assert!(!slot.finish_release(first));
        assert_eq!(slot.active_id(), Some(second));
    }

    #[test]
    fn test_release_lifecycle() {
        let mut slot = OverlaySlot::new();
        let id = slot.acquire(());
        assert!(!slot.finish_release(id));
        assert!(slot.show(id));
        assert!(slot.is_shown(id));
        assert!(slot.begin_release(id));
        // 二重に閉じても一度だけ
        assert!(!slot.begin_release(id));
        assert!(slot.finish_release(id));
        assert!(slot.active().is_none());
    }

    #[test]
    fn test_release_before_shown() {
        let mut slot = OverlaySlot::new();
        let id = slot.acquire(());
        assert!(slot.begin_release(id));
        assert!(!slot.show(id));
        assert!(slot.finish_release(id));
    }
}
