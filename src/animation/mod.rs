//! アニメーション状態機械モジュール
//!
//! DOM に依存しない純粋なロジック。DOM への反映は features / components 側で行う。

pub mod counter;
pub mod reveal;
pub mod splash;
pub mod transition;
pub mod typewriter;

pub use counter::CounterAnimation;
pub use reveal::RevealTracker;
pub use splash::{SplashGate, SplashPhase};
pub use transition::{CardVisual, FilterChoreography};
pub use typewriter::Typewriter;
