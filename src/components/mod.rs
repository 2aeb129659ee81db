//! UIコンポーネントモジュール
//!
//! このクレートが自前で描画する要素（通知、モーダル、ローディング画面、
//! トップへ戻る、テーマ切り替え）。

pub mod back_to_top;
pub mod loading;
pub mod modal;
pub mod notification;
pub mod overlay;
pub mod theme_toggle;

pub use back_to_top::BackToTop;
pub use loading::LoadingSplash;
pub use modal::{open_project_modal, ProjectModal};
pub use notification::{show_notification, NotificationHost};
pub use theme_toggle::init_theme;
