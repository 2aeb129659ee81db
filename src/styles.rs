//! 注入スタイルシート
//!
//! ページ本体の CSS とは別に、このモジュールが生成する要素用のスタイル。
//! `inject_all` で id ごとに一度だけ head へ追加する。

use crate::utils::dom::ensure_style;

pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";
pub const MODAL_STYLE_ID: &str = "modal-styles";
pub const BACK_TO_TOP_STYLE_ID: &str = "back-to-top-styles";
pub const THEME_STYLE_ID: &str = "theme-styles";
pub const LOADING_STYLE_ID: &str = "loading-styles";
pub const FADE_STYLE_ID: &str = "fade-animations";

pub const NOTIFICATION_CSS: &str = r#"
.notification {
  position: fixed;
  top: 100px;
  right: 20px;
  background: white;
  padding: 20px;
  border-radius: 12px;
  box-shadow: 0 10px 30px rgba(0,0,0,0.2);
  z-index: 10000;
  max-width: 400px;
  transform: translateX(150%);
  transition: transform 0.4s cubic-bezier(0.175, 0.885, 0.32, 1.275);
  border-left: 4px solid #6c63ff;
}
.notification-success { border-left-color: #4CAF50; }
.notification-error { border-left-color: #f44336; }
.notification-info { border-left-color: #2196F3; }
.notification-content {
  display: flex;
  align-items: center;
  gap: 12px;
}
.notification-content i { font-size: 1.3rem; }
.notification-success i { color: #4CAF50; }
.notification-error i { color: #f44336; }
.notification-info i { color: #2196F3; }
.notification-message {
  flex: 1;
  margin-right: 15px;
  font-weight: 500;
}
.notification-close {
  background: none;
  border: none;
  font-size: 1.5rem;
  cursor: pointer;
  color: #777;
  padding: 0;
  width: 30px;
  height: 30px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: all 0.3s ease;
}
.notification-close:hover { background: rgba(0,0,0,0.1); }
.notification.show { transform: translateX(0); }
.form-group { position: relative; }
.error-message {
  color: #f44336;
  font-size: 0.85rem;
  margin-top: 5px;
  font-weight: 500;
}
input.error, textarea.error {
  border-color: #f44336 !important;
  box-shadow: 0 0 0 3px rgba(244, 67, 54, 0.1) !important;
}
input.valid, textarea.valid {
  border-color: #4CAF50 !important;
  box-shadow: 0 0 0 3px rgba(76, 175, 80, 0.1) !important;
}
"#;

pub const MODAL_CSS: &str = r#"
.project-modal {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  z-index: 10000;
  display: flex;
  justify-content: center;
  align-items: center;
  opacity: 0;
  visibility: hidden;
  transition: all 0.4s ease;
  padding: 20px;
}
.project-modal.active {
  opacity: 1;
  visibility: visible;
}
.modal-overlay {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background: rgba(0,0,0,0.7);
  backdrop-filter: blur(5px);
}
.modal-content {
  position: relative;
  background: white;
  border-radius: 20px;
  max-width: 800px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  transform: scale(0.9);
  transition: transform 0.4s cubic-bezier(0.175, 0.885, 0.32, 1.275);
  box-shadow: 0 20px 60px rgba(0,0,0,0.3);
}
.project-modal.active .modal-content { transform: scale(1); }
.modal-close {
  position: absolute;
  top: 20px;
  right: 20px;
  background: rgba(0,0,0,0.1);
  border: none;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  font-size: 1.5rem;
  cursor: pointer;
  color: #777;
  z-index: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: all 0.3s ease;
}
.modal-close:hover {
  background: rgba(0,0,0,0.2);
  color: #333;
}
.modal-image {
  height: 250px;
  background: linear-gradient(135deg, var(--light), var(--light-dark));
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.3rem;
  font-weight: 600;
  color: var(--text-light);
  border-radius: 20px 20px 0 0;
}
.modal-body { padding: 40px; }
.modal-body h2 {
  font-size: 2rem;
  margin-bottom: 20px;
  color: var(--dark);
}
.modal-body p {
  color: var(--text-light);
  margin-bottom: 30px;
  line-height: 1.7;
}
.modal-tech {
  display: flex;
  flex-wrap: wrap;
  gap: 10px;
  margin-bottom: 30px;
}
.modal-actions {
  display: flex;
  gap: 15px;
  flex-wrap: wrap;
}
@media (max-width: 768px) {
  .modal-body { padding: 30px 20px; }
  .modal-actions { flex-direction: column; }
}
"#;

pub const BACK_TO_TOP_CSS: &str = r#"
.back-to-top {
  position: fixed;
  bottom: 30px;
  right: 30px;
  width: 50px;
  height: 50px;
  background: var(--primary);
  color: white;
  border: none;
  border-radius: 50%;
  cursor: pointer;
  z-index: 999;
  opacity: 0;
  visibility: hidden;
  transform: translateY(20px);
  transition: all 0.4s ease;
  box-shadow: 0 5px 15px rgba(108, 99, 255, 0.4);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.2rem;
}
.back-to-top.visible {
  opacity: 1;
  visibility: visible;
  transform: translateY(0);
}
.back-to-top:hover {
  background: var(--secondary);
  transform: translateY(-5px);
  box-shadow: 0 8px 25px rgba(108, 99, 255, 0.5);
}
"#;

pub const THEME_CSS: &str = r#"
.theme-toggle {
  background: none;
  border: none;
  color: var(--dark);
  font-size: 1.2rem;
  cursor: pointer;
  padding: 10px;
  border-radius: 50%;
  transition: var(--transition);
  margin-left: 15px;
}
.theme-toggle:hover {
  background: rgba(108, 99, 255, 0.1);
  transform: rotate(15deg);
}
.dark-mode {
  --light: #1a1a2e;
  --light-dark: #16213e;
  --dark: #f5f5f7;
  --dark-light: #e9ecef;
  --white: #0f3460;
  --text: #e6e6e6;
  --text-light: #b0b0b0;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
  --shadow-hover: 0 15px 40px rgba(0, 0, 0, 0.4);
}
.dark-mode .hero { background: linear-gradient(135deg, #0f3460 0%, #1a1a2e 100%); }
.dark-mode #navbar { background: rgba(15, 52, 96, 0.95); }
.dark-mode .nav-link { color: var(--dark); }
.dark-mode .section-title { color: var(--dark); }
#navbar.scrolled {
  backdrop-filter: blur(10px);
  box-shadow: 0 5px 20px rgba(0, 0, 0, 0.1);
}
"#;

pub const LOADING_CSS: &str = r#"
.loading-screen {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background: linear-gradient(135deg, var(--primary) 0%, var(--secondary) 100%);
  display: flex;
  justify-content: center;
  align-items: center;
  z-index: 9999;
  transition: opacity 0.5s ease, visibility 0.5s ease;
}
.loading-content {
  text-align: center;
  color: white;
}
.loading-spinner {
  width: 60px;
  height: 60px;
  border: 4px solid rgba(255,255,255,0.3);
  border-top: 4px solid white;
  border-radius: 50%;
  animation: spin 1s linear infinite;
  margin: 0 auto 20px;
}
.loading-content h3 {
  font-size: 2rem;
  margin-bottom: 10px;
  font-weight: 700;
}
.loading-content p {
  opacity: 0.9;
  font-size: 1.1rem;
}
@keyframes spin {
  0% { transform: rotate(0deg); }
  100% { transform: rotate(360deg); }
}
.loading-screen.hidden {
  opacity: 0;
  visibility: hidden;
}
"#;

pub const FADE_CSS: &str = r#"
.fade-in {
  opacity: 0;
  transform: translateY(30px);
  transition: all 0.6s ease;
}
.fade-in.visible {
  opacity: 1;
  transform: translateY(0);
}
"#;

pub fn inject_all() {
    for (id, css) in [
        (NOTIFICATION_STYLE_ID, NOTIFICATION_CSS),
        (MODAL_STYLE_ID, MODAL_CSS),
        (BACK_TO_TOP_STYLE_ID, BACK_TO_TOP_CSS),
        (THEME_STYLE_ID, THEME_CSS),
        (LOADING_STYLE_ID, LOADING_CSS),
        (FADE_STYLE_ID, FADE_CSS),
    ] {
        ensure_style(id, css);
    }
}
