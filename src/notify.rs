//! Browser Notifications
//!
//! Blocking alert dialogs, the only user-facing error channel of the
//! admin page.

/// Show a blocking alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
