//! User-facing notifications.

/// Blocking notification shown to the user.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert()`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("Could not show alert: {:?}", e);
                }
            }
            None => log::warn!("No window, alert dropped: {}", message),
        }
    }
}
