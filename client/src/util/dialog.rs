//! Blocking alert dialogs for flow failures.
//!
//! Requires a browser; on the server renderer and in tests the message is
//! logged instead.

/// Show `message` in a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("alert: {message}");
    }
}
