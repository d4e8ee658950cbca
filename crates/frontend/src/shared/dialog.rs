//! Native browser dialogs

/// `window.confirm`; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// `window.prompt`; `None` when cancelled or left blank
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?
        .prompt_with_message(message)
        .ok()?
        .filter(|s| !s.trim().is_empty())
}
