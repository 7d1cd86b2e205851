//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Scroll the page back to the top after a screen change.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (with the '#' prefix, if any).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}
