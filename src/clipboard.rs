//! Clipboard integration for decoded results.
//!
//! Copying is a convenience, never a requirement: on a headless box (or
//! a Wayland session without a clipboard manager) `arboard` can't
//! connect, and a scan that decoded fine must still report success.

use arboard::Clipboard;

/// Best-effort copy of the decoded text to the system clipboard.
pub fn copy_code(code: &str) {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(code.to_string())) {
        Ok(()) => log::info!("Copied decoded text to clipboard"),
        Err(e) => log::warn!("Clipboard unavailable, skipping copy: {e}"),
    }
}
