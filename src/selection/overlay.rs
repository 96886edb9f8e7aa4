//! Host seam for the selection UI.
//!
//! Rendering the dimming overlay, the dashed selection box, and the
//! crosshair cursor is the embedding host's job (a webview, a compositor
//! layer, a test double). The selector only cares that showing the
//! overlay also acquires the input-event subscription, and that teardown
//! releases both — on every exit path, exactly once.

use crate::geometry::Rect;

pub trait OverlayHost {
    /// Show the full-viewport overlay, switch to a crosshair cursor, and
    /// start delivering pointer/key events. Returns once ready.
    fn show(&mut self) -> Result<(), OverlayError>;

    /// Resize the visible selection box to `rect`.
    fn update_selection(&mut self, rect: &Rect);

    /// Remove overlay and selection box, restore the default cursor, and
    /// release the input subscription. Must be safe to call when nothing
    /// is shown.
    fn teardown(&mut self);
}

/// Host for headless operation: transitions are logged, nothing is drawn.
/// Input events arrive over the message protocol instead of a real
/// pointer subscription.
pub struct LoggingOverlay {
    shown: bool,
}

impl LoggingOverlay {
    pub fn new() -> Self {
        Self { shown: false }
    }
}

impl Default for LoggingOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayHost for LoggingOverlay {
    fn show(&mut self) -> Result<(), OverlayError> {
        self.shown = true;
        log::info!("Selection overlay shown (crosshair cursor active)");
        Ok(())
    }

    fn update_selection(&mut self, rect: &Rect) {
        log::debug!(
            "Selection box at ({:.0},{:.0}) {:.0}x{:.0}",
            rect.left,
            rect.top,
            rect.width,
            rect.height
        );
    }

    fn teardown(&mut self) {
        if self.shown {
            self.shown = false;
            log::info!("Selection overlay removed, cursor restored");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("Overlay host unavailable: {0}")]
    Unavailable(String),
}
