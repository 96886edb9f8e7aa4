//! Region selection domain — public API.
//!
//! The drag gesture is a pure state machine ([`gesture`]), the UI is a
//! host seam ([`overlay`]), and [`selector`] glues them to the capture
//! and decode services for one activation at a time.

mod gesture;
mod overlay;
mod selector;

pub use gesture::{GestureEvent, SelectionGesture, Transition, MIN_SELECTION_PX};
pub use overlay::{LoggingOverlay, OverlayError, OverlayHost};
pub use selector::{RegionSelector, ScanError, SelectorUpdate};
