//! Region selector session: the glue between the drag gesture, the
//! capture service, and the decode adapter.
//!
//! One session exists per `startCrop` activation. It feeds every relayed
//! input event to the gesture machine, mirrors selection-box changes to
//! the overlay host, and on a completed selection runs the
//! capture → crop → decode flow. Teardown is unconditional: whether the
//! scan succeeds, fails, or the user cancels, the overlay and its input
//! subscription are released exactly once.

use crate::capture::{crop_region, CaptureError, CaptureService, CropError};
use crate::decode::{DecodeError, DecodeOutcome, Detector};
use crate::selection::gesture::{GestureEvent, SelectionGesture, Transition};
use crate::selection::overlay::{OverlayError, OverlayHost};

/// What the session did with one relayed event.
#[derive(Debug)]
pub enum SelectorUpdate {
    /// Selection still in progress (or event ignored).
    Pending,
    /// User cancelled (Escape or an undersized box); session torn down.
    Cancelled,
    /// A region was selected and scanned; session torn down.
    Finished(Result<DecodeOutcome, ScanError>),
}

pub struct RegionSelector<H: OverlayHost> {
    host: H,
    gesture: SelectionGesture,
    active: bool,
}

impl<H: OverlayHost> RegionSelector<H> {
    /// Shows the overlay and arms the gesture. The session is live until
    /// the first completion or cancellation.
    pub fn activate(mut host: H) -> Result<Self, OverlayError> {
        host.show()?;
        Ok(Self {
            host,
            gesture: SelectionGesture::new(),
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one input event through the gesture machine.
    ///
    /// `capture` and `detector` are only touched when the event completes
    /// a selection.
    pub fn handle_event(
        &mut self,
        event: GestureEvent,
        capture: &CaptureService,
        detector: &Detector,
    ) -> SelectorUpdate {
        if !self.active {
            log::debug!("Input event after session end, ignoring");
            return SelectorUpdate::Pending;
        }

        match self.gesture.on_event(event) {
            Transition::Ignored => SelectorUpdate::Pending,

            Transition::SelectionChanged(rect) => {
                self.host.update_selection(&rect);
                SelectorUpdate::Pending
            }

            Transition::Cancelled => {
                self.finish();
                SelectorUpdate::Cancelled
            }

            Transition::Completed(rect) => {
                let result = scan(&rect, capture, detector);
                // Cleanup runs on the success and failure paths alike.
                self.finish();
                SelectorUpdate::Finished(result)
            }
        }
    }

    /// Tear the session down. Safe to call repeatedly; only the first
    /// call reaches the host.
    pub fn finish(&mut self) {
        if self.active {
            self.active = false;
            self.host.teardown();
        }
    }
}

impl<H: OverlayHost> Drop for RegionSelector<H> {
    fn drop(&mut self) {
        self.finish();
    }
}

fn scan(
    rect: &crate::geometry::Rect,
    capture: &CaptureService,
    detector: &Detector,
) -> Result<DecodeOutcome, ScanError> {
    log::info!(
        "Scanning region ({:.0},{:.0}) {:.0}x{:.0}",
        rect.left,
        rect.top,
        rect.width,
        rect.height
    );
    let frame = capture.frame()?;
    let cropped = crop_region(&frame.image, frame.viewport, rect)?;
    Ok(detector.detect(&cropped)?)
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Screenshot failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Failed to crop captured image: {0}")]
    Crop(#[from] CropError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
