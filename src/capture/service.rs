//! One-shot capture service: screenshot, optional crop, PNG out.
//!
//! This is the Rust rendition of the background page's
//! `captureVisibleTab` / `captureScreenshot` handlers. Stateless by
//! design — every call takes a fresh frame and nothing is cached between
//! invocations.

use std::time::Instant;

use crate::capture::region::{crop_region, to_png_bytes, CropError};
use crate::capture::screenshot::{CaptureError, Frame, FrameSource};
use crate::geometry::{Rect, Viewport};

pub struct CaptureService {
    source: Box<dyn FrameSource>,
}

impl CaptureService {
    pub fn new(source: Box<dyn FrameSource>) -> Self {
        Self { source }
    }

    /// `capture(rect | null)`: full-viewport screenshot, optionally cropped.
    ///
    /// When a rectangle is given its coordinates address the captured
    /// bitmap directly (pixel offsets, no viewport scaling) — callers that
    /// want DPR correction crop from [`CaptureService::frame`] instead.
    /// Returns PNG bytes.
    pub fn capture(&self, rect: Option<&Rect>) -> Result<Vec<u8>, CaptureServiceError> {
        let start = Instant::now();
        let frame = self.source.capture_frame()?;

        let image = match rect {
            None => frame.image,
            Some(rect) => {
                // Bitmap-space viewport ⇒ scale factor 1, direct offsets.
                let bitmap_space =
                    Viewport::new(frame.image.width() as f64, frame.image.height() as f64);
                crop_region(&frame.image, bitmap_space, rect)?
            }
        };

        let png_bytes = to_png_bytes(&image)?;
        log::info!(
            "Captured {}x{} image in {}ms — {} bytes",
            image.width(),
            image.height(),
            start.elapsed().as_millis(),
            png_bytes.len()
        );
        Ok(png_bytes)
    }

    /// A raw frame plus its logical viewport, for callers that do their own
    /// scale-corrected cropping (the region-selector flow).
    pub fn frame(&self) -> Result<Frame, CaptureError> {
        self.source.capture_frame()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureServiceError {
    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Crop(#[from] CropError),
}
