//! Full-screen capture using the `xcap` crate.
//!
//! This is the infrastructure layer — it talks to the OS. Everything
//! downstream consumes the [`FrameSource`] trait, so tests (and future
//! platform backends) substitute their own frames here.

use image::DynamicImage;
use xcap::Monitor;

use crate::geometry::Viewport;

/// A captured full-viewport frame together with the logical viewport size
/// it was taken of. On high-DPI displays the image is proportionally
/// larger than the viewport.
pub struct Frame {
    pub image: DynamicImage,
    pub viewport: Viewport,
}

impl Frame {
    pub fn new(image: DynamicImage, viewport: Viewport) -> Self {
        Self { image, viewport }
    }
}

/// Source of full-viewport screenshots. One call, one fresh frame;
/// implementations must not cache prior captures.
pub trait FrameSource: Send + Sync {
    fn capture_frame(&self) -> Result<Frame, CaptureError>;
}

/// Captures the primary monitor via `xcap`.
pub struct MonitorSource;

impl FrameSource for MonitorSource {
    fn capture_frame(&self) -> Result<Frame, CaptureError> {
        let monitors =
            Monitor::all().map_err(|e| CaptureError::MonitorEnumeration(e.to_string()))?;

        let primary = monitors
            .into_iter()
            .find(|m| m.is_primary().unwrap_or(false))
            .or_else(|| {
                // Fallback: if no monitor reports as primary, use the first one
                let all = Monitor::all().ok()?;
                all.into_iter().next()
            })
            .ok_or(CaptureError::NoPrimaryMonitor)?;

        let scale = match primary.scale_factor() {
            Ok(s) if s > 0.0 => s as f64,
            _ => 1.0,
        };

        let image = primary
            .capture_image()
            .map_err(|e| CaptureError::CaptureFailed(e.to_string()))?;

        let viewport = Viewport::new(
            image.width() as f64 / scale,
            image.height() as f64 / scale,
        );

        log::debug!(
            "Captured {}x{} frame (logical viewport {:.0}x{:.0}, scale {})",
            image.width(),
            image.height(),
            viewport.width,
            viewport.height,
            scale
        );

        Ok(Frame {
            image: DynamicImage::ImageRgba8(image),
            viewport,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to enumerate monitors: {0}")]
    MonitorEnumeration(String),

    #[error("No primary monitor found")]
    NoPrimaryMonitor,

    #[error("Screen capture failed: {0}")]
    CaptureFailed(String),
}
