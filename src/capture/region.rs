//! Pure region cropping logic — functional core.
//!
//! This module has zero infrastructure dependencies. It takes pixel data
//! in, returns pixel data out. The one subtle piece is scale correction:
//! the captured bitmap may be larger than the logical viewport (high-DPI
//! displays), so the selection rectangle is mapped into bitmap space
//! before cropping, and the result is resampled back to the selection's
//! own logical size. Skipping either half mis-crops on any display with a
//! non-1:1 device pixel ratio.

use image::{imageops::FilterType, DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::geometry::{Rect, Viewport};

/// Crops a captured frame to a selection rectangle.
///
/// `viewport` is the logical size the frame was captured of. The output
/// image is always exactly `round(rect.width) × round(rect.height)` pixels,
/// regardless of the frame's scale factor. At scale 1 the crop is a plain
/// sub-image copy with no resampling.
pub fn crop_region(
    frame: &DynamicImage,
    viewport: Viewport,
    rect: &Rect,
) -> Result<DynamicImage, CropError> {
    let (dest_width, dest_height) = rect.pixel_size();
    if dest_width == 0 || dest_height == 0 {
        return Err(CropError::ZeroDimension);
    }

    let (frame_width, frame_height) = (frame.width(), frame.height());
    let source = rect.to_source(frame_width, frame_height, viewport);

    // Round into whole bitmap pixels, tolerating float fuzz at the edges.
    let sx = (source.x.round().max(0.0) as u32).min(frame_width);
    let sy = (source.y.round().max(0.0) as u32).min(frame_height);
    let sw = (source.width.round() as u32).min(frame_width - sx);
    let sh = (source.height.round() as u32).min(frame_height - sy);

    if sw == 0 || sh == 0 {
        return Err(CropError::OutOfBounds {
            requested: (source.x, source.y, source.width, source.height),
            frame_size: (frame_width, frame_height),
        });
    }

    let cropped = frame.crop_imm(sx, sy, sw, sh);

    if (sw, sh) == (dest_width, dest_height) {
        // Scale factor 1: no resampling, the crop is pixel-exact.
        return Ok(cropped);
    }

    Ok(cropped.resize_exact(dest_width, dest_height, FilterType::Triangle))
}

/// PNG-encodes an image for the wire.
pub fn to_png_bytes(image: &DynamicImage) -> Result<Vec<u8>, CropError> {
    let mut png_bytes: Vec<u8> = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| CropError::EncodingFailed(e.to_string()))?;
    Ok(png_bytes)
}

#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("Crop rectangle has zero width or height")]
    ZeroDimension,

    #[error(
        "Crop region ({:.1},{:.1} {:.1}x{:.1}) falls outside frame ({}x{})",
        requested.0, requested.1, requested.2, requested.3,
        frame_size.0, frame_size.1
    )]
    OutOfBounds {
        requested: (f64, f64, f64, f64),
        frame_size: (u32, u32),
    },

    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}
