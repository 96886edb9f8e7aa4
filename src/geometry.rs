//! Selection geometry — pure coordinate arithmetic.
//!
//! Everything in here works in logical viewport pixels (CSS-pixel
//! equivalents). Conversion to physical capture pixels happens in one
//! place, [`Rect::to_source`], so device-pixel-ratio handling cannot
//! drift between call sites.

use serde::{Deserialize, Serialize};

/// A pointer position in logical viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Logical size of the visible viewport. The captured frame may be larger
/// than this on high-DPI displays; the ratio between the two is the scale
/// factor applied during cropping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned selection rectangle in logical viewport pixels.
///
/// Field names match the wire format (`{left, top, width, height}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A crop window in physical capture pixels, produced by [`Rect::to_source`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounding box of a drag gesture: the start corner and the current
    /// pointer position may be in any diagonal arrangement.
    pub fn from_drag(start: Point, current: Point) -> Self {
        Self {
            left: start.x.min(current.x),
            top: start.y.min(current.y),
            width: (current.x - start.x).abs(),
            height: (current.y - start.y).abs(),
        }
    }

    /// Rectangle covering an entire viewport.
    pub fn full_viewport(viewport: Viewport) -> Self {
        Self::new(0.0, 0.0, viewport.width, viewport.height)
    }

    /// Whether both dimensions exceed `min` logical pixels. Selections at or
    /// below the threshold are treated as accidental clicks and dropped.
    pub fn exceeds_min_size(&self, min: f64) -> bool {
        self.width > min && self.height > min
    }

    /// Output dimensions of a crop of this rectangle, in whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }

    /// Maps this logical rectangle onto a captured frame of
    /// `frame_width × frame_height` physical pixels.
    ///
    /// The frame was taken of a viewport of logical size `viewport`; on a
    /// high-DPI display the frame is proportionally larger, so every
    /// coordinate scales by `frame / viewport`. With a 1:1 ratio this is
    /// the identity mapping.
    pub fn to_source(
        &self,
        frame_width: u32,
        frame_height: u32,
        viewport: Viewport,
    ) -> SourceRegion {
        let scale_x = frame_width as f64 / viewport.width;
        let scale_y = frame_height as f64 / viewport.height;

        SourceRegion {
            x: self.left * scale_x,
            y: self.top * scale_y,
            width: self.width * scale_x,
            height: self.height * scale_y,
        }
    }
}
