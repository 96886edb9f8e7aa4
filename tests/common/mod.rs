//! Shared test support: a Code128 image generator and frame-source fakes.
//!
//! The generator renders ideal Code128-B symbols from the standard
//! bar/space width table, so decode tests run against a real symbol
//! without fixture files.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use barcode_snip::capture::{CaptureError, Frame, FrameSource};
use barcode_snip::geometry::Viewport;
use image::{imageops, DynamicImage, Rgba, RgbaImage};

/// Code128 bar/space widths for symbol values 0..=102 (each row is three
/// bars and three spaces, 11 modules total).
#[rustfmt::skip]
const CODE_PATTERNS: [[u8; 6]; 103] = [
    [2,1,2,2,2,2],[2,2,2,1,2,2],[2,2,2,2,2,1],[1,2,1,2,2,3],[1,2,1,3,2,2],
    [1,3,1,2,2,2],[1,2,2,2,1,3],[1,2,2,3,1,2],[1,3,2,2,1,2],[2,2,1,2,1,3],
    [2,2,1,3,1,2],[2,3,1,2,1,2],[1,1,2,2,3,2],[1,2,2,1,3,2],[1,2,2,2,3,1],
    [1,1,3,2,2,2],[1,2,3,1,2,2],[1,2,3,2,2,1],[2,2,3,2,1,1],[2,2,1,1,3,2],
    [2,2,1,2,3,1],[2,1,3,2,1,2],[2,2,3,1,1,2],[3,1,2,1,3,1],[3,1,1,2,2,2],
    [3,2,1,1,2,2],[3,2,1,2,2,1],[3,1,2,2,1,2],[3,2,2,1,1,2],[3,2,2,2,1,1],
    [2,1,2,1,2,3],[2,1,2,3,2,1],[2,3,2,1,2,1],[1,1,1,3,2,3],[1,3,1,1,2,3],
    [1,3,1,3,2,1],[1,1,2,3,1,3],[1,3,2,1,1,3],[1,3,2,3,1,1],[2,1,1,3,1,3],
    [2,3,1,1,1,3],[2,3,1,3,1,1],[1,1,2,1,3,3],[1,1,2,3,3,1],[1,3,2,1,3,1],
    [1,1,3,1,2,3],[1,1,3,3,2,1],[1,3,3,1,2,1],[3,1,3,1,2,1],[2,1,1,3,3,1],
    [2,3,1,1,3,1],[2,1,3,1,1,3],[2,1,3,3,1,1],[2,1,3,1,3,1],[3,1,1,1,2,3],
    [3,1,1,3,2,1],[3,3,1,1,2,1],[3,1,2,1,1,3],[3,1,2,3,1,1],[3,3,2,1,1,1],
    [3,1,4,1,1,1],[2,2,1,4,1,1],[4,3,1,1,1,1],[1,1,1,2,2,4],[1,1,1,4,2,2],
    [1,2,1,1,2,4],[1,2,1,4,2,1],[1,4,1,1,2,2],[1,4,1,2,2,1],[1,1,2,2,1,4],
    [1,1,2,4,1,2],[1,2,2,1,1,4],[1,2,2,4,1,1],[1,4,2,1,1,2],[1,4,2,2,1,1],
    [2,4,1,2,1,1],[2,2,1,1,1,4],[4,1,3,1,1,1],[2,4,1,1,1,2],[1,3,4,1,1,1],
    [1,1,1,2,4,2],[1,2,1,1,4,2],[1,2,1,2,4,1],[1,1,4,2,1,2],[1,2,4,1,1,2],
    [1,2,4,2,1,1],[4,1,1,2,1,2],[4,2,1,1,1,2],[4,2,1,2,1,1],[2,1,2,1,4,1],
    [2,1,4,1,2,1],[4,1,2,1,2,1],[1,1,1,1,4,3],[1,1,1,3,4,1],[1,3,1,1,4,1],
    [1,1,4,1,1,3],[1,1,4,3,1,1],[4,1,1,1,1,3],[4,1,1,3,1,1],[1,1,3,1,4,1],
    [1,1,4,1,3,1],[3,1,1,1,4,1],[4,1,1,1,3,1],
];

const START_B: [u8; 6] = [2, 1, 1, 2, 1, 4];
const STOP: [u8; 7] = [2, 3, 3, 1, 1, 1, 2];
const QUIET_MODULES: u32 = 10;

/// Module widths of a complete Code128-B symbol for `text`, alternating
/// bar/space, without quiet zones.
fn code128b_modules(text: &str) -> Vec<u8> {
    let values: Vec<usize> = text
        .chars()
        .map(|c| {
            (c as usize)
                .checked_sub(32)
                .filter(|v| *v <= 94)
                .unwrap_or_else(|| panic!("char {c:?} is outside Code128-B"))
        })
        .collect();

    let mut checksum = 104usize; // start symbol, weight 1 implied
    for (i, v) in values.iter().enumerate() {
        checksum += v * (i + 1);
    }
    checksum %= 103;

    let mut modules = Vec::new();
    modules.extend_from_slice(&START_B);
    for v in &values {
        modules.extend_from_slice(&CODE_PATTERNS[*v]);
    }
    modules.extend_from_slice(&CODE_PATTERNS[checksum]);
    modules.extend_from_slice(&STOP);
    modules
}

/// Total width in pixels of the rendered symbol, including quiet zones.
pub fn code128_width(text: &str, module_px: u32) -> u32 {
    let data: u32 = code128b_modules(text).iter().map(|w| *w as u32).sum();
    (data + 2 * QUIET_MODULES) * module_px
}

/// Renders an ideal Code128-B symbol on a white background, with quiet
/// zones, `module_px` pixels per module and `height_px` tall bars.
pub fn code128_image(text: &str, module_px: u32, height_px: u32) -> DynamicImage {
    let modules = code128b_modules(text);
    let width = code128_width(text, module_px);

    let white = Rgba([255u8, 255, 255, 255]);
    let black = Rgba([0u8, 0, 0, 255]);
    let mut img = RgbaImage::from_pixel(width, height_px, white);

    let mut x = QUIET_MODULES * module_px;
    for (i, w) in modules.iter().enumerate() {
        let is_bar = i % 2 == 0;
        for _ in 0..(*w as u32 * module_px) {
            if is_bar {
                for y in 0..height_px {
                    img.put_pixel(x, y, black);
                }
            }
            x += 1;
        }
    }

    DynamicImage::ImageRgba8(img)
}

/// Frame source that hands out a fixed image at scale 1 and counts
/// captures, so tests can assert when no capture was issued.
pub struct StaticFrameSource {
    image: DynamicImage,
    pub captures: Arc<AtomicUsize>,
}

impl StaticFrameSource {
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            captures: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn capture_count(counter: &Arc<AtomicUsize>) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

impl FrameSource for StaticFrameSource {
    fn capture_frame(&self) -> Result<Frame, CaptureError> {
        self.captures.fetch_add(1, Ordering::SeqCst);
        Ok(Frame::new(
            self.image.clone(),
            Viewport::new(self.image.width() as f64, self.image.height() as f64),
        ))
    }
}

/// A white desktop-sized frame with a Code128 symbol pasted at `(x, y)`.
pub fn frame_with_barcode(text: &str, x: u32, y: u32) -> (DynamicImage, u32, u32) {
    let barcode = code128_image(text, 3, 60);
    let (bw, bh) = (barcode.width(), barcode.height());

    let mut frame = RgbaImage::from_pixel(800, 600, Rgba([255, 255, 255, 255]));
    imageops::replace(&mut frame, &barcode.to_rgba8(), x as i64, y as i64);
    (DynamicImage::ImageRgba8(frame), bw, bh)
}

#[test]
fn every_pattern_spans_eleven_modules() {
    for (value, row) in CODE_PATTERNS.iter().enumerate() {
        let sum: u32 = row.iter().map(|w| *w as u32).sum();
        assert_eq!(sum, 11, "pattern {value} has wrong width");
    }
    assert_eq!(START_B.iter().map(|w| *w as u32).sum::<u32>(), 11);
    assert_eq!(STOP.iter().map(|w| *w as u32).sum::<u32>(), 13);
}
