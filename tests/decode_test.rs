//! Integration tests for the decode adapter against real symbol images.

mod common;

use barcode_snip::decode::{
    DecodeError, DecodeLadder, Detector, RxingDecoder, SymbolFormat,
};
use image::{DynamicImage, Rgba, RgbaImage};

fn detector() -> Detector {
    Detector::new(Box::new(RxingDecoder::new()), DecodeLadder::default()).unwrap()
}

// ── Successful decode ───────────────────────────────────────────────

#[test]
fn decodes_synthetic_code128() {
    let image = common::code128_image("TEST1234", 3, 60);
    let outcome = detector().detect(&image).unwrap();
    assert_eq!(outcome.code, "TEST1234");
    assert_eq!(outcome.format, SymbolFormat::Code128);
}

#[test]
fn decodes_with_surrounding_page_content() {
    // Symbol pasted into a larger white frame, as a screen crop would be.
    let (frame, _, _) = common::frame_with_barcode("TEST1234", 120, 200);
    let crop = frame.crop_imm(100, 180, 500, 100);
    let outcome = detector().detect(&crop).unwrap();
    assert_eq!(outcome.code, "TEST1234");
    assert_eq!(outcome.format, SymbolFormat::Code128);
}

// ── Misses ──────────────────────────────────────────────────────────

#[test]
fn blank_image_reports_not_found_after_full_ladder() {
    let blank = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        300,
        150,
        Rgba([255, 255, 255, 255]),
    ));
    let err = detector().detect(&blank).unwrap_err();
    match err {
        DecodeError::NotFound { attempts } => {
            assert_eq!(attempts, DecodeLadder::default().len());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn format_outside_reader_set_is_not_reported() {
    // Ladder restricted to EAN-13 only must not return a Code128 hit.
    let ladder = DecodeLadder::new(vec![barcode_snip::decode::DecodePass {
        readers: vec![SymbolFormat::Ean13],
        max_analysis_px: 800,
        try_harder: true,
        also_inverted: false,
    }]);
    let detector = Detector::new(Box::new(RxingDecoder::new()), ladder).unwrap();

    let image = common::code128_image("TEST1234", 3, 60);
    assert!(matches!(
        detector.detect(&image),
        Err(DecodeError::NotFound { attempts: 1 })
    ));
}
