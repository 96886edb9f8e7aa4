//! Decoding backend built on `rxing`, the Rust port of ZXing.
//!
//! This is the infrastructure edge of the decode domain: it converts the
//! cropped image to the luma buffer rxing wants, translates a
//! [`DecodePass`] into rxing hints, and normalizes the result. A miss is
//! simply `None` — the ladder upstream decides whether to try again.

use std::collections::{HashMap, HashSet};

use image::{imageops::FilterType, DynamicImage};
use rxing::helpers::detect_in_luma_with_hints;
use rxing::{BarcodeFormat, DecodeHintType, DecodeHintValue};

use super::{DecodeOutcome, DecodePass, SymbolDecoder, SymbolFormat};

pub struct RxingDecoder;

impl RxingDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RxingDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolDecoder for RxingDecoder {
    fn decode_pass(&self, image: &DynamicImage, pass: &DecodePass) -> Option<DecodeOutcome> {
        // Cap the analysis size; a screen crop can be huge on high-DPI
        // displays and the readers only need module-level detail.
        let luma = if image.width().max(image.height()) > pass.max_analysis_px {
            image
                .resize(
                    pass.max_analysis_px,
                    pass.max_analysis_px,
                    FilterType::Triangle,
                )
                .to_luma8()
        } else {
            image.to_luma8()
        };
        let (width, height) = (luma.width(), luma.height());

        let formats: HashSet<BarcodeFormat> =
            pass.readers.iter().map(|f| to_rxing(*f)).collect();
        let mut hints: HashMap<DecodeHintType, DecodeHintValue> = HashMap::new();
        hints.insert(
            DecodeHintType::POSSIBLE_FORMATS,
            DecodeHintValue::PossibleFormats(formats),
        );
        hints.insert(
            DecodeHintType::TRY_HARDER,
            DecodeHintValue::TryHarder(pass.try_harder),
        );
        if pass.also_inverted {
            hints.insert(
                DecodeHintType::ALSO_INVERTED,
                DecodeHintValue::AlsoInverted(true),
            );
        }

        match detect_in_luma_with_hints(luma.into_raw(), width, height, None, &mut hints) {
            Ok(result) => {
                let format = from_rxing(result.getBarcodeFormat())?;
                Some(DecodeOutcome {
                    code: result.getText().to_string(),
                    format,
                })
            }
            Err(e) => {
                log::debug!("rxing pass missed ({}x{}): {e}", width, height);
                None
            }
        }
    }
}

fn to_rxing(format: SymbolFormat) -> BarcodeFormat {
    match format {
        SymbolFormat::Code128 => BarcodeFormat::CODE_128,
        SymbolFormat::Ean13 => BarcodeFormat::EAN_13,
        SymbolFormat::Ean8 => BarcodeFormat::EAN_8,
        SymbolFormat::Code39 => BarcodeFormat::CODE_39,
        SymbolFormat::UpcA => BarcodeFormat::UPC_A,
        SymbolFormat::UpcE => BarcodeFormat::UPC_E,
        SymbolFormat::Codabar => BarcodeFormat::CODABAR,
        SymbolFormat::I2of5 => BarcodeFormat::ITF,
        SymbolFormat::Code93 => BarcodeFormat::CODE_93,
    }
}

fn from_rxing(format: &BarcodeFormat) -> Option<SymbolFormat> {
    match format {
        BarcodeFormat::CODE_128 => Some(SymbolFormat::Code128),
        BarcodeFormat::EAN_13 => Some(SymbolFormat::Ean13),
        BarcodeFormat::EAN_8 => Some(SymbolFormat::Ean8),
        BarcodeFormat::CODE_39 => Some(SymbolFormat::Code39),
        BarcodeFormat::UPC_A => Some(SymbolFormat::UpcA),
        BarcodeFormat::UPC_E => Some(SymbolFormat::UpcE),
        BarcodeFormat::CODABAR => Some(SymbolFormat::Codabar),
        BarcodeFormat::ITF => Some(SymbolFormat::I2of5),
        BarcodeFormat::CODE_93 => Some(SymbolFormat::Code93),
        other => {
            log::warn!("Decoder returned unmapped format {other:?}");
            None
        }
    }
}
