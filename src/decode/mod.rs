//! Barcode decode adapter — public API.
//!
//! The actual symbol decoding is delegated to an injected capability
//! behind [`SymbolDecoder`]; this module owns what wraps it: the symbol
//! format vocabulary, the normalized `{code, format}` outcome, and the
//! escalating retry ladder that tries progressively more permissive
//! settings before giving up.

mod ladder;
mod rxing;

pub use ladder::{DecodeLadder, DecodePass};
pub use self::rxing::RxingDecoder;

use std::time::Instant;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// A barcode encoding standard. Wire labels match the reader names the
/// result UI historically displayed (`code_128`, `ean_13`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolFormat {
    #[serde(rename = "code_128")]
    Code128,
    #[serde(rename = "ean_13")]
    Ean13,
    #[serde(rename = "ean_8")]
    Ean8,
    #[serde(rename = "code_39")]
    Code39,
    #[serde(rename = "upc_a")]
    UpcA,
    #[serde(rename = "upc_e")]
    UpcE,
    #[serde(rename = "codabar")]
    Codabar,
    #[serde(rename = "i2of5")]
    I2of5,
    #[serde(rename = "code_93")]
    Code93,
}

impl SymbolFormat {
    pub fn label(&self) -> &'static str {
        match self {
            SymbolFormat::Code128 => "code_128",
            SymbolFormat::Ean13 => "ean_13",
            SymbolFormat::Ean8 => "ean_8",
            SymbolFormat::Code39 => "code_39",
            SymbolFormat::UpcA => "upc_a",
            SymbolFormat::UpcE => "upc_e",
            SymbolFormat::Codabar => "codabar",
            SymbolFormat::I2of5 => "i2of5",
            SymbolFormat::Code93 => "code_93",
        }
    }
}

impl std::fmt::Display for SymbolFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A successful decode, normalized across decoding backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOutcome {
    pub code: String,
    pub format: SymbolFormat,
}

/// One attempt at decoding an image under a given pass configuration.
///
/// A miss returns `None`; backends log their own diagnostics. The ladder
/// decides whether to try again.
pub trait SymbolDecoder: Send + Sync {
    fn decode_pass(&self, image: &DynamicImage, pass: &DecodePass) -> Option<DecodeOutcome>;
}

/// The decode adapter: an injected backend plus a retry ladder.
pub struct Detector {
    engine: Box<dyn SymbolDecoder>,
    ladder: DecodeLadder,
}

impl Detector {
    pub fn new(engine: Box<dyn SymbolDecoder>, ladder: DecodeLadder) -> Result<Self, DecodeError> {
        if ladder.is_empty() {
            return Err(DecodeError::EmptyLadder);
        }
        Ok(Self { engine, ladder })
    }

    /// `decode(image) → {code, format} | NotFound`.
    ///
    /// Runs each ladder pass in order and returns the first hit. Only
    /// after every pass has missed does it report `NotFound`, carrying
    /// the attempt count.
    pub fn detect(&self, image: &DynamicImage) -> Result<DecodeOutcome, DecodeError> {
        let start = Instant::now();

        for (attempt, pass) in self.ladder.passes().iter().enumerate() {
            log::debug!(
                "Decode attempt {}/{}: {} readers, cap {}px, try_harder={}",
                attempt + 1,
                self.ladder.len(),
                pass.readers.len(),
                pass.max_analysis_px,
                pass.try_harder
            );

            if let Some(outcome) = self.engine.decode_pass(image, pass) {
                log::info!(
                    "Decoded {} symbol in {}ms on attempt {}: {}",
                    outcome.format,
                    start.elapsed().as_millis(),
                    attempt + 1,
                    outcome.code
                );
                return Ok(outcome);
            }
        }

        log::info!(
            "No barcode found after {} attempts ({}ms)",
            self.ladder.len(),
            start.elapsed().as_millis()
        );
        Err(DecodeError::NotFound {
            attempts: self.ladder.len(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("No barcode detected in the selected area (tried {attempts} configurations)")]
    NotFound { attempts: usize },

    #[error("Decode ladder has no passes configured")]
    EmptyLadder,
}
