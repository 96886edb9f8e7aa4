//! Retry ladder configuration.
//!
//! Each pass is one decode attempt; later passes trade breadth for
//! effort — fewer candidate readers, a larger analysis cap, and more
//! aggressive search options. The defaults reproduce the tool's
//! historical three-attempt behavior, but the whole ladder is a plain
//! config value embedders can deserialize and override. The specific
//! thresholds are heuristics, not a contract.

use serde::{Deserialize, Serialize};

use super::SymbolFormat;

/// Settings for a single decode attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodePass {
    /// Symbol formats to consider, in preference order.
    pub readers: Vec<SymbolFormat>,
    /// Cap on the longest image dimension before analysis; larger images
    /// are downscaled first. Never upscales.
    pub max_analysis_px: u32,
    /// Spend extra effort locating a symbol (slower, more thorough).
    pub try_harder: bool,
    /// Also scan the inverted image (light-on-dark symbols).
    pub also_inverted: bool,
}

/// An ordered list of decode passes, tried until one hits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeLadder {
    passes: Vec<DecodePass>,
}

impl DecodeLadder {
    pub fn new(passes: Vec<DecodePass>) -> Self {
        Self { passes }
    }

    pub fn passes(&self) -> &[DecodePass] {
        &self.passes
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for DecodeLadder {
    /// The historical three-attempt ladder: a broad first sweep, then a
    /// narrower retry with more effort, then a last-ditch pass over the
    /// two most common formats with inverted scanning on.
    fn default() -> Self {
        use SymbolFormat::*;
        Self::new(vec![
            DecodePass {
                readers: vec![
                    Code128, Ean13, Ean8, Code39, Codabar, UpcA, UpcE, I2of5, Code93,
                ],
                max_analysis_px: 800,
                try_harder: false,
                also_inverted: false,
            },
            DecodePass {
                readers: vec![Code128, Ean13, Code39],
                max_analysis_px: 1200,
                try_harder: true,
                also_inverted: false,
            },
            DecodePass {
                readers: vec![Code128, Ean13],
                max_analysis_px: 1600,
                try_harder: true,
                also_inverted: true,
            },
        ])
    }
}
