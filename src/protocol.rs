//! Message protocol — typed request/response payloads.
//!
//! The wire format is line-delimited JSON, `action`-tagged, with images
//! interchanged as base64 PNG data URIs. The shapes deliberately match
//! the original extension messages (`{"action":"startCrop"}`,
//! `{"success":true,"dataUrl":…}`), plus pointer/key relays standing in
//! for the input events a host overlay would deliver.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::decode::DecodeOutcome;
use crate::geometry::Rect;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Activate the region selector; answered once the overlay is armed.
    StartCrop,
    /// Full-viewport screenshot, no crop.
    CaptureVisibleTab,
    /// Screenshot cropped to `rect` (direct pixel offsets).
    CaptureScreenshot { rect: Rect },
    /// Decode an already-cropped image.
    #[serde(rename_all = "camelCase")]
    DetectBarcode { image_data: DataUrl },
    /// Input relays from the host overlay, in logical viewport pixels.
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    KeyDown { key: String },
}

impl Request {
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(line).map_err(|e| ProtocolError::Malformed(e.to_string()))
    }
}

/// The uniform `{success, …}` reply shape. Serialize-only: the service
/// writes responses, it never reads them back.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<DataUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DecodeOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            success: true,
            data_url: None,
            result: None,
            error: None,
        }
    }

    pub fn with_data_url(data_url: DataUrl) -> Self {
        Self {
            data_url: Some(data_url),
            ..Self::ok()
        }
    }

    pub fn with_result(result: DecodeOutcome) -> Self {
        Self {
            result: Some(result),
            ..Self::ok()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data_url: None,
            result: None,
            error: Some(message.into()),
        }
    }
}

/// A `data:image/…;base64,` URI. The one image interchange format on the
/// wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DataUrl(String);

const PNG_PREFIX: &str = "data:image/png;base64,";

impl DataUrl {
    pub fn from_png_bytes(bytes: &[u8]) -> Self {
        Self(format!("{PNG_PREFIX}{}", BASE64.encode(bytes)))
    }

    /// Decode back into pixels. Accepts any `data:image/*` payload the
    /// image crate can sniff, not just PNG.
    pub fn decode_image(&self) -> Result<DynamicImage, ProtocolError> {
        if !self.0.starts_with("data:image/") {
            return Err(ProtocolError::NotAnImageDataUrl);
        }
        let (_, payload) = self
            .0
            .split_once(";base64,")
            .ok_or(ProtocolError::NotAnImageDataUrl)?;
        let bytes = BASE64
            .decode(payload)
            .map_err(|e| ProtocolError::Base64(e.to_string()))?;
        image::load_from_memory(&bytes).map_err(|e| ProtocolError::ImageDecode(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Payload is not an image data URL")]
    NotAnImageDataUrl,

    #[error("Invalid base64 payload: {0}")]
    Base64(String),

    #[error("Failed to decode image payload: {0}")]
    ImageDecode(String),
}
