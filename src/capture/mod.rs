//! Screen capture domain — public API.
//!
//! This module owns all screen capture functionality: taking frames from
//! the OS, scale-corrected cropping, and the one-shot capture service.
//! External code should only use the items exported here.

mod region;
mod screenshot;
mod service;

pub use region::{crop_region, to_png_bytes, CropError};
pub use screenshot::{CaptureError, Frame, FrameSource, MonitorSource};
pub use service::{CaptureService, CaptureServiceError};
