//! barcode-snip — snip any screen region, decode the barcode inside it.
//!
//! The crate is split the way the flow runs:
//! - Geometry (`geometry`): selection rectangles and scale correction
//! - Screen capture domain (`capture/`): frames, cropping, capture service
//! - Region selection (`selection/`): drag gesture, overlay seam, selector
//! - Decode adapter (`decode/`): symbol formats, retry ladder, rxing backend
//! - Wire layer (`protocol`, `service`): JSON messages and dispatch
//!
//! The binary in `main.rs` hosts [`Scanner`] behind line-delimited JSON
//! on stdio; embedders can wire the same pieces to their own host.

pub mod capture;
pub mod clipboard;
pub mod decode;
pub mod geometry;
pub mod protocol;
pub mod selection;
pub mod service;

pub use service::Scanner;
