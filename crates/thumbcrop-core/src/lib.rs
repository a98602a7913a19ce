//! Thumbcrop Core - Raster access and geometry for content-aware cropping
//!
//! This crate provides the data structures shared by the thumbcrop
//! engine:
//!
//! - [`Raster`] - read-only borrowed view of a decoded image (RGB/RGBA)
//! - [`Window`] - row-major pixel iterator with deterministic subsampling
//! - [`Rect`] - crop rectangle in source pixel coordinates
//! - [`color`] - luminance and HSV helpers used by the scoring strategies
//!
//! Decoding, resampling and encoding are collaborator concerns; the
//! engine borrows pixels for one request, computes, and returns value
//! types. Nothing here keeps state across requests.

pub mod color;
pub mod error;
mod raster;
mod rect;
mod sample;

pub use error::{Error, Result};
pub use raster::{Channels, Raster, Rgba};
pub use rect::Rect;
pub use sample::Window;
