//! Error types for thumbcrop-core
//!
//! Provides a unified error type for raster construction and windowed
//! pixel access. All failures are local, synchronous and deterministic;
//! none of them are retryable.

use thiserror::Error;

/// Thumbcrop core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Unsupported samples-per-pixel count
    #[error("invalid channel count: {0} (expected 3 or 4)")]
    InvalidChannels(u32),

    /// Row stride smaller than one row of pixels
    #[error("row stride too small: {stride} < {min}")]
    StrideTooSmall { stride: usize, min: usize },

    /// Pixel buffer shorter than the declared geometry requires
    #[error("pixel buffer too small: {len} < {required}")]
    BufferTooSmall { len: usize, required: usize },

    /// Rectangle with zero width or height
    #[error("rectangle has zero dimension: {w}x{h}")]
    InvalidRectangle { w: u32, h: u32 },

    /// Window access beyond the raster extent
    #[error("window ({x},{y}) {w}x{h} exceeds raster bounds {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for thumbcrop-core operations
pub type Result<T> = std::result::Result<T, Error>;
