//! Error types for thumbcrop-select

use thiserror::Error;

/// Errors that can occur during crop-region selection
#[derive(Debug, Error)]
pub enum SelectError {
    /// Core raster/geometry error
    #[error("core error: {0}")]
    Core(#[from] thumbcrop_core::Error),

    /// Non-positive or non-finite target aspect ratio
    #[error("invalid target aspect ratio: {0}")]
    InvalidAspect(f64),

    /// Target exceeds the source and upscaling is disallowed
    #[error(
        "source {source_w}x{source_h} cannot cover target {target_w}x{target_h} without upscaling"
    )]
    SourceTooSmall {
        source_w: u32,
        source_h: u32,
        target_w: u32,
        target_h: u32,
    },
}

/// Result type for selection operations
pub type SelectResult<T> = Result<T, SelectError>;
