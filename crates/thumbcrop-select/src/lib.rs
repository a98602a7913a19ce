//! thumbcrop-select - Content-aware crop-region selection
//!
//! This crate decides *where* to crop: given a borrowed raster and a
//! target box, it scores candidate windows under one of two strategies
//! and resolves the winning crop geometry.
//!
//! - [`Strategy::Entropy`] - plain Shannon entropy of the luminance
//!   distribution; favors windows with the most tonal variety
//! - [`Strategy::Attention`] - the same entropy over a
//!   saliency-weighted distribution that boosts skin-tone hues and
//!   color saturation
//!
//! Entry points, lowest to highest level:
//!
//! - [`score_window`] - scalar importance score for one window
//! - [`find_crop`] - best window position for a target aspect ratio
//! - [`resolve`] - full cover-fit resolution to crop rect + scale
//!
//! Every operation is a synchronous pure function over request-scoped
//! values; concurrent requests need no coordination.

mod error;
pub mod fit;
pub mod score;
pub mod search;

pub use error::{SelectError, SelectResult};
pub use fit::{FitSpec, ResolvedCrop, resolve};
pub use score::{AttentionParams, Strategy, score_window};
pub use search::{CropOptions, find_crop};
