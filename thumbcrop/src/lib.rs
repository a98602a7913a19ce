//! Thumbcrop - Content-aware thumbnail crop selection
//!
//! Given a borrowed raster and a target box, thumbcrop decides where to
//! crop so that the most informative part of the image survives the
//! thumbnail. It never decodes, encodes, or resamples pixels; callers
//! bring decoded RGB/RGBA bytes and take away a crop rectangle plus the
//! uniform scale factor that fills the target.
//!
//! # Overview
//!
//! - Borrowed pixel views with windowed, deterministic subsampled
//!   iteration ([`Raster`], [`Window`])
//! - Two scoring strategies: plain luminance entropy, and a
//!   saliency-weighted variant boosting skin tones and saturation
//!   ([`select::Strategy`])
//! - Stride-aligned candidate search along the slack axis
//!   ([`select::find_crop`])
//! - Cover-fit resolution to crop + scale ([`select::resolve`])
//!
//! # Example
//!
//! ```
//! use thumbcrop::{Channels, Raster};
//! use thumbcrop::select::{CropOptions, FitSpec, Strategy, resolve};
//!
//! // A 64x32 source cropped to cover a 16x16 target: the square
//! // window keeps the full 32px height and slides horizontally.
//! let data = vec![0u8; 64 * 32 * 3];
//! let raster = Raster::new(&data, 64, 32, Channels::Rgb).unwrap();
//! let spec = FitSpec::new(16, 16, Strategy::Entropy);
//!
//! let resolved = resolve(&raster, &spec, &CropOptions::default()).unwrap();
//! assert_eq!(resolved.crop.w, 32);
//! assert_eq!(resolved.crop.h, 32);
//! assert_eq!(resolved.scale, 0.5);
//! ```

// Re-export core types (pixel access and geometry used everywhere)
pub use thumbcrop_core::*;

// Re-export the selection crate as a module to avoid name conflicts
pub use thumbcrop_select as select;
