//! Cover-fit resolution
//!
//! Translates a (source, target, strategy) request into the crop
//! rectangle at source resolution plus the uniform scale factor a
//! collaborator needs to fill the target box. Actual pixel resampling
//! is the collaborator's job; only the geometry is computed here.

use thumbcrop_core::{Raster, Rect};

use crate::error::{SelectError, SelectResult};
use crate::score::Strategy;
use crate::search::{CropOptions, cover_window_dims, find_crop};

/// One cover-fit crop request.
///
/// Immutable for the duration of the request; nothing is retained
/// across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitSpec {
    /// Target box width in pixels
    pub target_w: u32,
    /// Target box height in pixels
    pub target_h: u32,
    /// Content-aware positioning strategy
    pub strategy: Strategy,
    /// Permit scale factors above 1.0. When false, a target larger
    /// than the source on the constrained axis is rejected with
    /// [`SelectError::SourceTooSmall`] and the caller must upscale
    /// through some other path.
    pub allow_upscale: bool,
}

impl FitSpec {
    /// Create a cover-fit request with upscaling disallowed
    pub fn new(target_w: u32, target_h: u32, strategy: Strategy) -> Self {
        Self {
            target_w,
            target_h,
            strategy,
            allow_upscale: false,
        }
    }

    /// Permit or forbid upscaling
    pub fn set_allow_upscale(mut self, allow: bool) -> Self {
        self.allow_upscale = allow;
        self
    }
}

/// Result of resolving one cover-fit request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCrop {
    /// Crop rectangle in source pixel coordinates
    pub crop: Rect,
    /// Uniform scale factor from crop to target
    /// (`target_w / crop.w == target_h / crop.h` up to rounding of the
    /// crop rectangle)
    pub scale: f64,
}

/// Resolve a cover-fit request to a crop rectangle and scale factor.
///
/// # Errors
///
/// - [`SelectError::InvalidAspect`] if either target dimension is 0
/// - [`SelectError::SourceTooSmall`] if covering the target would
///   require upscaling and the spec disallows it
/// - core errors propagated from the search
pub fn resolve(
    raster: &Raster<'_>,
    spec: &FitSpec,
    opts: &CropOptions,
) -> SelectResult<ResolvedCrop> {
    let aspect = spec.target_w as f64 / spec.target_h as f64;
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(SelectError::InvalidAspect(aspect));
    }

    // The crop window is the largest aspect-matching rect; if even that
    // is smaller than the target, covering requires upscaling.
    let (crop_w, _) = cover_window_dims(raster.width(), raster.height(), aspect);
    if spec.target_w > crop_w && !spec.allow_upscale {
        return Err(SelectError::SourceTooSmall {
            source_w: raster.width(),
            source_h: raster.height(),
            target_w: spec.target_w,
            target_h: spec.target_h,
        });
    }

    let crop = find_crop(raster, aspect, spec.strategy, opts)?;
    let scale = spec.target_w as f64 / crop.w as f64;
    Ok(ResolvedCrop { crop, scale })
}
