//! Candidate-window search
//!
//! Given the source dimensions and a target aspect ratio the crop
//! window's size is fixed; only its position along one axis is free.
//! The search slides that window along the slack axis in stride-aligned
//! steps, scores each candidate, and keeps the best one.

use thumbcrop_core::{Raster, Rect};

use crate::error::{SelectError, SelectResult};
use crate::score::{AttentionParams, Strategy, score_window};

/// Tunables for the candidate search.
///
/// Both knobs trade precision for bounded work on large images and are
/// deliberately configuration rather than hidden constants, since they
/// materially affect which crop wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropOptions {
    /// Candidate step as a fraction of the slack range (default 0.02,
    /// i.e. 2% of the slack; the effective stride never drops below
    /// 1 pixel)
    pub stride_fraction: f64,
    /// Pixel subsampling factor during scoring (default 1 = every
    /// pixel)
    pub sample_factor: u32,
    /// Attention weighting constants
    pub attention: AttentionParams,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            stride_fraction: 0.02,
            sample_factor: 1,
            attention: AttentionParams::default(),
        }
    }
}

impl CropOptions {
    /// Create options with the documented defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate stride as a fraction of the slack range
    pub fn set_stride_fraction(mut self, fraction: f64) -> Self {
        self.stride_fraction = fraction;
        self
    }

    /// Set the scoring subsampling factor
    pub fn set_sample_factor(mut self, factor: u32) -> Self {
        self.sample_factor = factor;
        self
    }

    /// Set the attention weighting constants
    pub fn set_attention(mut self, params: AttentionParams) -> Self {
        self.attention = params;
        self
    }
}

/// Find the best crop window of the given aspect ratio.
///
/// The window size is the largest rectangle of `target_aspect` that
/// fits the source; the search only decides its position. When the
/// source aspect already matches there is exactly one position and it
/// is returned immediately without any scoring.
///
/// Candidates are scored under `strategy`; the maximum wins, with ties
/// broken toward the position nearest the geometric center, so results
/// are deterministic.
///
/// # Errors
///
/// - [`SelectError::InvalidAspect`] if `target_aspect` is not a
///   positive finite number
/// - core errors propagated from scoring (e.g. zero `sample_factor`)
pub fn find_crop(
    raster: &Raster<'_>,
    target_aspect: f64,
    strategy: Strategy,
    opts: &CropOptions,
) -> SelectResult<Rect> {
    if !target_aspect.is_finite() || target_aspect <= 0.0 {
        return Err(SelectError::InvalidAspect(target_aspect));
    }

    let src_w = raster.width();
    let src_h = raster.height();
    let (crop_w, crop_h) = cover_window_dims(src_w, src_h, target_aspect);

    // Aspect already matches: single position, no scoring
    if crop_w == src_w && crop_h == src_h {
        return Ok(raster.bounds());
    }

    let horizontal = crop_h == src_h;
    let slack = if horizontal {
        src_w - crop_w
    } else {
        src_h - crop_h
    };
    let rect_at = |offset: u32| {
        if horizontal {
            Rect::new_unchecked(offset, 0, crop_w, crop_h)
        } else {
            Rect::new_unchecked(0, offset, crop_w, crop_h)
        }
    };
    if slack == 0 {
        return Ok(rect_at(0));
    }

    let stride = ((slack as f64 * opts.stride_fraction).round() as u32).max(1);
    let center = slack / 2;

    let mut best_rect = rect_at(0);
    let mut best_score =
        score_window(raster, best_rect, strategy, &opts.attention, opts.sample_factor)?;
    let mut best_dist = center;

    let mut offset = stride;
    while offset <= slack {
        let rect = rect_at(offset);
        let score =
            score_window(raster, rect, strategy, &opts.attention, opts.sample_factor)?;
        let dist = offset.abs_diff(center);
        if score > best_score || (score == best_score && dist < best_dist) {
            best_rect = rect;
            best_score = score;
            best_dist = dist;
        }
        match offset.checked_add(stride) {
            Some(next) => offset = next,
            None => break,
        }
    }

    Ok(best_rect)
}

/// Largest window of `target_aspect` that fits within the source.
///
/// Both dimensions are at least 1 and at most the source; exactly one
/// axis retains slack (unless the aspects already match).
pub(crate) fn cover_window_dims(src_w: u32, src_h: u32, target_aspect: f64) -> (u32, u32) {
    let src_aspect = src_w as f64 / src_h as f64;
    if src_aspect > target_aspect {
        // Source is wider: full height, slide horizontally
        let h = src_h;
        let w = ((h as f64 * target_aspect).round() as u32).clamp(1, src_w);
        (w, h)
    } else {
        // Source is taller (or aspect matches): full width
        let w = src_w;
        let h = ((w as f64 / target_aspect).round() as u32).clamp(1, src_h);
        (w, h)
    }
}
