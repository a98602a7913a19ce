//! Window scoring strategies
//!
//! Both strategies share one histogram/entropy core and differ only in
//! the per-pixel weight fed into the histogram:
//!
//! - **Entropy**: every sampled pixel counts 1. The score is the
//!   Shannon entropy (in bits) of the 256-bin luminance distribution.
//! - **Attention**: each pixel counts its saliency weight instead,
//!   boosting saturated and skin-toned content before the same entropy
//!   computation runs on the weighted distribution.
//!
//! Scores are pure functions of (pixels, strategy, parameters): no
//! state survives a call, and repeated calls return identical values.

use thumbcrop_core::{Raster, Rect, Rgba, Window, color};

use crate::error::SelectResult;

const HIST_BINS: usize = 256;

/// Content-aware crop selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Plain Shannon entropy of the luminance distribution
    Entropy,
    /// Entropy of a saliency-weighted distribution favoring skin tones
    /// and color saturation
    Attention,
}

/// Tunable constants for the attention weighting.
///
/// These are policy, not derived values: the skin-hue band and the
/// saturation gate were chosen, not measured. All defaults sit inside
/// the warm band where skin tones of any complexion fall in HSV hue.
///
/// Per-pixel weight:
///
/// ```text
/// sat  = S                                          (0..=1)
/// skin = exp(-(dh / half_width)^2)   if S >= gate, else 0
/// w    = clamp(sat + skin, 0, max_weight)
/// ```
///
/// where `dh` is the wrapped hue distance from `skin_hue_center`.
/// The gate keeps near-neutral grays and browns from picking up a skin
/// boost on hue alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttentionParams {
    /// Center of the skin-hue band, degrees (default 30.0)
    pub skin_hue_center: f32,
    /// Half-width of the bell over hue distance, degrees (default 25.0)
    pub skin_hue_half_width: f32,
    /// Minimum saturation for any skin weight (default 0.15)
    pub saturation_gate: f32,
    /// Upper clamp on the combined per-pixel weight (default 2.0)
    pub max_weight: f32,
}

impl Default for AttentionParams {
    fn default() -> Self {
        Self {
            skin_hue_center: 30.0,
            skin_hue_half_width: 25.0,
            saturation_gate: 0.15,
            max_weight: 2.0,
        }
    }
}

impl AttentionParams {
    /// Create parameters with the documented defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skin-hue band center (degrees)
    pub fn set_skin_hue_center(mut self, degrees: f32) -> Self {
        self.skin_hue_center = degrees;
        self
    }

    /// Set the bell half-width over hue distance (degrees)
    pub fn set_skin_hue_half_width(mut self, degrees: f32) -> Self {
        self.skin_hue_half_width = degrees;
        self
    }

    /// Set the minimum saturation below which no skin weight applies
    pub fn set_saturation_gate(mut self, gate: f32) -> Self {
        self.saturation_gate = gate;
        self
    }

    /// Set the upper clamp on the combined per-pixel weight
    pub fn set_max_weight(mut self, max: f32) -> Self {
        self.max_weight = max;
        self
    }
}

/// Score one window of the raster under the given strategy.
///
/// `sample_factor` subsamples the window deterministically (1 = every
/// pixel); identical inputs always produce identical scores.
///
/// A window of uniform color scores exactly 0 under `Entropy` (a
/// single-bin distribution carries no information); that is a valid
/// score, not an error.
///
/// # Errors
///
/// Propagates the core errors for out-of-bounds rectangles and a zero
/// sampling factor.
pub fn score_window(
    raster: &Raster<'_>,
    rect: Rect,
    strategy: Strategy,
    params: &AttentionParams,
    sample_factor: u32,
) -> SelectResult<f64> {
    let window = raster.window_sampled(rect, sample_factor)?;
    let hist = match strategy {
        Strategy::Entropy => weighted_histogram(window, |_| 1.0),
        Strategy::Attention => weighted_histogram(window, |px| attention_weight(px, params)),
    };
    Ok(entropy(&hist))
}

/// Accumulate a weighted 256-bin luminance histogram over a window
fn weighted_histogram(window: Window<'_>, weight: impl Fn(Rgba) -> f64) -> [f64; HIST_BINS] {
    let mut hist = [0.0f64; HIST_BINS];
    for px in window {
        let bin = color::luminance(px.r, px.g, px.b) as usize;
        hist[bin] += weight(px);
    }
    hist
}

/// Shannon entropy (bits) of a weighted distribution.
///
/// Zero-mass input scores 0; for attention this happens when every
/// sampled pixel is fully neutral.
fn entropy(hist: &[f64; HIST_BINS]) -> f64 {
    let total: f64 = hist.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let mut h = 0.0;
    for &mass in hist {
        if mass > 0.0 {
            let p = mass / total;
            h -= p * p.log2();
        }
    }
    h
}

/// Saliency weight of one pixel under the attention policy
fn attention_weight(px: Rgba, params: &AttentionParams) -> f64 {
    let hsv = color::rgb_to_hsv(px.r, px.g, px.b);
    let sat = hsv.s;
    let skin = if sat < params.saturation_gate {
        0.0
    } else {
        let dh = hue_distance(hsv.h, params.skin_hue_center) / params.skin_hue_half_width;
        (-dh * dh).exp()
    };
    (sat + skin).clamp(0.0, params.max_weight) as f64
}

/// Wrapped distance between two hues in degrees, always in [0, 180]
fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thumbcrop_core::{Channels, Raster};

    fn raster_of(pixels: &[(u8, u8, u8)], w: u32, h: u32) -> Vec<u8> {
        assert_eq!(pixels.len(), (w * h) as usize);
        pixels.iter().flat_map(|&(r, g, b)| [r, g, b]).collect()
    }

    #[test]
    fn test_uniform_window_entropy_is_zero() {
        let data = raster_of(&[(77, 77, 77); 16], 4, 4);
        let raster = Raster::new(&data, 4, 4, Channels::Rgb).unwrap();
        let score = score_window(
            &raster,
            raster.bounds(),
            Strategy::Entropy,
            &AttentionParams::default(),
            1,
        )
        .unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_two_equal_bins_score_one_bit() {
        let mut pixels = vec![(0u8, 0u8, 0u8); 8];
        pixels.extend(vec![(255u8, 255u8, 255u8); 8]);
        let data = raster_of(&pixels, 4, 4);
        let raster = Raster::new(&data, 4, 4, Channels::Rgb).unwrap();
        let score = score_window(
            &raster,
            raster.bounds(),
            Strategy::Entropy,
            &AttentionParams::default(),
            1,
        )
        .unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hue_distance_wraps() {
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(30.0, 30.0), 0.0);
    }

    #[test]
    fn test_attention_weight_gates_neutral_pixels() {
        let params = AttentionParams::default();
        // Pure gray: zero saturation, no skin weight
        assert_eq!(attention_weight(Rgba { r: 128, g: 128, b: 128, a: 255 }, &params), 0.0);
        // Warm but nearly desaturated: gate suppresses the skin boost
        let dull = Rgba { r: 120, g: 112, b: 106, a: 255 };
        let w = attention_weight(dull, &params);
        assert!(w < params.saturation_gate as f64 + 1e-6);
    }

    #[test]
    fn test_attention_weight_boosts_skin_tone() {
        let params = AttentionParams::default();
        let skin = Rgba { r: 230, g: 150, b: 100, a: 255 };
        let cool = Rgba { r: 100, g: 150, b: 230, a: 255 };
        let w_skin = attention_weight(skin, &params);
        let w_cool = attention_weight(cool, &params);
        // Same saturation, but only the warm pixel collects a skin boost
        assert!(w_skin > w_cool + 0.5, "skin {w_skin} vs cool {w_cool}");
    }

    #[test]
    fn test_attention_weight_respects_max_clamp() {
        let params = AttentionParams::default().set_max_weight(1.0);
        let skin = Rgba { r: 255, g: 140, b: 60, a: 255 };
        assert_eq!(attention_weight(skin, &params), 1.0);
    }

    #[test]
    fn test_uniform_weights_leave_entropy_unchanged() {
        // Every pixel shares the same saturation and hue, so attention
        // scales all bins by one constant and the distribution (hence
        // the entropy) is unchanged.
        let pixels = [
            (200u8, 100u8, 50u8),
            (100, 50, 25),
            (160, 80, 40),
            (80, 40, 20),
        ];
        let data = raster_of(&pixels, 2, 2);
        let raster = Raster::new(&data, 2, 2, Channels::Rgb).unwrap();
        let params = AttentionParams::default();
        let plain =
            score_window(&raster, raster.bounds(), Strategy::Entropy, &params, 1).unwrap();
        let weighted =
            score_window(&raster, raster.bounds(), Strategy::Attention, &params, 1).unwrap();
        assert!((plain - weighted).abs() < 1e-9);
    }
}
