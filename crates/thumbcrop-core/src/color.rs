//! Color helpers used by the scoring strategies
//!
//! Luminance reduction uses the standard perceptual weights in their
//! integer form, `(77*R + 150*G + 29*B) >> 8`. HSV values are carried
//! as floats with the hue in degrees, since the attention policy
//! constants (skin hue band, saturation gate) are specified that way.

/// Reduce an RGB triple to 8-bit luminance.
///
/// Uses the integer form of the standard perceptual weights
/// (0.30 R + 0.59 G + 0.11 B), so identical inputs always map to the
/// same bucket.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 77 + g as u32 * 150 + b as u32 * 29) >> 8) as u8
}

/// HSV color values.
///
/// Ranges: `h` in degrees [0, 360), `s` and `v` in [0, 1].
/// Hue wraps: 0 and 360 are equivalent (pure red).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Convert RGB to HSV color space.
///
/// Achromatic input (r == g == b) yields hue 0 and saturation 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    if delta == 0.0 {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    let s = delta / max;
    let h_raw = if rf == max {
        (gf - bf) / delta
    } else if gf == max {
        2.0 + (bf - rf) / delta
    } else {
        4.0 + (rf - gf) / delta
    };

    let mut h = h_raw * 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    if h >= 360.0 {
        h -= 360.0;
    }

    Hsv { h, s, v }
}
