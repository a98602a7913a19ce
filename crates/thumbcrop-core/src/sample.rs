//! Windowed pixel iteration
//!
//! A [`Window`] walks the pixels of one rectangle in row-major order,
//! optionally visiting only every N-th pixel on both axes. The visited
//! set is a pure function of (rectangle, factor), which is what makes
//! repeated scoring runs reproducible.

use crate::raster::{Raster, Rgba};
use crate::rect::Rect;

/// Row-major iterator over the pixels of one window.
///
/// Created by [`Raster::window`] or [`Raster::window_sampled`]; the
/// bounds are validated there, so iteration itself never fails.
#[derive(Debug, Clone)]
pub struct Window<'a> {
    raster: Raster<'a>,
    rect: Rect,
    factor: u32,
    x: u32,
    y: u32,
}

impl<'a> Window<'a> {
    pub(crate) fn new(raster: Raster<'a>, rect: Rect, factor: u32) -> Self {
        Self {
            raster,
            rect,
            factor,
            x: rect.x,
            y: rect.y,
        }
    }

    /// The window rectangle being iterated
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The subsampling factor (1 = every pixel)
    #[inline]
    pub fn factor(&self) -> u32 {
        self.factor
    }
}

impl Iterator for Window<'_> {
    type Item = Rgba;

    fn next(&mut self) -> Option<Rgba> {
        if (self.y as u64) >= self.rect.bottom() {
            return None;
        }
        let px = self.raster.pixel_unchecked(self.x, self.y);
        // Advance with the factor; wrap to the next sampled row at the
        // right edge
        if (self.x as u64 + self.factor as u64) < self.rect.right() {
            self.x += self.factor;
        } else {
            self.x = self.rect.x;
            // Saturate so the exhausted check above stays valid even for
            // rects touching u32::MAX
            self.y = self.y.saturating_add(self.factor);
        }
        Some(px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Channels;

    fn gradient_data(w: u32, h: u32) -> Vec<u8> {
        // Red channel encodes x, green encodes y
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&[x as u8, y as u8, 0]);
            }
        }
        data
    }

    #[test]
    fn test_window_row_major_order() {
        let data = gradient_data(3, 2);
        let raster = Raster::new(&data, 3, 2, Channels::Rgb).unwrap();
        let coords: Vec<(u8, u8)> = raster
            .window(Rect::new(1, 0, 2, 2).unwrap())
            .unwrap()
            .map(|px| (px.r, px.g))
            .collect();
        assert_eq!(coords, vec![(1, 0), (2, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_window_full_count() {
        let data = gradient_data(7, 5);
        let raster = Raster::new(&data, 7, 5, Channels::Rgb).unwrap();
        assert_eq!(raster.window(raster.bounds()).unwrap().count(), 35);
    }

    #[test]
    fn test_window_sampled_visits_expected_set() {
        let data = gradient_data(8, 8);
        let raster = Raster::new(&data, 8, 8, Channels::Rgb).unwrap();
        let rect = Rect::new(1, 1, 5, 5).unwrap();
        let coords: Vec<(u8, u8)> = raster
            .window_sampled(rect, 2)
            .unwrap()
            .map(|px| (px.r, px.g))
            .collect();
        // x and y in {1, 3, 5}
        let expected: Vec<(u8, u8)> = [1u8, 3, 5]
            .iter()
            .flat_map(|&y| [1u8, 3, 5].iter().map(move |&x| (x, y)))
            .collect();
        assert_eq!(coords, expected);
    }

    #[test]
    fn test_window_sampled_deterministic() {
        let data = gradient_data(16, 16);
        let raster = Raster::new(&data, 16, 16, Channels::Rgb).unwrap();
        let rect = Rect::new(2, 3, 11, 9).unwrap();
        let a: Vec<Rgba> = raster.window_sampled(rect, 3).unwrap().collect();
        let b: Vec<Rgba> = raster.window_sampled(rect, 3).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_window_factor_larger_than_rect() {
        let data = gradient_data(4, 4);
        let raster = Raster::new(&data, 4, 4, Channels::Rgb).unwrap();
        // Only the top-left pixel of the rect is visited
        let pixels: Vec<Rgba> = raster
            .window_sampled(Rect::new(1, 1, 2, 2).unwrap(), 10)
            .unwrap()
            .collect();
        assert_eq!(pixels.len(), 1);
        assert_eq!(pixels[0].r, 1);
        assert_eq!(pixels[0].g, 1);
    }

    #[test]
    fn test_window_single_pixel() {
        let data = gradient_data(4, 4);
        let raster = Raster::new(&data, 4, 4, Channels::Rgb).unwrap();
        let pixels: Vec<Rgba> = raster
            .window(Rect::new(3, 3, 1, 1).unwrap())
            .unwrap()
            .collect();
        assert_eq!(pixels.len(), 1);
    }
}
