//! Rect - Crop rectangle in source pixel coordinates
//!
//! A rectangle always refers to source-image coordinates with the
//! origin at the top-left corner.

use crate::error::{Error, Result};

/// A rectangular region in source pixel coordinates
///
/// Invariant: `w > 0 && h > 0`. `Rect::new` enforces this; a zero-area
/// rectangle is rejected rather than silently clamped. This is a simple
/// `Copy` type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRectangle`] if width or height is zero.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidRectangle { w, h });
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validating the positive-area invariant
    pub const fn new_unchecked(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u64 {
        self.x as u64 + self.w as u64
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.h as u64
    }

    /// Get the center x coordinate
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.x + self.w / 2
    }

    /// Get the center y coordinate
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.y + self.h / 2
    }

    /// Get the area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Get the width / height aspect ratio
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.w as f64 / self.h as f64
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && (x as u64) < self.right() && y >= self.y && (y as u64) < self.bottom()
    }

    /// Check if this rectangle fully contains another
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Compute the intersection of two rectangles.
    ///
    /// Returns `None` when they do not overlap (a shared edge is not an
    /// overlap, since rectangles are half-open).
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if (x as u64) < right && (y as u64) < bottom {
            Some(Rect {
                x,
                y,
                w: (right - x as u64) as u32,
                h: (bottom - y as u64) as u32,
            })
        } else {
            None
        }
    }

    /// Translate the rectangle by a signed offset.
    ///
    /// Returns `None` when the new origin would leave `u32` range.
    pub fn translate(&self, dx: i64, dy: i64) -> Option<Rect> {
        let x = u32::try_from((self.x as i64).checked_add(dx)?).ok()?;
        let y = u32::try_from((self.y as i64).checked_add(dy)?).ok()?;
        Some(Rect { x, y, ..*self })
    }

    /// Scale the rectangle uniformly, rounding each field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRectangle`] when either dimension rounds
    /// to zero.
    pub fn scale(&self, factor: f64) -> Result<Rect> {
        let x = (self.x as f64 * factor).round() as u32;
        let y = (self.y as f64 * factor).round() as u32;
        let w = (self.w as f64 * factor).round() as u32;
        let h = (self.h as f64 * factor).round() as u32;
        Rect::new(x, y, w, h)
    }
}
