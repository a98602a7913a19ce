//! Raster - Borrowed view of a decoded image
//!
//! The engine never owns pixel data. A [`Raster`] borrows a caller-owned
//! interleaved 8-bit buffer (RGB or RGBA, contiguous or row-padded) for
//! the duration of one crop request and only ever reads from it.
//!
//! # Pixel layout
//!
//! - Samples are interleaved, 8 bits each, row-major
//! - Every row starts `stride` bytes after the previous one
//! - `stride` may exceed `width * samples` for padded buffers

use crate::error::{Error, Result};
use crate::rect::Rect;
use crate::sample::Window;

/// Samples per pixel of a raster buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// 3 samples per pixel, no alpha
    Rgb,
    /// 4 samples per pixel, alpha last
    Rgba,
}

impl Channels {
    /// Create `Channels` from a raw samples-per-pixel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] if `samples` is not 3 or 4.
    pub fn from_samples(samples: u32) -> Result<Self> {
        match samples {
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            _ => Err(Error::InvalidChannels(samples)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn samples(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// A single pixel value.
///
/// For 3-channel rasters the alpha is reported as 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Read-only view of a decoded raster image
///
/// # Examples
///
/// ```
/// use thumbcrop_core::{Channels, Raster};
///
/// let data = vec![0u8; 64 * 48 * 3];
/// let raster = Raster::new(&data, 64, 48, Channels::Rgb).unwrap();
/// assert_eq!(raster.width(), 64);
/// assert_eq!(raster.height(), 48);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    channels: Channels,
    stride: usize,
}

impl<'a> Raster<'a> {
    /// Create a raster view over a tightly packed buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the buffer is
    /// shorter than `width * height * samples`.
    pub fn new(data: &'a [u8], width: u32, height: u32, channels: Channels) -> Result<Self> {
        let stride = width as usize * channels.samples();
        Self::with_stride(data, width, height, channels, stride)
    }

    /// Create a raster view over a buffer with an explicit row stride.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either dimension is zero
    /// - `stride` is smaller than one row of pixels
    /// - the buffer cannot hold `height` rows at that stride
    pub fn with_stride(
        data: &'a [u8],
        width: u32,
        height: u32,
        channels: Channels,
        stride: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let row_bytes = width as usize * channels.samples();
        if stride < row_bytes {
            return Err(Error::StrideTooSmall {
                stride,
                min: row_bytes,
            });
        }
        // The last row needs no trailing padding
        let required = stride * (height as usize - 1) + row_bytes;
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                len: data.len(),
                required,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            stride,
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Row stride in bytes
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Width / height aspect ratio
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// The full-image rectangle
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.width, self.height)
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the
    /// raster.
    pub fn pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                w: 1,
                h: 1,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.pixel_unchecked(x, y))
    }

    /// Read the pixel at `(x, y)` without bounds checking the raster
    /// extent.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        let idx = y as usize * self.stride + x as usize * self.channels.samples();
        let r = self.data[idx];
        let g = self.data[idx + 1];
        let b = self.data[idx + 2];
        let a = match self.channels {
            Channels::Rgb => 255,
            Channels::Rgba => self.data[idx + 3],
        };
        Rgba { r, g, b, a }
    }

    /// Iterate over the pixels inside `rect`, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the rectangle exceeds the
    /// raster extent.
    pub fn window(&self, rect: Rect) -> Result<Window<'a>> {
        self.window_sampled(rect, 1)
    }

    /// Iterate over every `factor`-th pixel inside `rect` on both axes,
    /// row-major.
    ///
    /// Subsampling is deterministic: the same rectangle and factor
    /// always visit the same pixel set, which keeps scoring
    /// reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle exceeds the raster extent or
    /// `factor` is 0.
    pub fn window_sampled(&self, rect: Rect, factor: u32) -> Result<Window<'a>> {
        if factor == 0 {
            return Err(Error::InvalidParameter(
                "sampling factor must be >= 1".to_string(),
            ));
        }
        self.check_window(rect)?;
        Ok(Window::new(*self, rect, factor))
    }

    /// Copy the pixels inside `rect` into a tightly packed buffer.
    ///
    /// The output keeps the raster's channel layout but drops any row
    /// padding, so a collaborator can hand it straight to a resampler
    /// or encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the rectangle exceeds the
    /// raster extent.
    pub fn extract(&self, rect: Rect) -> Result<Vec<u8>> {
        self.check_window(rect)?;
        let samples = self.channels.samples();
        let row_bytes = rect.w as usize * samples;
        let mut out = Vec::with_capacity(rect.h as usize * row_bytes);
        for dy in 0..rect.h {
            let start =
                (rect.y + dy) as usize * self.stride + rect.x as usize * samples;
            out.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Ok(out)
    }

    fn check_window(&self, rect: Rect) -> Result<()> {
        if rect.right() > self.width as u64 || rect.bottom() > self.height as u64 {
            return Err(Error::OutOfBounds {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
