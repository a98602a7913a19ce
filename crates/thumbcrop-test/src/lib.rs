//! thumbcrop-test - Synthetic raster helpers for regression tests
//!
//! The engine never performs I/O, so the test suites synthesize their
//! inputs instead of loading golden images. [`TestImage`] owns a pixel
//! buffer and hands out borrowed [`Raster`] views, matching the
//! caller-owns-pixels contract of the library crates.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use thumbcrop_core::{Channels, Raster, Rect};

/// An owned pixel buffer for constructing test rasters
pub struct TestImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: Channels,
}

impl TestImage {
    /// Borrow the buffer as a raster view
    pub fn raster(&self) -> Raster<'_> {
        Raster::new(&self.data, self.width, self.height, self.channels)
            .expect("test image geometry is valid by construction")
    }

    /// Overwrite a single pixel's RGB samples
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) {
        assert!(x < self.width && y < self.height, "set_pixel out of bounds");
        let idx = (y * self.width + x) as usize * self.channels.samples();
        self.data[idx] = rgb.0;
        self.data[idx + 1] = rgb.1;
        self.data[idx + 2] = rgb.2;
    }

    /// Overwrite every pixel inside `rect` with one RGB value
    pub fn fill_rect(&mut self, rect: Rect, rgb: (u8, u8, u8)) {
        for y in rect.y..rect.bottom() as u32 {
            for x in rect.x..rect.right() as u32 {
                self.set_pixel(x, y, rgb);
            }
        }
    }
}

/// Create an RGB image filled with a single color
pub fn uniform_rgb(rgb: (u8, u8, u8), width: u32, height: u32) -> TestImage {
    let mut data = Vec::with_capacity((width * height) as usize * 3);
    for _ in 0..width * height {
        data.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
    }
    TestImage {
        data,
        width,
        height,
        channels: Channels::Rgb,
    }
}

/// Create an RGB image with a horizontal luminance gradient (0..255
/// across the width)
pub fn gradient_rgb(width: u32, height: u32) -> TestImage {
    let mut data = Vec::with_capacity((width * height) as usize * 3);
    for _y in 0..height {
        for x in 0..width {
            let v = ((x as f32 / width as f32) * 255.0) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    TestImage {
        data,
        width,
        height,
        channels: Channels::Rgb,
    }
}

/// Create an RGB image of seeded random noise.
///
/// The same seed always produces the same pixels, so tests built on
/// noise stay reproducible.
pub fn noise_rgb(seed: u64, width: u32, height: u32) -> TestImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<u8> = (0..(width * height) as usize * 3)
        .map(|_| rng.random())
        .collect();
    TestImage {
        data,
        width,
        height,
        channels: Channels::Rgb,
    }
}

/// Create an RGBA image filled with a single color and alpha
pub fn uniform_rgba(rgba: (u8, u8, u8, u8), width: u32, height: u32) -> TestImage {
    let mut data = Vec::with_capacity((width * height) as usize * 4);
    for _ in 0..width * height {
        data.extend_from_slice(&[rgba.0, rgba.1, rgba.2, rgba.3]);
    }
    TestImage {
        data,
        width,
        height,
        channels: Channels::Rgba,
    }
}

/// A saturated warm tone inside the default skin-hue band
pub const SKIN_TONE: (u8, u8, u8) = (230, 150, 100);

/// A neutral mid gray (zero saturation)
pub const MID_GRAY: (u8, u8, u8) = (128, 128, 128);
