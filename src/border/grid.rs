//! Row-major pixel grid over a decoded image

use image::RgbImage;

use super::types::{BorderError, Color, Result};

/// Immutable row-major grid of RGB colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Build a grid from raw pixels; `pixels.len()` must equal `width * height`
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BorderError::SizeMismatch {
                expected: usize::MAX,
                actual: pixels.len(),
            })?;

        if pixels.len() != expected {
            return Err(BorderError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from a decoded RGB image
    pub fn from_rgb_image(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(|&p| Color::from(p)).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color at (x, y)
    ///
    /// # Panics
    ///
    /// Panics when (x, y) lies outside the grid.
    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> Color {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Color at (x, y), or None outside the grid
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.color_at(x, y))
        } else {
            None
        }
    }
}
