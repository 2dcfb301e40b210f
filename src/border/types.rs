//! Common types for border detection

use image::Rgb;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Border detection error types
#[derive(Debug, Error)]
pub enum BorderError {
    #[error("Image not found: {0}")]
    ImageNotFound(PathBuf),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Bad arguments; \"{}\" isn't a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Image too small: {width}x{height} does not contain test point ({x}, {y})")]
    ImageTooSmall { width: u32, height: u32, x: u32, y: u32 },

    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Failed to encode output: {0}")]
    EncodeFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BorderError>;

/// RGB triple with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Sum of the absolute per-channel differences
    pub fn delta(self, other: Color) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| u32::from(a.abs_diff(b)))
            .sum()
    }

    /// Whether `other` is within `threshold` of this color
    pub fn matches(self, other: Color, threshold: u32) -> bool {
        self.delta(other) <= threshold
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Self(pixel.0)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "[{}, {}, {}]", r, g, b)
    }
}

/// Retained region of an image, as resolved edge offsets
///
/// `x1`/`y1` are the first retained column/row, `x2`/`y2` are exclusive.
/// The sides are resolved independently, so a pathological image can yield
/// `x1 > x2` or `y1 > y2`; such a rectangle is empty rather than invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRect {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width of the retained region (0 when inverted)
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Height of the retained region (0 when inverted)
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// True when nothing would be retained
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Amount trimmed from each edge as (left, top, right, bottom)
    pub fn margins(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        (
            self.x1,
            self.y1,
            width.saturating_sub(self.x2),
            height.saturating_sub(self.y2),
        )
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Result of border detection on one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderDetection {
    /// Source image dimensions
    pub image_size: (u32, u32),
    /// Color sampled at the test point
    pub reference: Color,
    /// Region to retain
    pub crop: CropRect,
}
