//! Border Detection & Cropping module
//!
//! Detects a uniform border (letterboxing, a solid frame) around an image and
//! computes the interior rectangle to keep.
//!
//! # Algorithm
//!
//! 1. Sample the reference color at a fixed test point near the top-left corner
//! 2. Sweep each side from its edge toward the interior, one line at a time
//! 3. Count pixels whose color is farther than the threshold from the reference
//! 4. Stop a side once the count reaches the error tolerance, keeping that line
//!
//! # Example
//!
//! ```rust,no_run
//! use border_crop::{detect_border, BorderOptions, PixelGrid};
//!
//! let image = image::open("frame.png").unwrap().to_rgb8();
//! let grid = PixelGrid::from_rgb_image(&image);
//! let detection = detect_border(&grid, &BorderOptions::default()).unwrap();
//!
//! println!("Keep: {}", detection.crop);
//! ```

mod crop;
mod grid;
mod scan;
mod stepper;
mod types;

pub use crop::{crop_to_rect, pad_to_size, write_jpeg};
pub use grid::PixelGrid;
pub use scan::{detect_border, BorderScanner, Side};
pub use stepper::{BoundedStepper, Direction};
pub use types::{BorderDetection, BorderError, Color, CropRect, Result};

// ============================================================
// Constants
// ============================================================

/// Maximum summed per-channel difference for a pixel to count as border
pub const COLOR_THRESHOLD: u32 = 100;

/// Mismatching pixels tolerated before a side stops advancing
pub const ALLOWABLE_ERRORS: usize = 20;

/// Pixel sampled for the reference border color
pub const COLOR_TEST_POINT: (u32, u32) = (2, 2);

/// Quality used when encoding cropped output
pub const JPEG_QUALITY: u8 = 75;

// ============================================================
// Options
// ============================================================

/// How mismatches are counted while a side advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Count over the whole band from the edge to the current line
    #[default]
    Cumulative,
    /// Count over the current line only
    NewestLine,
}

/// Border detection options
#[derive(Debug, Clone)]
pub struct BorderOptions {
    /// Maximum summed channel difference for a border pixel
    pub color_threshold: u32,
    /// Mismatch count at which a side stops
    pub allowable_errors: usize,
    /// Coordinate of the reference color sample
    pub test_point: (u32, u32),
    /// Mismatch counting mode
    pub scan_mode: ScanMode,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            color_threshold: COLOR_THRESHOLD,
            allowable_errors: ALLOWABLE_ERRORS,
            test_point: COLOR_TEST_POINT,
            scan_mode: ScanMode::Cumulative,
        }
    }
}

impl BorderOptions {
    /// Create a new options builder
    pub fn builder() -> BorderOptionsBuilder {
        BorderOptionsBuilder::default()
    }
}

/// Builder for BorderOptions
#[derive(Debug, Default)]
pub struct BorderOptionsBuilder {
    options: BorderOptions,
}

impl BorderOptionsBuilder {
    /// Set the color match threshold
    #[must_use]
    pub fn color_threshold(mut self, threshold: u32) -> Self {
        self.options.color_threshold = threshold;
        self
    }

    /// Set the mismatch tolerance
    #[must_use]
    pub fn allowable_errors(mut self, errors: usize) -> Self {
        self.options.allowable_errors = errors;
        self
    }

    /// Set the reference sample coordinate
    #[must_use]
    pub fn test_point(mut self, x: u32, y: u32) -> Self {
        self.options.test_point = (x, y);
        self
    }

    /// Set the mismatch counting mode
    #[must_use]
    pub fn scan_mode(mut self, mode: ScanMode) -> Self {
        self.options.scan_mode = mode;
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> BorderOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = BorderOptions::default();

        assert_eq!(opts.color_threshold, 100);
        assert_eq!(opts.allowable_errors, 20);
        assert_eq!(opts.test_point, (2, 2));
        assert_eq!(opts.scan_mode, ScanMode::Cumulative);
    }

    #[test]
    fn test_builder_pattern() {
        let opts = BorderOptions::builder()
            .color_threshold(30)
            .allowable_errors(5)
            .test_point(0, 1)
            .scan_mode(ScanMode::NewestLine)
            .build();

        assert_eq!(opts.color_threshold, 30);
        assert_eq!(opts.allowable_errors, 5);
        assert_eq!(opts.test_point, (0, 1));
        assert_eq!(opts.scan_mode, ScanMode::NewestLine);
    }

    #[test]
    fn test_builder_defaults_match_constants() {
        let opts = BorderOptions::builder().build();
        assert_eq!(opts.color_threshold, COLOR_THRESHOLD);
        assert_eq!(opts.allowable_errors, ALLOWABLE_ERRORS);
        assert_eq!(opts.test_point, COLOR_TEST_POINT);
    }
}
