//! Four-directional border scan
//!
//! Each side is swept independently from its edge toward the interior, one
//! line at a time. The sweep stops at the first line whose mismatch count
//! reaches the error tolerance; that line is kept in the crop.

use tracing::{debug, trace};

use super::grid::PixelGrid;
use super::stepper::BoundedStepper;
use super::types::{BorderDetection, BorderError, Color, CropRect, Result};
use super::{BorderOptions, ScanMode};

/// Image edge being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// All sides in scan order
    pub fn all() -> [Side; 4] {
        [Side::Left, Side::Right, Side::Top, Side::Bottom]
    }

    /// Stepper over the band boundary for this side.
    ///
    /// Left/Top track the exclusive end of the band `[0, v)`, Right/Bottom
    /// track its inclusive start `[v, len)`.
    fn stepper(self, width: u32, height: u32) -> BoundedStepper {
        match self {
            Side::Left => BoundedStepper::forward(1, width),
            Side::Right => BoundedStepper::backward(width - 1, 0),
            Side::Top => BoundedStepper::forward(1, height),
            Side::Bottom => BoundedStepper::backward(height - 1, 0),
        }
    }

    /// Index of the line most recently added to the band at boundary `value`
    fn newest_line(self, value: u32) -> u32 {
        match self {
            Side::Left | Side::Top => value - 1,
            Side::Right | Side::Bottom => value,
        }
    }

    fn is_vertical(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// Greedy line-sweep border scanner over one image
pub struct BorderScanner<'a> {
    grid: &'a PixelGrid,
    reference: Color,
    options: &'a BorderOptions,
}

impl<'a> BorderScanner<'a> {
    /// The grid must be at least 1x1
    pub fn new(grid: &'a PixelGrid, reference: Color, options: &'a BorderOptions) -> Self {
        Self {
            grid,
            reference,
            options,
        }
    }

    /// Resolve all four sides into a crop rectangle
    pub fn crop_rect(&self) -> CropRect {
        CropRect {
            x1: self.scan_side(Side::Left),
            x2: self.scan_side(Side::Right),
            y1: self.scan_side(Side::Top),
            y2: self.scan_side(Side::Bottom),
        }
    }

    /// Crop boundary for one side
    ///
    /// Returns the full dimension for Left/Top (and 0 for Right/Bottom) when
    /// the whole image matches the reference color.
    pub fn scan_side(&self, side: Side) -> u32 {
        let mut stepper = side.stepper(self.grid.width(), self.grid.height());
        let mut mismatches = 0usize;

        loop {
            let line = self.line_mismatches(side, side.newest_line(stepper.value()));
            mismatches = match self.options.scan_mode {
                ScanMode::Cumulative => mismatches + line,
                ScanMode::NewestLine => line,
            };

            if mismatches >= self.options.allowable_errors {
                debug!(?side, mismatches, line = stepper.value(), "border ends");
                stepper.retreat();
                break;
            }

            if !stepper.advance() {
                trace!(?side, "scan reached the opposite edge");
                break;
            }
        }

        stepper.value()
    }

    /// Pixels on one full row or column that do not match the reference
    fn line_mismatches(&self, side: Side, index: u32) -> usize {
        let threshold = self.options.color_threshold;
        let is_mismatch =
            |x: u32, y: u32| !self.reference.matches(self.grid.color_at(x, y), threshold);

        if side.is_vertical() {
            (0..self.grid.height()).filter(|&y| is_mismatch(index, y)).count()
        } else {
            (0..self.grid.width()).filter(|&x| is_mismatch(x, index)).count()
        }
    }
}

/// Sample the reference color and compute the crop rectangle for one image
pub fn detect_border(grid: &PixelGrid, options: &BorderOptions) -> Result<BorderDetection> {
    let (x, y) = options.test_point;
    let reference = grid.get(x, y).ok_or(BorderError::ImageTooSmall {
        width: grid.width(),
        height: grid.height(),
        x,
        y,
    })?;

    let crop = BorderScanner::new(grid, reference, options).crop_rect();

    Ok(BorderDetection {
        image_size: (grid.width(), grid.height()),
        reference,
        crop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    /// Image with per-side border widths (left, top, right, bottom)
    fn framed(
        width: u32,
        height: u32,
        (left, top, right, bottom): (u32, u32, u32, u32),
        border: Rgb<u8>,
        interior: Rgb<u8>,
    ) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if x >= left && x < width - right && y >= top && y < height - bottom {
                interior
            } else {
                border
            }
        })
    }

    fn bordered(size: u32, border: u32) -> PixelGrid {
        let img = framed(size, size, (border, border, border, border), BLACK, WHITE);
        PixelGrid::from_rgb_image(&img)
    }

    fn detect(grid: &PixelGrid, options: &BorderOptions) -> CropRect {
        detect_border(grid, options).unwrap().crop
    }

    #[test]
    fn test_side_order() {
        assert_eq!(
            Side::all(),
            [Side::Left, Side::Right, Side::Top, Side::Bottom]
        );
    }

    // TC-BRD-001: uniform image consumes every side
    #[test]
    fn test_uniform_image_is_all_border() {
        let img = RgbImage::from_pixel(8, 6, Rgb([90, 90, 90]));
        let grid = PixelGrid::from_rgb_image(&img);

        let crop = detect(&grid, &BorderOptions::default());

        assert_eq!(crop, CropRect::new(8, 6, 0, 0));
        assert!(crop.is_empty());
    }

    // TC-BRD-002: uniform border of known width
    #[test]
    fn test_uniform_border_exact_crop() {
        let grid = bordered(40, 3);
        assert_eq!(
            detect(&grid, &BorderOptions::default()),
            CropRect::new(3, 3, 37, 37)
        );
    }

    #[test]
    fn test_asymmetric_borders() {
        let img = framed(50, 30, (3, 1, 5, 4), BLACK, WHITE);
        let grid = PixelGrid::from_rgb_image(&img);

        let options = BorderOptions::builder().test_point(0, 0).build();
        let detection = detect_border(&grid, &options).unwrap();

        assert_eq!(detection.crop, CropRect::new(3, 1, 45, 26));
        assert_eq!(detection.crop.margins(50, 30), (3, 1, 5, 4));
        assert_eq!(detection.image_size, (50, 30));
    }

    // TC-BRD-003: 10x10 with a 6x6 interior under a tolerance of 6
    #[test]
    fn test_small_interior_with_matching_tolerance() {
        let grid = bordered(10, 2);
        let options = BorderOptions::builder()
            .test_point(0, 0)
            .allowable_errors(6)
            .build();

        let detection = detect_border(&grid, &options).unwrap();

        assert_eq!(detection.reference, Color::new(0, 0, 0));
        assert_eq!(detection.crop, CropRect::new(2, 2, 8, 8));
    }

    // An interior line shorter than the tolerance cannot stop the scan on
    // its own; the running count trips a few lines in.
    #[test]
    fn test_small_interior_cumulative_overshoot() {
        let grid = bordered(10, 2);
        let options = BorderOptions::builder().test_point(0, 0).build();

        assert_eq!(detect(&grid, &options), CropRect::new(5, 5, 5, 5));
    }

    #[test]
    fn test_small_interior_newest_line_never_stops() {
        let grid = bordered(10, 2);
        let options = BorderOptions::builder()
            .test_point(0, 0)
            .scan_mode(ScanMode::NewestLine)
            .build();

        assert_eq!(detect(&grid, &options), CropRect::new(10, 10, 0, 0));
    }

    #[test]
    fn test_newest_line_agrees_on_large_interior() {
        let grid = bordered(40, 3);
        let options = BorderOptions::builder()
            .scan_mode(ScanMode::NewestLine)
            .build();

        assert_eq!(detect(&grid, &options), CropRect::new(3, 3, 37, 37));
    }

    // TC-BRD-004: scattered noise below the tolerance is absorbed
    #[test]
    fn test_noise_below_tolerance_is_ignored() {
        let mut img = framed(40, 40, (4, 4, 4, 4), BLACK, WHITE);
        for y in 0..19 {
            img.put_pixel(1, y, WHITE);
        }
        let grid = PixelGrid::from_rgb_image(&img);

        assert_eq!(
            detect(&grid, &BorderOptions::default()),
            CropRect::new(4, 4, 36, 36)
        );
    }

    #[test]
    fn test_noise_at_tolerance_stops_scan() {
        let mut img = framed(40, 40, (4, 4, 4, 4), BLACK, WHITE);
        for y in 0..20 {
            img.put_pixel(1, y, WHITE);
        }
        let grid = PixelGrid::from_rgb_image(&img);
        let options = BorderOptions::default();
        let scanner = BorderScanner::new(&grid, Color::new(0, 0, 0), &options);

        // column 1 is kept: the stop line belongs to the crop
        assert_eq!(scanner.scan_side(Side::Left), 1);
        assert_eq!(scanner.scan_side(Side::Right), 36);
    }

    // TC-BRD-005: colors exactly one past the threshold
    #[test]
    fn test_threshold_plus_one_stops_at_first_line() {
        let just_over = Rgb([34, 34, 33]);
        let mut img = RgbImage::from_pixel(30, 30, BLACK);
        for y in 0..20 {
            img.put_pixel(5, y + 5, just_over);
        }
        let grid = PixelGrid::from_rgb_image(&img);
        let options = BorderOptions::default();
        let scanner = BorderScanner::new(&grid, Color::new(0, 0, 0), &options);

        assert_eq!(scanner.scan_side(Side::Left), 5);
        assert_eq!(scanner.scan_side(Side::Right), 6);
    }

    #[test]
    fn test_threshold_exact_is_still_border() {
        let at_threshold = Rgb([34, 33, 33]);
        let mut img = RgbImage::from_pixel(30, 30, BLACK);
        for y in 0..20 {
            img.put_pixel(5, y + 5, at_threshold);
        }
        let grid = PixelGrid::from_rgb_image(&img);
        let options = BorderOptions::default();
        let scanner = BorderScanner::new(&grid, Color::new(0, 0, 0), &options);

        assert_eq!(scanner.scan_side(Side::Left), 30);
        assert_eq!(scanner.scan_side(Side::Right), 0);
    }

    #[test]
    fn test_one_below_tolerance_never_stops() {
        let mut img = RgbImage::from_pixel(30, 30, BLACK);
        for y in 0..19 {
            img.put_pixel(5, y + 5, WHITE);
        }
        let grid = PixelGrid::from_rgb_image(&img);
        let options = BorderOptions::default();
        let scanner = BorderScanner::new(&grid, Color::new(0, 0, 0), &options);

        assert_eq!(scanner.scan_side(Side::Left), 30);
    }

    #[test]
    fn test_content_on_edge_keeps_everything() {
        let img = RgbImage::from_fn(30, 30, |x, y| {
            if x == 0 || y == 0 || x == 29 || y == 29 {
                WHITE
            } else {
                BLACK
            }
        });
        let grid = PixelGrid::from_rgb_image(&img);

        assert_eq!(
            detect(&grid, &BorderOptions::default()),
            CropRect::new(0, 0, 30, 30)
        );
    }

    #[test]
    fn test_zero_tolerance_stops_immediately() {
        let grid = bordered(12, 3);
        let options = BorderOptions::builder().allowable_errors(0).build();

        assert_eq!(detect(&grid, &options), CropRect::new(0, 0, 12, 12));
    }

    #[test]
    fn test_reference_sampled_at_test_point() {
        let mut img = RgbImage::from_pixel(30, 30, WHITE);
        img.put_pixel(2, 2, Rgb([10, 20, 30]));
        let grid = PixelGrid::from_rgb_image(&img);

        let detection = detect_border(&grid, &BorderOptions::default()).unwrap();
        assert_eq!(detection.reference, Color::new(10, 20, 30));
    }

    #[test]
    fn test_image_too_small_for_test_point() {
        let img = RgbImage::from_pixel(2, 2, BLACK);
        let grid = PixelGrid::from_rgb_image(&img);

        let result = detect_border(&grid, &BorderOptions::default());
        assert!(matches!(
            result,
            Err(BorderError::ImageTooSmall {
                width: 2,
                height: 2,
                x: 2,
                y: 2
            })
        ));
    }

    #[test]
    fn test_single_pixel_grid_with_origin_test_point() {
        let img = RgbImage::from_pixel(1, 1, BLACK);
        let grid = PixelGrid::from_rgb_image(&img);
        let options = BorderOptions::builder().test_point(0, 0).build();

        assert_eq!(detect(&grid, &options), CropRect::new(1, 1, 0, 0));
    }
}
