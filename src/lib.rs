//! border-crop - Batch removal of uniform image borders
//!
//! Samples the border color near the top-left corner of each image, sweeps
//! each side inward until the content starts, and writes the interior as JPEG.
//!
//! # Modules
//!
//! - [`border`] - Border detection, cropping and JPEG output
//! - [`batch`] - Directory enumeration and per-file processing
//! - [`cli`] - Command-line arguments
//! - [`exit_codes`] - Process exit codes

pub mod batch;
pub mod border;
pub mod cli;
pub mod exit_codes;

pub use batch::{
    collect_image_files, crop_file, load_rgb_image, output_path, process_directory,
    validate_directory, BatchReport, CropOutcome,
};
pub use border::{
    crop_to_rect, detect_border, pad_to_size, write_jpeg, BorderDetection, BorderError,
    BorderOptions, BorderOptionsBuilder, BorderScanner, BoundedStepper, Color, CropRect,
    Direction, PixelGrid, ScanMode, Side, ALLOWABLE_ERRORS, COLOR_TEST_POINT, COLOR_THRESHOLD,
    JPEG_QUALITY,
};
pub use cli::Cli;
