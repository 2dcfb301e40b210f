//! Directory batch processing
//!
//! Crops every image in a source directory into an output directory, one
//! file at a time in sorted path order. Output keeps the source file name and
//! is always JPEG encoded.

use image::{ImageReader, RgbImage};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::border::{
    crop_to_rect, detect_border, write_jpeg, BorderDetection, BorderError, BorderOptions,
    PixelGrid, Result,
};

/// Outcome of processing one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropOutcome {
    /// Cropped image was written to `output`
    Cropped {
        detection: BorderDetection,
        output: PathBuf,
    },
    /// Detection left nothing to keep; no output was written
    Skipped { detection: BorderDetection },
}

impl CropOutcome {
    pub fn detection(&self) -> &BorderDetection {
        match self {
            CropOutcome::Cropped { detection, .. } | CropOutcome::Skipped { detection } => {
                detection
            }
        }
    }
}

/// Counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files attempted
    pub total: usize,
    /// Files written
    pub cropped: usize,
    /// Files with an empty crop
    pub skipped: usize,
    /// Files that failed to decode, detect or encode
    pub failed: usize,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    fn record(&mut self, result: &Result<CropOutcome>) {
        self.total += 1;
        match result {
            Ok(CropOutcome::Cropped { .. }) => self.cropped += 1,
            Ok(CropOutcome::Skipped { .. }) => self.skipped += 1,
            Err(_) => self.failed += 1,
        }
    }

    /// Log the final counts
    pub fn log_summary(&self) {
        info!(
            "Processed {} file(s): {} cropped, {} skipped, {} failed",
            self.total, self.cropped, self.skipped, self.failed
        );
    }
}

/// Ensure `path` exists and is a directory
pub fn validate_directory(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(BorderError::NotADirectory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

/// Regular files directly inside `dir`, sorted by path
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Output location for `input`: same file name under `output_dir`
pub fn output_path(input: &Path, output_dir: &Path) -> Option<PathBuf> {
    input.file_name().map(|name| output_dir.join(name))
}

/// Decode any supported format into an RGB8 buffer
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    if !path.exists() {
        return Err(BorderError::ImageNotFound(path.to_path_buf()));
    }

    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| BorderError::InvalidImage(format!("{}: {}", path.display(), e)))?;

    Ok(image.to_rgb8())
}

/// Detect and remove the border of one image, writing JPEG to `output`
pub fn crop_file(input: &Path, output: &Path, options: &BorderOptions) -> Result<CropOutcome> {
    let image = load_rgb_image(input)?;
    let grid = PixelGrid::from_rgb_image(&image);

    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!("Cropping file \"{}\"...", name);
    info!("  Dimensions: {}x{}", grid.width(), grid.height());

    let detection = detect_border(&grid, options)?;

    let (left, top, right, bottom) = detection.crop.margins(image.width(), image.height());
    info!("  Crop Color: {}", detection.reference);
    info!("  Cropping {}, {} :: {}, {}", left, top, right, bottom);

    let Some(cropped) = crop_to_rect(&image, &detection.crop) else {
        warn!(
            "Skipping \"{}\": crop {} leaves no content",
            name, detection.crop
        );
        return Ok(CropOutcome::Skipped { detection });
    };

    write_jpeg(&cropped, output)?;

    Ok(CropOutcome::Cropped {
        detection,
        output: output.to_path_buf(),
    })
}

/// Crop every file in `source_dir` into `output_dir`
///
/// A failure on one file is logged and counted; the remaining files are
/// still processed. Failing to list `source_dir` aborts the run.
pub fn process_directory(
    source_dir: &Path,
    output_dir: &Path,
    options: &BorderOptions,
) -> Result<BatchReport> {
    let files = collect_image_files(source_dir)?;
    let mut report = BatchReport::default();

    for (idx, input) in files.iter().enumerate() {
        let Some(output) = output_path(input, output_dir) else {
            continue;
        };

        let result = crop_file(input, &output, options);
        if let Err(e) = &result {
            error!(
                "[{}/{}] Error processing {}: {}",
                idx + 1,
                files.len(),
                input.display(),
                e
            );
        }
        report.record(&result);
    }

    Ok(report)
}
