//! Cropping, padding and JPEG output

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::types::{BorderError, Color, CropRect, Result};
use super::JPEG_QUALITY;

/// Copy the retained region out of `image`; None when the rectangle is empty
pub fn crop_to_rect(image: &RgbImage, rect: &CropRect) -> Option<RgbImage> {
    if rect.is_empty() {
        return None;
    }
    Some(imageops::crop_imm(image, rect.x1, rect.y1, rect.width(), rect.height()).to_image())
}

/// Place a cropped image back at its original offset on a canvas of
/// `size`, filling the trimmed margins with the border color
pub fn pad_to_size(cropped: &RgbImage, rect: &CropRect, size: (u32, u32), fill: Color) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(size.0, size.1, fill.into());
    imageops::replace(&mut canvas, cropped, i64::from(rect.x1), i64::from(rect.y1));
    canvas
}

/// Encode `image` as JPEG at `path`, regardless of the path's extension
pub fn write_jpeg(image: &RgbImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .encode_image(image)
        .map_err(|e| BorderError::EncodeFailed(e.to_string()))?;

    writer.flush()?;
    Ok(())
}
