use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView};

use crate::error::FaviconError;

/// Primary favicon size, large enough for modern high-DPI tabs and manifests.
pub const FAVICON_SIZE: u32 = 192;
/// Legacy 32x32 favicon kept alongside the primary one.
pub const FAVICON_32: u32 = 32;

pub const FAVICON_NAME: &str = "favicon.png";
pub const FAVICON_32_NAME: &str = "favicon-32x32.png";

/// Generate the favicon set from the image at `input_path`.
///
/// The source is cropped to its largest centered square, then resized to
/// 192x192 and 32x32 and written as PNGs into `output_dir` (created with
/// any missing parents). Both resizes start from the cropped image, not
/// from each other.
pub fn process_image(input_path: &Path, output_dir: &Path) -> Result<(), FaviconError> {
    let img = image::open(input_path).map_err(|e| FaviconError::Decode(e.to_string()))?;
    let img = normalize_color(img);

    let (width, height) = img.dimensions();
    let (left, top, side) = centered_square(width, height);
    log::debug!(
        "Decoded {}x{} image, cropping to {}x{} at ({}, {})",
        width,
        height,
        side,
        side,
        left,
        top
    );
    let cropped = img.crop_imm(left, top, side, side);

    fs::create_dir_all(output_dir).map_err(|e| FaviconError::CreateDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let favicon_path = output_dir.join(FAVICON_NAME);
    let favicon = cropped.resize_exact(FAVICON_SIZE, FAVICON_SIZE, FilterType::Lanczos3);
    favicon
        .save_with_format(&favicon_path, image::ImageFormat::Png)
        .map_err(|e| FaviconError::Save {
            path: favicon_path.clone(),
            source: e,
        })?;

    let small_path = output_dir.join(FAVICON_32_NAME);
    let small = cropped.resize_exact(FAVICON_32, FAVICON_32, FilterType::Lanczos3);
    small
        .save_with_format(&small_path, image::ImageFormat::Png)
        .map_err(|e| FaviconError::Save {
            path: small_path,
            source: e,
        })?;

    println!("Successfully saved favicon to {}", favicon_path.display());

    Ok(())
}

/// Normalize the decoded image to a color mode the rest of the pipeline
/// handles: plain RGB and RGBA pass through, everything else (grayscale,
/// palette-expanded luma, 16-bit, float) becomes RGBA.
fn normalize_color(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::Rgb8 | ColorType::Rgba8 => img,
        _ => DynamicImage::ImageRgba8(img.to_rgba8()),
    }
}

/// Largest centered square inside a `width` x `height` image, as
/// (left, top, side). An odd trimmed margin leaves the extra pixel on the
/// right/bottom edge.
fn centered_square(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    (left, top, side)
}
