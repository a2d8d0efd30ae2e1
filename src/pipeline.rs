//! End-to-end scan: bytes in, annotated PNG and circle list out
//!
//! One synchronous pass per call with no state carried between calls.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbImage};
use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::detector::CircleDetector;
use crate::error::{CircleError, Result};
use crate::models::{Circle, RadiusRange};
use crate::render::render;
use crate::utils::grayscale::to_gray_image;

/// Result of scanning a decoded image
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Copy of the input with circle outlines
    pub annotated: RgbImage,
    /// Detected circles in detection order
    pub circles: Vec<Circle>,
    /// Pixel radius bounds the detector searched
    pub radius_range: RadiusRange,
}

/// Result of scanning encoded image bytes
#[derive(Debug, Clone)]
pub struct ScanOutput {
    /// Annotated image as PNG
    pub png: Vec<u8>,
    /// Detected circles in detection order
    pub circles: Vec<Circle>,
    /// Pixel radius bounds the detector searched
    pub radius_range: RadiusRange,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Decode any supported raster format into RGB
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(CircleError::InvalidImage(format!(
            "decoded image has zero size ({}x{})",
            rgb.width(),
            rgb.height()
        )));
    }
    Ok(rgb)
}

/// Encode an RGB image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        .map_err(|e| CircleError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Detect and annotate circles in an already decoded image
pub fn scan_image(image: &RgbImage, config: &ScanConfig) -> Result<ScanReport> {
    let radius_range = config.radius_range()?;
    debug!(
        dpi = config.dpi,
        min_mm = config.min_mm,
        max_mm = config.max_mm,
        min_r = radius_range.min,
        max_r = radius_range.max,
        "radius range"
    );

    let gray = to_gray_image(image)?;
    let circles = CircleDetector::new().detect(&gray, radius_range)?;
    let annotated = render(image, &circles);

    Ok(ScanReport {
        annotated,
        circles,
        radius_range,
    })
}

/// Decode `bytes`, detect circles, and return the annotated image as PNG
pub fn scan(bytes: &[u8], config: &ScanConfig) -> Result<ScanOutput> {
    config.validate()?;
    let image = decode_image(bytes)?;
    let (width, height) = image.dimensions();

    let report = scan_image(&image, config)?;
    let png = encode_png(&report.annotated)?;
    info!(
        width,
        height,
        circles = report.circles.len(),
        png_bytes = png.len(),
        "scan complete"
    );

    Ok(ScanOutput {
        png,
        circles: report.circles,
        radius_range: report.radius_range,
        width,
        height,
    })
}
