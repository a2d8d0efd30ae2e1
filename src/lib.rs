//! circle_finder - find circles of a given physical size in scanned images
//!
//! Converts a diameter range in millimeters into pixel radii at the image
//! resolution, runs a gradient Hough transform on the grayscale image, and
//! draws the detected circles onto a copy of the original.
//!
//! ```no_run
//! use circle_finder::{ScanConfig, scan};
//!
//! let bytes = std::fs::read("scan.png").unwrap();
//! let out = scan(&bytes, &ScanConfig::new(300.0, 5.0, 50.0)).unwrap();
//! println!("{} circles", out.circles.len());
//! std::fs::write("circles_detected.png", &out.png).unwrap();
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Scan configuration (resolution and diameter bounds)
pub mod config;
/// Circle detection (edges, voting, radius estimation)
pub mod detector;
/// Error types
pub mod error;
/// Core data structures (Circle, ranges, Point)
pub mod models;
/// End-to-end scanning
pub mod pipeline;
/// Circle annotation
pub mod render;
/// Helpers for the CLI, benchmarks and tests
pub mod tools;
/// Utility functions (grayscale, unit conversion)
pub mod utils;

pub use config::ScanConfig;
pub use detector::{CircleDetector, HoughParams, detect_circles};
pub use error::{CircleError, Result};
pub use models::{Circle, Point, RadiusRange, SizeRange};
pub use pipeline::{ScanOutput, ScanReport, scan, scan_image};
pub use render::render;
pub use utils::units::{diameter_mm_to_radius_px, mm_to_pixels};

use image::GrayImage;
use utils::grayscale::rgb_to_grayscale;

/// Detect circles in packed RGB bytes
///
/// # Arguments
/// * `image` - Raw RGB bytes (3 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `config` - Resolution and diameter bounds
///
/// # Returns
/// Detected circles, possibly none
pub fn detect(image: &[u8], width: usize, height: usize, config: &ScanConfig) -> Result<Vec<Circle>> {
    let range = config.radius_range()?;
    let gray = rgb_to_grayscale(image, width, height)?;
    detect_gray_buffer(gray, width, height, range)
}

/// Detect circles in a pre-computed grayscale buffer (1 byte per pixel)
pub fn detect_from_grayscale(
    image: &[u8],
    width: usize,
    height: usize,
    config: &ScanConfig,
) -> Result<Vec<Circle>> {
    let range = config.radius_range()?;
    if width == 0 || height == 0 || image.len() != width * height {
        return Err(CircleError::InvalidImage(format!(
            "grayscale buffer of {} bytes does not match {width}x{height}",
            image.len()
        )));
    }
    detect_gray_buffer(image.to_vec(), width, height, range)
}

fn detect_gray_buffer(
    gray: Vec<u8>,
    width: usize,
    height: usize,
    range: RadiusRange,
) -> Result<Vec<Circle>> {
    let too_large = || CircleError::InvalidImage(format!("image too large ({width}x{height})"));
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;
    let gray = GrayImage::from_raw(w, h, gray)
        .ok_or_else(|| CircleError::InvalidImage("grayscale buffer size mismatch".into()))?;
    CircleDetector::new().detect(&gray, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_empty() {
        let image = vec![0u8; 30 * 30 * 3];
        let circles = detect(&image, 30, 30, &ScanConfig::default()).unwrap();
        assert!(circles.is_empty());
    }

    #[test]
    fn test_detect_rejects_short_buffer() {
        let image = vec![0u8; 10];
        assert!(matches!(
            detect(&image, 30, 30, &ScanConfig::default()),
            Err(CircleError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_detect_from_grayscale_zero_width() {
        assert!(matches!(
            detect_from_grayscale(&[], 0, 5, &ScanConfig::default()),
            Err(CircleError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_detect_rejects_bad_dpi() {
        let image = vec![0u8; 10 * 10 * 3];
        assert!(matches!(
            detect(&image, 10, 10, &ScanConfig::new(0.0, 5.0, 50.0)),
            Err(CircleError::InvalidInput(_))
        ));
    }
}
