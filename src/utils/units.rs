//! Millimeter to pixel conversion at a fixed resolution
//!
//! Conversions truncate toward zero. Rounding would move the size bucket
//! boundaries and change which circles are accepted at the edges of a range.

use crate::error::{CircleError, Result};

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert a length in millimeters to whole pixels: `floor((mm / 25.4) * dpi)`
///
/// Expects `mm > 0` and `dpi > 0`; see [`check_dpi`] for validation.
pub fn mm_to_pixels(mm: f64, dpi: f64) -> u32 {
    ((mm / MM_PER_INCH) * dpi).floor().max(0.0) as u32
}

/// Pixel radius of a circle with the given diameter in millimeters
///
/// Integer half of [`mm_to_pixels`]; may be 0 for very small inputs.
pub fn diameter_mm_to_radius_px(mm: f64, dpi: f64) -> u32 {
    mm_to_pixels(mm, dpi) / 2
}

/// Reject non-finite or non-positive resolutions
pub fn check_dpi(dpi: f64) -> Result<()> {
    if !dpi.is_finite() || dpi <= 0.0 {
        return Err(CircleError::InvalidInput(format!(
            "dpi must be a positive number, got {dpi}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_pixels_one_inch() {
        assert_eq!(mm_to_pixels(25.4, 300.0), 300);
    }

    #[test]
    fn test_mm_to_pixels_truncates() {
        // 5 / 25.4 * 300 = 59.05...
        assert_eq!(mm_to_pixels(5.0, 300.0), 59);
        // 12 / 25.4 * 300 = 141.73..., rounding would give 142
        assert_eq!(mm_to_pixels(12.0, 300.0), 141);
    }

    #[test]
    fn test_mm_to_pixels_matches_formula() {
        for dpi in [10.0, 72.0, 96.0, 299.5, 300.0, 1200.0] {
            for tenths in 1..=1000 {
                let mm = tenths as f64 / 10.0;
                let expected = ((mm / 25.4) * dpi).floor() as u32;
                assert_eq!(mm_to_pixels(mm, dpi), expected);
            }
        }
    }

    #[test]
    fn test_diameter_to_radius() {
        assert_eq!(diameter_mm_to_radius_px(5.0, 300.0), 29);
        assert_eq!(diameter_mm_to_radius_px(25.4, 300.0), 150);
        assert_eq!(diameter_mm_to_radius_px(1.0, 10.0), 0);
    }

    #[test]
    fn test_check_dpi() {
        assert!(check_dpi(300.0).is_ok());
        assert!(check_dpi(0.0).is_err());
        assert!(check_dpi(-72.0).is_err());
        assert!(check_dpi(f64::INFINITY).is_err());
    }
}
