use serde::{Deserialize, Serialize};

use crate::error::{CircleError, Result};
use crate::utils::units::{check_dpi, diameter_mm_to_radius_px};

/// Physical diameter bounds in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    /// Smallest diameter of interest
    pub min_mm: f64,
    /// Largest diameter of interest
    pub max_mm: f64,
}

impl SizeRange {
    /// Create a validated size range (`0 < min_mm <= max_mm`)
    pub fn new(min_mm: f64, max_mm: f64) -> Result<Self> {
        for (name, value) in [("min_mm", min_mm), ("max_mm", max_mm)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CircleError::InvalidInput(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if min_mm > max_mm {
            return Err(CircleError::InvalidInput(format!(
                "min_mm ({min_mm}) must not exceed max_mm ({max_mm})"
            )));
        }
        Ok(Self { min_mm, max_mm })
    }
}

/// Radius bounds in pixels handed to the detector
///
/// A `max` of 0 is read by the detector as "no upper bound".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusRange {
    /// Smallest radius searched
    pub min: u32,
    /// Largest radius searched (0 = unbounded)
    pub max: u32,
}

impl RadiusRange {
    /// Create a pixel radius range without unit conversion
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Derive the pixel radius bounds of a diameter range at `dpi`
    pub fn from_size_range(size: &SizeRange, dpi: f64) -> Result<Self> {
        check_dpi(dpi)?;
        let min = diameter_mm_to_radius_px(size.min_mm, dpi);
        let max = diameter_mm_to_radius_px(size.max_mm, dpi);
        Ok(Self { min, max })
    }

    /// Upper bound after resolving the zero-as-unbounded convention
    pub fn effective_max(&self, width: u32, height: u32) -> u32 {
        if self.max == 0 {
            width.max(height)
        } else {
            self.max
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_range_rejects_inverted_bounds() {
        assert!(matches!(
            SizeRange::new(10.0, 5.0),
            Err(CircleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_size_range_rejects_non_positive() {
        assert!(SizeRange::new(0.0, 5.0).is_err());
        assert!(SizeRange::new(-1.0, 5.0).is_err());
        assert!(SizeRange::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_radius_range_defaults() {
        // 5 mm -> 59 px -> 29, 50 mm -> 590 px -> 295
        let size = SizeRange::new(5.0, 50.0).unwrap();
        let range = RadiusRange::from_size_range(&size, 300.0).unwrap();
        assert_eq!(range, RadiusRange::new(29, 295));
    }

    #[test]
    fn test_radius_range_is_ordered() {
        for dpi in [10.0, 72.0, 96.0, 150.0, 300.0, 600.0, 1200.0] {
            for min_mm in 1..=100 {
                for max_mm in (min_mm..=100).step_by(7) {
                    let size = SizeRange::new(min_mm as f64, max_mm as f64).unwrap();
                    let range = RadiusRange::from_size_range(&size, dpi).unwrap();
                    assert!(range.min <= range.max, "{min_mm}..{max_mm} @ {dpi}");
                }
            }
        }
    }

    #[test]
    fn test_radius_range_rejects_bad_dpi() {
        let size = SizeRange::new(1.0, 2.0).unwrap();
        assert!(RadiusRange::from_size_range(&size, 0.0).is_err());
        assert!(RadiusRange::from_size_range(&size, -300.0).is_err());
    }

    #[test]
    fn test_tiny_sizes_collapse_to_zero_radius() {
        // 1 mm at 10 dpi is 0 px; the upper bound then means "unbounded"
        let size = SizeRange::new(1.0, 1.0).unwrap();
        let range = RadiusRange::from_size_range(&size, 10.0).unwrap();
        assert_eq!(range, RadiusRange::new(0, 0));
        assert_eq!(range.effective_max(640, 480), 640);
    }
}
