use serde::{Deserialize, Serialize};

use crate::error::{CircleError, Result};

/// Tuning constants of the gradient Hough transform
///
/// The defaults are the fixed values the scanning pipeline always uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Inverse ratio of accumulator resolution to image resolution
    pub dp: f32,
    /// Minimum distance between centers of distinct circles (pixels)
    pub min_dist: f32,
    /// High Canny threshold; the low threshold is half of it
    pub canny_high: f32,
    /// Vote mass a center's 3×3 accumulator window needs to be a candidate
    pub vote_threshold: u32,
    /// Share of the circumference `2πr` edge pixels must cover to accept a circle
    pub min_coverage: f32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            dp: 1.2,
            min_dist: 10.0,
            canny_high: 50.0,
            vote_threshold: 30,
            min_coverage: 0.4,
        }
    }
}

impl HoughParams {
    /// Check that every constant is usable
    pub fn validate(&self) -> Result<()> {
        if !self.dp.is_finite() || self.dp < 1.0 {
            return Err(CircleError::InvalidInput(format!(
                "dp must be >= 1, got {}",
                self.dp
            )));
        }
        if !self.min_dist.is_finite() || self.min_dist <= 0.0 {
            return Err(CircleError::InvalidInput(format!(
                "min_dist must be positive, got {}",
                self.min_dist
            )));
        }
        if !self.canny_high.is_finite() || self.canny_high <= 0.0 {
            return Err(CircleError::InvalidInput(format!(
                "canny_high must be positive, got {}",
                self.canny_high
            )));
        }
        if !(self.min_coverage > 0.0 && self.min_coverage <= 1.0) {
            return Err(CircleError::InvalidInput(format!(
                "min_coverage must be in (0, 1], got {}",
                self.min_coverage
            )));
        }
        Ok(())
    }

    /// Low Canny threshold derived from the high one
    pub fn canny_low(&self) -> f32 {
        (self.canny_high / 2.0).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let p = HoughParams::default();
        assert_eq!(p.dp, 1.2);
        assert_eq!(p.min_dist, 10.0);
        assert_eq!(p.canny_high, 50.0);
        assert_eq!(p.canny_low(), 25.0);
        assert_eq!(p.vote_threshold, 30);
        assert_eq!(p.min_coverage, 0.4);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_fine_accumulator() {
        let p = HoughParams {
            dp: 0.5,
            ..HoughParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_coverage_outside_unit_interval() {
        for min_coverage in [0.0, -0.2, 1.5, f32::NAN] {
            let p = HoughParams {
                min_coverage,
                ..HoughParams::default()
            };
            assert!(p.validate().is_err(), "{min_coverage}");
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let p: HoughParams = serde_json::from_str(r#"{"vote_threshold": 12}"#).unwrap();
        assert_eq!(p.vote_threshold, 12);
        assert_eq!(p.dp, 1.2);
    }
}
