//! Caller-facing scan configuration
//!
//! Only the resolution and the diameter bounds are configurable; detector
//! constants stay at [`HoughParams::default`](crate::detector::HoughParams).

use serde::{Deserialize, Serialize};

use crate::error::{CircleError, Result};
use crate::models::{RadiusRange, SizeRange};
use crate::utils::units::check_dpi;

/// Lowest resolution offered to interactive users
pub const DPI_MIN: f64 = 10.0;
/// Highest resolution offered to interactive users
pub const DPI_MAX: f64 = 1200.0;
/// Smallest diameter offered to interactive users (mm)
pub const MM_MIN: f64 = 1.0;
/// Largest diameter offered to interactive users (mm)
pub const MM_MAX: f64 = 100.0;

/// Resolution and diameter bounds of one scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Image resolution in dots per inch
    pub dpi: f64,
    /// Smallest circle diameter in millimeters
    pub min_mm: f64,
    /// Largest circle diameter in millimeters
    pub max_mm: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            min_mm: 5.0,
            max_mm: 50.0,
        }
    }
}

impl ScanConfig {
    /// Create a configuration from explicit values
    pub fn new(dpi: f64, min_mm: f64, max_mm: f64) -> Self {
        Self {
            dpi,
            min_mm,
            max_mm,
        }
    }

    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CircleError::InvalidInput(format!("bad scan configuration: {e}")))
    }

    /// Check the preconditions and return the validated size range
    pub fn validate(&self) -> Result<SizeRange> {
        check_dpi(self.dpi)?;
        SizeRange::new(self.min_mm, self.max_mm)
    }

    /// Pixel radius bounds for this configuration
    pub fn radius_range(&self) -> Result<RadiusRange> {
        let size = self.validate()?;
        RadiusRange::from_size_range(&size, self.dpi)
    }

    /// Whether all values lie inside the interactive input bounds
    pub fn within_ui_bounds(&self) -> bool {
        (DPI_MIN..=DPI_MAX).contains(&self.dpi)
            && (MM_MIN..=MM_MAX).contains(&self.min_mm)
            && (MM_MIN..=MM_MAX).contains(&self.max_mm)
    }
}
