use serde::{Deserialize, Serialize};

use crate::utils::units::MM_PER_INCH;

/// A detected circle in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Circle {
    /// Center column
    pub x: u32,
    /// Center row
    pub y: u32,
    /// Radius in pixels
    pub r: u32,
}

impl Circle {
    /// Create a circle from integer pixel values
    pub fn new(x: u32, y: u32, r: u32) -> Self {
        Self { x, y, r }
    }

    /// Round real-valued detector output to the nearest pixel
    ///
    /// Halves round away from zero. Negative inputs clamp to 0.
    pub fn from_subpixel(x: f32, y: f32, r: f32) -> Self {
        Self {
            x: x.round().max(0.0) as u32,
            y: y.round().max(0.0) as u32,
            r: r.round().max(0.0) as u32,
        }
    }

    /// Physical diameter in millimeters at the given resolution
    pub fn diameter_mm(&self, dpi: f64) -> f64 {
        (2 * self.r) as f64 / dpi * MM_PER_INCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_subpixel_rounds_half_up() {
        let c = Circle::from_subpixel(10.5, 3.49, 7.5);
        assert_eq!(c, Circle::new(11, 3, 8));
    }

    #[test]
    fn test_from_subpixel_clamps_negative() {
        let c = Circle::from_subpixel(-0.4, 2.0, 1.0);
        assert_eq!(c.x, 0);
    }

    #[test]
    fn test_diameter_mm() {
        // 150 px radius at 300 dpi is one inch across
        let c = Circle::new(0, 0, 150);
        assert!((c.diameter_mm(300.0) - 25.4).abs() < 1e-9);
    }
}
