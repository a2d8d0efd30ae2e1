//! Circle detection modules
//!
//! Gradient-based circular Hough transform:
//! - Edge extraction (Canny edges, Sobel directions)
//! - Center voting on a reduced-resolution accumulator
//! - Radius estimation from edge distance histograms

/// Center voting grid
pub mod accumulator;
/// Canny edge pixels with gradient directions
pub mod edges;
/// Detector driver
pub mod hough;
/// Tuning constants
pub mod params;
/// Radius estimation around a center
pub mod radius;

pub use hough::{CircleDetector, detect_circles};
pub use params::HoughParams;
