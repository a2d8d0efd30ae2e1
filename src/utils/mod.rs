//! Utility functions for image processing
//!
//! This module provides helpers for circle detection:
//! - Grayscale conversion (RGB to luminance)
//! - Unit conversion (millimeters to pixels at a given DPI)

/// RGB to luminance conversion
pub mod grayscale;
/// Millimeter to pixel conversion
pub mod units;
