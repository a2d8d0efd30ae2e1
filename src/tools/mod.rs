//! Synthetic scenes shared by benchmarks and tests

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

/// A filled disk for synthetic test images
#[derive(Debug, Clone, Copy)]
pub struct Disk {
    /// Center column
    pub x: i32,
    /// Center row
    pub y: i32,
    /// Radius in pixels
    pub r: i32,
}

/// Render solid disks of one color on a uniform background
pub fn synthetic_disks(
    width: u32,
    height: u32,
    disks: &[Disk],
    fg: Rgb<u8>,
    bg: Rgb<u8>,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, bg);
    for d in disks {
        draw_filled_circle_mut(&mut img, (d.x, d.y), d.r, fg);
    }
    img
}

/// Radius in pixels of a disk with diameter `mm` at `dpi`, for test scenes
pub fn disk_radius_px(mm: f64, dpi: f64) -> i32 {
    (mm / crate::utils::units::MM_PER_INCH * dpi / 2.0).round() as i32
}
