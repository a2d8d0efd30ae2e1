//! Edge extraction for the gradient Hough transform
//!
//! Edge locations come from Canny; vote directions come from Sobel
//! gradients of the same Gaussian-smoothed image Canny works on, so every
//! edge pixel has a gradient and directions are not quantized by the pixel
//! grid.

use image::GrayImage;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

use crate::models::Point;

/// Smoothing applied by `imageproc`'s Canny before differentiation
const CANNY_SIGMA: f32 = 1.4;

/// An edge pixel with its intensity gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePixel {
    /// Pixel position
    pub pos: Point,
    /// Horizontal Sobel response
    pub gx: i16,
    /// Vertical Sobel response
    pub gy: i16,
}

impl EdgePixel {
    /// Gradient magnitude
    pub fn magnitude(&self) -> f32 {
        let gx = self.gx as f32;
        let gy = self.gy as f32;
        (gx * gx + gy * gy).sqrt()
    }
}

/// Collect Canny edge pixels that carry a usable gradient direction
pub fn extract_edges(gray: &GrayImage, low: f32, high: f32) -> Vec<EdgePixel> {
    let edges = canny(gray, low, high);
    let smoothed = gaussian_blur_f32(gray, CANNY_SIGMA);
    let gx = horizontal_sobel(&smoothed);
    let gy = vertical_sobel(&smoothed);

    let mut pixels = Vec::new();
    for (x, y, p) in edges.enumerate_pixels() {
        if p[0] == 0 {
            continue;
        }
        let gxv = gx.get_pixel(x, y)[0];
        let gyv = gy.get_pixel(x, y)[0];
        // Zero gradient has no direction to vote along
        if gxv == 0 && gyv == 0 {
            continue;
        }
        pixels.push(EdgePixel {
            pos: Point::new(x as f32, y as f32),
            gx: gxv,
            gy: gyv,
        });
    }
    pixels
}
