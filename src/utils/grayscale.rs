//! Convert RGB image data to grayscale
//! Y = 0.299*R + 0.587*G + 0.114*B, rounded to nearest
//! Uses 14-bit fixed point: Y = (4899*R + 9617*G + 1868*B + 2^13) >> 14
//!
//! Every entry point validates the buffer first: a zero-sized image or a
//! buffer whose length does not match `width * height * 3` is an
//! `InvalidImage` error, never an empty result.

use image::{GrayImage, RgbImage};
use rayon::prelude::*;

use crate::error::{CircleError, Result};

/// Coefficients for grayscale conversion
const COEF_R: u32 = 4899;
const COEF_G: u32 = 9617;
const COEF_B: u32 = 1868;
const SHIFT: u32 = 14;
const HALF: u32 = 1 << (SHIFT - 1);

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = (COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32 + HALF) >> SHIFT;
    y.min(255) as u8
}

fn check_buffer(len: usize, width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(CircleError::InvalidImage(format!(
            "image has zero size ({width}x{height})"
        )));
    }
    let pixel_count = width
        .checked_mul(height)
        .ok_or_else(|| CircleError::InvalidImage(format!("image too large ({width}x{height})")))?;
    if pixel_count.checked_mul(3) != Some(len) {
        return Err(CircleError::InvalidImage(format!(
            "expected {} bytes for {width}x{height} RGB, got {len}",
            pixel_count.saturating_mul(3)
        )));
    }
    Ok(pixel_count)
}

fn convert_into(src: &[u8], gray: &mut [u8]) {
    for (out, px) in gray.iter_mut().zip(src.chunks_exact(3)) {
        *out = luma(px[0], px[1], px[2]);
    }
}

/// Convert packed RGB bytes (3 per pixel) to grayscale
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let pixel_count = check_buffer(rgb.len(), width, height)?;
    let mut gray = vec![0u8; pixel_count];
    convert_into(rgb, &mut gray);
    Ok(gray)
}

// ============== Parallel Processing with Rayon ==============

/// Convert RGB to grayscale processing rows in parallel
///
/// Produces exactly the same output as [`rgb_to_grayscale`].
pub fn rgb_to_grayscale_parallel(rgb: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let pixel_count = check_buffer(rgb.len(), width, height)?;
    let mut gray = vec![0u8; pixel_count];

    gray.par_chunks_mut(width)
        .zip(rgb.par_chunks(width * 3))
        .for_each(|(row, src)| convert_into(src, row));

    Ok(gray)
}

/// Convert an `RgbImage` to a single-channel `GrayImage`
pub fn to_gray_image(image: &RgbImage) -> Result<GrayImage> {
    let (width, height) = image.dimensions();
    let gray = rgb_to_grayscale(image.as_raw(), width as usize, height as usize)?;
    GrayImage::from_raw(width, height, gray)
        .ok_or_else(|| CircleError::InvalidImage("grayscale buffer size mismatch".into()))
}
