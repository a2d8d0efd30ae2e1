//! Circle annotation on a copy of the input image

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_ellipse_mut;

use crate::models::Circle;

/// Outline color
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Outline width in pixels, drawn inward from the circle radius
pub const OUTLINE_WIDTH: u32 = 2;

/// Draw every circle onto a copy of `original`
///
/// Each outline is bounded by `(x - r, y - r)` and `(x + r, y + r)`. Later
/// circles draw over earlier ones; parts outside the canvas are clipped.
pub fn render(original: &RgbImage, circles: &[Circle]) -> RgbImage {
    let mut canvas = original.clone();
    for circle in circles {
        draw_outline(&mut canvas, circle);
    }
    canvas
}

fn draw_outline(canvas: &mut RgbImage, circle: &Circle) {
    let center = (circle.x as i32, circle.y as i32);
    for inset in 0..OUTLINE_WIDTH {
        let Some(r) = circle.r.checked_sub(inset) else {
            break;
        };
        draw_hollow_ellipse_mut(canvas, center, r as i32, r as i32, OUTLINE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checksum(img: &RgbImage) -> u64 {
        img.as_raw()
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc.wrapping_mul(31).wrapping_add(b as u64 ^ i as u64))
    }

    #[test]
    fn test_render_does_not_touch_input() {
        let img = RgbImage::from_pixel(50, 40, Rgb([10, 200, 10]));
        let before = checksum(&img);
        let out = render(&img, &[Circle::new(25, 20, 10)]);
        assert_eq!(checksum(&img), before);
        assert_ne!(checksum(&out), before);
    }

    #[test]
    fn test_outline_extremes_are_red() {
        let img = RgbImage::from_pixel(50, 50, Rgb([0, 0, 0]));
        let out = render(&img, &[Circle::new(25, 25, 10)]);
        // Bounding box extremes of the outer ring
        assert_eq!(*out.get_pixel(35, 25), OUTLINE_COLOR);
        assert_eq!(*out.get_pixel(15, 25), OUTLINE_COLOR);
        assert_eq!(*out.get_pixel(25, 15), OUTLINE_COLOR);
        assert_eq!(*out.get_pixel(25, 35), OUTLINE_COLOR);
        // Inner ring
        assert_eq!(*out.get_pixel(34, 25), OUTLINE_COLOR);
        // Outline only
        assert_eq!(*out.get_pixel(25, 25), Rgb([0, 0, 0]));
        assert_eq!(*out.get_pixel(30, 25), Rgb([0, 0, 0]));
        assert_eq!(*out.get_pixel(36, 25), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_no_circles_is_plain_copy() {
        let img = RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]));
        assert_eq!(render(&img, &[]), img);
    }

    #[test]
    fn test_clipped_circle() {
        let img = RgbImage::from_pixel(20, 20, Rgb([0, 0, 0]));
        let out = render(&img, &[Circle::new(0, 0, 30), Circle::new(19, 19, 5)]);
        assert_eq!(out.dimensions(), (20, 20));
        assert_eq!(*out.get_pixel(14, 19), OUTLINE_COLOR);
    }

    #[test]
    fn test_zero_radius_marks_center() {
        let img = RgbImage::from_pixel(5, 5, Rgb([0, 0, 0]));
        let out = render(&img, &[Circle::new(2, 2, 0)]);
        assert_eq!(*out.get_pixel(2, 2), OUTLINE_COLOR);
    }
}
