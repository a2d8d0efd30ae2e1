//! Radius estimation for a center candidate
//!
//! Distances from the center to every edge pixel inside the radius range are
//! histogrammed at one pixel resolution. Each radius is scored by the edge
//! pixels within one bin of it, per unit radius; the best window wins and its
//! mean distance is the radius.
//!
//! A ring seen from its true center puts most of its circumference into one
//! window. Seen from an off-center point only short arcs near the nearest and
//! farthest points line up, so [`RadiusEstimate::covers`] rejects it.

use std::f32::consts::TAU;

use super::edges::EdgePixel;
use crate::models::Point;

/// Edge pixels any accepted circle needs, however small
pub const MIN_SUPPORT: usize = 12;

/// Best radius found around a center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusEstimate {
    /// Mean distance of the winning window
    pub radius: f32,
    /// Edge pixels in the winning window
    pub support: usize,
}

impl RadiusEstimate {
    /// Fraction of the circumference `2πr` backed by edge pixels
    pub fn coverage(&self) -> f32 {
        if self.radius > 0.0 {
            self.support as f32 / (TAU * self.radius)
        } else {
            0.0
        }
    }

    /// Whether enough of the outline is present to call this a circle
    pub fn covers(&self, min_coverage: f32) -> bool {
        self.support >= MIN_SUPPORT && self.coverage() >= min_coverage
    }
}

/// Estimate the radius of a circle centered at `center`
///
/// Returns `None` when no edge pixel lies within `[min_r, max_r]`.
pub fn estimate_radius(
    edges: &[EdgePixel],
    center: Point,
    min_r: u32,
    max_r: u32,
) -> Option<RadiusEstimate> {
    let min_r2 = (min_r as f32) * (min_r as f32);
    let max_r2 = (max_r as f32) * (max_r as f32);
    let bins = (max_r - min_r + 1) as usize;

    let mut counts = vec![0usize; bins];
    let mut sums = vec![0.0f32; bins];
    let mut any = false;
    for e in edges {
        let d2 = e.pos.distance_squared(&center);
        if d2 < min_r2 || d2 > max_r2 {
            continue;
        }
        let d = d2.sqrt();
        let bin = ((d.round() as u32).clamp(min_r, max_r) - min_r) as usize;
        counts[bin] += 1;
        sums[bin] += d;
        any = true;
    }
    if !any {
        return None;
    }

    let mut best: Option<(f32, RadiusEstimate)> = None;
    for k in 0..bins {
        let lo = k.saturating_sub(1);
        let hi = (k + 1).min(bins - 1);
        let support: usize = counts[lo..=hi].iter().sum();
        if support == 0 {
            continue;
        }
        let radius = sums[lo..=hi].iter().sum::<f32>() / support as f32;
        let score = support as f32 / radius.max(1.0);
        if best.is_none_or(|(s, _)| score > s) {
            best = Some((score, RadiusEstimate { radius, support }));
        }
    }

    best.map(|(_, est)| est)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(cx: f32, cy: f32, r: f32, n: usize) -> Vec<EdgePixel> {
        (0..n)
            .map(|i| {
                let a = i as f32 * TAU / n as f32;
                EdgePixel {
                    pos: Point::new(cx + r * a.cos(), cy + r * a.sin()),
                    gx: 1,
                    gy: 0,
                }
            })
            .collect()
    }

    #[test]
    fn test_single_ring() {
        let edges = ring(50.0, 50.0, 20.0, 120);
        let est = estimate_radius(&edges, Point::new(50.0, 50.0), 10, 30).unwrap();
        assert!((est.radius - 20.0).abs() < 0.1);
        assert_eq!(est.support, 120);
        assert!(est.covers(0.4));
    }

    #[test]
    fn test_out_of_range_edges_are_ignored() {
        let edges = ring(50.0, 50.0, 20.0, 120);
        assert!(estimate_radius(&edges, Point::new(50.0, 50.0), 25, 40).is_none());
    }

    #[test]
    fn test_denser_ring_wins() {
        let mut edges = ring(50.0, 50.0, 10.0, 20);
        edges.extend(ring(50.0, 50.0, 30.0, 180));
        let est = estimate_radius(&edges, Point::new(50.0, 50.0), 5, 40).unwrap();
        assert!((est.radius - 30.0).abs() < 0.1);
        assert_eq!(est.support, 180);
    }

    #[test]
    fn test_small_ring_is_covered() {
        // 8-connected outline of a 6 px disk
        let edges = ring(20.0, 20.0, 6.5, 36);
        let est = estimate_radius(&edges, Point::new(20.0, 20.0), 4, 9).unwrap();
        assert!((est.radius - 6.5).abs() < 0.1);
        assert!(est.covers(0.4), "{est:?}");
    }

    #[test]
    fn test_off_center_view_of_large_ring_is_rejected() {
        let edges = ring(300.0, 300.0, 236.0, 1350);
        for offset in [10.5f32, 14.0, 30.0, 90.0] {
            let est = estimate_radius(&edges, Point::new(300.0 + offset, 300.0), 29, 295).unwrap();
            assert!(!est.covers(0.4), "offset {offset}: {est:?}");
        }
        let est = estimate_radius(&edges, Point::new(300.6, 299.6), 29, 295).unwrap();
        assert!((est.radius - 236.0).abs() < 1.0);
        assert!(est.covers(0.4), "{est:?}");
    }

    #[test]
    fn test_too_few_pixels_are_not_covered() {
        let est = RadiusEstimate {
            radius: 1.5,
            support: 10,
        };
        assert!(est.coverage() > 1.0);
        assert!(!est.covers(0.4));
    }
}
