use image::GrayImage;
use tracing::{debug, trace};

use super::accumulator::Accumulator;
use super::edges::extract_edges;
use super::params::HoughParams;
use super::radius::estimate_radius;
use crate::error::{CircleError, Result};
use crate::models::{Circle, Point, RadiusRange};

/// Gradient Hough circle detector
#[derive(Debug, Clone, Default)]
pub struct CircleDetector {
    params: HoughParams,
}

impl CircleDetector {
    /// Create a detector with the default constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom constants
    pub fn with_params(params: HoughParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Detect circles whose radius lies in `range`
    ///
    /// Circles come back in acceptance order (strongest center first).
    /// An empty vector means nothing was found; a zero-sized image is an
    /// error.
    pub fn detect(&self, gray: &GrayImage, range: RadiusRange) -> Result<Vec<Circle>> {
        let (width, height) = gray.dimensions();
        if width == 0 || height == 0 {
            return Err(CircleError::InvalidImage(format!(
                "cannot detect circles in a {width}x{height} image"
            )));
        }

        let p = &self.params;
        let min_r = range.min;
        let max_r = range.effective_max(width, height);
        if max_r < min_r {
            debug!(min_r, max_r, "empty radius range");
            return Ok(Vec::new());
        }

        let edges = extract_edges(gray, p.canny_low(), p.canny_high);
        debug!(edges = edges.len(), width, height, "edge extraction");
        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let mut acc = Accumulator::new(width, height, p.dp);
        acc.cast_votes(&edges, min_r, max_r);
        let candidates = acc.centers(p.vote_threshold);
        let (cols, rows) = acc.dimensions();
        debug!(
            cols,
            rows,
            votes = acc.total(),
            candidates = candidates.len(),
            "center candidates"
        );

        let min_dist_sq = p.min_dist * p.min_dist;
        let mut accepted: Vec<(Point, f32)> = Vec::new();
        for cand in &candidates {
            if accepted
                .iter()
                .any(|(c, _)| c.distance_squared(&cand.center) < min_dist_sq)
            {
                continue;
            }
            let Some(est) = estimate_radius(&edges, cand.center, min_r, max_r) else {
                continue;
            };
            if est.covers(p.min_coverage) {
                accepted.push((cand.center, est.radius));
            } else {
                trace!(
                    x = cand.center.x,
                    y = cand.center.y,
                    radius = est.radius,
                    coverage = est.coverage(),
                    "partial outline"
                );
            }
        }
        debug!(circles = accepted.len(), min_r, max_r, "hough circles");

        Ok(accepted
            .into_iter()
            .map(|(c, r)| Circle::from_subpixel(c.x, c.y, r))
            .collect())
    }
}

/// Detect circles with the default constants
pub fn detect_circles(gray: &GrayImage, min_r: u32, max_r: u32) -> Result<Vec<Circle>> {
    CircleDetector::new().detect(gray, RadiusRange::new(min_r, max_r))
}
