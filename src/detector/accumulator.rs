//! Center voting on a reduced-resolution grid
//!
//! Each edge pixel walks along its gradient direction, both ways, and splats
//! one vote per radius step bilinearly onto the four cells around it. Cell
//! `(col, row)` sits at image position `(col * dp, row * dp)`. The grid
//! carries a one cell border so window sums never leave the buffer.
//!
//! Candidates are scored by the vote mass in their 3×3 window. A cell must be
//! an 8-neighbour maximum of that score, so one center yields one candidate
//! even when its votes straddle several cells.

use super::edges::EdgePixel;
use crate::models::Point;

/// A local maximum of the accumulator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterCandidate {
    /// Vote-weighted center of the 3×3 window, in image coordinates
    pub center: Point,
    /// Vote mass in the 3×3 window
    pub votes: f32,
}

/// Vote grid for circle centers
pub struct Accumulator {
    cols: usize,
    rows: usize,
    stride: usize,
    dp: f32,
    votes: Vec<f32>,
}

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Accumulator {
    /// Create an empty grid covering a `width`×`height` image at resolution `1/dp`
    pub fn new(width: u32, height: u32, dp: f32) -> Self {
        let cols = (width as f32 / dp).ceil() as usize;
        let rows = (height as f32 / dp).ceil() as usize;
        let stride = cols + 2;
        Self {
            cols,
            rows,
            stride,
            dp,
            votes: vec![0.0; stride * (rows + 2)],
        }
    }

    /// Grid size without the border
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Total vote mass on the grid, border included
    pub fn total(&self) -> f32 {
        self.votes.iter().sum()
    }

    fn index(&self, col: usize, row: usize) -> usize {
        (row + 1) * self.stride + col + 1
    }

    fn splat(&mut self, x: f32, y: f32) {
        let xf = x.floor();
        let yf = y.floor();
        let fx = x - xf;
        let fy = y - yf;
        let idx = self.index(xf as usize, yf as usize);
        self.votes[idx] += (1.0 - fx) * (1.0 - fy);
        self.votes[idx + 1] += fx * (1.0 - fy);
        self.votes[idx + self.stride] += (1.0 - fx) * fy;
        self.votes[idx + self.stride + 1] += fx * fy;
    }

    /// Cast votes for every radius in `[min_r, max_r]` from each edge pixel
    pub fn cast_votes(&mut self, edges: &[EdgePixel], min_r: u32, max_r: u32) {
        let idp = 1.0 / self.dp;
        let (cols, rows) = (self.cols as f32, self.rows as f32);
        for edge in edges {
            let mag = edge.magnitude();
            if mag <= 0.0 {
                continue;
            }
            let ux = edge.gx as f32 / mag * idp;
            let uy = edge.gy as f32 / mag * idp;
            let x0 = edge.pos.x * idp;
            let y0 = edge.pos.y * idp;

            for sign in [1.0f32, -1.0] {
                let sx = ux * sign;
                let sy = uy * sign;
                let mut x1 = x0 + min_r as f32 * sx;
                let mut y1 = y0 + min_r as f32 * sy;
                for _ in min_r..=max_r {
                    if x1 < 0.0 || y1 < 0.0 || x1 >= cols || y1 >= rows {
                        break;
                    }
                    self.splat(x1, y1);
                    x1 += sx;
                    y1 += sy;
                }
            }
        }
    }

    fn window_sums(&self) -> Vec<f32> {
        let s = self.stride;
        let mut sums = vec![0.0; self.votes.len()];
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(col, row);
                sums[idx] = [idx - s, idx, idx + s]
                    .iter()
                    .map(|&c| self.votes[c - 1] + self.votes[c] + self.votes[c + 1])
                    .sum();
            }
        }
        sums
    }

    fn centroid(&self, col: usize, row: usize) -> Point {
        let (mut sx, mut sy, mut sw) = (0.0f32, 0.0f32, 0.0f32);
        for dy in -1isize..=1 {
            for dx in -1isize..=1 {
                let idx = self.index(col, row) as isize + dy * self.stride as isize + dx;
                let w = self.votes[idx as usize];
                sx += w * (col as f32 + dx as f32);
                sy += w * (row as f32 + dy as f32);
                sw += w;
            }
        }
        if sw > 0.0 {
            Point::new(sx / sw * self.dp, sy / sw * self.dp)
        } else {
            Point::new(col as f32 * self.dp, row as f32 * self.dp)
        }
    }

    /// Cells whose 3×3 vote mass exceeds `threshold` and peaks over all eight
    /// neighbors, strongest first
    ///
    /// Neighbors earlier in raster order must be beaten, later ones at least
    /// tied, so a flat plateau keeps only its first cell. Equal scores keep
    /// raster order.
    pub fn centers(&self, threshold: u32) -> Vec<CenterCandidate> {
        let sums = self.window_sums();
        let threshold = threshold as f32;
        let s = self.stride as isize;
        let mut candidates = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(col, row);
                let v = sums[idx];
                if v <= threshold {
                    continue;
                }
                let is_peak = NEIGHBORS.iter().all(|&(dx, dy)| {
                    let n = sums[(idx as isize + dy * s + dx) as usize];
                    if (dy, dx) < (0, 0) { v > n } else { v >= n }
                });
                if is_peak {
                    candidates.push(CenterCandidate {
                        center: self.centroid(col, row),
                        votes: v,
                    });
                }
            }
        }
        candidates.sort_by(|a, b| b.votes.total_cmp(&a.votes));
        candidates
    }
}
