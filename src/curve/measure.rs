//! Arc length and centroid scaling of a `PointSequence`.

use super::PointSequence;
use super::point::{self, distance};
use crate::float_types::Real;
use nalgebra::Point3;

/// Sum of the straight segment lengths of a polyline, no wraparound.
pub fn polyline_length(points: &[Point3<Real>]) -> Real {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

impl PointSequence {
    /// **Mathematical Foundation: Discrete Arc Length**
    ///
    /// ```text
    /// L = Σᵢ |pᵢ₊₁ - pᵢ|            (open,   i = 0 .. n-2)
    /// L = Σᵢ |pᵢ₊₁ - pᵢ| + |p₀ - pₙ₋₁| (closed)
    /// ```
    ///
    /// Sequences with fewer than two points have zero length.
    pub fn arc_length(&self) -> Real {
        let open_length = polyline_length(&self.points);
        match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) if self.points.len() > 1 => {
                open_length + distance(last, first)
            },
            _ => open_length,
        }
    }

    /// **Mathematical Foundation: Uniform Scaling About the Centroid**
    ///
    /// ```text
    /// c  = (1/n) Σᵢ pᵢ
    /// p' = c + (p - c) · s
    /// ```
    ///
    /// The centroid is taken over *all* points, but pinned endpoints of an open
    /// sequence keep their positions. `factor == 1` returns without touching
    /// anything.
    pub fn scale_about_centroid(&mut self, factor: Real) {
        if factor == 1.0 {
            return;
        }
        let Some(center) = self.centroid() else {
            return;
        };

        let count = self.points.len();
        let closed = self.closed;
        for (i, p) in self.points.iter_mut().enumerate() {
            if !closed && (i == 0 || i + 1 == count) {
                continue;
            }
            *p = point::scale_from(p, &center, factor);
        }
    }
}
