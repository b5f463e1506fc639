//! `PointSequence`, the ordered control-point snapshot every operation works on,
//! plus the algorithms that smooth, measure, rebuild and snap onto it.

use crate::errors::{Result, SmoothError};
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

pub mod adjacency;
pub mod algorithm;
pub mod measure;
pub mod point;
pub mod resample;

/// An ordered run of control points taken from a boundary edge chain.
///
/// When `closed` is set the last point is adjacent to the first; otherwise the
/// first and last points are *pinned* and never moved by smoothing or scaling.
///
/// The sequence is a numeric snapshot only. It does not know about the mesh
/// or curve it was read from, and writing positions back is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    pub points: Vec<Point3<Real>>,
    pub closed: bool,
}

impl PointSequence {
    pub const fn new(points: Vec<Point3<Real>>, closed: bool) -> Self {
        PointSequence { points, closed }
    }

    /// An open sequence with pinned endpoints.
    pub const fn open(points: Vec<Point3<Real>>) -> Self {
        Self::new(points, false)
    }

    /// A cyclic sequence.
    pub const fn closed(points: Vec<Point3<Real>>) -> Self {
        Self::new(points, true)
    }

    /// Build a sequence from raw `[x, y, z]` triples.
    pub fn from_coords(coords: &[[Real; 3]], closed: bool) -> Self {
        let points = coords
            .iter()
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        Self::new(points, closed)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of segments: `n - 1` for open sequences, `n` for closed ones
    /// (the wraparound segment included).
    pub fn segment_count(&self) -> usize {
        match (self.points.len(), self.closed) {
            (0, _) => 0,
            (n, true) => n,
            (n, false) => n - 1,
        }
    }

    /// `true` for the first and last point of an open sequence.
    #[inline]
    pub fn is_pinned(&self, index: usize) -> bool {
        !self.closed && (index == 0 || index + 1 == self.points.len())
    }

    /// `(prev, next)` neighbor indices of `index`, see [`adjacency::neighbors`].
    #[inline]
    pub fn neighbors(&self, index: usize) -> (usize, usize) {
        adjacency::neighbors(index, self.points.len(), self.closed)
    }

    /// The pinned `(first, last)` positions of an open sequence.
    pub fn pinned_endpoints(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        if self.closed {
            return None;
        }
        Some((*self.points.first()?, *self.points.last()?))
    }

    /// Fail with [`SmoothError::InsufficientPoints`] unless at least `required`
    /// points are present.
    pub fn require(&self, required: usize) -> Result<()> {
        if self.points.len() < required {
            return Err(SmoothError::insufficient(self.points.len(), required));
        }
        Ok(())
    }

    pub fn centroid(&self) -> Option<Point3<Real>> {
        point::centroid(&self.points)
    }

    /// Same points walked in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self::new(points, self.closed)
    }

    /// Shift every point (pinned ones included) by `offset`.
    pub fn translate(&mut self, offset: Vector3<Real>) {
        for p in &mut self.points {
            *p += offset;
        }
    }
}

impl From<PointSequence> for Vec<Point3<Real>> {
    fn from(sequence: PointSequence) -> Self {
        sequence.points
    }
}
