//! Traits for nearest-point snapping.

use crate::errors::Result;
use crate::float_types::Real;
use nalgebra::Point3;

/// Result of snapping one query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    /// Index of the query point.
    pub query: usize,
    /// Index of the chosen reference point.
    pub reference: usize,
    /// Position of the chosen reference point.
    pub point: Point3<Real>,
    /// Distance from the query to `point`.
    pub distance: Real,
}

/// Maps arbitrary query positions onto the closest member of a reference set.
pub trait SnapOps {
    /// One [`Snap`] per query, in query order.
    ///
    /// Every query scans the whole reference set (`O(Q·R)`); ties go to the
    /// reference point met first.
    ///
    /// # Errors
    /// [`EmptyReferenceSet`](crate::errors::SmoothError::EmptyReferenceSet) when
    /// `reference` is empty.
    fn snap(&self, queries: &[Point3<Real>], reference: &[Point3<Real>]) -> Result<Vec<Snap>>;

    /// Snapped positions only, in query order.
    fn snap_positions(
        &self,
        queries: &[Point3<Real>],
        reference: &[Point3<Real>],
    ) -> Result<Vec<Point3<Real>>> {
        Ok(self
            .snap(queries, reference)?
            .into_iter()
            .map(|snap| snap.point)
            .collect())
    }
}
