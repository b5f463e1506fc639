//! Nearest-point snapping of query positions onto a reference point set.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

use crate::curve::point::distance_squared;
use crate::float_types::Real;
use nalgebra::Point3;

pub use serial::SerialSnapOps;
pub use traits::{Snap, SnapOps};

#[cfg(feature = "parallel")]
pub use parallel::ParallelSnapOps;

#[cfg(not(feature = "parallel"))]
pub type DefaultSnapOps = SerialSnapOps;
#[cfg(feature = "parallel")]
pub type DefaultSnapOps = ParallelSnapOps;

/// Linear scan for the reference point closest to `query`.
///
/// Only a strictly smaller distance replaces the current best, so ties go to
/// the earliest reference point. Returns `None` for an empty reference set.
pub fn nearest(query: &Point3<Real>, reference: &[Point3<Real>]) -> Option<(usize, Real)> {
    let mut best: Option<(usize, Real)> = None;
    for (i, candidate) in reference.iter().enumerate() {
        let d2 = distance_squared(query, candidate);
        let closer = match best {
            Some((_, best_d2)) => d2 < best_d2,
            None => true,
        };
        if closer {
            best = Some((i, d2));
        }
    }
    best
}

/// Build the [`Snap`] record for query `index`.
#[inline]
pub(crate) fn snap_one(
    index: usize,
    query: &Point3<Real>,
    reference: &[Point3<Real>],
) -> Option<Snap> {
    nearest(query, reference).map(|(reference_index, d2)| Snap {
        query: index,
        reference: reference_index,
        point: reference[reference_index],
        distance: d2.sqrt(),
    })
}
