//! Curve smoothing algorithms.

pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

use crate::curve::{PointSequence, point};
use crate::float_types::Real;
use nalgebra::Point3;

// Re-export core types
pub use serial::SerialSmoothingOps;
pub use traits::SmoothingOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSmoothingOps;

/// Implementation picked by the session layer for the enabled features.
#[cfg(not(feature = "parallel"))]
pub type DefaultSmoothingOps = SerialSmoothingOps;
#[cfg(feature = "parallel")]
pub type DefaultSmoothingOps = ParallelSmoothingOps;

/// Relaxed position of `index` computed from the iteration `snapshot`.
/// Pinned endpoints come back unchanged.
#[inline]
pub(crate) fn relaxed_position(
    snapshot: &PointSequence,
    index: usize,
    tension: Real,
) -> Point3<Real> {
    if snapshot.is_pinned(index) {
        return snapshot.points[index];
    }
    let (prev, next) = snapshot.neighbors(index);
    point::relax(
        &snapshot.points[prev],
        &snapshot.points[index],
        &snapshot.points[next],
        tension,
    )
}

/// **Mathematical Foundation: Shape Compensation**
///
/// ```text
/// s  = relax(p₋, p, p₊, τ)
/// p' = s + (p⁰ - s) · k
/// ```
/// where `p⁰` is the point before the first iteration and `k` the preserve
/// strength. Evaluated as `s·(1-k) + p⁰·k`, so `k = 0` and `k = 1` give `s`
/// and `p⁰` exactly.
#[inline]
pub(crate) fn compensated_position(
    snapshot: &PointSequence,
    original: &PointSequence,
    index: usize,
    tension: Real,
    preserve_strength: Real,
) -> Point3<Real> {
    if snapshot.is_pinned(index) {
        return snapshot.points[index];
    }
    let smoothed = relaxed_position(snapshot, index, tension);
    point::lerp(&smoothed, &original.points[index], preserve_strength)
}

/// `originalLength / currentLength`, or 1 when the curve has collapsed.
#[inline]
pub(crate) fn length_restoring_factor(original_length: Real, current_length: Real) -> Real {
    if current_length > 0.0 {
        original_length / current_length
    } else {
        1.0
    }
}
