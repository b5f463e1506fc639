//! Elementary operations on `Point3<Real>` used by the curve algorithms.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// **Mathematical Foundation: Distance Metrics**
///
/// Euclidean distance between two positions:
/// ```text
/// d(p₁, p₂) = |p₁ - p₂| = √((x₁-x₂)² + (y₁-y₂)² + (z₁-z₂)²)
/// ```
#[inline]
pub fn distance(a: &Point3<Real>, b: &Point3<Real>) -> Real {
    (a - b).norm()
}

/// Squared Euclidean distance, for comparisons that do not need the root.
#[inline]
pub fn distance_squared(a: &Point3<Real>, b: &Point3<Real>) -> Real {
    (a - b).norm_squared()
}

/// Arithmetic-mean centroid of a set of points, `None` for an empty set.
pub fn centroid(points: &[Point3<Real>]) -> Option<Point3<Real>> {
    if points.is_empty() {
        return None;
    }

    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<Real>, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as Real))
}

/// Blend from `a` (t = 0) to `b` (t = 1).
///
/// Written as `a·(1-t) + b·t` so both ends are reproduced bit for bit.
#[inline]
pub fn lerp(a: &Point3<Real>, b: &Point3<Real>, t: Real) -> Point3<Real> {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}

/// **Mathematical Foundation: Tension-Weighted Neighbor Relaxation**
///
/// One step of the three-point low-pass filter applied to every movable
/// control point:
/// ```text
/// p' = (p₋ + (2 + τ)·p + p₊) / (4 + τ)
/// ```
/// With τ = 0 this is the classic `[1 2 1] / 4` kernel. Growing τ raises the
/// weight of the point's own position, so large tensions barely move it.
#[inline]
pub fn relax(
    prev: &Point3<Real>,
    current: &Point3<Real>,
    next: &Point3<Real>,
    tension: Real,
) -> Point3<Real> {
    Point3::from((prev.coords + current.coords * (2.0 + tension) + next.coords) / (4.0 + tension))
}

/// Move `point` away from (factor > 1) or toward (factor < 1) `center`.
#[inline]
pub fn scale_from(point: &Point3<Real>, center: &Point3<Real>, factor: Real) -> Point3<Real> {
    *center + (point - center) * factor
}
