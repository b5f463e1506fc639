//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use edge_smooth::{PointSequence, float_types::Real};
use nalgebra::Point3;

/// Comparison tolerance that holds for the active `Real` width.
#[cfg(feature = "f64")]
pub const EPS: Real = 1e-9;
#[cfg(feature = "f32")]
pub const EPS: Real = 1e-3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise comparison of two points.
pub fn points_close(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// `count` points on the x axis, one unit apart, starting at the origin.
pub fn straight_line(count: usize) -> PointSequence {
    PointSequence::open((0..count).map(|i| Point3::new(i as Real, 0.0, 0.0)).collect())
}

/// An open chain along x that zigzags in y, like a stair-stepped boundary.
pub fn zigzag(count: usize, amplitude: Real) -> PointSequence {
    PointSequence::open(
        (0..count)
            .map(|i| {
                let y = if i % 2 == 0 { 0.0 } else { amplitude };
                Point3::new(i as Real, y, 0.0)
            })
            .collect(),
    )
}

/// A closed ring of `count` points around the z axis with a deterministic
/// radial wobble of size `noise`.
pub fn noisy_ring(count: usize, radius: Real, noise: Real) -> PointSequence {
    let step = std::f64::consts::TAU as Real / count as Real;
    PointSequence::closed(
        (0..count)
            .map(|i| {
                let angle = step * i as Real;
                let wobble = if i % 3 == 0 { noise } else { -noise * 0.5 };
                let r = radius + wobble;
                Point3::new(r * angle.cos(), r * angle.sin(), 0.25 * wobble)
            })
            .collect(),
    )
}

/// Sum of squared second differences, a simple roughness measure.
pub fn roughness(sequence: &PointSequence) -> Real {
    let n = sequence.len();
    let interior: Box<dyn Iterator<Item = usize>> = if sequence.closed {
        Box::new(0..n)
    } else {
        Box::new(1..n.saturating_sub(1))
    };
    interior
        .map(|i| {
            let (prev, next) = sequence.neighbors(i);
            let p = &sequence.points;
            (p[prev].coords - p[i].coords * 2.0 + p[next].coords).norm_squared()
        })
        .sum()
}
