mod support;

use edge_smooth::{
    PointSequence, SmoothError, SmoothingParameters,
    curve::algorithm::smoothing::{SerialSmoothingOps, SmoothingOps},
    float_types::Real,
};
use nalgebra::Point3;

#[test]
fn open_endpoints_never_move() {
    let ops = SerialSmoothingOps::new();
    for &tension in &[0.0, 0.1, 0.5, 0.9, 3.0] {
        for iterations in [1, 2, 10, 50] {
            let original = support::zigzag(9, 0.7);
            let mut seq = original.clone();
            ops.smooth(&mut seq, iterations, tension).unwrap();

            assert_eq!(seq.points[0], original.points[0]);
            assert_eq!(seq.points[8], original.points[8]);
            assert_eq!(seq.len(), original.len());
        }
    }
}

#[test]
fn straight_line_is_a_fixed_point() {
    let original = support::straight_line(5);
    let mut seq = original.clone();
    SerialSmoothingOps::new().smooth(&mut seq, 1, 0.0).unwrap();

    // Interior points stay collinear and one unit apart
    assert_eq!(seq, original);
}

#[test]
fn smoothing_reduces_roughness() {
    let original = support::zigzag(12, 1.0);
    let mut seq = original.clone();
    SerialSmoothingOps::new().smooth(&mut seq, 3, 0.5).unwrap();
    assert!(support::roughness(&seq) < support::roughness(&original));

    let ring = support::noisy_ring(24, 5.0, 0.3);
    let mut smoothed_ring = ring.clone();
    SerialSmoothingOps::new().smooth(&mut smoothed_ring, 3, 0.5).unwrap();
    assert!(support::roughness(&smoothed_ring) < support::roughness(&ring));
}

#[test]
fn closed_keeps_count_and_order() {
    let original = support::noisy_ring(12, 10.0, 0.1);
    let mut seq = original.clone();
    SerialSmoothingOps::new().smooth(&mut seq, 1, 0.5).unwrap();

    assert_eq!(seq.len(), 12);
    assert!(seq.closed);
    // Every point is still closest to the original point it came from
    for (i, p) in seq.points.iter().enumerate() {
        let nearest = original
            .points
            .iter()
            .enumerate()
            .min_by(|a, b| (a.1 - p).norm().total_cmp(&(b.1 - p).norm()))
            .map(|(j, _)| j);
        assert_eq!(nearest, Some(i), "point {} changed identity", i);
    }
}

#[test]
fn closed_smoothing_moves_every_point() {
    let original = support::noisy_ring(9, 2.0, 0.2);
    let mut seq = original.clone();
    SerialSmoothingOps::new().smooth(&mut seq, 2, 0.0).unwrap();
    for (a, b) in seq.points.iter().zip(&original.points) {
        assert_ne!(a, b);
    }
}

#[test]
fn huge_tension_barely_moves_points() {
    let original = support::noisy_ring(10, 3.0, 0.5);
    let mut seq = original.clone();
    SerialSmoothingOps::new().smooth(&mut seq, 3, 1e12).unwrap();
    for (a, b) in seq.points.iter().zip(&original.points) {
        assert!(support::points_close(a, b, support::EPS));
    }
}

#[test]
fn higher_tension_smooths_less() {
    let original = support::zigzag(10, 1.0);
    let mut loose = original.clone();
    let mut tight = original.clone();
    SerialSmoothingOps::new().smooth(&mut loose, 2, 0.0).unwrap();
    SerialSmoothingOps::new().smooth(&mut tight, 2, 5.0).unwrap();
    assert!(support::roughness(&loose) < support::roughness(&tight));
}

#[test]
fn too_few_points_is_rejected_without_changes() {
    let original = PointSequence::open(vec![Point3::origin(), Point3::new(1.0, 1.0, 0.0)]);
    let mut seq = original.clone();

    let err = SerialSmoothingOps::new().smooth(&mut seq, 3, 0.5).unwrap_err();
    assert_eq!(err, SmoothError::InsufficientPoints { found: 2, required: 3 });
    assert_eq!(seq, original);

    let err = SerialSmoothingOps::new()
        .shape_preserving_smooth(&mut seq, 3, 0.5, 0.3)
        .unwrap_err();
    assert!(matches!(err, SmoothError::InsufficientPoints { found: 2, .. }));
}

#[test]
fn invalid_tension_is_rejected() {
    let original = support::zigzag(5, 1.0);
    let mut seq = original.clone();
    let err = SerialSmoothingOps::new().smooth(&mut seq, 1, Real::NAN).unwrap_err();
    assert!(matches!(err, SmoothError::InvalidParameter { name: "tension", .. }));
    assert_eq!(seq, original);
}

#[test]
fn zero_iterations_is_a_no_op() {
    let original = support::zigzag(6, 1.0);
    let mut seq = original.clone();
    SerialSmoothingOps::new().smooth(&mut seq, 0, 0.5).unwrap();
    assert_eq!(seq, original);
}

#[test]
fn full_preserve_strength_freezes_the_curve() {
    let ops = SerialSmoothingOps::new();
    for original in [support::zigzag(8, 0.6), support::noisy_ring(11, 4.0, 0.4)] {
        let mut seq = original.clone();
        ops.shape_preserving_smooth(&mut seq, 7, 0.5, 1.0).unwrap();
        assert_eq!(seq, original);
    }
}

#[test]
fn shape_preserving_restores_closed_length() {
    let original = support::noisy_ring(16, 6.0, 0.5);
    let length = original.arc_length();

    let mut seq = original.clone();
    SerialSmoothingOps::new()
        .shape_preserving_smooth(&mut seq, 5, 0.5, 0.3)
        .unwrap();
    assert!(support::approx_eq(seq.arc_length(), length, support::EPS));
    assert!(support::roughness(&seq) < support::roughness(&original));

    // Plain smoothing shrinks the ring
    let mut plain = original.clone();
    SerialSmoothingOps::new().smooth(&mut plain, 5, 0.5).unwrap();
    assert!(plain.arc_length() < length);
}

#[test]
fn shape_preserving_keeps_open_endpoints() {
    let original = support::zigzag(9, 0.8);
    let mut seq = original.clone();
    SerialSmoothingOps::new()
        .shape_preserving_smooth(&mut seq, 4, 0.2, 0.5)
        .unwrap();
    assert_eq!(seq.points[0], original.points[0]);
    assert_eq!(seq.points[8], original.points[8]);
}

#[test]
fn stronger_preservation_stays_closer_to_original() {
    let original = support::zigzag(10, 1.0);
    let deviation = |strength: Real| {
        let mut seq = original.clone();
        SerialSmoothingOps::new()
            .shape_preserving_smooth(&mut seq, 3, 0.0, strength)
            .unwrap();
        seq.points
            .iter()
            .zip(&original.points)
            .map(|(a, b)| (a - b).norm())
            .sum::<Real>()
    };
    assert!(deviation(0.8) < deviation(0.2));
}

#[test]
fn preserve_strength_out_of_range_is_rejected() {
    let mut seq = support::zigzag(5, 1.0);
    let err = SerialSmoothingOps::new()
        .shape_preserving_smooth(&mut seq, 1, 0.5, 1.5)
        .unwrap_err();
    assert!(matches!(
        err,
        SmoothError::InvalidParameter { name: "preserve_strength", .. }
    ));
}

#[test]
fn parameter_driven_smoothing_matches_explicit_call() {
    let params = SmoothingParameters::new(4, 0.25);
    let mut a = support::zigzag(7, 0.5);
    let mut b = a.clone();
    SerialSmoothingOps::new().smooth_with(&mut a, &params).unwrap();
    SerialSmoothingOps::new().smooth(&mut b, 4, 0.25).unwrap();
    assert_eq!(a, b);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_serial() {
    use edge_smooth::curve::algorithm::smoothing::ParallelSmoothingOps;

    let original = support::noisy_ring(40, 8.0, 0.6);
    let mut serial = original.clone();
    let mut parallel = original.clone();
    SerialSmoothingOps::new().smooth(&mut serial, 6, 0.3).unwrap();
    ParallelSmoothingOps::new().smooth(&mut parallel, 6, 0.3).unwrap();
    assert_eq!(serial, parallel);

    SerialSmoothingOps::new()
        .shape_preserving_smooth(&mut serial, 3, 0.3, 0.4)
        .unwrap();
    ParallelSmoothingOps::new()
        .shape_preserving_smooth(&mut parallel, 3, 0.3, 0.4)
        .unwrap();
    assert_eq!(serial, parallel);
}
