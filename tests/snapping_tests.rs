mod support;

use approx::assert_relative_eq;
use edge_smooth::{
    SmoothError,
    curve::algorithm::snapping::{SerialSnapOps, SnapOps},
    float_types::Real,
};
use nalgebra::Point3;

fn two_points() -> Vec<Point3<Real>> {
    vec![Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)]
}

#[test]
fn snaps_to_closest_reference_point() {
    let queries = [Point3::new(3.0, 0.0, 0.0), Point3::new(6.0, 0.0, 0.0)];
    let snaps = SerialSnapOps::new().snap(&queries, &two_points()).unwrap();

    assert_eq!(snaps.len(), 2);
    assert_eq!(snaps[0].point, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(snaps[0].reference, 0);
    assert_relative_eq!(snaps[0].distance, 3.0);
    assert_eq!(snaps[1].point, Point3::new(10.0, 0.0, 0.0));
    assert_eq!(snaps[1].reference, 1);
    assert_relative_eq!(snaps[1].distance, 4.0);
}

#[test]
fn equidistant_query_takes_first_reference() {
    let query = [Point3::new(5.0, 0.0, 0.0)];
    let snaps = SerialSnapOps::new().snap(&query, &two_points()).unwrap();
    assert_eq!(snaps[0].reference, 0);
    assert_eq!(snaps[0].point, Point3::new(0.0, 0.0, 0.0));

    let mut reversed = two_points();
    reversed.reverse();
    let snaps = SerialSnapOps::new().snap(&query, &reversed).unwrap();
    assert_eq!(snaps[0].point, Point3::new(10.0, 0.0, 0.0));
}

#[test]
fn empty_reference_set_is_an_error() {
    let err = SerialSnapOps::new()
        .snap(&[Point3::new(1.0, 2.0, 3.0)], &[])
        .unwrap_err();
    assert_eq!(err, SmoothError::EmptyReferenceSet);

    let err = SerialSnapOps::new().snap(&[], &[]).unwrap_err();
    assert_eq!(err, SmoothError::EmptyReferenceSet);
}

#[test]
fn results_follow_query_order() {
    let reference: Vec<Point3<Real>> = (0..20)
        .map(|i| Point3::new(i as Real * 0.5, (i as Real).sin(), 0.0))
        .collect();
    let queries: Vec<Point3<Real>> = (0..7)
        .map(|i| Point3::new(9.0 - i as Real * 1.3, 0.1, 0.2))
        .collect();

    let snaps = SerialSnapOps::new().snap(&queries, &reference).unwrap();
    assert_eq!(snaps.len(), queries.len());
    for (i, snap) in snaps.iter().enumerate() {
        assert_eq!(snap.query, i);
        let best = reference
            .iter()
            .map(|r| (r - queries[i]).norm())
            .fold(Real::INFINITY, Real::min);
        assert_relative_eq!(snap.distance, best, epsilon = support::EPS);
    }

    let positions = SerialSnapOps::new().snap_positions(&queries, &reference).unwrap();
    assert_eq!(positions, snaps.iter().map(|s| s.point).collect::<Vec<_>>());
}

#[test]
fn query_on_reference_point_has_zero_distance() {
    let reference = [
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(2.0, 2.0, 2.0),
        Point3::new(3.0, 3.0, 3.0),
    ];
    let snaps = SerialSnapOps::new().snap(&[reference[1]], &reference).unwrap();
    assert_eq!(snaps[0].reference, 1);
    assert_eq!(snaps[0].distance, 0.0);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_snapping_matches_serial() {
    use edge_smooth::curve::algorithm::snapping::ParallelSnapOps;

    let reference: Vec<Point3<Real>> = (0..200)
        .map(|i| Point3::new((i % 10) as Real, (i / 10) as Real, 0.0))
        .collect();
    let queries: Vec<Point3<Real>> = (0..50)
        .map(|i| Point3::new(i as Real * 0.19, i as Real * 0.37, 0.5))
        .collect();
    assert_eq!(
        SerialSnapOps::new().snap(&queries, &reference).unwrap(),
        ParallelSnapOps::new().snap(&queries, &reference).unwrap()
    );
}
