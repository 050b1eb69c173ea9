use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;
#[cfg(not(feature = "serde"))]
use serde_json as _;

/// Coordinates in `[-50, 50]`, biased toward zero, small integers, and other
/// values that tend to produce degenerate configurations.
fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(2.0),
            Just(-10.0),
            Just(0.5),
            Just(std::f64::consts::PI),
        ],
        -50.0..=50.0,
    ]
}

fn vector_strategy() -> impl Strategy<Value = Vector3d> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn nonzero_vector_strategy() -> impl Strategy<Value = Vector3d> {
    vector_strategy().prop_filter("nonzero vector", |v| v.magnitude() > 0.1)
}

fn point_strategy() -> impl Strategy<Value = Point3d> {
    vector_strategy().prop_map(Vector3::to_point)
}

fn line_strategy() -> impl Strategy<Value = Line3d> {
    (point_strategy(), nonzero_vector_strategy()).prop_map(|(p, d)| Line3::new(p, d))
}

fn plane_strategy() -> impl Strategy<Value = Plane3d> {
    (point_strategy(), nonzero_vector_strategy()).prop_map(|(p, n)| Plane3::new(p, n))
}

/// Relative tolerance for properties over arbitrary magnitudes.
fn approx_eq_relative(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn proptest_normalized_has_unit_magnitude(v in nonzero_vector_strategy()) {
        let n = v.normalized().expect("vector is nonzero");
        prop_assert!(tolerance::approx_eq(n.magnitude(), 1.0));
        prop_assert!(n.is_parallel_to(&v));
    }

    #[test]
    fn proptest_cross_product_is_orthogonal(a in vector_strategy(), b in vector_strategy()) {
        let c = a.cross(&b);
        let scale = 1.0 + a.magnitude_squared() * b.magnitude();
        prop_assert!(c.dot(&a).abs() <= EPSILON * scale);
        prop_assert!(c.dot(&b).abs() <= EPSILON * scale);
        prop_assert_eq!(c, -b.cross(&a));
    }

    #[test]
    fn proptest_parallel_and_orthogonal_are_symmetric(a in vector_strategy(), b in vector_strategy()) {
        prop_assert_eq!(a.is_parallel_to(&b), b.is_parallel_to(&a));
        prop_assert_eq!(a.is_orthogonal_to(&b), b.is_orthogonal_to(&a));
    }

    #[test]
    fn proptest_point_vector_round_trip(p in point_strategy()) {
        prop_assert_eq!(p.to_vector().to_point(), p);
        prop_assert_eq!((p - Point3::origin()).to_point(), p);
    }

    #[test]
    fn proptest_line_equality_is_representation_independent(
        l in line_strategy(),
        t in scalar_strategy(),
        k in prop_oneof![-10.0..=-0.5, 0.5..=10.0],
    ) {
        let other = Line3::new(l.point_at(t), l.direction() * k);
        prop_assert_eq!(l, l);
        prop_assert_eq!(l, other);
        prop_assert_eq!(other, l);
    }

    #[test]
    fn proptest_plane_equality_is_representation_independent(
        plane in plane_strategy(),
        k in prop_oneof![-10.0..=-0.5, 0.5..=10.0],
    ) {
        let [a, b, c, d] = plane.coefficients();
        let other = Plane3::from_coefficients(a * k, b * k, c * k, d * k);
        prop_assert_eq!(plane, plane);
        prop_assert_eq!(plane, other);
        prop_assert_eq!(other, plane);
    }

    #[test]
    fn proptest_distance_to_point_on_line_is_zero(l in line_strategy(), t in scalar_strategy()) {
        let p = l.point_at(t);
        prop_assert!(l.is_point_on_line(&p));
        prop_assert!(approx_eq_relative(l.distance_to_point(&p), 0.0));
    }

    #[test]
    fn proptest_distance_to_point_is_nonnegative(l in line_strategy(), p in point_strategy()) {
        let distance = l.distance_to_point(&p);
        prop_assert!(distance >= 0.0);
        if !l.is_point_on_line(&p) {
            prop_assert!(distance > 0.0);
        }
    }

    #[test]
    fn proptest_line_distance_is_symmetric(a in line_strategy(), b in line_strategy()) {
        prop_assume!(!a.is_parallel_to(&b));
        prop_assert!(approx_eq_relative(a.distance_to_line(&b), b.distance_to_line(&a)));
    }

    #[test]
    fn proptest_intersecting_lines(
        p in point_strategy(),
        d1 in nonzero_vector_strategy(),
        d2 in nonzero_vector_strategy(),
    ) {
        prop_assume!(!d1.is_parallel_to(&d2));
        let a = Line3::new(p + d1 * 3.0, d1);
        let b = Line3::new(p - d2, d2);
        prop_assert_eq!(a.point_of_intersection(&b), Some(p));
        prop_assert_eq!(b.point_of_intersection(&a), Some(p));
        prop_assert!(approx_eq_relative(a.distance_to_line(&b), 0.0));
        prop_assert!(!a.is_skew_to(&b));
    }

    #[test]
    fn proptest_plane_contains_its_intersection_line(a in plane_strategy(), b in plane_strategy()) {
        if let Some(l) = a.line_of_intersection(&b) {
            prop_assert!(a.is_parallel_to_line(&l));
            prop_assert!(b.is_parallel_to_line(&l));
            let scale = 1.0 + l.point().to_vector().magnitude();
            prop_assert!(approx_eq_relative(a.distance_to_point(&l.point()) / scale, 0.0));
            prop_assert!(approx_eq_relative(b.distance_to_point(&l.point()) / scale, 0.0));
        } else {
            prop_assert!(a.is_parallel_to_plane(&b));
        }
    }
}

#[test]
fn test_demo_scenario() {
    let point = Point3::new(7.0, 4.0, 3.0);
    let line1 = Line3::new(Point3::new(1.0, 2.0, 0.0), Vector3::new(-1.0, 1.0, 3.0));
    let line2 = Line3::new(Point3::new(1.0, 1.0, 2.0), Vector3::new(1.0, 3.0, -1.0));
    let plane1 = Plane3::from_coefficients(5.0, -6.0, 4.0, 2.0);
    let plane2 = Plane3::from_coefficients(9.0, 0.0, -2.0, 1.0);
    let plane3 = Plane3::from_coefficients(1.0, 1.0, 3.0, 1.0);

    let p = plane1
        .point_of_intersection(&line1)
        .expect("line1 crosses plane1");
    assert_eq!(p, Point3::new(-4.0, 7.0, 15.0));

    let l = plane1
        .line_of_intersection(&plane2)
        .expect("plane1 and plane2 are not parallel");
    assert!(plane1.is_line_in_plane(&l));
    assert!(plane2.is_line_in_plane(&l));

    // |5*7 - 6*4 + 4*3 + 2| / sqrt(25 + 36 + 16)
    assert_approx_eq!(plane1.distance_to_point(&point), 25.0 / 77.0_f64.sqrt());

    // asin(|5 - 18 - 4| / (sqrt(77) * sqrt(11)))
    let expected = (17.0 / (77.0_f64 * 11.0).sqrt()).asin();
    assert_approx_eq!(plane1.angle_between_line(&line2), expected);

    // acos(|5 - 6 + 12| / (sqrt(77) * sqrt(11)))
    let expected = (11.0 / (77.0_f64 * 11.0).sqrt()).acos();
    assert_approx_eq!(plane1.angle_between_plane(&plane3), expected);
}

#[test]
fn test_plane_through_unit_points() {
    let plane = Plane3::from_points(
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    );
    assert!(plane.normal().is_parallel_to(&Vector3::new(1.0, 1.0, 1.0)));
    assert_approx_eq!(
        plane.distance_to_point(&Point3::origin()),
        1.0 / 3.0_f64.sqrt(),
    );
}

#[test]
fn test_plane_from_intersecting_lines_contains_both() {
    let line1 = Line3::new(Point3::new(1.0, 2.0, 0.0), Vector3::new(-1.0, 1.0, 3.0));
    let plane1 = Plane3::from_coefficients(5.0, -6.0, 4.0, 2.0);
    let p = plane1
        .point_of_intersection(&line1)
        .expect("line1 crosses plane1");
    let line2 = Line3::new(p, Vector3::new(1.0, 3.0, -1.0));
    let plane = Plane3::from_lines(&line1, &line2);
    assert!(plane.is_line_in_plane(&line1));
    assert!(plane.is_line_in_plane(&line2));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_validates_lines() {
    let line: Line3d = serde_json::from_str(
        r#"{"point":{"x":0.0,"y":0.0,"z":0.0},"direction":{"x":1.0,"y":0.0,"z":0.0}}"#,
    )
    .expect("valid line");
    assert_eq!(line.direction(), Vector3::new(1.0, 0.0, 0.0));
    let zero = r#"{"point":{"x":0.0,"y":0.0,"z":0.0},"direction":{"x":0.0,"y":0.0,"z":0.0}}"#;
    assert!(serde_json::from_str::<Line3d>(zero).is_err());
    let zero = r#"{"point":{"x":0.0,"y":0.0,"z":0.0},"normal":{"x":0.0,"y":0.0,"z":0.0}}"#;
    assert!(serde_json::from_str::<Plane3d>(zero).is_err());
}
