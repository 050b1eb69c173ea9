//! Infinite lines in 3D.

use std::fmt;

use crate::error::expect_valid;
use crate::tolerance::{clamp_unit, exceeds_tolerance};
use crate::util::write_signed_term;
use crate::{Axis, GeometryError, Point3, Scalar, Vector3};

/// Single-precision line.
pub type Line3f = Line3<f32>;
/// Double-precision line.
pub type Line3d = Line3<f64>;

/// Infinite line in 3D: the set of points `point + t * direction` for all `t`.
///
/// The direction is never the zero vector. Equality does not depend on the
/// representation: two lines are equal if one contains the other's point and
/// their directions are parallel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "LineParts<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
#[derive(Debug, Copy, Clone)]
pub struct Line3<T> {
    /// Point on the line.
    pub(crate) point: Point3<T>,
    /// Direction of the line, which need not be normalized.
    pub(crate) direction: Vector3<T>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LineParts<T> {
    point: Point3<T>,
    direction: Vector3<T>,
}
#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<LineParts<T>> for Line3<T> {
    type Error = GeometryError;

    fn try_from(parts: LineParts<T>) -> Result<Self, Self::Error> {
        Self::try_new(parts.point, parts.direction)
    }
}

impl<T: Scalar> fmt::Display for Line3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = ", axis.to_string().to_lowercase())?;
            fmt::Display::fmt(&self.point[axis], f)?;
            write_signed_term(f, self.direction[axis], "t")?;
        }
        Ok(())
    }
}

/// Equal if one line contains the other's point and their directions are
/// parallel.
impl<T: Scalar> PartialEq for Line3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_point_on_line(&other.point) && self.is_parallel_to(other)
    }
}

impl<T: Scalar> Line3<T> {
    /// Constructs a line through `point` along `direction`. Returns an error if
    /// `direction` is approximately zero.
    pub fn try_new(point: Point3<T>, direction: Vector3<T>) -> Result<Self, GeometryError> {
        if direction.is_zero_vector() {
            return Err(GeometryError::ZeroDirection);
        }
        Ok(Self { point, direction })
    }
    /// Constructs a line through `point` along `direction`.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is approximately zero.
    #[track_caller]
    pub fn new(point: Point3<T>, direction: Vector3<T>) -> Self {
        expect_valid(Self::try_new(point, direction))
    }

    /// Constructs a line through two points, directed from `point1` to
    /// `point2`. Returns an error if the points are approximately equal.
    pub fn try_through_points(point1: Point3<T>, point2: Point3<T>) -> Result<Self, GeometryError> {
        Self::try_new(point1, point2 - point1)
    }
    /// Constructs a line through two points, directed from `point1` to
    /// `point2`.
    ///
    /// # Panics
    ///
    /// Panics if the points are approximately equal.
    #[track_caller]
    pub fn through_points(point1: Point3<T>, point2: Point3<T>) -> Self {
        expect_valid(Self::try_through_points(point1, point2))
    }

    /// Returns the point that the line was constructed with.
    pub fn point(&self) -> Point3<T> {
        self.point
    }
    /// Returns the direction of the line, which is never zero.
    pub fn direction(&self) -> Vector3<T> {
        self.direction
    }
    /// Returns the point `point + t * direction`.
    pub fn point_at(&self, t: T) -> Point3<T> {
        self.point + self.direction * t
    }

    /// Returns the point where two lines cross, or `None` if they are parallel
    /// or skew.
    ///
    /// Coincident lines are parallel, so they do not intersect.
    pub fn point_of_intersection(&self, other: &Self) -> Option<Point3<T>> {
        if self.is_parallel_to(other) {
            return None;
        }
        let [p1, p2] = self.closest_points_with(other);
        (p1 == p2).then_some(p1)
    }

    /// Returns the acute angle between two intersecting lines in radians, in
    /// the range `[0, π/2]`. Returns zero if the lines do not intersect.
    pub fn angle_between(&self, other: &Self) -> T {
        if !self.is_intersecting_with(other) {
            return T::zero();
        }
        let magnitudes = self.direction.magnitude() * other.direction.magnitude();
        if !exceeds_tolerance(magnitudes) {
            debug_panic!("line directions {} and {} are too small", self.direction, other.direction);
            return T::zero();
        }
        clamp_unit(self.direction.dot(&other.direction).abs() / magnitudes).acos()
    }

    /// Returns the perpendicular distance from a point to the line.
    pub fn distance_to_point(&self, point: &Point3<T>) -> T {
        let direction_magnitude = self.direction.magnitude();
        if !exceeds_tolerance(direction_magnitude) {
            debug_panic!("line direction {} is too small", self.direction);
            return (*point - self.point).magnitude();
        }
        self.direction.cross(&(*point - self.point)).magnitude() / direction_magnitude
    }

    /// Returns the shortest distance between two lines, which is zero if they
    /// intersect or coincide.
    pub fn distance_to_line(&self, other: &Self) -> T {
        let [p1, p2] = self.closest_points_with(other);
        (p2 - p1).magnitude()
    }

    /// Returns whether the line contains a point.
    pub fn is_point_on_line(&self, point: &Point3<T>) -> bool {
        self.direction.is_parallel_to(&(*point - self.point))
    }

    /// Returns whether two lines have parallel or antiparallel directions.
    /// Coincident lines are parallel.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.direction.is_parallel_to(&other.direction)
    }
    /// Returns whether two lines intersect at a right angle. Skew lines are
    /// never orthogonal, even if their directions are.
    pub fn is_orthogonal_to(&self, other: &Self) -> bool {
        self.direction.is_orthogonal_to(&other.direction) && self.is_intersecting_with(other)
    }
    /// Returns whether two lines are neither parallel nor intersecting.
    pub fn is_skew_to(&self, other: &Self) -> bool {
        !self.is_parallel_to(other) && !self.is_intersecting_with(other)
    }
    /// Returns whether two lines cross at exactly one point.
    pub fn is_intersecting_with(&self, other: &Self) -> bool {
        self.point_of_intersection(other).is_some()
    }

    /// Returns the pair of points, one on each line, that are closest to each
    /// other.
    ///
    /// For parallel lines, returns `self.point` and its projection onto
    /// `other`.
    fn closest_points_with(&self, other: &Self) -> [Point3<T>; 2] {
        let [t1, t2] = self.closest_parameters_with(other);
        [self.point_at(t1), other.point_at(t2)]
    }

    /// Returns the parameters `[t1, t2]` of the closest points on `self` and
    /// `other`.
    fn closest_parameters_with(&self, other: &Self) -> [T; 2] {
        let d1 = self.direction;
        let d2 = other.direction;
        let perpendicular = d1.cross(&d2);
        let v = other.point - self.point;

        match perpendicular.first_nonzero_axis() {
            Some(axis) => {
                // Without its component along the common perpendicular, `v`
                // lies in the span of `d1` and `d2`, so `t1 * d1 - t2 * d2 = v`
                // is solved exactly by any two rows whose determinant (the
                // corresponding component of `perpendicular`) is nonzero.
                let v = v - perpendicular
                    * (v.dot(&perpendicular) / perpendicular.magnitude_squared());
                let det = perpendicular[axis];
                let [i, j] = axis.others();
                log::trace!("solving closest points in the {i}{j} plane");
                let t1 = (d2[j] * v[i] - d2[i] * v[j]) / det;
                let t2 = (d1[j] * v[i] - d1[i] * v[j]) / det;
                [t1, t2]
            }
            None => {
                let d2_magnitude_squared = d2.magnitude_squared();
                if !exceeds_tolerance(d2_magnitude_squared) {
                    debug_panic!("line direction {d2} is too small");
                    return [T::zero(), T::zero()];
                }
                [T::zero(), -v.dot(&d2) / d2_magnitude_squared]
            }
        }
    }
}
