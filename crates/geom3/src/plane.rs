//! Planes in 3D.

use std::fmt;

use crate::error::expect_valid;
use crate::tolerance::{clamp_unit, exceeds_tolerance, is_zero};
use crate::util::write_signed_term;
use crate::{GeometryError, Line3, Point3, Scalar, Vector3};

/// Single-precision plane.
pub type Plane3f = Plane3<f32>;
/// Double-precision plane.
pub type Plane3d = Plane3<f64>;

/// Plane in 3D: the set of points `p` such that
/// `normal · (p - point) = 0`.
///
/// The normal is never the zero vector. Equality does not depend on the
/// representation: two planes are equal if one contains the other's point and
/// their normals are parallel or antiparallel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "PlaneParts<T>",
        bound(deserialize = "T: Scalar + serde::Deserialize<'de>")
    )
)]
#[derive(Debug, Copy, Clone)]
pub struct Plane3<T> {
    /// Point in the plane.
    pub(crate) point: Point3<T>,
    /// Normal vector, which need not be normalized.
    pub(crate) normal: Vector3<T>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PlaneParts<T> {
    point: Point3<T>,
    normal: Vector3<T>,
}
#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<PlaneParts<T>> for Plane3<T> {
    type Error = GeometryError;

    fn try_from(parts: PlaneParts<T>) -> Result<Self, Self::Error> {
        Self::try_new(parts.point, parts.normal)
    }
}

impl<T: Scalar> fmt::Display for Plane3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.coefficients();
        fmt::Display::fmt(&a, f)?;
        f.write_str("x")?;
        write_signed_term(f, b, "y")?;
        write_signed_term(f, c, "z")?;
        write_signed_term(f, d, "")?;
        write!(f, " = 0")
    }
}

/// Equal if one plane contains the other's point and their normals are
/// parallel.
impl<T: Scalar> PartialEq for Plane3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_point_in_plane(&other.point) && self.is_parallel_to_plane(other)
    }
}

impl<T: Scalar> Plane3<T> {
    /// Constructs a plane through `point` perpendicular to `normal`. Returns an
    /// error if `normal` is approximately zero.
    pub fn try_new(point: Point3<T>, normal: Vector3<T>) -> Result<Self, GeometryError> {
        if normal.is_zero_vector() {
            return Err(GeometryError::ZeroNormal);
        }
        Ok(Self { point, normal })
    }
    /// Constructs a plane through `point` perpendicular to `normal`.
    ///
    /// # Panics
    ///
    /// Panics if `normal` is approximately zero.
    #[track_caller]
    pub fn new(point: Point3<T>, normal: Vector3<T>) -> Self {
        expect_valid(Self::try_new(point, normal))
    }

    /// Constructs a plane through `point` spanned by two vectors. Returns an
    /// error if the vectors are parallel or either is zero.
    pub fn try_from_vectors(
        point: Point3<T>,
        vector1: Vector3<T>,
        vector2: Vector3<T>,
    ) -> Result<Self, GeometryError> {
        Self::try_new(point, vector1.cross(&vector2))
    }
    /// Constructs a plane through `point` spanned by two vectors.
    ///
    /// # Panics
    ///
    /// Panics if the vectors are parallel or either is zero.
    #[track_caller]
    pub fn from_vectors(point: Point3<T>, vector1: Vector3<T>, vector2: Vector3<T>) -> Self {
        expect_valid(Self::try_from_vectors(point, vector1, vector2))
    }

    /// Constructs a plane through three points. Returns an error if the points
    /// are collinear.
    pub fn try_from_points(
        point1: Point3<T>,
        point2: Point3<T>,
        point3: Point3<T>,
    ) -> Result<Self, GeometryError> {
        Self::try_from_vectors(point1, point2 - point1, point3 - point1)
    }
    /// Constructs a plane through three points.
    ///
    /// # Panics
    ///
    /// Panics if the points are collinear.
    #[track_caller]
    pub fn from_points(point1: Point3<T>, point2: Point3<T>, point3: Point3<T>) -> Self {
        expect_valid(Self::try_from_points(point1, point2, point3))
    }

    /// Constructs the plane containing two lines, which must be parallel or
    /// intersecting.
    ///
    /// Returns [`GeometryError::SkewLines`] if the lines are skew, and
    /// [`GeometryError::ZeroNormal`] if they coincide.
    pub fn try_from_lines(line1: &Line3<T>, line2: &Line3<T>) -> Result<Self, GeometryError> {
        let cross_product = line1.direction.cross(&line2.direction);
        let normal = if cross_product.is_zero_vector() {
            line1.direction.cross(&(line2.point - line1.point))
        } else if line1.is_intersecting_with(line2) {
            cross_product
        } else {
            return Err(GeometryError::SkewLines);
        };
        Self::try_new(line1.point, normal)
    }
    /// Constructs the plane containing two lines, which must be parallel or
    /// intersecting.
    ///
    /// # Panics
    ///
    /// Panics if the lines are skew or coincide.
    #[track_caller]
    pub fn from_lines(line1: &Line3<T>, line2: &Line3<T>) -> Self {
        expect_valid(Self::try_from_lines(line1, line2))
    }

    /// Constructs the plane `ax + by + cz + d = 0`. Returns an error if `a`,
    /// `b`, and `c` are all approximately zero.
    pub fn try_from_coefficients(a: T, b: T, c: T, d: T) -> Result<Self, GeometryError> {
        let normal = Vector3::new(a, b, c);
        let Some(axis) = normal.first_nonzero_axis() else {
            return Err(GeometryError::DegenerateCoefficients);
        };
        let mut point = Point3::origin();
        point[axis] = -d / normal[axis];
        Self::try_new(point, normal)
    }
    /// Constructs the plane `ax + by + cz + d = 0`.
    ///
    /// # Panics
    ///
    /// Panics if `a`, `b`, and `c` are all approximately zero.
    #[track_caller]
    pub fn from_coefficients(a: T, b: T, c: T, d: T) -> Self {
        expect_valid(Self::try_from_coefficients(a, b, c, d))
    }

    /// Returns the point that the plane was constructed with.
    pub fn point(&self) -> Point3<T> {
        self.point
    }
    /// Returns the normal vector of the plane, which is never zero.
    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }
    /// Returns `[a, b, c, d]` such that the plane is `ax + by + cz + d = 0`.
    pub fn coefficients(&self) -> [T; 4] {
        let Vector3 { x, y, z } = self.normal;
        let d = -self.normal.dot(&self.point.to_vector());
        [x, y, z, d]
    }

    /// Returns the point where a line crosses the plane, or `None` if they are
    /// parallel.
    ///
    /// The line is treated as parallel whenever `normal · direction` is less
    /// than the tolerance. This is a signed comparison, so a line whose
    /// direction points against the normal is also reported as parallel.
    pub fn point_of_intersection(&self, line: &Line3<T>) -> Option<Point3<T>> {
        let dot_product = self.normal.dot(&line.direction);
        if dot_product < T::TOLERANCE {
            return None;
        }
        let t = -self.relative_distance_to(&line.point) / dot_product;
        Some(line.point_at(t))
    }

    /// Returns the line where two planes meet, or `None` if they are parallel.
    ///
    /// The direction of the line is `self.normal × other.normal`.
    pub fn line_of_intersection(&self, other: &Self) -> Option<Line3<T>> {
        let direction = self.normal.cross(&other.normal);
        if direction.is_zero_vector() {
            return None;
        }

        let n1 = self.normal;
        let n2 = other.normal;
        let e1 = n1.dot(&self.point.to_vector());
        let e2 = n2.dot(&other.point.to_vector());

        // Fix the coordinate along `axis` at zero and solve `n1 · p = e1`,
        // `n2 · p = e2` for the other two. The determinant of that system is
        // the `axis` component of `direction`.
        let Some(axis) = direction.first_nonzero_axis() else {
            debug_panic!("nonzero direction {direction} has no nonzero component");
            return None;
        };
        let det = direction[axis];
        let [i, j] = axis.others();
        log::trace!("solving line of intersection in the {i}{j} plane");
        let mut point = Point3::origin();
        point[i] = (e1 * n2[j] - e2 * n1[j]) / det;
        point[j] = (e2 * n1[i] - e1 * n2[i]) / det;

        Line3::try_new(point, direction).ok()
    }

    /// Returns the angle between the plane and a line in radians, in the range
    /// `[0, π/2]`. Returns zero if they are parallel.
    pub fn angle_between_line(&self, line: &Line3<T>) -> T {
        if self.is_parallel_to_line(line) {
            return T::zero();
        }
        let magnitudes = self.normal.magnitude() * line.direction.magnitude();
        if !exceeds_tolerance(magnitudes) {
            debug_panic!("normal {} or direction {} is too small", self.normal, line.direction);
            return T::zero();
        }
        clamp_unit(self.normal.dot(&line.direction).abs() / magnitudes).asin()
    }
    /// Returns the dihedral angle between two planes in radians, in the range
    /// `[0, π/2]`. Returns zero if they are parallel.
    pub fn angle_between_plane(&self, other: &Self) -> T {
        if self.is_parallel_to_plane(other) {
            return T::zero();
        }
        let magnitudes = self.normal.magnitude() * other.normal.magnitude();
        if !exceeds_tolerance(magnitudes) {
            debug_panic!("normals {} and {} are too small", self.normal, other.normal);
            return T::zero();
        }
        clamp_unit(self.normal.dot(&other.normal).abs() / magnitudes).acos()
    }

    /// Returns `normal · (point - self.point)`, whose sign indicates which side
    /// of the plane contains `point`. This is only a true distance if the
    /// normal has magnitude 1.
    pub fn relative_distance_to(&self, point: &Point3<T>) -> T {
        self.normal.dot(&(*point - self.point))
    }

    /// Returns the perpendicular distance from a point to the plane.
    pub fn distance_to_point(&self, point: &Point3<T>) -> T {
        let normal_magnitude = self.normal.magnitude();
        if !exceeds_tolerance(normal_magnitude) {
            debug_panic!("plane normal {} is too small", self.normal);
            return T::zero();
        }
        self.relative_distance_to(point).abs() / normal_magnitude
    }
    /// Returns the distance from a line to the plane, which is zero unless they
    /// are parallel.
    pub fn distance_to_line(&self, line: &Line3<T>) -> T {
        match self.is_parallel_to_line(line) {
            true => self.distance_to_point(&line.point),
            false => T::zero(),
        }
    }
    /// Returns the distance between two planes, which is zero unless they are
    /// parallel.
    pub fn distance_to_plane(&self, other: &Self) -> T {
        match self.is_parallel_to_plane(other) {
            true => self.distance_to_point(&other.point),
            false => T::zero(),
        }
    }

    /// Returns whether the plane contains a point.
    pub fn is_point_in_plane(&self, point: &Point3<T>) -> bool {
        is_zero(self.relative_distance_to(point))
    }
    /// Returns whether the plane contains every point on a line.
    pub fn is_line_in_plane(&self, line: &Line3<T>) -> bool {
        self.is_point_in_plane(&line.point) && self.is_point_in_plane(&line.point_at(T::one()))
    }

    /// Returns whether a line is parallel to the plane, including lines in the
    /// plane.
    pub fn is_parallel_to_line(&self, line: &Line3<T>) -> bool {
        self.normal.is_orthogonal_to(&line.direction)
    }
    /// Returns whether two planes are parallel, including coincident planes.
    pub fn is_parallel_to_plane(&self, other: &Self) -> bool {
        self.normal.is_parallel_to(&other.normal)
    }

    /// Returns whether a line is perpendicular to the plane.
    pub fn is_orthogonal_to_line(&self, line: &Line3<T>) -> bool {
        self.normal.is_parallel_to(&line.direction)
    }
    /// Returns whether two planes are perpendicular.
    pub fn is_orthogonal_to_plane(&self, other: &Self) -> bool {
        self.normal.is_orthogonal_to(&other.normal)
    }
}
