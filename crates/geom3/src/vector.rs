//! Free vectors in 3D.

use std::ops::*;

use crate::tolerance::{clamp_unit, exceeds_tolerance, is_nonzero};
use crate::{Axis, GeometryError, Point3, Scalar};

/// Single-precision vector.
pub type Vector3f = Vector3<f32>;
/// Double-precision vector.
pub type Vector3d = Vector3<f64>;

/// Free vector in 3D, representing a direction and magnitude not tied to any
/// location.
///
/// Equality is approximate; see [`Scalar::TOLERANCE`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone)]
pub struct Vector3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    /// Constructs a vector from its components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
    /// Returns the zero vector.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }
    /// Returns a unit vector along an axis.
    pub fn unit(axis: Axis) -> Self {
        let mut ret = Self::zero();
        ret[axis] = T::one();
        ret
    }

    /// Returns the magnitude of the vector.
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }
    /// Returns the squared magnitude of the vector.
    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    /// Returns a copy of the vector with magnitude 1.
    ///
    /// Returns an error if the magnitude is within the tolerance of zero.
    pub fn normalized(&self) -> Result<Self, GeometryError> {
        let magnitude = self.magnitude();
        if !exceeds_tolerance(magnitude) {
            return Err(GeometryError::ZeroMagnitude);
        }
        Ok(*self / magnitude)
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// Returns the cross product of this vector with another.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns the angle between two vectors in radians, in the range
    /// `[0, π]`.
    ///
    /// Returns an error if either vector is approximately zero.
    pub fn angle_between(&self, other: &Self) -> Result<T, GeometryError> {
        let magnitudes = self.magnitude() * other.magnitude();
        if !exceeds_tolerance(magnitudes) {
            return Err(GeometryError::ZeroMagnitude);
        }
        Ok(clamp_unit(self.dot(other) / magnitudes).acos())
    }

    /// Returns the component of the vector that is parallel to `other`.
    ///
    /// Returns an error if `other` is approximately zero.
    pub fn project_onto(&self, other: &Self) -> Result<Self, GeometryError> {
        let other_magnitude_squared = other.magnitude_squared();
        if !exceeds_tolerance(other_magnitude_squared) {
            return Err(GeometryError::ZeroMagnitude);
        }
        Ok(*other * (self.dot(other) / other_magnitude_squared))
    }

    /// Returns the point at this position relative to the origin.
    pub fn to_point(self) -> Point3<T> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Returns whether the squared magnitude of the vector is within the
    /// tolerance of zero.
    pub fn is_zero_vector(&self) -> bool {
        self.magnitude_squared() < T::TOLERANCE
    }
    /// Returns whether two vectors are parallel or antiparallel. The zero
    /// vector is parallel to everything.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.cross(other).is_zero_vector()
    }
    /// Returns whether two vectors are orthogonal. The zero vector is
    /// orthogonal to everything.
    pub fn is_orthogonal_to(&self, other: &Self) -> bool {
        self.dot(other).abs() < T::TOLERANCE
    }

    /// Returns the first axis, in the order X, Y, Z, along which the vector
    /// has a component that is not approximately zero.
    pub fn first_nonzero_axis(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| is_nonzero(self[axis]))
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}
impl<T> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T> Index<Axis> for Vector3<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
impl<T> IndexMut<Axis> for Vector3<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl_display_components!(impl for Vector3, "<", ">");
impl_approx_eq_components!(impl for Vector3);

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}
impl<T: Scalar> Neg for &Vector3<T> {
    type Output = Vector3<T>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}
impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}
impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}
impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}
impl<T: Scalar> Mul<T> for &Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: T) -> Self::Output {
        *self * rhs
    }
}
impl<T: Scalar> Div<T> for &Vector3<T> {
    type Output = Vector3<T>;

    fn div(self, rhs: T) -> Self::Output {
        *self / rhs
    }
}

impl_forward_bin_ops_to_owned! {
    impl Add<Vector3<T>> for Vector3<T> { fn add() -> Vector3<T> }
    impl Sub<Vector3<T>> for Vector3<T> { fn sub() -> Vector3<T> }
}

impl_left_scalar_mul!(impl for Vector3<f32, f64>);

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
        self.z = self.z + rhs.z;
    }
}
impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
        self.z = self.z - rhs.z;
    }
}
impl<T: Scalar> AddAssign<&Vector3<T>> for Vector3<T> {
    fn add_assign(&mut self, rhs: &Vector3<T>) {
        *self += *rhs;
    }
}
impl<T: Scalar> SubAssign<&Vector3<T>> for Vector3<T> {
    fn sub_assign(&mut self, rhs: &Vector3<T>) {
        *self -= *rhs;
    }
}
impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x = self.x * rhs;
        self.y = self.y * rhs;
        self.z = self.z * rhs;
    }
}
impl<T: Scalar> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, rhs: T) {
        self.x = self.x / rhs;
        self.y = self.y / rhs;
        self.z = self.z / rhs;
    }
}

impl<T: Scalar> std::iter::Sum for Vector3<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |a, b| a + b)
    }
}
