//! Euclidean points in 3D.

use std::ops::*;

use crate::{Axis, Scalar, Vector3};

/// Single-precision point.
pub type Point3f = Point3<f32>;
/// Double-precision point.
pub type Point3d = Point3<f64>;

/// Euclidean point in 3D.
///
/// Subtracting two points gives the displacement [`Vector3`] between them;
/// adding a vector to a point translates it. Equality is approximate; see
/// [`Scalar::TOLERANCE`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone)]
pub struct Point3<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
    /// Z coordinate.
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    /// Constructs a point from its coordinates.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
    /// Returns the origin.
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns the vector from the origin to the point.
    pub fn to_vector(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl<T> From<[T; 3]> for Point3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}
impl<T> From<Point3<T>> for [T; 3] {
    fn from(p: Point3<T>) -> Self {
        [p.x, p.y, p.z]
    }
}

impl<T> Index<Axis> for Point3<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &Self::Output {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
impl<T> IndexMut<Axis> for Point3<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl_display_components!(impl for Point3, "(", ")");
impl_approx_eq_components!(impl for Point3);

impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    fn add(mut self, rhs: Vector3<T>) -> Self::Output {
        self += rhs;
        self
    }
}
impl<T: Scalar> Sub<Vector3<T>> for Point3<T> {
    type Output = Point3<T>;

    fn sub(mut self, rhs: Vector3<T>) -> Self::Output {
        self -= rhs;
        self
    }
}
impl<T: Scalar> Sub<Point3<T>> for Point3<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: Point3<T>) -> Self::Output {
        self.to_vector() - rhs.to_vector()
    }
}

impl_forward_bin_ops_to_owned! {
    impl Add<Vector3<T>> for Point3<T> { fn add() -> Point3<T> }
    impl Sub<Vector3<T>> for Point3<T> { fn sub() -> Point3<T> }
    impl Sub<Point3<T>> for Point3<T> { fn sub() -> Vector3<T> }
}

impl<T: Scalar> AddAssign<Vector3<T>> for Point3<T> {
    fn add_assign(&mut self, rhs: Vector3<T>) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
        self.z = self.z + rhs.z;
    }
}
impl<T: Scalar> AddAssign<&Vector3<T>> for Point3<T> {
    fn add_assign(&mut self, rhs: &Vector3<T>) {
        *self += *rhs;
    }
}
impl<T: Scalar> SubAssign<Vector3<T>> for Point3<T> {
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
        self.z = self.z - rhs.z;
    }
}
impl<T: Scalar> SubAssign<&Vector3<T>> for Point3<T> {
    fn sub_assign(&mut self, rhs: &Vector3<T>) {
        *self -= *rhs;
    }
}
