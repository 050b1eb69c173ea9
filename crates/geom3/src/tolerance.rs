//! Approximate comparison functions that automatically use
//! [`Scalar::TOLERANCE`].

use crate::Scalar;

/// Returns whether `x` has an absolute value less than the tolerance.
pub fn is_zero<T: Scalar>(x: T) -> bool {
    x.abs() < T::TOLERANCE
}

/// Returns whether `x` has an absolute value of at least the tolerance.
pub fn is_nonzero<T: Scalar>(x: T) -> bool {
    !is_zero(x)
}

/// Compares two numbers, but considers them equal if they are separated by
/// less than the tolerance.
pub fn approx_eq<T: Scalar>(a: T, b: T) -> bool {
    is_zero(a - b)
}

/// Returns whether `x` is strictly greater than the tolerance.
///
/// Used to guard divisions by magnitudes.
pub fn exceeds_tolerance<T: Scalar>(x: T) -> bool {
    x > T::TOLERANCE
}

/// Clamps a cosine or sine to `[-1, 1]` so that rounding error cannot push
/// `acos`/`asin` out of their domain.
pub(crate) fn clamp_unit<T: Scalar>(x: T) -> T {
    x.max(-T::one()).min(T::one())
}
