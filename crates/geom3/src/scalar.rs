//! Floating-point types usable as coordinates.

use std::fmt;

use approx::AbsDiffEq;
use num_traits::{Float, FloatConst};

use crate::EPSILON;

/// Floating-point type used for coordinates.
///
/// Implemented for `f32` and `f64`. Rust has no native extended-precision
/// float; such a type can opt in by implementing this trait.
pub trait Scalar:
    Float
    + FloatConst
    + AbsDiffEq<Epsilon = Self>
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Threshold below which a quantity is considered zero, and two
    /// quantities are considered equal.
    const TOLERANCE: Self;
}

impl Scalar for f32 {
    const TOLERANCE: Self = EPSILON as f32;
}

impl Scalar for f64 {
    const TOLERANCE: Self = EPSILON;
}
