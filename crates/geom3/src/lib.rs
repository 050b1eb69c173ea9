//! Three-dimensional vectors, points, lines, and planes, with the usual
//! relational queries between them: intersection, distance, angle,
//! parallelism, and orthogonality.
//!
//! Everything is generic over a [`Scalar`], which is implemented for `f32` and
//! `f64`. Comparisons are approximate, using [`Scalar::TOLERANCE`].
//!
//! ```
//! use geom3::prelude::*;
//!
//! let x_axis = Line3d::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
//! let y_axis = Line3d::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
//! assert_eq!(x_axis.point_of_intersection(&y_axis), Some(Point3::origin()));
//! ```

pub use {approx, num_traits as num};

/// Small floating-point value used for comparisons, in every precision.
pub const EPSILON: f64 = 0.00001;

/// Asserts that both arguments are approximately equal, using [`EPSILON`].
///
/// Only works for double-precision values.
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

#[macro_use]
mod impl_macros;

pub mod axis;
pub mod error;
pub mod line;
pub mod plane;
pub mod point;
pub mod scalar;
pub mod tolerance;
pub mod vector;

mod util;

#[cfg(test)]
mod tests;

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::error::GeometryError;
    pub use crate::line::*;
    pub use crate::plane::*;
    pub use crate::point::*;
    pub use crate::scalar::Scalar;
    pub use crate::tolerance::*;
    pub use crate::vector::*;
    pub use crate::EPSILON;
}
pub use prelude::*;
