/// Implements a binary operator for every combination of owned and borrowed
/// operands, given an implementation for owned `Copy` operands.
macro_rules! impl_forward_bin_ops_to_owned {
    () => {};

    (
        impl $trait:ident<$rhs:ty> for $type:ty { fn $func:ident() -> $ret:ty }
        $($remainder:tt)*
    ) => {
        impl<'a, T: $crate::Scalar> $trait<$rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: $rhs) -> $ret {
                $trait::$func(*self, rhs)
            }
        }
        impl<'a, T: $crate::Scalar> $trait<&'a $rhs> for $type {
            type Output = $ret;

            fn $func(self, rhs: &'a $rhs) -> $ret {
                $trait::$func(self, *rhs)
            }
        }
        impl<'a, 'b, T: $crate::Scalar> $trait<&'b $rhs> for &'a $type {
            type Output = $ret;

            fn $func(self, rhs: &'b $rhs) -> $ret {
                $trait::$func(*self, *rhs)
            }
        }
        impl_forward_bin_ops_to_owned! { $($remainder)* }
    };
}

/// Implements `scalar * value` for concrete scalar types, given an
/// implementation of `value * scalar`.
macro_rules! impl_left_scalar_mul {
    (impl for $generic:ident<$($float:ty),+>) => {
        $(
            impl std::ops::Mul<$generic<$float>> for $float {
                type Output = $generic<$float>;

                fn mul(self, rhs: $generic<$float>) -> Self::Output {
                    rhs * self
                }
            }
            impl std::ops::Mul<&$generic<$float>> for $float {
                type Output = $generic<$float>;

                fn mul(self, rhs: &$generic<$float>) -> Self::Output {
                    *rhs * self
                }
            }
        )+
    };
}

/// Implements `Display` for a three-component type, forwarding the formatter
/// options (such as precision) to each component.
macro_rules! impl_display_components {
    (impl for $type:ident, $open:literal, $close:literal) => {
        impl<T: $crate::Scalar> std::fmt::Display for $type<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, $open)?;
                std::fmt::Display::fmt(&self.x, f)?;
                write!(f, ", ")?;
                std::fmt::Display::fmt(&self.y, f)?;
                write!(f, ", ")?;
                std::fmt::Display::fmt(&self.z, f)?;
                write!(f, $close)?;
                Ok(())
            }
        }
    };
}

/// Implements tolerance-based `PartialEq` and `approx::AbsDiffEq` for a type
/// with `x`, `y`, and `z` fields.
macro_rules! impl_approx_eq_components {
    (impl for $type:ident) => {
        /// Component-wise comparison within [`Scalar::TOLERANCE`].
        ///
        /// This relation is not transitive.
        impl<T: $crate::Scalar> PartialEq for $type<T> {
            fn eq(&self, other: &Self) -> bool {
                $crate::tolerance::approx_eq(self.x, other.x)
                    && $crate::tolerance::approx_eq(self.y, other.y)
                    && $crate::tolerance::approx_eq(self.z, other.z)
            }
        }

        impl<T: $crate::Scalar> approx::AbsDiffEq for $type<T> {
            type Epsilon = T;

            fn default_epsilon() -> Self::Epsilon {
                T::TOLERANCE
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.x.abs_diff_eq(&other.x, epsilon)
                    && self.y.abs_diff_eq(&other.y, epsilon)
                    && self.z.abs_diff_eq(&other.z, epsilon)
            }
        }
    };
}
