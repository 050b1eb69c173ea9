//! Formatting helpers that didn't fit anywhere else.

use std::fmt;

use crate::Scalar;

/// Writes ` + |value|suffix` or ` - |value|suffix`, forwarding the formatter
/// options (such as precision) to the value.
pub(crate) fn write_signed_term<T: Scalar>(
    f: &mut fmt::Formatter<'_>,
    value: T,
    suffix: &str,
) -> fmt::Result {
    match value >= T::zero() {
        true => write!(f, " + ")?,
        false => write!(f, " - ")?,
    }
    fmt::Display::fmt(&value.abs(), f)?;
    f.write_str(suffix)
}
