//! Coordinate axes.

use std::fmt;

/// Names for the three axes.
pub const AXIS_NAMES: &str = "XYZ";

/// Coordinate axis in 3D.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = *self as usize;
        write!(f, "{}", &AXIS_NAMES[i..i + 1])
    }
}

impl Axis {
    /// All three axes, in priority order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the other two axes, in cyclic order, such that
    /// `(self, a, b)` is a right-handed frame.
    pub fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::Z, Axis::X],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_others_are_cyclic() {
        for axis in Axis::ALL {
            let [i, j] = axis.others();
            assert_eq!(i.others(), [j, axis]);
            assert_eq!(j.others(), [axis, i]);
        }
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Y.to_string(), "Y");
    }
}
