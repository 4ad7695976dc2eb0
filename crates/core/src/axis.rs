//! The scroll direction of an indicator.

use crate::Point;

/// The primary axis of a scroll indicator.
///
/// Chosen once per instance and immutable for its lifetime; the
/// orthogonal axis carries the track placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Content scrolls vertically; the thumb travels along `y`.
    #[default]
    Vertical,

    /// Content scrolls horizontally; the thumb travels along `x`.
    Horizontal,
}

impl Axis {
    /// Returns the orthogonal axis.
    #[must_use]
    pub fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Returns the component of `(x, y)` that lies along this axis.
    pub fn main(self, x: f32, y: f32) -> f32 {
        match self {
            Self::Vertical => y,
            Self::Horizontal => x,
        }
    }

    /// Builds a [`Point`] from a main-axis and a cross-axis component.
    pub fn pack(self, main: f32, cross: f32) -> Point {
        match self {
            Self::Vertical => Point::new(cross, main),
            Self::Horizontal => Point::new(main, cross),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross() {
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
    }

    #[test]
    fn test_pack() {
        assert_eq!(Axis::Vertical.pack(10.0, 3.0), Point::new(3.0, 10.0));
        assert_eq!(Axis::Horizontal.pack(10.0, 3.0), Point::new(10.0, 3.0));
    }

    #[test]
    fn test_main() {
        assert_eq!(Axis::Vertical.main(1.0, 2.0), 2.0);
        assert_eq!(Axis::Horizontal.main(1.0, 2.0), 1.0);
    }
}
