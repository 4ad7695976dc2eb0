//! Cross-axis position specifiers for the indicator track.

use std::str::FromStr;

use thiserror::Error;

/// A named anchor along the cross axis of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Anchor {
    /// Against the start edge: left for vertical indicators, top for
    /// horizontal ones.
    Start,

    /// Centered on the cross axis.
    Center,

    /// Against the end edge, where native scrollbars usually sit.
    #[default]
    End,
}

/// Where the indicator track sits on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Position {
    /// A named anchor.
    Anchor(Anchor),

    /// An explicit pixel offset from the start edge of the cross axis.
    Pixels(f32),
}

impl Default for Position {
    fn default() -> Self {
        Self::Anchor(Anchor::default())
    }
}

impl From<Anchor> for Position {
    fn from(anchor: Anchor) -> Self {
        Self::Anchor(anchor)
    }
}

impl From<f32> for Position {
    fn from(pixels: f32) -> Self {
        Self::Pixels(pixels)
    }
}

/// Error produced when parsing a [`Position`] from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsePositionError {
    /// The input named no known anchor and was not a number.
    #[error("unknown position specifier: {0:?}")]
    Unknown(String),

    /// The numeric offset was not a finite number.
    #[error("position offset must be finite, got {0}")]
    NotFinite(f32),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"start"`, `"center"`, `"end"`, or a pixel offset such as
    /// `"12.5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "start" => Ok(Self::Anchor(Anchor::Start)),
            "center" => Ok(Self::Anchor(Anchor::Center)),
            "end" => Ok(Self::Anchor(Anchor::End)),
            other => {
                let pixels: f32 = other
                    .parse()
                    .map_err(|_| ParsePositionError::Unknown(other.to_owned()))?;

                if pixels.is_finite() {
                    Ok(Self::Pixels(pixels))
                } else {
                    Err(ParsePositionError::NotFinite(pixels))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_anchors() {
        assert_eq!("start".parse(), Ok(Position::Anchor(Anchor::Start)));
        assert_eq!("center".parse(), Ok(Position::Anchor(Anchor::Center)));
        assert_eq!(" end ".parse(), Ok(Position::Anchor(Anchor::End)));
    }

    #[test]
    fn test_parse_pixels() {
        assert_eq!("12.5".parse(), Ok(Position::Pixels(12.5)));
        assert_eq!("-4".parse(), Ok(Position::Pixels(-4.0)));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "middle".parse::<Position>(),
            Err(ParsePositionError::Unknown("middle".to_owned()))
        );
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(
            "inf".parse::<Position>(),
            Err(ParsePositionError::NotFinite(f32::INFINITY))
        );
    }
}
