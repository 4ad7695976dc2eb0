//! Per-instance indicator configuration.

use railkit_core::{Axis, Position};

/// The immutable configuration of one [`ScrollIndicator`] instance.
///
/// [`ScrollIndicator`]: crate::ScrollIndicator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The primary scroll axis.
    pub axis: Axis,

    /// Whether the indicator stays visible even when the content fits
    /// inside the viewport.
    pub persistent: bool,

    /// Where the track sits on the cross axis.
    pub position: Position,

    /// Thickness of the indicator on the cross axis, in pixels.
    pub thickness: f32,
}

impl Config {
    /// The default track thickness, in pixels.
    pub const DEFAULT_THICKNESS: f32 = 6.0;

    /// A configuration for a vertically scrolling surface.
    pub fn vertical() -> Self {
        Self::default()
    }

    /// A configuration for a horizontally scrolling surface.
    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            ..Self::default()
        }
    }

    /// Keeps the indicator visible even when the content fits.
    #[must_use]
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Sets the cross-axis position of the track.
    #[must_use]
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the cross-axis thickness of the indicator.
    #[must_use]
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            persistent: false,
            position: Position::default(),
            thickness: Self::DEFAULT_THICKNESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railkit_core::Anchor;

    #[test]
    fn test_defaults() {
        let config = Config::vertical();

        assert_eq!(config.axis, Axis::Vertical);
        assert!(!config.persistent);
        assert_eq!(config.position, Position::Anchor(Anchor::End));
        assert_eq!(config.thickness, 6.0);
    }

    #[test]
    fn test_builder_chain() {
        let config = Config::horizontal()
            .persistent(true)
            .position(Anchor::Start)
            .thickness(4.0);

        assert_eq!(config.axis, Axis::Horizontal);
        assert!(config.persistent);
        assert_eq!(config.position, Position::Anchor(Anchor::Start));
        assert_eq!(config.thickness, 4.0);
    }

    #[test]
    fn test_position_from_pixels() {
        let config = Config::vertical().position(12.0);

        assert_eq!(config.position, Position::Pixels(12.0));
    }
}
