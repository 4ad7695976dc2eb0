//! Visibility and track placement policy.

use railkit_core::{Anchor, Axis, Measurement, Origin, Point, Position, Thumb};

/// Whether the indicator should render at all.
///
/// A non-persistent indicator only shows while the content overflows the
/// viewport, which is exactly when the thumb is shorter than the track.
/// Nothing renders before the first viewport layout has been observed.
pub fn should_render(
    persistent: bool,
    thumb: Thumb,
    measurement: Measurement,
    origin: Origin,
) -> bool {
    (persistent || thumb.length < measurement.viewport) && origin.ready
}

/// Resolves the track's offset from the surface origin.
///
/// The main-axis component is always zero; the track spans the viewport
/// from its start. The cross-axis component follows `position`, measured
/// from the start edge and accounting for the indicator `thickness` so
/// that [`Anchor::End`] leaves the track fully inside the surface.
pub fn place(axis: Axis, position: Position, cross: f32, thickness: f32) -> Point {
    let offset = match position {
        Position::Anchor(Anchor::Start) => 0.0,
        Position::Anchor(Anchor::Center) => (cross - thickness) / 2.0,
        Position::Anchor(Anchor::End) => cross - thickness,
        Position::Pixels(pixels) => pixels,
    };

    axis.pack(0.0, offset)
}
