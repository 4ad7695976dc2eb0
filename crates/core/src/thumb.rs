//! Thumb geometry derived from surface measurements.

use crate::{Measurement, Signal};

/// The derived geometry of an indicator thumb.
///
/// Recomputed whenever the surface [`Measurement`] changes; it has no
/// identity of its own and is never diffed against history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thumb {
    /// Length of the thumb along the primary axis, in pixels.
    pub length: f32,

    /// Maximum distance the thumb travels within the track without
    /// shrinking, in pixels.
    pub travel: f32,
}

impl Thumb {
    /// Derives the thumb geometry for the given measurements.
    ///
    /// The thumb keeps the proportion `length / viewport == viewport /
    /// content`, so its size represents the visible share of the content.
    /// When the content fits inside the viewport the thumb spans the whole
    /// track, and `travel` floors at `1.0` to keep downstream divisions
    /// well-defined.
    pub fn fit(measurement: Measurement) -> Self {
        let length = if measurement.content > measurement.viewport {
            measurement.viewport * measurement.viewport / measurement.content
        } else {
            measurement.viewport
        };

        Self {
            length,
            travel: (measurement.viewport - length).max(1.0),
        }
    }

    /// Maps a surface scroll offset to the live [`Signal`] for this thumb.
    ///
    /// The offset is a linear extrapolation and is intentionally not
    /// clamped to `[0, travel]`: when the surface rubber-bands past its
    /// bounds, the thumb offset follows it out of range. The scale
    /// branches on the overscroll direction so that the leading edge stays
    /// pinned against the track boundary while the trailing edge shrinks
    /// away from it. Raw values are emitted; [`Signal::shrink`] is the
    /// consumer-side clamp.
    pub fn signal_at(self, scroll_offset: f32, measurement: Measurement) -> Signal {
        let offset = scroll_offset * measurement.viewport / measurement.content;

        let scale = if self.length >= measurement.viewport {
            // A thumb spanning the whole track has both edges pinned and
            // cannot shrink.
            1.0
        } else if offset >= 0.0 {
            // Leading edge pinned at the end of the track:
            // offset == travel + (length - length * scale) / 2
            (self.length + 2.0 * (self.travel - offset)) / self.length
        } else {
            // Leading edge pinned at the start:
            // offset == (length - length * scale) / 2
            (self.length + 2.0 * offset) / self.length
        };

        Signal { offset, scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn overflowing() -> (Thumb, Measurement) {
        let measurement = Measurement::new(1000.0, 200.0, 320.0);

        (Thumb::fit(measurement), measurement)
    }

    #[test]
    fn test_size_formula_is_exact() {
        for (content, viewport) in [(1000.0, 200.0), (350.0, 350.0), (123.0, 77.0)] {
            let thumb = Thumb::fit(Measurement::new(content, viewport, 0.0));

            assert!(
                approx(thumb.length * content, viewport * viewport),
                "length * content != viewport^2 for {content}x{viewport}"
            );
        }
    }

    #[test]
    fn test_thumb_spans_track_when_content_fits() {
        let thumb = Thumb::fit(Measurement::new(150.0, 200.0, 320.0));

        assert_eq!(thumb.length, 200.0);
        assert_eq!(thumb.travel, 1.0);
    }

    #[test]
    fn test_travel_floors_at_one() {
        // Nearly-fitting content would otherwise leave a sub-pixel travel.
        let thumb = Thumb::fit(Measurement::new(200.5, 200.0, 320.0));

        assert_eq!(thumb.travel, 1.0);
    }

    #[test]
    fn test_overflowing_content_geometry() {
        let (thumb, _) = overflowing();

        assert_eq!(thumb.length, 40.0);
        assert_eq!(thumb.travel, 160.0);
    }

    #[test]
    fn test_signal_at_rest() {
        let (thumb, measurement) = overflowing();
        let signal = thumb.signal_at(0.0, measurement);

        assert_eq!(signal.offset, 0.0);
        assert_eq!(signal.shrink(), 1.0);
    }

    #[test]
    fn test_signal_at_end_of_content() {
        let (thumb, measurement) = overflowing();
        let signal = thumb.signal_at(800.0, measurement);

        assert_eq!(signal.offset, thumb.travel);
        assert_eq!(signal.scale, 1.0);
    }

    #[test]
    fn test_overscroll_before_start_shrinks() {
        let (thumb, measurement) = overflowing();
        let signal = thumb.signal_at(-20.0, measurement);

        assert_eq!(signal.offset, -4.0);
        assert_eq!(signal.scale, 0.8);
    }

    #[test]
    fn test_overscroll_past_end_shrinks() {
        let (thumb, measurement) = overflowing();
        // 20 pixels past the end of the content.
        let signal = thumb.signal_at(820.0, measurement);

        assert_eq!(signal.offset, 164.0);
        assert_eq!(signal.scale, 0.8);
    }

    #[test]
    fn test_shrink_is_continuous_at_zero() {
        let (thumb, measurement) = overflowing();

        let below = thumb.signal_at(-1e-3, measurement).shrink();
        let above = thumb.signal_at(1e-3, measurement).shrink();

        assert!(approx(below, above));
        assert!(approx(below, 1.0));
    }

    #[test]
    fn test_shrink_is_continuous_at_travel_end() {
        let (thumb, measurement) = overflowing();

        let inside = thumb.signal_at(800.0 - 1e-3, measurement).shrink();
        let outside = thumb.signal_at(800.0 + 1e-3, measurement).shrink();

        assert!(approx(inside, outside));
        assert!(approx(inside, 1.0));
    }

    #[test]
    fn test_no_shrink_inside_travel_range() {
        let (thumb, measurement) = overflowing();

        for scroll_offset in [0.0, 100.0, 400.0, 799.0, 800.0] {
            let signal = thumb.signal_at(scroll_offset, measurement);

            assert_eq!(signal.shrink(), 1.0, "shrink at {scroll_offset}");
        }
    }

    #[test]
    fn test_full_track_thumb_never_shrinks() {
        let measurement = Measurement::new(150.0, 200.0, 320.0);
        let thumb = Thumb::fit(measurement);

        for scroll_offset in [-30.0, 0.0, 10.0, 50.0] {
            let signal = thumb.signal_at(scroll_offset, measurement);

            assert_eq!(signal.scale, 1.0, "scale at {scroll_offset}");
        }
    }

    #[test]
    fn test_drag_round_trip() {
        let (thumb, measurement) = overflowing();

        for pixel_delta in [12.0, -7.5, 160.0] {
            let scroll_delta = measurement.scroll_delta(pixel_delta);
            let signal = thumb.signal_at(scroll_delta, measurement);

            assert!(
                approx(signal.offset, pixel_delta),
                "round trip for {pixel_delta}"
            );
        }
    }
}
