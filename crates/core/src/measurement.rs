//! Layout measurements reported by a scrollable surface.

use crate::Point;

/// The lengths observed on a scrollable surface.
///
/// `content` and `viewport` run along the primary axis; `cross` is the
/// viewport extent along the orthogonal axis. All values are trusted
/// measurements delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Total content extent along the primary axis.
    pub content: f32,

    /// Viewport extent along the primary axis.
    pub viewport: f32,

    /// Viewport extent along the orthogonal axis.
    pub cross: f32,
}

impl Measurement {
    /// Creates a [`Measurement`] from explicit lengths.
    pub fn new(content: f32, viewport: f32, cross: f32) -> Self {
        Self {
            content,
            viewport,
            cross,
        }
    }

    /// Maps a pixel delta on the thumb to a scroll delta on the surface.
    ///
    /// Exact inverse of the forward offset mapping in
    /// [`Thumb::signal_at`](crate::Thumb::signal_at). The result is not
    /// clamped; the surface applies its own bounds when the request is
    /// issued.
    pub fn scroll_delta(self, pixel_delta: f32) -> f32 {
        pixel_delta * self.content / self.viewport
    }
}

impl Default for Measurement {
    /// An unmeasured surface.
    ///
    /// `content` starts at `1.0` rather than `0.0` so the derived
    /// geometry never divides by zero before the first content-size
    /// event.
    fn default() -> Self {
        Self {
            content: 1.0,
            viewport: 0.0,
            cross: 0.0,
        }
    }
}

/// The screen-space anchor of the scrollable surface.
///
/// Latched on the first viewport layout and assumed stable afterwards;
/// a surface that relocates post-mount keeps its original anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Origin {
    /// Top-left corner of the surface in screen coordinates.
    pub point: Point,

    /// Whether a layout event has been observed yet.
    ///
    /// While `false`, no geometry is valid and the indicator must not
    /// render.
    pub ready: bool,
}
