//! Tracking of surface layout events.

use railkit_core::{Measurement, Origin, Point};

/// The layout state accumulated from surface events.
///
/// Content and viewport measurements arrive independently and may do so
/// in any order; the tracker merges them into one [`Measurement`]. The
/// screen-space [`Origin`] is latched on the first viewport event and
/// kept for the lifetime of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    measurement: Measurement,
    origin: Origin,
}

impl Layout {
    /// Creates an empty tracker with no observed layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// The merged measurements observed so far.
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// The latched screen-space origin of the surface.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Records a new content extent along the primary axis.
    ///
    /// Non-positive extents are stored as `1.0`, extending the division
    /// guard of [`Measurement`]'s default past the first event. A list
    /// emptying out reports a zero extent like any other resize.
    pub fn content_measured(&mut self, length: f32) {
        self.measurement.content = if length > 0.0 { length } else { 1.0 };
    }

    /// Records a new viewport layout.
    ///
    /// `main` and `cross` are the viewport extents along the primary and
    /// orthogonal axes; `origin` is the surface's screen-space anchor. The
    /// anchor is latched only on the first call, so a surface that
    /// relocates after mounting keeps its original one.
    pub fn viewport_measured(&mut self, main: f32, cross: f32, origin: Point) {
        self.measurement.viewport = main;
        self.measurement.cross = cross;

        if !self.origin.ready {
            log::debug!("latching surface origin at ({}, {})", origin.x, origin.y);

            self.origin = Origin {
                point: origin,
                ready: true,
            };
        }
    }
}
