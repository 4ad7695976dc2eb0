//! The seam between the engine and the host scrollable surface.

/// A scrollable surface the indicator can steer.
///
/// The surface stays the single owner of its scroll position: the engine
/// only issues absolute requests through [`scroll_to`] and never clamps
/// them, since the surface knows its own bounds and elasticity.
///
/// [`scroll_to`]: Self::scroll_to
pub trait ScrollSurface {
    /// Requests an absolute scroll offset along the primary axis.
    ///
    /// The offset may lie outside the scrollable range; the surface
    /// applies its own clamping or rubber-banding.
    fn scroll_to(&mut self, offset: f32);

    /// Whether growing scroll offsets move content in the direction
    /// opposite to growing pixel coordinates.
    ///
    /// Bottom-anchored lists report `true` here so thumb drags map to
    /// scroll deltas with the opposite sign.
    fn is_inverted(&self) -> bool {
        false
    }
}

/// A list-like surface driven by a scroll callback.
///
/// Covers list views, including bottom-anchored ones via
/// [`ListSurface::inverted`].
pub struct ListSurface<F> {
    scroll_to: F,
    inverted: bool,
}

impl<F: FnMut(f32)> ListSurface<F> {
    /// Creates a surface that forwards scroll requests to `scroll_to`.
    pub fn new(scroll_to: F) -> Self {
        Self {
            scroll_to,
            inverted: false,
        }
    }

    /// Marks the surface as bottom-anchored.
    #[must_use]
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

impl<F: FnMut(f32)> ScrollSurface for ListSurface<F> {
    fn scroll_to(&mut self, offset: f32) {
        (self.scroll_to)(offset);
    }

    fn is_inverted(&self) -> bool {
        self.inverted
    }
}

/// A pane-like surface driven by a scroll callback.
///
/// Covers free-form scroll panes, which never invert their axis.
pub struct PaneSurface<F> {
    scroll_to: F,
}

impl<F: FnMut(f32)> PaneSurface<F> {
    /// Creates a surface that forwards scroll requests to `scroll_to`.
    pub fn new(scroll_to: F) -> Self {
        Self { scroll_to }
    }
}

impl<F: FnMut(f32)> ScrollSurface for PaneSurface<F> {
    fn scroll_to(&mut self, offset: f32) {
        (self.scroll_to)(offset);
    }
}
