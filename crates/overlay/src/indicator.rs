//! The indicator engine.

use railkit_core::{Point, Signal, Thumb, Watched};

use crate::{Config, Layout, ScrollSurface, placement};

/// The pointer interaction state of an indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Interaction {
    Idle,
    Dragging {
        /// Whether the surface was inverted when the drag started.
        ///
        /// Read once per session so a surface flipping mid-drag cannot
        /// reverse the gesture under the pointer.
        inverted: bool,
        /// The surface scroll offset at the moment the thumb was grabbed.
        grabbed_at: f32,
        /// Pointer pixels accumulated along the primary axis.
        accumulated: f32,
    },
}

/// An overlay scroll indicator bound to one scrollable surface.
///
/// The indicator is fed surface events ([`content_resized`],
/// [`viewport_resized`], [`scroll_changed`]) and pointer events
/// ([`drag_started`], [`drag_moved`], [`drag_ended`]). After every event
/// it re-derives the thumb geometry and publishes the live signal into
/// the [`offset`] and [`scale`] observables.
///
/// The scroll position itself is never stored authoritatively here: drags
/// issue requests through the [`ScrollSurface`] seam and the surface
/// reports the outcome back via [`scroll_changed`].
///
/// [`content_resized`]: Self::content_resized
/// [`viewport_resized`]: Self::viewport_resized
/// [`scroll_changed`]: Self::scroll_changed
/// [`drag_started`]: Self::drag_started
/// [`drag_moved`]: Self::drag_moved
/// [`drag_ended`]: Self::drag_ended
/// [`offset`]: Self::offset
/// [`scale`]: Self::scale
pub struct ScrollIndicator<S> {
    config: Config,
    surface: S,
    layout: Layout,
    thumb: Thumb,
    scroll_offset: f32,
    offset: Watched<f32>,
    scale: Watched<f32>,
    interaction: Interaction,
}

impl<S: ScrollSurface> ScrollIndicator<S> {
    /// Creates an indicator steering the given surface.
    pub fn new(config: Config, surface: S) -> Self {
        let layout = Layout::new();

        Self {
            config,
            surface,
            layout,
            thumb: Thumb::fit(layout.measurement()),
            scroll_offset: 0.0,
            offset: Watched::new(0.0),
            scale: Watched::new(1.0),
            interaction: Interaction::Idle,
        }
    }

    /// Handles a change of the content extent along the primary axis.
    pub fn content_resized(&mut self, length: f32) {
        self.layout.content_measured(length);
        self.refit();
    }

    /// Handles a viewport layout event.
    ///
    /// `main` and `cross` are the viewport extents along the primary and
    /// orthogonal axes; `origin` is the surface's screen-space anchor,
    /// latched on the first call only.
    pub fn viewport_resized(&mut self, main: f32, cross: f32, origin: Point) {
        self.layout.viewport_measured(main, cross, origin);
        self.refit();
    }

    /// Handles a scroll offset reported by the surface.
    pub fn scroll_changed(&mut self, offset: f32) {
        self.scroll_offset = offset;
        self.publish();
    }

    /// Begins a thumb drag session.
    ///
    /// Starting a new session while one is active restarts it from the
    /// current scroll offset.
    pub fn drag_started(&mut self) {
        let inverted = self.surface.is_inverted();

        log::debug!(
            "drag started at scroll offset {} (inverted: {inverted})",
            self.scroll_offset
        );

        self.interaction = Interaction::Dragging {
            inverted,
            grabbed_at: self.scroll_offset,
            accumulated: 0.0,
        };
    }

    /// Handles a pointer movement of `pixel_delta` along the primary axis.
    ///
    /// Translates the accumulated pointer distance back into an absolute
    /// scroll offset and requests it from the surface. Ignored while no
    /// drag session is active, or before the first viewport layout has
    /// established a pixel mapping.
    pub fn drag_moved(&mut self, pixel_delta: f32) {
        let measurement = self.layout.measurement();

        if measurement.viewport <= 0.0 {
            return;
        }

        let Interaction::Dragging {
            inverted,
            grabbed_at,
            ref mut accumulated,
        } = self.interaction
        else {
            return;
        };

        *accumulated += pixel_delta;

        let pixels = if inverted {
            -*accumulated
        } else {
            *accumulated
        };

        let target = grabbed_at + measurement.scroll_delta(pixels);

        self.surface.scroll_to(target);
    }

    /// Ends the active drag session, if any.
    pub fn drag_ended(&mut self) {
        if self.is_dragging() {
            log::debug!("drag ended at scroll offset {}", self.scroll_offset);
        }

        self.interaction = Interaction::Idle;
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging { .. })
    }

    /// The current thumb geometry.
    pub fn thumb(&self) -> Thumb {
        self.thumb
    }

    /// The published thumb offset along the track, in pixels.
    pub fn offset(&self) -> &Watched<f32> {
        &self.offset
    }

    /// The published raw deformation factor of the thumb.
    pub fn scale(&self) -> &Watched<f32> {
        &self.scale
    }

    /// The last published signal as one sample.
    pub fn signal(&self) -> Signal {
        Signal {
            offset: self.offset.get(),
            scale: self.scale.get(),
        }
    }

    /// Whether the indicator should render right now.
    pub fn visible(&self) -> bool {
        placement::should_render(
            self.config.persistent,
            self.thumb,
            self.layout.measurement(),
            self.layout.origin(),
        )
    }

    /// The screen-space position of the track's starting corner.
    ///
    /// Only meaningful once [`visible`](Self::visible) can return `true`;
    /// before the first viewport layout the origin is still unlatched.
    pub fn track_anchor(&self) -> Point {
        let placement = placement::place(
            self.config.axis,
            self.config.position,
            self.layout.measurement().cross,
            self.config.thickness,
        );

        self.layout.origin().point + placement
    }

    /// The configuration this indicator was created with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The accumulated layout state.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The steered surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The steered surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn refit(&mut self) {
        self.thumb = Thumb::fit(self.layout.measurement());
        self.publish();
    }

    fn publish(&mut self) {
        let signal = self
            .thumb
            .signal_at(self.scroll_offset, self.layout.measurement());

        self.offset.set(signal.offset);
        self.scale.set(signal.scale);
    }
}
