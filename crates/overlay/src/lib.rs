//! The event-driven engine behind a railkit indicator.
//!
//! An overlay scroll indicator mirrors the scroll position of a host
//! surface without ever becoming part of its layout. The engine in this
//! crate consumes the surface's layout and scroll events, keeps the thumb
//! geometry of [`railkit_core`] up to date, and pushes the resulting
//! signals into [`Watched`](railkit_core::Watched) observables a renderer
//! reads each frame.
//!
//! Dragging the thumb runs through the same machinery in reverse: pointer
//! deltas are translated back into scroll requests and handed to the
//! [`ScrollSurface`] seam, so the host surface stays the single owner of
//! its scroll position.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use railkit_core as core;

mod config;
mod indicator;
mod layout;
mod placement;
mod surface;

pub use config::Config;
pub use indicator::ScrollIndicator;
pub use layout::Layout;
pub use placement::{place, should_render};
pub use surface::{ListSurface, PaneSurface, ScrollSurface};
