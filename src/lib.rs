//! Overlay scroll indicators with elastic overscroll.
//!
//! railkit renders no pixels of its own. It derives the geometry of a
//! scroll indicator thumb from the measurements of a host surface, keeps
//! that geometry live as scroll and layout events arrive, and translates
//! thumb drags back into scroll requests. Hosts draw the thumb from the
//! published observables however they like.
//!
//! # Example
//!
//! ```
//! use railkit::{Config, PaneSurface, Point, ScrollIndicator};
//!
//! let mut indicator = ScrollIndicator::new(
//!     Config::vertical(),
//!     PaneSurface::new(|offset| {
//!         // Hand the request to the host surface here.
//!         let _ = offset;
//!     }),
//! );
//!
//! indicator.viewport_resized(200.0, 320.0, Point::ORIGIN);
//! indicator.content_resized(1000.0);
//! indicator.scroll_changed(400.0);
//!
//! assert_eq!(indicator.thumb().length, 40.0);
//! assert_eq!(indicator.offset().get(), 80.0);
//! assert!(indicator.visible());
//! ```
//!
//! The crate is split in two: [`railkit_core`] (re-exported as
//! [`core`](crate::core)) holds the pure data model and
//! [`railkit_overlay`] (re-exported as [`overlay`]) the event-driven
//! engine. Everything commonly needed is re-exported at the root.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use railkit_core as core;
pub use railkit_overlay as overlay;

pub use crate::core::{
    Anchor, Axis, Measurement, Origin, ParsePositionError, Point, Position,
    Signal, Thumb, Watched,
};
pub use crate::overlay::{
    Config, Layout, ListSurface, PaneSurface, ScrollIndicator, ScrollSurface,
};
