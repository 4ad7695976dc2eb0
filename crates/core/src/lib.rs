//! The essential ideas of railkit.
//!
//! This crate holds the pure data model of an overlay scroll indicator:
//! the measurements taken from a scrollable surface, the thumb geometry
//! derived from them, and the live signals a renderer consumes each frame.
//! Nothing here talks to a host UI; the event-driven engine lives in
//! `railkit_overlay`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod axis;
mod measurement;
mod point;
mod position;
mod signal;
mod thumb;
mod watched;

pub use axis::Axis;
pub use measurement::{Measurement, Origin};
pub use point::Point;
pub use position::{Anchor, ParsePositionError, Position};
pub use signal::Signal;
pub use thumb::Thumb;
pub use watched::Watched;
