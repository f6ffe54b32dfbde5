//! Approximating circular and elliptic arcs with cubic Bézier curves.
//!
//! An arc is approximated on the unit circle first, one sub-arc of at most
//! `max_segment_angle` at a time, then mapped onto its ellipse by scaling by
//! the radii, rotating by the ellipse's rotation, and translating to its
//! center. The resulting segments are written to a [`PathSink`].
//!
//! Every segment endpoint lies exactly on the ellipse (up to floating point
//! rounding). Only the curve between endpoints is approximate.

pub mod draw;
mod error;
pub mod mapper;
pub mod path;
pub mod segment;
pub mod sink;
pub mod solver;

#[cfg(feature = "lyon")]
mod lyon_sink;

pub use draw::{draw_arc, draw_circle, draw_ellipse};
pub use error::ArcError;
pub use path::{
    ArcPath, Command, EllipticalArcPath, Path, PathBuilder, DEFAULT_MAX_SEGMENT_ANGLE,
};
pub use segment::{Direction, SubArc, SubArcs, MAX_SEGMENTS};
pub use sink::{emit, PathSink};
pub use solver::{kappa, CubicSegment};

#[cfg(feature = "lyon")]
pub use lyon_sink::LyonSink;

#[cfg(feature = "lyon")]
pub use lyon;
