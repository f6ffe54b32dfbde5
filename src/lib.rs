//! Draw circular and elliptic arcs as sequences of cubic Bézier curves.
//!
//! ```
//! use arcvg::math::{point, vector, radians};
//! use arcvg::path::{Command, Path};
//!
//! let path = Path::ellipse(point(0.0, 0.0), vector(2.0, 1.0), radians(0.0));
//! assert!(matches!(path.iter().next(), Some(Command::MoveTo(_))));
//! ```

mod error;

pub use error::Error;

pub use arcvg_core::*;

pub use arcvg_path as path;

pub use arcvg_path::{
    draw_arc, draw_circle, draw_ellipse, ArcError, ArcPath, EllipticalArcPath, PathSink,
    DEFAULT_MAX_SEGMENT_ANGLE,
};

/// Checks `arc` and draws it into `sink`.
///
/// Unlike [`EllipticalArcPath::draw`], an arc that fails
/// [`EllipticalArcPath::validate`] is rejected with an error instead of being
/// skipped or drawn degenerate.
pub fn try_draw_arc<S>(sink: &mut S, arc: &EllipticalArcPath) -> Result<usize, Error>
where
    S: PathSink + ?Sized,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    if let Err(e) = arc.validate() {
        log::debug!("rejected arc {arc:?}: {e}");
        return Err(e.into());
    }

    arc.draw(sink).map_err(|e| Error::Sink(Box::new(e)))
}
