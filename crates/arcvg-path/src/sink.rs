use arcvg_core::math::Point;

use crate::solver::CubicSegment;

/// A consumer of path drawing instructions.
///
/// This is the only way arcs leave this crate. Implementations decide how
/// (and whether) the instructions are persisted, and may fail in whatever way
/// suits them. Errors are passed back to the caller unchanged.
pub trait PathSink {
    type Error;

    /// Starts a new sub-path at `to`.
    fn move_to(&mut self, to: Point) -> Result<(), Self::Error>;

    /// Appends a cubic Bézier curve from the current point to `to`.
    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), Self::Error>;
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    type Error = S::Error;

    #[inline]
    fn move_to(&mut self, to: Point) -> Result<(), Self::Error> {
        (**self).move_to(to)
    }

    #[inline]
    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), Self::Error> {
        (**self).curve_to(ctrl1, ctrl2, to)
    }
}

/// Writes `segments` to `sink`.
///
/// Issues one `move_to` for the start of the first segment followed by one
/// `curve_to` per segment. Nothing is written if `segments` is empty.
/// Returns the number of segments written.
pub fn emit<S, I>(sink: &mut S, segments: I) -> Result<usize, S::Error>
where
    S: PathSink + ?Sized,
    I: IntoIterator<Item = CubicSegment>,
{
    let mut count = 0;

    for segment in segments {
        if count == 0 {
            sink.move_to(segment.from)?;
        }
        sink.curve_to(segment.ctrl1, segment.ctrl2, segment.to)?;
        count += 1;
    }

    Ok(count)
}
