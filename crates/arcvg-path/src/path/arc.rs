// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path/arc.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

//! Circular and elliptic arcs.
use std::f64::consts::{FRAC_PI_4, TAU};

use arcvg_core::math::{Angle, Point, Vector};
use arcvg_core::EllipseTransform;

use crate::error::ArcError;
use crate::mapper::{EllipseMapper, MappedSegments};
use crate::segment::{is_valid_step, segment_count, Direction, SubArcs, MAX_SEGMENTS};
use crate::sink::{emit, PathSink};

/// The maximum angle spanned by one Bézier segment unless configured
/// otherwise.
pub const DEFAULT_MAX_SEGMENT_ANGLE: Angle = Angle { radians: FRAC_PI_4 };

/// A segment of a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcPath {
    /// The center of the arc.
    pub center: Point,
    /// The radius of the arc.
    pub radius: f64,
    /// The start of the segment's angle, counter-clockwise rotation from the
    /// positive x-axis.
    pub start_angle: Angle,
    /// The signed angle swept by the segment. Positive values sweep
    /// counter-clockwise.
    pub sweep_angle: Angle,
}

/// An elliptical [`ArcPath`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticalArcPath {
    /// The center of the arc.
    pub center: Point,
    /// The radii of the arc's ellipse. The horizontal and vertical
    /// half-dimensions of the unrotated ellipse will match the x and y values
    /// of the radii vector.
    pub radii: Vector,
    /// The counter-clockwise rotation of the ellipse's axes.
    pub x_rotation: Angle,
    /// The start of the segment's angle, measured on the unrotated, unscaled
    /// unit circle.
    pub start_angle: Angle,
    /// The signed angle swept by the segment. Positive values sweep
    /// counter-clockwise. A sweep of `±2π` is a full ellipse.
    pub sweep_angle: Angle,
    /// The widest angle a single Bézier segment may span. Must be within
    /// `(0, π]`, otherwise nothing is drawn.
    pub max_segment_angle: Angle,
}

impl From<ArcPath> for EllipticalArcPath {
    fn from(arc: ArcPath) -> Self {
        Self {
            center: arc.center,
            radii: Vector::new(arc.radius, arc.radius),
            x_rotation: Angle::radians(0.0),
            start_angle: arc.start_angle,
            sweep_angle: arc.sweep_angle,
            max_segment_angle: DEFAULT_MAX_SEGMENT_ANGLE,
        }
    }
}

impl EllipticalArcPath {
    pub fn new(
        center: Point,
        radii: Vector,
        x_rotation: Angle,
        start_angle: Angle,
        sweep_angle: Angle,
    ) -> Self {
        Self {
            center,
            radii,
            x_rotation,
            start_angle,
            sweep_angle,
            max_segment_angle: DEFAULT_MAX_SEGMENT_ANGLE,
        }
    }

    /// A full ellipse, starting and ending at angle zero.
    pub fn ellipse(center: Point, radii: Vector, x_rotation: Angle) -> Self {
        Self::new(
            center,
            radii,
            x_rotation,
            Angle::radians(0.0),
            Angle::radians(TAU),
        )
    }

    /// A full circle, starting and ending at angle zero.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::ellipse(center, Vector::new(radius, radius), Angle::radians(0.0))
    }

    pub fn with_max_segment_angle(mut self, max_segment_angle: Angle) -> Self {
        self.max_segment_angle = max_segment_angle;
        self
    }

    pub fn end_angle(&self) -> Angle {
        self.start_angle + self.sweep_angle
    }

    /// The direction of traversal, or `None` for a zero sweep.
    pub fn direction(&self) -> Option<Direction> {
        Direction::of(self.sweep_angle)
    }

    /// The transform from the unit circle onto this arc's ellipse.
    pub fn transform(&self) -> EllipseTransform {
        EllipseTransform::new(self.center, self.radii, self.x_rotation)
    }

    /// The exact point on the ellipse at the parametric angle `angle`.
    pub fn sample(&self, angle: Angle) -> Point {
        self.transform().point_at(angle)
    }

    /// The point where the arc starts.
    pub fn start_point(&self) -> Point {
        self.sample(self.start_angle)
    }

    /// The point where the arc ends.
    pub fn end_point(&self) -> Point {
        self.sample(self.end_angle())
    }

    /// The same arc traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            start_angle: self.end_angle(),
            sweep_angle: -self.sweep_angle,
            ..*self
        }
    }

    pub fn sub_arcs(&self) -> SubArcs {
        SubArcs::new(self.start_angle, self.sweep_angle, self.max_segment_angle)
    }

    /// The Bézier segments approximating this arc, in traversal order.
    pub fn cubic_segments(&self) -> MappedSegments {
        MappedSegments::new(self.sub_arcs(), EllipseMapper::new(&self.transform()))
    }

    pub fn segment_count(&self) -> usize {
        segment_count(self.sweep_angle, self.max_segment_angle)
    }

    /// Checks that this arc describes meaningful geometry.
    ///
    /// Drawing never fails on these conditions. An invalid maximum segment
    /// angle draws nothing, other problems draw degenerate output. Use this
    /// to reject such arcs up front.
    pub fn validate(&self) -> Result<(), ArcError> {
        let params = [
            ("center.x", self.center.x),
            ("center.y", self.center.y),
            ("radii.x", self.radii.x),
            ("radii.y", self.radii.y),
            ("x_rotation", self.x_rotation.radians),
            ("start_angle", self.start_angle.radians),
            ("sweep_angle", self.sweep_angle.radians),
        ];
        if let Some(&(name, _)) = params.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ArcError::NonFiniteParameter(name));
        }

        if self.radii.x <= 0.0 || self.radii.y <= 0.0 {
            return Err(ArcError::InvalidRadii {
                rx: self.radii.x,
                ry: self.radii.y,
            });
        }

        if !is_valid_step(self.max_segment_angle) {
            return Err(ArcError::InvalidSegmentAngle(
                self.max_segment_angle.radians,
            ));
        }

        if self.sweep_angle.radians.abs() > TAU {
            return Err(ArcError::SweepOutOfRange(self.sweep_angle.radians));
        }

        let count = self.segment_count();
        if count > MAX_SEGMENTS {
            return Err(ArcError::TooManySegments {
                count,
                max: MAX_SEGMENTS,
            });
        }

        Ok(())
    }

    /// Writes this arc to `sink`.
    ///
    /// Issues a `move_to` for the start point followed by one `curve_to` per
    /// segment. A zero sweep, an invalid maximum segment angle or an arc
    /// needing more than [`MAX_SEGMENTS`] segments writes nothing. Returns the
    /// number of segments written.
    pub fn draw<S: PathSink + ?Sized>(&self, sink: &mut S) -> Result<usize, S::Error> {
        if !is_valid_step(self.max_segment_angle) {
            log::debug!(
                "skipping arc with invalid maximum segment angle {}",
                self.max_segment_angle.radians
            );
            return Ok(0);
        }

        let count = self.segment_count();
        if count > MAX_SEGMENTS {
            log::debug!(
                "skipping arc sweeping {} rad in {count} segments, limit is {MAX_SEGMENTS}",
                self.sweep_angle.radians
            );
            return Ok(0);
        }

        let n = emit(sink, self.cubic_segments())?;
        log::trace!(
            "drew arc at {:?} sweeping {} rad in {n} segments",
            self.center,
            self.sweep_angle.radians
        );

        Ok(n)
    }
}
