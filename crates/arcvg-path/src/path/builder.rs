// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path/builder.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

use std::convert::Infallible;
use std::f64::consts::{PI, TAU};

use arcvg_core::math::{point_approx_eq, Angle, Point, Vector};

use super::commands::PackedCommandBuffer;
use super::{ArcPath, EllipticalArcPath, Path, DEFAULT_MAX_SEGMENT_ANGLE};
use crate::sink::PathSink;

/// Distances below this are treated as zero when fitting tangent arcs.
const DIST_TOLERANCE: f64 = 1e-9;

/// A [`Path`] builder.
///
/// Once a [`Path`] is built, it can no longer be mutated.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    commands: PackedCommandBuffer,
    current: Option<Point>,
    subpath_start: Option<Point>,
    max_segment_angle: Angle,
}

impl PathBuilder {
    /// Creates a new [`PathBuilder`].
    pub fn new() -> Self {
        Self {
            commands: PackedCommandBuffer::new(),
            current: None,
            subpath_start: None,
            max_segment_angle: DEFAULT_MAX_SEGMENT_ANGLE,
        }
    }

    /// Sets the maximum segment angle used by [`PathBuilder::arc`],
    /// [`PathBuilder::ellipse`], [`PathBuilder::circle`] and
    /// [`PathBuilder::arc_to`].
    pub fn with_max_segment_angle(mut self, max_segment_angle: Angle) -> Self {
        self.max_segment_angle = max_segment_angle;
        self
    }

    /// The point the next segment will start from.
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// Moves the starting point of a new sub-path to the given `Point`.
    pub fn move_to(mut self, point: Point) -> Self {
        self.push_move_to(point);
        self
    }

    /// Connects the last point in the [`Path`] to the given `Point` with a
    /// straight line.
    pub fn line_to(mut self, point: Point) -> Self {
        self.commands.line_to(point);
        self.current = Some(point);
        self
    }

    /// Adds a cubic Bézier curve to the [`Path`] given its two control points
    /// and its end point.
    pub fn bezier_curve_to(mut self, control_a: Point, control_b: Point, to: Point) -> Self {
        self.push_curve_to(control_a, control_b, to);
        self
    }

    /// Adds a circular [`ArcPath`] to the [`Path`] as a new sub-path.
    pub fn arc(self, arc: ArcPath) -> Self {
        let max_segment_angle = self.max_segment_angle;
        self.elliptical_arc(EllipticalArcPath::from(arc).with_max_segment_angle(max_segment_angle))
    }

    /// Adds an [`EllipticalArcPath`] to the [`Path`] as a new sub-path, using
    /// the arc's own maximum segment angle.
    pub fn elliptical_arc(mut self, arc: EllipticalArcPath) -> Self {
        if let Err(e) = arc.draw(&mut self) {
            match e {}
        }
        self
    }

    /// Adds a full ellipse to the [`Path`].
    pub fn ellipse(self, center: Point, radii: Vector, x_rotation: Angle) -> Self {
        let max_segment_angle = self.max_segment_angle;
        self.elliptical_arc(
            EllipticalArcPath::ellipse(center, radii, x_rotation)
                .with_max_segment_angle(max_segment_angle),
        )
    }

    /// Adds a circle to the [`Path`] given its center coordinate and its
    /// radius.
    pub fn circle(self, center: Point, radius: f64) -> Self {
        self.ellipse(center, Vector::new(radius, radius), Angle::radians(0.0))
    }

    /// Adds a circular arc to the [`Path`] with the given control points and
    /// radius.
    ///
    /// This essentially draws a straight line segment from the current
    /// position to `a`, but fits a circular arc of `radius` tangent to that
    /// segment and tangent to the line between `a` and `b`.
    ///
    /// With another `.line_to(b)`, the result will be a path connecting the
    /// starting point and `b` with straight line segments towards `a` and a
    /// circular arc smoothing out the corner at `a`.
    ///
    /// See [the HTML5 specification of `arcTo`](https://html.spec.whatwg.org/multipage/canvas.html#building-paths:dom-context-2d-arcto)
    /// for more details and examples.
    pub fn arc_to(mut self, a: Point, b: Point, radius: f64) -> Self {
        let Some(start) = self.current else {
            return self.move_to(a);
        };

        if point_approx_eq(start, a, DIST_TOLERANCE)
            || point_approx_eq(a, b, DIST_TOLERANCE)
            || radius < DIST_TOLERANCE
        {
            return self.line_to(a);
        }

        let to_start = (start - a).normalize();
        let to_end = (b - a).normalize();

        // Collinear, the corner has no arc.
        if to_start.cross(to_end).abs() < DIST_TOLERANCE {
            return self.line_to(a);
        }

        let inner_angle = to_start.dot(to_end).clamp(-1.0, 1.0).acos();
        let half = inner_angle / 2.0;
        let tangent_dist = radius / half.tan();

        if tangent_dist > 10_000.0 * radius {
            return self.line_to(a);
        }

        let arc_start = a + to_start * tangent_dist;
        let arc_end = a + to_end * tangent_dist;
        let center = a + (to_start + to_end).normalize() * (radius / half.sin());

        let start_angle = (arc_start - center).angle_from_x_axis();
        let end_angle = (arc_end - center).angle_from_x_axis();
        let mut sweep = end_angle.radians - start_angle.radians;
        if sweep > PI {
            sweep -= TAU;
        } else if sweep < -PI {
            sweep += TAU;
        }

        self = self.line_to(arc_start);

        let arc = EllipticalArcPath::new(
            center,
            Vector::new(radius, radius),
            Angle::radians(0.0),
            start_angle,
            Angle::radians(sweep),
        )
        .with_max_segment_angle(self.max_segment_angle);

        // Continue the current sub-path instead of starting a new one.
        for segment in arc.cubic_segments() {
            self.push_curve_to(segment.ctrl1, segment.ctrl2, segment.to);
        }

        self
    }

    /// Closes the current sub-path in the [`Path`] with a straight line to
    /// the starting point.
    pub fn close(mut self) -> Self {
        self.commands.close();
        self.current = self.subpath_start;
        self
    }

    /// Builds the [`Path`] of this [`PathBuilder`].
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }

    fn push_move_to(&mut self, point: Point) {
        self.commands.move_to(point);
        self.current = Some(point);
        self.subpath_start = Some(point);
    }

    fn push_curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.commands.curve_to(ctrl1, ctrl2, to);
        self.current = Some(to);
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathSink for PathBuilder {
    type Error = Infallible;

    fn move_to(&mut self, to: Point) -> Result<(), Infallible> {
        self.push_move_to(to);
        Ok(())
    }

    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), Infallible> {
        self.push_curve_to(ctrl1, ctrl2, to);
        Ok(())
    }
}
