//! Drawing arcs straight into a [`PathSink`].

use arcvg_core::math::{Angle, Point, Vector};

use crate::path::EllipticalArcPath;
use crate::sink::PathSink;

/// Draws the elliptic arc starting at `start_angle` and sweeping
/// `sweep_angle`, split into Bézier segments no wider than
/// `max_segment_angle`.
///
/// Returns the number of segments written. Nothing is written for a zero
/// sweep or a `max_segment_angle` outside `(0, π]`.
pub fn draw_arc<S: PathSink + ?Sized>(
    sink: &mut S,
    center: Point,
    radii: Vector,
    start_angle: Angle,
    sweep_angle: Angle,
    x_rotation: Angle,
    max_segment_angle: Angle,
) -> Result<usize, S::Error> {
    EllipticalArcPath::new(center, radii, x_rotation, start_angle, sweep_angle)
        .with_max_segment_angle(max_segment_angle)
        .draw(sink)
}

/// Draws a full ellipse.
pub fn draw_ellipse<S: PathSink + ?Sized>(
    sink: &mut S,
    center: Point,
    radii: Vector,
    x_rotation: Angle,
) -> Result<usize, S::Error> {
    EllipticalArcPath::ellipse(center, radii, x_rotation).draw(sink)
}

/// Draws a full circle.
pub fn draw_circle<S: PathSink + ?Sized>(
    sink: &mut S,
    center: Point,
    radius: f64,
) -> Result<usize, S::Error> {
    EllipticalArcPath::circle(center, radius).draw(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Command, PathBuilder};
    use arcvg_core::math::{point, point_approx_eq, radians, vector};
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn record(f: impl FnOnce(&mut PathBuilder) -> usize) -> (usize, Vec<Command>) {
        let mut builder = PathBuilder::new();
        let n = f(&mut builder);
        (n, builder.build().iter().collect())
    }

    #[test]
    fn unit_circle_quarters() {
        let (n, commands) = record(|b| {
            draw_arc(
                b,
                point(0.0, 0.0),
                vector(1.0, 1.0),
                radians(0.0),
                radians(TAU),
                radians(0.0),
                radians(FRAC_PI_2),
            )
            .unwrap()
        });

        assert_eq!(n, 4);
        let expected = [
            point(1.0, 0.0),
            point(0.0, 1.0),
            point(-1.0, 0.0),
            point(0.0, -1.0),
            point(1.0, 0.0),
        ];
        assert_eq!(commands.len(), expected.len());
        for (c, e) in commands.iter().zip(expected) {
            assert!(point_approx_eq(c.end_point().unwrap(), e, 1e-9));
        }
    }

    #[test]
    fn invalid_step_draws_nothing() {
        for step in [0.0, -1.0, PI + 0.1] {
            let (n, commands) = record(|b| {
                draw_arc(
                    b,
                    point(0.0, 0.0),
                    vector(1.0, 1.0),
                    radians(0.0),
                    radians(1.0),
                    radians(0.0),
                    radians(step),
                )
                .unwrap()
            });
            assert_eq!(n, 0);
            assert!(commands.is_empty());
        }
    }

    #[test]
    fn zero_sweep_draws_nothing() {
        let (n, commands) = record(|b| {
            draw_arc(
                b,
                point(0.0, 0.0),
                vector(1.0, 1.0),
                radians(0.5),
                radians(0.0),
                radians(0.0),
                radians(0.5),
            )
            .unwrap()
        });
        assert_eq!(n, 0);
        assert!(commands.is_empty());
    }

    #[test]
    fn ellipse_and_circle_use_default_step() {
        let (n, _) = record(|b| draw_ellipse(b, point(1.0, 2.0), vector(3.0, 1.0), radians(0.2)).unwrap());
        assert_eq!(n, 8);

        let (n, commands) = record(|b| draw_circle(b, point(1.0, 2.0), 3.0).unwrap());
        assert_eq!(n, 8);
        assert!(point_approx_eq(
            commands[0].end_point().unwrap(),
            point(4.0, 2.0),
            1e-9
        ));
    }
}
