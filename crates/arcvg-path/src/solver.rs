//! Cubic Bézier approximation of unit-circle arcs.
//!
//! A circular arc of central angle `alpha` is approximated by the symmetric
//! cubic whose control points sit on the endpoint tangents at distance
//! `kappa(alpha)`. The cubic passes exactly through both endpoints and the
//! arc's midpoint. The radial error grows quickly with `alpha`, so callers
//! split long arcs with [`SubArcs`](crate::segment::SubArcs) first.

use arcvg_core::math::{unit_point, unit_tangent, Angle, Point, Rotation};

/// One cubic Bézier segment.
///
/// `from` and `to` lie on the approximated arc, `ctrl1` and `ctrl2` are the
/// off-curve control points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicSegment {
    pub fn new(from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        Self {
            from,
            ctrl1,
            ctrl2,
            to,
        }
    }

    /// Applies `f` to each of the four points, returning a new segment.
    #[inline]
    pub fn map(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self {
            from: f(self.from),
            ctrl1: f(self.ctrl1),
            ctrl2: f(self.ctrl2),
            to: f(self.to),
        }
    }

    /// The same curve traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }

    /// Evaluates the curve at `t` in `0.0..=1.0`.
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.from.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.to.x,
            a * self.from.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.to.y,
        )
    }
}

/// The normalized distance from an arc endpoint to its control point for an
/// arc of central angle `alpha` (in radians).
///
/// The sign follows `alpha`, so clockwise arcs get negative offsets.
#[inline]
pub fn kappa(alpha: f64) -> f64 {
    4.0 / 3.0 * (alpha / 4.0).tan()
}

/// Approximates the unit-circle arc spanning `[0, alpha]`.
///
/// `alpha` must be non-zero with `|alpha| <= π`.
pub fn unit_arc(alpha: Angle) -> CubicSegment {
    debug_assert!(alpha.radians != 0.0, "zero-length arc");

    let k = kappa(alpha.radians);
    let start = Angle::radians(0.0);

    let from = unit_point(start);
    let to = unit_point(alpha);

    CubicSegment {
        from,
        ctrl1: from + unit_tangent(start) * k,
        ctrl2: to - unit_tangent(alpha) * k,
        to,
    }
}

/// Approximates the unit-circle arc spanning `[start, start + alpha]`.
pub fn unit_arc_at(start: Angle, alpha: Angle) -> CubicSegment {
    let rotation = Rotation::new(start);
    unit_arc(alpha).map(|p| rotation.transform_point(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcvg_core::math::{point, point_approx_eq, radians, POINT_TOLERANCE};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI};

    #[test]
    fn kappa_constants() {
        assert!((kappa(FRAC_PI_2) - 0.5522847498307933).abs() < 1e-12);
        assert!((kappa(FRAC_PI_4) - 0.265216489839544).abs() < 1e-12);
        assert!((kappa(FRAC_PI_8) - 0.13132187114288565).abs() < 1e-12);
    }

    #[test]
    fn kappa_is_odd() {
        for a in [0.1, 0.5, 1.0, FRAC_PI_2, PI] {
            assert!((kappa(-a) + kappa(a)).abs() < 1e-15);
        }
    }

    #[test]
    fn quarter_circle() {
        let k = kappa(FRAC_PI_2);
        let c = unit_arc(radians(FRAC_PI_2));

        assert!(point_approx_eq(c.from, point(1.0, 0.0), POINT_TOLERANCE));
        assert!(point_approx_eq(c.ctrl1, point(1.0, k), POINT_TOLERANCE));
        assert!(point_approx_eq(c.ctrl2, point(k, 1.0), POINT_TOLERANCE));
        assert!(point_approx_eq(c.to, point(0.0, 1.0), POINT_TOLERANCE));
    }

    #[test]
    fn clockwise_quarter_circle() {
        let k = kappa(FRAC_PI_2);
        let c = unit_arc(radians(-FRAC_PI_2));

        assert!(point_approx_eq(c.from, point(1.0, 0.0), POINT_TOLERANCE));
        assert!(point_approx_eq(c.ctrl1, point(1.0, -k), POINT_TOLERANCE));
        assert!(point_approx_eq(c.ctrl2, point(k, -1.0), POINT_TOLERANCE));
        assert!(point_approx_eq(c.to, point(0.0, -1.0), POINT_TOLERANCE));
    }

    #[test]
    fn midpoint_lies_on_circle() {
        for alpha in [0.1, 0.7, FRAC_PI_4, FRAC_PI_2, 2.0, PI, -1.3] {
            let c = unit_arc(radians(alpha));
            let mid = c.eval(0.5);
            let expected = unit_point(radians(alpha / 2.0));
            assert!(point_approx_eq(mid, expected, 1e-12), "alpha = {alpha}");
        }
    }

    #[test]
    fn error_shrinks_with_angle() {
        let max_radial_error = |alpha: f64| {
            let c = unit_arc(radians(alpha));
            (0..=64)
                .map(|i| (c.eval(i as f64 / 64.0).to_vector().length() - 1.0).abs())
                .fold(0.0, f64::max)
        };

        let e_pi = max_radial_error(PI);
        let e_half = max_radial_error(FRAC_PI_2);
        let e_quarter = max_radial_error(FRAC_PI_4);

        assert!(e_quarter < e_half);
        assert!(e_half < e_pi);
        // Well known bound for the quarter circle.
        assert!(e_half < 2.8e-4);
    }

    #[test]
    fn rotated_arc() {
        let start = radians(1.2);
        let alpha = radians(0.6);
        let c = unit_arc_at(start, alpha);

        assert!(point_approx_eq(c.from, unit_point(start), POINT_TOLERANCE));
        assert!(point_approx_eq(c.to, unit_point(start + alpha), POINT_TOLERANCE));

        let base = unit_arc(alpha);
        let d0 = (base.ctrl1 - base.from).length();
        let d1 = (c.ctrl1 - c.from).length();
        assert!((d0 - d1).abs() < POINT_TOLERANCE);
    }

    #[test]
    fn reversed_swaps_points() {
        let c = unit_arc(radians(1.0));
        let r = c.reversed();
        assert_eq!(r.from, c.to);
        assert_eq!(r.ctrl1, c.ctrl2);
        assert_eq!(r.ctrl2, c.ctrl1);
        assert_eq!(r.to, c.from);
        assert!(point_approx_eq(r.eval(0.3), c.eval(0.7), 1e-12));
    }
}
