//! Splitting an angular sweep into sub-arcs no wider than a maximum step.

use std::f64::consts::PI;

use arcvg_core::math::Angle;

/// Relative slack allowed when deciding whether a sweep is an exact multiple
/// of the step. Without it, rounding in `sweep / step` can add a trailing
/// sub-arc only a few ulps wide.
const COUNT_TOLERANCE: f64 = 1e-9;

/// The most sub-arcs a single arc is drawn with. Arcs needing more are
/// skipped by [`EllipticalArcPath::draw`](crate::EllipticalArcPath::draw).
pub const MAX_SEGMENTS: usize = 1 << 20;

/// The direction in which an arc is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Positive sweep.
    CounterClockwise,
    /// Negative sweep.
    Clockwise,
}

impl Direction {
    /// The direction of a signed sweep, or `None` if the sweep is zero or NaN.
    pub fn of(sweep: Angle) -> Option<Self> {
        if sweep.radians > 0.0 {
            Some(Self::CounterClockwise)
        } else if sweep.radians < 0.0 {
            Some(Self::Clockwise)
        } else {
            None
        }
    }
}

/// A piece of a larger arc on the unit circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubArc {
    /// The absolute start angle of this piece.
    pub start: Angle,
    /// The signed width of this piece. Never zero. Never wider than the step,
    /// except for a last piece absorbing a rounding excess of at most `1e-9`
    /// of the step when the sweep is a whole multiple of it.
    pub sweep: Angle,
}

impl SubArc {
    pub fn end(&self) -> Angle {
        self.start + self.sweep
    }
}

/// Returns `true` if `step` can be used as a maximum segment angle.
#[inline]
pub fn is_valid_step(step: Angle) -> bool {
    step.radians > 0.0 && step.radians <= PI
}

/// The number of sub-arcs needed to cover `sweep` with pieces no wider than
/// `step`.
///
/// A sweep within a relative `1e-9` above a whole multiple of `step` counts
/// as that multiple, so the last sub-arc may exceed `step` by that much.
/// Returns `0` for a zero or non-finite sweep and for an invalid step.
pub fn segment_count(sweep: Angle, step: Angle) -> usize {
    let sweep = sweep.radians.abs();
    if !is_valid_step(step) || !sweep.is_finite() || sweep == 0.0 {
        return 0;
    }

    let ratio = sweep / step.radians;
    let nearest = ratio.round();
    let count = if (ratio - nearest).abs() <= COUNT_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };

    (count as usize).max(1)
}

/// An iterator over the sub-arcs of a sweep.
///
/// The sub-arcs are produced in traversal order, each no wider than the
/// step (see [`segment_count`] for rounding), and together cover `[start, start + sweep]` exactly. The last
/// sub-arc takes the remainder. Clone the iterator to restart it.
#[derive(Debug, Clone)]
pub struct SubArcs {
    start: f64,
    sweep: f64,
    step: f64,
    direction: Direction,
    index: usize,
    count: usize,
}

impl SubArcs {
    pub fn new(start: Angle, sweep: Angle, step: Angle) -> Self {
        let count = segment_count(sweep, step);

        Self {
            start: start.radians,
            sweep: sweep.radians,
            step: step.radians,
            direction: Direction::of(sweep).unwrap_or(Direction::CounterClockwise),
            index: 0,
            count,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The total number of sub-arcs, including those already yielded.
    pub fn count_total(&self) -> usize {
        self.count
    }
}

impl Iterator for SubArcs {
    type Item = SubArc;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let offset = self.index as f64 * self.step;
        self.index += 1;
        let last = self.index == self.count;

        let (start, sweep) = match self.direction {
            Direction::CounterClockwise => {
                let width = if last { self.sweep - offset } else { self.step };
                (self.start + offset, width)
            }
            Direction::Clockwise => {
                let width = if last { self.sweep + offset } else { -self.step };
                (self.start - offset, width)
            }
        };

        Some(SubArc {
            start: Angle::radians(start),
            sweep: Angle::radians(sweep),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SubArcs {}

impl std::iter::FusedIterator for SubArcs {}

#[cfg(test)]
mod tests {
    use super::*;
    use arcvg_core::math::radians;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

    fn widths(arcs: SubArcs) -> Vec<f64> {
        arcs.map(|a| a.sweep.radians).collect()
    }

    #[test]
    fn full_turn_in_quarters() {
        let arcs: Vec<_> = SubArcs::new(radians(0.0), radians(TAU), radians(FRAC_PI_2)).collect();
        assert_eq!(arcs.len(), 4);
        for (i, a) in arcs.iter().enumerate() {
            assert!((a.start.radians - i as f64 * FRAC_PI_2).abs() < 1e-12);
            assert!((a.sweep.radians - FRAC_PI_2).abs() < 1e-12);
        }
    }

    #[test]
    fn remainder_goes_last() {
        let w = widths(SubArcs::new(radians(0.3), radians(2.5), radians(1.0)));
        assert_eq!(w.len(), 3);
        assert_eq!(w[0], 1.0);
        assert_eq!(w[1], 1.0);
        assert!((w[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn clockwise_mirrors_counter_clockwise() {
        let ccw: Vec<_> = SubArcs::new(radians(1.0), radians(2.5), radians(1.0)).collect();
        let cw: Vec<_> = SubArcs::new(radians(1.0), radians(-2.5), radians(1.0)).collect();
        assert_eq!(ccw.len(), cw.len());

        for (a, b) in ccw.iter().zip(cw.iter()) {
            assert!((a.sweep.radians + b.sweep.radians).abs() < 1e-12);
            assert!(((a.start.radians - 1.0) + (b.start.radians - 1.0)).abs() < 1e-12);
        }
        assert!((cw.last().unwrap().end().radians - (1.0 - 2.5)).abs() < 1e-12);
    }

    #[test]
    fn widths_sum_to_sweep() {
        for &(sweep, step) in &[
            (TAU, FRAC_PI_4),
            (-TAU, FRAC_PI_4),
            (1.0, 0.3),
            (-1.0, 0.3),
            (3.0, PI),
            (0.01, FRAC_PI_2),
            (5.9, 0.77),
        ] {
            let arcs = SubArcs::new(radians(0.2), radians(sweep), radians(step));
            let w = widths(arcs.clone());
            assert_eq!(w.len(), arcs.len());

            let total: f64 = w.iter().sum();
            assert!((total - sweep).abs() < 1e-12, "sweep = {sweep}");
            for x in &w {
                assert!(x.abs() <= step + 1e-12);
                assert!(*x != 0.0);
                assert_eq!(x.signum(), sweep.signum());
            }
        }
    }

    #[test]
    fn consecutive_sub_arcs_are_contiguous() {
        let arcs: Vec<_> = SubArcs::new(radians(-0.4), radians(-5.0), radians(0.9)).collect();
        for pair in arcs.windows(2) {
            assert!((pair[0].end().radians - pair[1].start.radians).abs() < 1e-12);
        }
        assert!((arcs.last().unwrap().end().radians - (-5.4)).abs() < 1e-12);
    }

    #[test]
    fn rounding_does_not_add_a_sliver() {
        // 0.1 * 3 is not exactly 0.3 in binary.
        assert_eq!(segment_count(radians(0.1 + 0.1 + 0.1), radians(0.1)), 3);
        assert_eq!(segment_count(radians(TAU), radians(TAU / 7.0)), 7);
        assert_eq!(segment_count(radians(TAU), radians(FRAC_PI_4)), 8);
    }

    #[test]
    fn near_multiple_widens_the_last_sub_arc() {
        let sweep = PI * (1.0 + 5e-10);
        let w = widths(SubArcs::new(radians(0.0), radians(sweep), radians(PI)));
        assert_eq!(w, vec![sweep]);
        assert!(w[0] > PI);
        assert!(w[0] - PI <= COUNT_TOLERANCE * PI);

        // Past the slack a second sub-arc takes the excess.
        let sweep = PI * (1.0 + 1e-6);
        let w = widths(SubArcs::new(radians(0.0), radians(sweep), radians(PI)));
        assert_eq!(w.len(), 2);
        assert!(w.iter().all(|x| *x <= PI));
    }

    #[test]
    fn huge_sweep_counts_past_the_limit() {
        assert!(segment_count(radians(1e18), radians(FRAC_PI_4)) > MAX_SEGMENTS);
        assert!(segment_count(radians(TAU), radians(1e-300)) > MAX_SEGMENTS);
    }

    #[test]
    fn invalid_step_is_empty() {
        assert_eq!(SubArcs::new(radians(0.0), radians(1.0), radians(0.0)).count(), 0);
        assert_eq!(SubArcs::new(radians(0.0), radians(1.0), radians(-0.5)).count(), 0);
        assert_eq!(SubArcs::new(radians(0.0), radians(1.0), radians(PI + 1e-6)).count(), 0);
        assert_eq!(SubArcs::new(radians(0.0), radians(1.0), radians(f64::NAN)).count(), 0);
        assert_eq!(SubArcs::new(radians(0.0), radians(1.0), radians(PI)).count(), 1);
    }

    #[test]
    fn zero_sweep_is_empty() {
        assert_eq!(SubArcs::new(radians(2.0), radians(0.0), radians(0.5)).count(), 0);
        assert_eq!(SubArcs::new(radians(2.0), radians(-0.0), radians(0.5)).count(), 0);
        assert_eq!(SubArcs::new(radians(2.0), radians(f64::INFINITY), radians(0.5)).count(), 0);
    }

    #[test]
    fn clone_restarts() {
        let mut arcs = SubArcs::new(radians(0.0), radians(3.0), radians(1.0));
        let fresh = arcs.clone();
        assert!(arcs.next().is_some());
        assert_eq!(arcs.len(), 2);
        assert_eq!(fresh.len(), 3);
        assert_eq!(fresh.count_total(), 3);
    }

    #[test]
    fn direction_of_sweep() {
        assert_eq!(Direction::of(radians(1.0)), Some(Direction::CounterClockwise));
        assert_eq!(Direction::of(radians(-1.0)), Some(Direction::Clockwise));
        assert_eq!(Direction::of(radians(0.0)), None);
        assert_eq!(Direction::of(radians(f64::NAN)), None);
    }
}
