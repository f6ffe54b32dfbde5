use arcvg_core::math::{Point, Transform};
use arcvg_core::EllipseTransform;

use crate::segment::SubArcs;
use crate::solver::{unit_arc_at, CubicSegment};

/// Maps unit-circle Bézier segments onto an ellipse.
///
/// The scale, rotate, translate pipeline is composed into one matrix up
/// front and applied once per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseMapper {
    matrix: Transform,
}

impl EllipseMapper {
    pub fn new(transform: &EllipseTransform) -> Self {
        Self {
            matrix: transform.to_transform(),
        }
    }

    #[inline]
    pub fn map_point(&self, point: Point) -> Point {
        self.matrix.transform_point(point)
    }

    #[inline]
    pub fn map_segment(&self, segment: &CubicSegment) -> CubicSegment {
        segment.map(|p| self.map_point(p))
    }
}

impl From<EllipseTransform> for EllipseMapper {
    fn from(t: EllipseTransform) -> Self {
        Self::new(&t)
    }
}

/// The cubic segments of an elliptic arc, in traversal order.
#[derive(Debug, Clone)]
pub struct MappedSegments {
    sub_arcs: SubArcs,
    mapper: EllipseMapper,
}

impl MappedSegments {
    pub fn new(sub_arcs: SubArcs, mapper: EllipseMapper) -> Self {
        Self { sub_arcs, mapper }
    }
}

impl Iterator for MappedSegments {
    type Item = CubicSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let arc = self.sub_arcs.next()?;
        Some(self.mapper.map_segment(&unit_arc_at(arc.start, arc.sweep)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sub_arcs.size_hint()
    }
}

impl ExactSizeIterator for MappedSegments {}
