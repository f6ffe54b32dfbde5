//! Affine operations used to map the unit circle onto an ellipse.

use crate::math::{unit_point, Angle, Point, Rotation, Transform, Vector};

/// A single affine operation applied to a [`Point`].
///
/// Operations never mutate their input. Composition is ordered: applying
/// `Scale` then `Rotate` is not the same as `Rotate` then `Scale` unless the
/// scale is uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AffineOp {
    /// Scale each axis independently about the origin.
    Scale { sx: f64, sy: f64 },
    /// Rotate about the origin, counter-clockwise positive.
    Rotate(Angle),
    /// Translate by a vector.
    Translate(Vector),
}

impl AffineOp {
    /// Applies this operation to `point`, returning a new point.
    pub fn apply(self, point: Point) -> Point {
        match self {
            Self::Scale { sx, sy } => Point::new(point.x * sx, point.y * sy),
            Self::Rotate(angle) => Rotation::new(angle).transform_point(point),
            Self::Translate(v) => point + v,
        }
    }

    /// This operation as a matrix.
    pub fn to_transform(self) -> Transform {
        match self {
            Self::Scale { sx, sy } => Transform::scale(sx, sy),
            Self::Rotate(angle) => Transform::rotation(angle),
            Self::Translate(v) => Transform::translation(v.x, v.y),
        }
    }
}

/// Maps the origin-centered unit circle onto an ellipse.
///
/// The operations are always applied as scale by `radii`, then rotate by
/// `rotation`, then translate to `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipseTransform {
    /// The center of the ellipse.
    pub center: Point,
    /// The radii of the ellipse along its own (unrotated) axes.
    pub radii: Vector,
    /// The rotation of the ellipse's axes relative to the coordinate system.
    pub rotation: Angle,
}

impl EllipseTransform {
    pub fn new(center: Point, radii: Vector, rotation: Angle) -> Self {
        Self {
            center,
            radii,
            rotation,
        }
    }

    /// The three operations of this transform in the order they are applied.
    pub fn ops(&self) -> [AffineOp; 3] {
        [
            AffineOp::Scale {
                sx: self.radii.x,
                sy: self.radii.y,
            },
            AffineOp::Rotate(self.rotation),
            AffineOp::Translate(self.center.to_vector()),
        ]
    }

    /// Composes the operations into a single matrix.
    pub fn to_transform(&self) -> Transform {
        Transform::scale(self.radii.x, self.radii.y)
            .then_rotate(self.rotation)
            .then_translate(self.center.to_vector())
    }

    /// Maps a point in unit-circle space into user space.
    #[inline]
    pub fn transform_point(&self, point: Point) -> Point {
        self.ops().iter().fold(point, |p, op| op.apply(p))
    }

    /// The exact point on the ellipse at the parametric angle `angle`.
    pub fn point_at(&self, angle: Angle) -> Point {
        self.transform_point(unit_point(angle))
    }
}

impl From<EllipseTransform> for Transform {
    fn from(t: EllipseTransform) -> Self {
        t.to_transform()
    }
}
