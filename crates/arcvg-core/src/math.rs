/// A point in user space.
///
/// Alias for ```euclid::default::Point2D<f64>```.
pub type Point = euclid::default::Point2D<f64>;

/// A vector in user space.
///
/// Alias for ```euclid::default::Vector2D<f64>```.
pub type Vector = euclid::default::Vector2D<f64>;

/// Alias for ```euclid::default::Transform2D<f64>```
pub type Transform = euclid::default::Transform2D<f64>;

/// Alias for ```euclid::default::Rotation2D<f64>```
pub type Rotation = euclid::default::Rotation2D<f64>;

/// An angle in radians, counter-clockwise positive.
///
/// Alias for ```euclid::Angle<f64>```
pub type Angle = euclid::Angle<f64>;

/// The tolerance used when comparing computed points.
pub const POINT_TOLERANCE: f64 = 1e-9;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub const fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Angle { radians: value }`.
#[inline]
pub const fn radians(radians: f64) -> Angle {
    Angle { radians }
}

/// Shorthand for `Angle { radians: value * PI / 180.0 }`.
#[inline]
pub fn degrees(degrees: f64) -> Angle {
    Angle {
        radians: degrees * (std::f64::consts::PI / 180.0),
    }
}

/// The point at `angle` on the unit circle centered at the origin.
#[inline]
pub fn unit_point(angle: Angle) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(cos, sin)
}

/// The unit tangent of the unit circle at `angle`, pointing in the
/// counter-clockwise direction.
#[inline]
pub fn unit_tangent(angle: Angle) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(-sin, cos)
}

/// Returns `true` if `a` and `b` are no further than `tol` apart.
#[inline]
pub fn point_approx_eq(a: Point, b: Point, tol: f64) -> bool {
    (a - b).square_length() <= tol * tol
}
