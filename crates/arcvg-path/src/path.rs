// The following code was copied and modified from
// https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/graphics/src/geometry/path.rs
// Iced license (MIT): https://github.com/iced-rs/iced/blob/31d1d5fecbef50fa319cabd5d4194f1e4aaefa21/LICENSE

mod arc;
mod builder;
mod commands;

#[doc(no_inline)]
pub use arc::{ArcPath, EllipticalArcPath, DEFAULT_MAX_SEGMENT_ANGLE};
pub use builder::PathBuilder;
pub use commands::{Command, CommandIter};

use arcvg_core::math::{Angle, Point, Transform, Vector};

use commands::PackedCommandBuffer;

/// An immutable set of points that may or may not be connected.
///
/// A single [`Path`] can represent different kinds of 2D shapes!
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: PackedCommandBuffer,
}

impl Path {
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    /// Creates a new [`Path`] representing a line segment given its starting
    /// and end points.
    pub fn line(from: Point, to: Point) -> Self {
        PathBuilder::new().move_to(from).line_to(to).build()
    }

    /// Creates a new [`Path`] representing an arc.
    pub fn arc(arc: impl Into<EllipticalArcPath>) -> Self {
        PathBuilder::new().elliptical_arc(arc.into()).build()
    }

    /// Creates a new [`Path`] representing a full ellipse.
    pub fn ellipse(center: Point, radii: Vector, x_rotation: Angle) -> Self {
        PathBuilder::new().ellipse(center, radii, x_rotation).build()
    }

    /// Creates a new [`Path`] representing a circle given its center
    /// coordinate and its radius.
    pub fn circle(center: Point, radius: f64) -> Self {
        PathBuilder::new().circle(center, radius).build()
    }

    pub fn iter(&self) -> CommandIter<'_> {
        self.commands.iter()
    }

    /// The number of commands in this path.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.len() == 0
    }

    /// Returns the current [`Path`] with the given transform applied to it.
    pub fn transform(&self, transform: &Transform) -> Path {
        let mut commands = PackedCommandBuffer::new();
        for command in self.iter() {
            commands.push(match command {
                Command::MoveTo(p) => Command::MoveTo(transform.transform_point(p)),
                Command::LineTo(p) => Command::LineTo(transform.transform_point(p)),
                Command::CurveTo { ctrl1, ctrl2, to } => Command::CurveTo {
                    ctrl1: transform.transform_point(ctrl1),
                    ctrl2: transform.transform_point(ctrl2),
                    to: transform.transform_point(to),
                },
                Command::Close => Command::Close,
            });
        }
        Path { commands }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = Command;
    type IntoIter = CommandIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
