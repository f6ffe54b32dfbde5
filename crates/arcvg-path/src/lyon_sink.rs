//! Forwarding arcs into a lyon path builder.

use std::convert::Infallible;

use arcvg_core::math::Point;
use lyon::math;
use lyon::path::builder::SvgPathBuilder;

use crate::path::{Command, Path};
use crate::sink::PathSink;

/// A [`PathSink`] that writes into a lyon [`SvgPathBuilder`].
///
/// Coordinates are narrowed to `f32`.
pub struct LyonSink<B: SvgPathBuilder> {
    pub raw: B,
}

impl<B: SvgPathBuilder> LyonSink<B> {
    pub fn new(raw: B) -> Self {
        Self { raw }
    }

    pub fn into_inner(self) -> B {
        self.raw
    }
}

impl<B: SvgPathBuilder> PathSink for LyonSink<B> {
    type Error = Infallible;

    fn move_to(&mut self, to: Point) -> Result<(), Infallible> {
        let _ = self.raw.move_to(to_lyon(to));
        Ok(())
    }

    fn curve_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Result<(), Infallible> {
        let _ = self
            .raw
            .cubic_bezier_to(to_lyon(ctrl1), to_lyon(ctrl2), to_lyon(to));
        Ok(())
    }
}

#[inline]
fn to_lyon(p: Point) -> math::Point {
    math::point(p.x as f32, p.y as f32)
}

impl Path {
    /// Converts this [`Path`] into a lyon path.
    pub fn to_lyon(&self) -> lyon::path::Path {
        let mut raw = lyon::path::Path::builder().with_svg();
        for command in self.iter() {
            match command {
                Command::MoveTo(p) => {
                    let _ = raw.move_to(to_lyon(p));
                }
                Command::LineTo(p) => {
                    let _ = raw.line_to(to_lyon(p));
                }
                Command::CurveTo { ctrl1, ctrl2, to } => {
                    let _ = raw.cubic_bezier_to(to_lyon(ctrl1), to_lyon(ctrl2), to_lyon(to));
                }
                Command::Close => raw.close(),
            }
        }
        raw.build()
    }
}
