pub mod math;
pub mod transform;

pub use transform::{AffineOp, EllipseTransform};
