/// Reasons an arc description cannot be drawn as given.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ArcError {
    #[error("maximum segment angle must be within (0, π] radians, got {0}")]
    InvalidSegmentAngle(f64),

    #[error("arc radii must be positive, got ({rx}, {ry})")]
    InvalidRadii { rx: f64, ry: f64 },

    #[error("arc parameter `{0}` is not finite")]
    NonFiniteParameter(&'static str),

    #[error("arc sweep must be within [-2π, 2π] radians, got {0}")]
    SweepOutOfRange(f64),

    #[error("arc needs {count} segments, more than the limit of {max}")]
    TooManySegments { count: usize, max: usize },
}
