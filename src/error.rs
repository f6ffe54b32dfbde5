#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid arc: {0}")]
    InvalidArc(#[from] arcvg_path::ArcError),

    #[error("path sink error: {0}")]
    Sink(Box<dyn std::error::Error + Send + Sync>),
}
