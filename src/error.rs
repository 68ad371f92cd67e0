//! Error types for the ranking engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// Dataset has no usable attribute columns or malformed role columns.
    #[error("schema error: {0}")]
    Schema(String),

    #[error("no records match the selected filters")]
    EmptyResult,

    /// The largest per-attribute mean is not positive, so percentage-of-max
    /// rescaling is undefined.
    #[error("cannot rescale scores: maximum mean is {max}")]
    DegenerateScale { max: f64 },

    #[error("invalid age range: min {min} is greater than max {max}")]
    InvalidAgeRange { min: u32, max: u32 },

    #[error("top_n must be at least 1")]
    ZeroTopN,
}
