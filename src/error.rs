use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("unsupported attack: {0} (supported: primal_usvp)")]
    UnsupportedAttack(String),

    #[error("deadline exceeded after {evaluated} sweep candidates")]
    DeadlineExceeded { evaluated: usize },
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
