use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown grade symbol: {symbol}")]
    UnknownGrade { symbol: String },

    #[error("Invalid course '{input}': {reason}")]
    InvalidCourseArg { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
