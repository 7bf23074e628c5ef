use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Date format error: unrecognized date {value:?}")]
    FormatError { value: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Numeric error: invalid amount {value:?}")]
    NumericError { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DeskError>;
