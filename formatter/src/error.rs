use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("No value to format")]
    Absent,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Number is not finite: {0}")]
    NonFinite(f64),

    #[error("Negative byte count: {0}")]
    NegativeSize(f64),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
