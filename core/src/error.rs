use thiserror::Error;

#[derive(Debug, Error)]
pub enum WavetapeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("File extension must be ASCII without NUL bytes")]
    InvalidExtension,

    #[error("Sample rate mismatch: expected {expected} Hz, got {found} Hz")]
    SampleRateMismatch { expected: usize, found: usize },

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, WavetapeError>;
