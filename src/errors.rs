use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input text could not be read as a base64 payload
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Base64 decoding - nothing is written when this occurs
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Writing the recovered file
    #[error("Output error: {0}")]
    Output(#[from] crate::recovery::output::OutputError),

    /// Rendering the JSON report
    #[error("Report serialisation error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// True for the decode failure kind (invalid characters or unrecoverable length)
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, AppError::Base64(_))
    }
}
