//! Error types for the failover console

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Backend returned status {status_code} for {endpoint}")]
    Status { endpoint: String, status_code: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No interface row at position {0}")]
    RowNotFound(usize),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration validation failed: {0}")]
    ConfigValidation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the one failure class a refresh cycle recognises: the fetch
    /// did not complete with a usable 200 response.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Status { .. } | Error::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
