//! Error types for JSON extraction

use thiserror::Error;

/// Errors that can occur while extracting a JSON payload from an email
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The local file is missing, or the email carries no JSON payload
    #[error("{0}")]
    NotFound(String),

    /// Failed to retrieve the email content
    #[error("Failed to fetch {target}: {source}")]
    Fetch {
        target: String,
        #[source]
        source: FetchError,
    },

    /// The attachment does not hold valid JSON
    #[error("Invalid JSON payload: {0}")]
    Format(#[from] serde_json::Error),

    /// The raw content could not be decoded as a MIME message
    #[error("Failed to parse email structure: {0}")]
    Parse(String),
}

impl ExtractError {
    pub(crate) fn fetch(target: impl Into<String>, source: impl Into<FetchError>) -> Self {
        Self::Fetch {
            target: target.into(),
            source: source.into(),
        }
    }
}

/// Transport failures while retrieving a resource
#[derive(Error, Debug)]
pub enum FetchError {
    /// Underlying HTTP client error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// File-system error other than a missing file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
