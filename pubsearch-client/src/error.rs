use std::result;

use thiserror::Error;

/// Error types for E-utilities search operations
///
/// Record extraction never surfaces here: an unparseable EFetch document degrades to
/// an empty result inside the parser crate.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
}

pub type Result<T> = result::Result<T, SearchError>;

impl SearchError {
    /// HTTP status reported by the upstream service, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::RequestError(err) => err.status().map(|s| s.as_u16()),
            SearchError::ApiError { status, .. } => Some(*status),
            SearchError::JsonError(_) => None,
        }
    }
}
