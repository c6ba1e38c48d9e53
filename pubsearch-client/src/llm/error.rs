use std::result;

use thiserror::Error;

/// Error types for LLM enrichment calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key was configured; raised before any request is made
    #[error("OpenAI API key not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Non-success status from the completion endpoint
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },

    /// A success response without `choices[0].message.content`
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = result::Result<T, LlmError>;

impl LlmError {
    /// Detail text for the caller: the upstream message for API errors, the display
    /// form otherwise
    pub fn detail(&self) -> String {
        match self {
            LlmError::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
