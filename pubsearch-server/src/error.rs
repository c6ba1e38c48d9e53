use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pubsearch_client::{InvalidOption, LlmError, SearchError, UnknownSource};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errors returned by route handlers, rendered as `{"detail": ...}` bodies
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input that fails validation
    #[error("{0}")]
    BadRequest(String),

    /// Request body that is not JSON or lacks a required field
    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map an enrichment failure to a 500 with a route-specific prefix
    ///
    /// A missing key keeps its own message. Upstream non-success replies are reported
    /// as `"{failed}: [{status}] {upstream detail}"`, anything else as
    /// `"{errored}: {error}"`.
    pub fn from_llm(err: LlmError, failed: &str, errored: &str) -> Self {
        let detail = match &err {
            LlmError::MissingApiKey => err.to_string(),
            LlmError::ApiError { status, .. } => format!("{failed}: [{status}] {}", err.detail()),
            _ => format!("{errored}: {err}"),
        };
        ApiError::Internal(detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), detail = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), detail = %self, "Request rejected");
        }

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        ApiError::Internal(format!("Search failed: {err}"))
    }
}

impl From<UnknownSource> for ApiError {
    fn from(_: UnknownSource) -> Self {
        ApiError::BadRequest("Invalid source. Use 'pubmed' or 'biorxiv'".to_string())
    }
}

impl From<InvalidOption> for ApiError {
    fn from(err: InvalidOption) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}
