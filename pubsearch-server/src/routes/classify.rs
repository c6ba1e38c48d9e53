use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use pubsearch_client::ClassificationResult;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ClassifyBody {
    pub article_id: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

/// Classification echoed with the article it belongs to
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub article_id: String,
    #[serde(flatten)]
    pub classification: ClassificationResult,
}

/// `POST /classify`
#[instrument(skip_all)]
pub async fn classify(
    State(state): State<SharedState>,
    payload: Result<Json<ClassifyBody>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(body) = payload?;

    let classification = state
        .llm
        .classify(&body.abstract_text)
        .await
        .map_err(|e| ApiError::from_llm(e, "LLM classification failed", "Classification error"))?;

    info!(
        article_id = %body.article_id,
        has_dataset = classification.has_dataset,
        "Classified abstract"
    );
    Ok(Json(ClassifyResponse {
        article_id: body.article_id,
        classification,
    }))
}
