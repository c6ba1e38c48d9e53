use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use pubsearch_client::QueryGeneration;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct GenerateQueryBody {
    pub natural_language_query: String,
}

/// `POST /generate-query`
#[instrument(skip_all)]
pub async fn generate_query(
    State(state): State<SharedState>,
    payload: Result<Json<GenerateQueryBody>, JsonRejection>,
) -> Result<Json<QueryGeneration>, ApiError> {
    let Json(body) = payload?;

    let generated = state
        .llm
        .generate_query(&body.natural_language_query)
        .await
        .map_err(|e| ApiError::from_llm(e, "Query generation failed", "Query generation error"))?;

    info!(query = %generated.pubmed_query, "Generated PubMed query");
    Ok(Json(generated))
}
