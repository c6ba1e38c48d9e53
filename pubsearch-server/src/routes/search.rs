use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use pubsearch_client::{Article, SearchField, SearchMode, SearchRequest, Source};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::SharedState;

/// `POST /search` body as sent by clients
///
/// Options stay strings here so that unknown values are reported as 400s rather
/// than body rejections.
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub keywords: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_max_results")]
    pub max_results: i64,
    #[serde(default = "default_search_mode")]
    pub search_mode: String,
    #[serde(default = "default_search_fields")]
    pub search_fields: String,
}

fn default_source() -> String {
    Source::PubMed.as_str().to_string()
}

fn default_max_results() -> i64 {
    SearchRequest::DEFAULT_MAX_RESULTS as i64
}

fn default_search_mode() -> String {
    SearchMode::default().as_str().to_string()
}

fn default_search_fields() -> String {
    SearchField::default().as_str().to_string()
}

impl TryFrom<SearchBody> for SearchRequest {
    type Error = ApiError;

    fn try_from(body: SearchBody) -> Result<Self, Self::Error> {
        let source: Source = body.source.parse()?;
        let mode: SearchMode = body.search_mode.parse()?;
        let fields: SearchField = body.search_fields.parse()?;

        let max_results = usize::try_from(body.max_results)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                ApiError::BadRequest("max_results must be a positive integer".to_string())
            })?;

        Ok(SearchRequest::new(body.keywords)
            .with_source(source)
            .with_max_results(max_results)
            .with_mode(mode)
            .with_fields(fields))
    }
}

/// `POST /search`
#[instrument(skip_all)]
pub async fn search(
    State(state): State<SharedState>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let Json(body) = payload?;
    let request = SearchRequest::try_from(body)?;

    let articles = state.searcher.search(&request).await?;
    info!(
        source = %request.source,
        count = articles.len(),
        "Search completed"
    );
    Ok(Json(articles))
}
