use std::sync::Arc;

use pubsearch_client::{LlmClient, Searcher};

/// Clients shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub searcher: Searcher,
    pub llm: LlmClient,
}

impl AppState {
    pub fn new(searcher: Searcher, llm: LlmClient) -> Self {
        Self { searcher, llm }
    }
}

pub type SharedState = Arc<AppState>;
