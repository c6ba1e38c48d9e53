//! bioRxiv source
//!
//! The bioRxiv API has no keyword search, so this source accepts requests and
//! returns no articles.

use pubsearch_parser::Article;
use tracing::{instrument, warn};

use crate::error::Result;

/// bioRxiv details API base URL
pub const BIORXIV_API_BASE_URL: &str = "https://api.biorxiv.org/details/biorxiv";

/// Keyword search against bioRxiv
///
/// Always succeeds with an empty result.
#[derive(Debug, Clone)]
pub struct BioRxivClient {
    base_url: String,
}

impl BioRxivClient {
    pub fn new() -> Self {
        Self {
            base_url: BIORXIV_API_BASE_URL.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // TODO: query the bioRxiv content-detail endpoint by date interval and filter
    // titles/abstracts locally once a date range is part of the search request.
    #[instrument(skip(self), fields(keywords = %keywords, max_results = max_results))]
    pub async fn search(&self, keywords: &str, max_results: usize) -> Result<Vec<Article>> {
        warn!("bioRxiv keyword search is not supported, returning no articles");
        Ok(Vec::new())
    }
}

impl Default for BioRxivClient {
    fn default() -> Self {
        Self::new()
    }
}
