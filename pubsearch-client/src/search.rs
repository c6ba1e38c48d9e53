//! Search orchestration across literature sources

use pubsearch_parser::{Article, Source};
use tracing::{debug, info, instrument};

use crate::biorxiv::BioRxivClient;
use crate::error::Result;
use crate::pubmed::{CompiledQuery, PubMedClient, SearchField, SearchMode};

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keywords: String,
    pub source: Source,
    pub max_results: usize,
    pub mode: SearchMode,
    pub fields: SearchField,
}

impl SearchRequest {
    pub const DEFAULT_MAX_RESULTS: usize = 20;

    /// PubMed request with default mode (`AND`), field scope (`all`) and limit (20)
    pub fn new<S: Into<String>>(keywords: S) -> Self {
        Self {
            keywords: keywords.into(),
            source: Source::PubMed,
            max_results: Self::DEFAULT_MAX_RESULTS,
            mode: SearchMode::default(),
            fields: SearchField::default(),
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fields(mut self, fields: SearchField) -> Self {
        self.fields = fields;
        self
    }
}

/// Routes search requests to the source they name
#[derive(Clone)]
pub struct Searcher {
    pubmed: PubMedClient,
    biorxiv: BioRxivClient,
}

impl Searcher {
    pub fn new(pubmed: PubMedClient, biorxiv: BioRxivClient) -> Self {
        Self { pubmed, biorxiv }
    }

    pub fn pubmed(&self) -> &PubMedClient {
        &self.pubmed
    }

    /// Run a search and return the extracted articles in upstream order
    ///
    /// For PubMed the keywords are compiled once; an empty compiled query or an empty
    /// identifier list ends the search without a further upstream call.
    ///
    /// # Errors
    ///
    /// Propagates E-utilities transport and status errors. Unparseable record XML is
    /// not an error and yields no articles.
    #[instrument(skip(self, request), fields(source = %request.source, max_results = request.max_results))]
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>> {
        match request.source {
            Source::PubMed => self.search_pubmed(request).await,
            Source::BioRxiv => {
                self.biorxiv
                    .search(&request.keywords, request.max_results)
                    .await
            }
        }
    }

    async fn search_pubmed(&self, request: &SearchRequest) -> Result<Vec<Article>> {
        let query = CompiledQuery::compile(&request.keywords, request.mode, request.fields);
        debug!(query = %query, grammar = ?query.grammar(), "Compiled PubMed query");

        if query.is_empty() {
            debug!("Keywords compiled to an empty query, skipping upstream calls");
            return Ok(Vec::new());
        }

        let ids = self
            .pubmed
            .search_ids(query.as_str(), request.max_results)
            .await?;
        if ids.is_empty() {
            info!("No identifiers matched the query");
            return Ok(Vec::new());
        }

        self.pubmed.fetch_articles(&ids).await
    }
}
