#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # PubSearch Client
//!
//! Async search client for PubMed with a keyword-to-query compiler and LLM-backed
//! enrichment.
//!
//! ## Features
//!
//! - **Query compiler**: free-form keywords (comma-separated or explicit boolean
//!   syntax) to PubMed boolean queries with field tags
//! - **E-utilities search**: ESearch then EFetch, records extracted by
//!   `pubsearch-parser`
//! - **Enrichment**: natural-language query generation and abstract classification
//!   through an OpenAI-compatible chat-completion endpoint
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubsearch_client::{
//!     BioRxivClient, PubMedClient, SearchField, SearchMode, SearchRequest, Searcher,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let searcher = Searcher::new(PubMedClient::new()?, BioRxivClient::new());
//!
//!     let request = SearchRequest::new("(SRM 1950 OR SRM1950) AND HILIC")
//!         .with_fields(SearchField::TitleAbstract)
//!         .with_mode(SearchMode::And)
//!         .with_max_results(10);
//!
//!     for article in searcher.search(&request).await? {
//!         println!("{}: {}", article.id, article.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod biorxiv;
pub mod config;
pub mod error;
pub mod llm;
pub mod pubmed;
pub mod search;

// Re-export main types for convenience
pub use biorxiv::BioRxivClient;
pub use config::{ClientConfig, LlmConfig};
pub use error::{Result, SearchError};
pub use llm::{LlmClient, LlmError, QueryGeneration};
pub use pubmed::{
    CompiledQuery, Grammar, InvalidOption, PubMedClient, SearchField, SearchMode, compile,
};
pub use search::{SearchRequest, Searcher};

pub use pubsearch_parser::{Article, ClassificationResult, Confidence, Source, UnknownSource};
