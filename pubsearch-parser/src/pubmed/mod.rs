//! PubMed record extraction and data models
//!
//! This module turns EFetch XML responses into [`Article`] records and defines the
//! classification types that enrich them.

pub mod deserializers;
pub mod extractor;
pub mod models;

// Re-export public types
pub use extractor::{extract_article, extract_articles};
pub use models::{Article, ClassificationResult, Confidence, Source, UnknownSource};
