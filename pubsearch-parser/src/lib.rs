#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # PubSearch Parser
//!
//! Tolerant extraction of PubMed EFetch XML into normalized article records.
//!
//! This crate provides pure, stateless functions and data types for turning an
//! EFetch response into [`Article`] values. It has no network dependencies and can
//! be used independently of any HTTP client.
//!
//! Extraction never fails past its boundary: a document that cannot be parsed yields
//! an empty list (and a logged warning), and a record with missing fields yields an
//! article carrying placeholder values.

pub mod common;
pub mod error;
pub mod pubmed;

// Re-export main types for convenience
pub use common::{Element, parse_document};
pub use error::{ParseError, Result};
pub use pubmed::{
    Article, ClassificationResult, Confidence, Source, UnknownSource, extract_article,
    extract_articles,
};
