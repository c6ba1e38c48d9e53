//! PubMed E-utilities search
//!
//! - [`client`] issues the two-stage ESearch/EFetch lookup
//! - [`query`] compiles keyword strings into PubMed boolean queries
//!
//! Record extraction lives in the `pubsearch-parser` crate.

pub mod client;
pub mod query;
mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use query::{CompiledQuery, Grammar, InvalidOption, SearchField, SearchMode, compile};
