//! Keyword-to-query compilation
//!
//! Turns the free-form keyword string of a search request into a PubMed boolean
//! query. The compiler is pure: no I/O, no shared state.

mod compiler;
mod options;
mod scanner;

pub use compiler::{CompiledQuery, Grammar, compile};
pub use options::{InvalidOption, SearchField, SearchMode};
