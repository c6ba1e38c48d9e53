//! LLM-backed enrichment: query generation and abstract classification

mod client;
mod error;
mod models;
mod prompts;

pub use client::LlmClient;
pub use error::{LlmError, Result};
pub use models::{ChatMessage, QueryGeneration};
