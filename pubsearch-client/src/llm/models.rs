use pubsearch_parser::pubmed::deserializers::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// "system" | "user" | "assistant"
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Body of a chat-completion request in JSON-object mode
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
    pub temperature: f32,
}

/// Natural-language request translated into a PubMed query
///
/// Keys the model omits (or sets to `null`) take the defaults `""`, `[]`, `{}`, `""`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryGeneration {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pubmed_query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extracted_concepts: Vec<String>,
    /// Concept to synonyms; values are passed through as the model wrote them
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms_used: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
}
