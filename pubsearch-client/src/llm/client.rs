use pubsearch_parser::ClassificationResult;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{LlmError, Result};
use super::models::{ChatMessage, ChatRequest, QueryGeneration, ResponseFormat};
use super::prompts;
use crate::config::LlmConfig;

/// Client for an OpenAI-compatible chat-completion endpoint
///
/// Every call is a single request in JSON-object mode; the reply content is parsed as
/// JSON and missing keys take documented defaults. There is no retry.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

/// Turn a non-success response into [`LlmError::ApiError`], keeping the upstream detail
///
/// The detail is `error.message` for OpenAI-style error bodies and the raw body text
/// otherwise.
async fn check_response_status(resp: Response) -> Result<Value> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| body["error"]["message"].as_str().map(str::to_string))
            .unwrap_or(text);
        return Err(LlmError::ApiError {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&text)?)
}

/// Reply text of the first choice
fn completion_content(body: &Value) -> Result<&str> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| LlmError::MalformedResponse("missing choices[0].message.content".into()))
}

impl LlmClient {
    /// Create a client; a missing API key is only reported when a call is made
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Translate a natural-language request into a PubMed boolean query
    ///
    /// # Errors
    ///
    /// * `LlmError::MissingApiKey` - No key configured; nothing is sent
    /// * `LlmError::ApiError` - The endpoint answered with a non-success status
    /// * `LlmError::Http`, `LlmError::Serde`, `LlmError::MalformedResponse` - Transport
    ///   or reply format problems
    #[instrument(skip(self, natural_language_query), fields(query_len = natural_language_query.len()))]
    pub async fn generate_query(&self, natural_language_query: &str) -> Result<QueryGeneration> {
        let generated: QueryGeneration = self
            .complete_json(
                prompts::QUERY_GENERATION_SYSTEM,
                prompts::query_generation(natural_language_query),
            )
            .await?;
        debug!(pubmed_query = %generated.pubmed_query, "Query generated");
        Ok(generated)
    }

    /// Classify an abstract for dataset availability, article type and methods
    ///
    /// Errors as for [`LlmClient::generate_query`].
    #[instrument(skip(self, abstract_text), fields(abstract_len = abstract_text.len()))]
    pub async fn classify(&self, abstract_text: &str) -> Result<ClassificationResult> {
        let classification: ClassificationResult = self
            .complete_json(
                prompts::CLASSIFICATION_SYSTEM,
                prompts::classification(abstract_text),
            )
            .await?;
        debug!(
            has_dataset = classification.has_dataset,
            confidence = classification.confidence.as_str(),
            "Abstract classified"
        );
        Ok(classification)
    }

    /// Send one system + user exchange and decode the reply content as `T`
    async fn complete_json<T: DeserializeOwned>(&self, system: &str, user: String) -> Result<T> {
        let api_key = self.config.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: self.config.temperature,
        };

        let url = self.config.chat_completions_url();
        debug!(url = %url, model = %self.config.model, "Sending chat completion request");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let body = check_response_status(resp).await.inspect_err(|e| {
            warn!(error = %e, "Chat completion failed");
        })?;

        Ok(serde_json::from_str(completion_content(&body)?)?)
    }
}
