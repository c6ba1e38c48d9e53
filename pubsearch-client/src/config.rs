//! Client configuration for the E-utilities and LLM endpoints
//!
//! Both configurations are plain builders: start from `new()` and chain `with_*`
//! calls. Nothing here touches the network.

use std::time::Duration;

/// Default NCBI E-utilities base URL
pub const DEFAULT_EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default OpenAI-compatible API base URL
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat-completion model
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

const DEFAULT_TOOL: &str = "pubsearch";
const DEFAULT_LLM_TEMPERATURE: f32 = 0.3;
const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use pubsearch_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_email("researcher@university.edu")
///     .with_tool("MetaboSearch");
///
/// assert_eq!(config.build_api_params().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// NCBI API key, raises the upstream rate allowance
    pub api_key: Option<String>,
    /// Contact email sent with every request
    pub email: Option<String>,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Overrides [`DEFAULT_EUTILS_BASE_URL`], mostly for tests
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    /// Request timeout. The search path has none unless one is set here.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL with any trailing slash removed
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_EUTILS_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pubsearch-rs/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Identification parameters appended to every E-utilities request
    ///
    /// `tool` is only sent when set explicitly or when an email is configured, since
    /// NCBI registers the two together.
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(api_key) = &self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        if self.tool.is_some() || self.email.is_some() {
            params.push(("tool".to_string(), self.effective_tool().to_string()));
        }

        params
    }
}

/// Configuration for [`LlmClient`](crate::LlmClient)
///
/// The API key is optional at construction time; the client reports its absence per
/// call instead of refusing to start.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: DEFAULT_LLM_TEMPERATURE,
            timeout: DEFAULT_LLM_TIMEOUT,
        }
    }
}

impl LlmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the key only when one is given, e.g. straight from an optional env var
    pub fn with_optional_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Chat-completion endpoint derived from the base URL
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
