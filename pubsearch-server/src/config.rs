use clap::Parser;
use pubsearch_client::config::{DEFAULT_EUTILS_BASE_URL, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL};
use pubsearch_client::{ClientConfig, LlmConfig};

/// Command-line arguments for the search API server
///
/// Every option can also be set through the environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(name = "pubsearch-server")]
#[command(about = "Publication search API with LLM query generation and classification")]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "PUBSEARCH_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PUBSEARCH_PORT", default_value_t = 8000)]
    pub port: u16,

    /// API key for the chat-completion endpoint; the LLM routes answer 500 without it
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_LLM_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub openai_model: String,

    /// NCBI E-utilities base URL
    #[arg(long, env = "NCBI_EUTILS_BASE_URL", default_value = DEFAULT_EUTILS_BASE_URL)]
    pub eutils_base_url: String,

    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    pub ncbi_api_key: Option<String>,

    /// Contact email sent to NCBI with every request
    #[arg(long, env = "NCBI_EMAIL")]
    pub ncbi_email: Option<String>,

    /// Allowed browser origins
    #[arg(
        long = "cors-origin",
        env = "PUBSEARCH_CORS_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:5173", "http://localhost:3000"]
    )]
    pub cors_origins: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new().with_base_url(&self.eutils_base_url);
        if let Some(key) = &self.ncbi_api_key {
            config = config.with_api_key(key);
        }
        if let Some(email) = &self.ncbi_email {
            config = config.with_email(email);
        }
        config
    }

    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig::new()
            .with_optional_api_key(self.openai_api_key.clone())
            .with_base_url(&self.openai_base_url)
            .with_model(&self.openai_model)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
