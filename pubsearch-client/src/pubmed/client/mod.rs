use pubsearch_parser::{Article, extract_articles};
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Result, SearchError};
use crate::pubmed::responses::ESearchResult;

/// Client for the PubMed E-utilities two-stage lookup
///
/// Stage one (`esearch.fcgi`) resolves a query to identifiers, stage two
/// (`efetch.fcgi`) fetches the full records as XML.
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be initialized (e.g. no TLS backend).
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubsearch_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, config))
    }

    /// Create a new PubMed client around an existing HTTP client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve a compiled query to PubMed identifiers
    ///
    /// An empty query returns no identifiers without contacting the service. A body
    /// without `esearchresult` or `idlist` also reads as no identifiers.
    ///
    /// # Errors
    ///
    /// * `SearchError::RequestError` - If the HTTP request fails
    /// * `SearchError::ApiError` - If the service answers with a non-success status
    /// * `SearchError::JsonError` - If the body is not JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubsearch_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let pmids = client.search_ids(r#""SRM 1950" AND HILIC"#, 20).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search_ids(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        if let Some(data) = &search_result.esearchresult {
            // NCBI sometimes reports query problems with 200 OK and an ERROR field
            if let Some(error_msg) = &data.error {
                warn!(error = %error_msg, "NCBI ESearch reported an error");
            }
            debug!(
                count = data.count.as_deref().unwrap_or("0"),
                translation = data.querytranslation.as_deref().unwrap_or(""),
                "ESearch completed"
            );
        }

        Ok(search_result.into_ids())
    }

    /// Fetch the EFetch XML document for `ids` in one request
    ///
    /// # Errors
    ///
    /// * `SearchError::RequestError` - If the HTTP request fails
    /// * `SearchError::ApiError` - If the service answers with a non-success status
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn fetch_xml<S: AsRef<str>>(&self, ids: &[S]) -> Result<String> {
        let id_list = ids
            .iter()
            .map(|id| id.as_ref())
            .collect::<Vec<_>>()
            .join(",");

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            urlencoding::encode(&id_list)
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        Ok(response.text().await?)
    }

    /// Fetch and extract the records for `ids`
    ///
    /// No request is made for an empty id list. An EFetch document that cannot be
    /// parsed yields no articles rather than an error.
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn fetch_articles(&self, ids: &[String]) -> Result<Vec<Article>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let xml = self.fetch_xml(ids).await?;
        let articles = extract_articles(&xml, ids);
        info!(
            requested = ids.len(),
            parsed = articles.len(),
            "EFetch completed"
        );
        Ok(articles)
    }

    /// Search and fetch in sequence: ESearch, then one EFetch for all identifiers
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubsearch_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let articles = client.search_and_fetch("metabolomics[Title]", 5).await?;
    ///     for article in articles {
    ///         println!("{}: {}", article.id, article.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn search_and_fetch(&self, query: &str, max_results: usize) -> Result<Vec<Article>> {
        let ids = self.search_ids(query, max_results).await?;
        self.fetch_articles(&ids).await
    }

    /// Issue a GET request, appending the identification parameters (api_key, email,
    /// tool) to the URL
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(SearchError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}
