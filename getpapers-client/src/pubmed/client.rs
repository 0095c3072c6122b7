use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{GetPapersError, Result};
use crate::pubmed::models::IndustryPaper;
use crate::pubmed::parser::parse_industry_papers;
use crate::pubmed::responses::ESearchResult;

/// Client for the PubMed E-utilities endpoints used by the pipeline
///
/// Wraps ESearch (keyword search returning PMIDs) and EFetch (bulk MEDLINE
/// record retrieval). Calls are sequential and synchronous in effect: each
/// request is awaited to completion before the next one starts, and there
/// is no retry, rate limiting, or caching.
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use getpapers_client::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Client configuration including base URL, etiquette
    ///   parameters, and timeout
    ///
    /// # Example
    ///
    /// ```
    /// use getpapers_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@example.com");
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.effective_user_agent())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Create a new client with a custom HTTP client and default configuration
    ///
    /// # Arguments
    ///
    /// * `client` - Custom reqwest client with specific configuration
    pub fn with_client(client: Client) -> Self {
        let config = ClientConfig::new();
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Search for PMIDs matching a query string
    ///
    /// # Arguments
    ///
    /// * `query` - Search query string
    /// * `limit` - Maximum number of results to return (`retmax`)
    ///
    /// # Returns
    ///
    /// `Ok` with an empty vector when the search matched nothing; transport
    /// failures and non-2xx responses are errors. Callers can therefore
    /// tell "zero hits" from "request failed".
    ///
    /// # Errors
    ///
    /// * `GetPapersError::RequestError` - If the HTTP request fails or the
    ///   JSON body cannot be decoded
    /// * `GetPapersError::ApiError` - If the endpoint returns a non-2xx status
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_pmids(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let mut url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        self.append_api_params(&mut url);

        debug!("Making ESearch API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(
                "Search API request failed with status: {}",
                response.status()
            );
            return Err(api_error(response.status()));
        }

        let search_result: ESearchResult = response.json().await?;
        if let Some(error) = search_result.esearchresult.error {
            warn!("ESearch reported an error: {}", error);
        }
        let pmids = search_result.esearchresult.idlist;

        info!(results_found = pmids.len(), "Search completed successfully");

        Ok(pmids)
    }

    /// Fetch MEDLINE records for the given PMIDs in one bulk request
    ///
    /// # Arguments
    ///
    /// * `pmids` - PMIDs to fetch, joined into a single comma-separated
    ///   `id` parameter
    ///
    /// # Returns
    ///
    /// The response body verbatim; splitting it into records is the
    /// parser's job. An empty PMID slice short-circuits to an empty string
    /// without touching the network.
    ///
    /// # Errors
    ///
    /// * `GetPapersError::RequestError` - If the HTTP request fails
    /// * `GetPapersError::ApiError` - If the endpoint returns a non-2xx status
    #[instrument(skip(self), fields(count = pmids.len()))]
    pub async fn fetch_medline(&self, pmids: &[String]) -> Result<String> {
        if pmids.is_empty() {
            debug!("No PMIDs to fetch, skipping EFetch request");
            return Ok(String::new());
        }

        let mut url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&rettype=medline&retmode=text",
            self.base_url,
            pmids.join(",")
        );
        self.append_api_params(&mut url);

        debug!("Making EFetch API request");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(
                "Fetch API request failed with status: {}",
                response.status()
            );
            return Err(api_error(response.status()));
        }

        let body = response.text().await?;
        info!(bytes = body.len(), "Fetched MEDLINE records");

        Ok(body)
    }

    /// Run the full search-fetch-filter pipeline for a query
    ///
    /// Searches for up to `limit` PMIDs, bulk-fetches their MEDLINE
    /// records, and returns the papers that keep at least one non-academic
    /// author and one company affiliation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use getpapers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let papers = client.search_industry_papers("cancer immunotherapy", 10).await?;
    ///
    ///     for paper in papers {
    ///         println!("{}: {}", paper.pmid, paper.title);
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_industry_papers(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<IndustryPaper>> {
        let pmids = self.search_pmids(query, limit).await?;
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let medline = self.fetch_medline(&pmids).await?;
        let papers: Vec<IndustryPaper> = parse_industry_papers(&medline).collect();

        info!(
            candidates = pmids.len(),
            retained = papers.len(),
            "Industry filter applied"
        );

        Ok(papers)
    }

    fn append_api_params(&self, url: &mut String) {
        for (key, value) in self.config.build_api_params() {
            url.push('&');
            url.push_str(&key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
        }
    }
}

fn api_error(status: reqwest::StatusCode) -> GetPapersError {
    GetPapersError::ApiError {
        status: status.as_u16(),
        message: status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
