use std::time::Duration;

/// Default NCBI E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default tool name reported to NCBI
const DEFAULT_TOOL: &str = "getpapers";

/// Default HTTP request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// Carries the endpoint base URL, the NCBI etiquette parameters (API key,
/// contact email, tool name), and the HTTP timeout. Values are set with
/// chained `with_*` methods; anything left unset falls back to a default.
///
/// # Example
///
/// ```
/// use getpapers_client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_email("researcher@example.com")
///     .with_tool("my-pipeline");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    api_key: Option<String>,
    email: Option<String>,
    tool: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            email: None,
            tool: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the E-utilities base URL
    ///
    /// Mainly useful for pointing the client at a mock server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the NCBI API key sent with every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the contact email sent with every request
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name sent with every request
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Set the HTTP request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL requests are sent to
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// The tool name reported to NCBI
    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// The User-Agent header value for outgoing requests
    pub fn effective_user_agent(&self) -> String {
        format!("getpapers/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Query parameters NCBI asks well-behaved clients to send
    ///
    /// Only parameters that were actually configured are included; the tool
    /// name is always present.
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref api_key) = self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }
        if let Some(ref email) = self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
