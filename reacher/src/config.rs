//! Configuration for the PubMed and REACH service clients

use std::time::Duration;

/// Default base URL for the NCBI E-utilities API
pub const DEFAULT_PUBMED_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default base URL for the REACH web service
pub const DEFAULT_REACH_BASE_URL: &str = "http://agathon.sista.arizona.edu:8080/odinweb";

/// Configuration for service clients
///
/// Controls the endpoints and HTTP behavior shared by the PubMed and REACH
/// clients. All fields are optional; the defaults talk to the public
/// services.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use reacher::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(30))
///     .with_user_agent("my-pipeline/1.0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Override for the PubMed E-utilities base URL
    pub pubmed_base_url: Option<String>,
    /// Override for the REACH service base URL
    pub reach_base_url: Option<String>,
    /// Request timeout (requests wait indefinitely when unset)
    pub timeout: Option<Duration>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom PubMed E-utilities base URL
    ///
    /// Useful for testing against a mock server or a self-hosted mirror.
    pub fn with_pubmed_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.pubmed_base_url = Some(base_url.into());
        self
    }

    /// Set a custom REACH service base URL
    pub fn with_reach_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.reach_base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout for both services
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom User-Agent header
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get the effective PubMed base URL
    pub fn effective_pubmed_base_url(&self) -> &str {
        self.pubmed_base_url
            .as_deref()
            .unwrap_or(DEFAULT_PUBMED_BASE_URL)
    }

    /// Get the effective REACH base URL
    pub fn effective_reach_base_url(&self) -> &str {
        self.reach_base_url
            .as_deref()
            .unwrap_or(DEFAULT_REACH_BASE_URL)
    }

    /// Get the effective User-Agent header value
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("reacher/{}", env!("CARGO_PKG_VERSION")))
    }
}
