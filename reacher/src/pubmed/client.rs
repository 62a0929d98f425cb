//! HTTP client for the PubMed E-utilities EFetch API

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{ReacherError, Result};
use crate::pubmed::parser::extract_abstract;

/// Client for fetching PubMed citation records via EFetch
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    pub(crate) base_url: String,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use reacher::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use reacher::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new().with_pubmed_base_url("http://localhost:8080/eutils");
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_pubmed_base_url().to_string();

        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Fetch the raw EFetch XML record for a PMID
    ///
    /// The identifier is substituted into the request URL as-is; anything
    /// PubMed does not recognize comes back as a remote error or an empty
    /// record, not a local failure.
    ///
    /// # Arguments
    ///
    /// * `pmid` - PubMed ID as a string
    ///
    /// # Returns
    ///
    /// Returns a `Result<String>` containing the XML response body
    ///
    /// # Errors
    ///
    /// * `ReacherError::InvalidPmid` - If the PMID is empty
    /// * `ReacherError::RequestError` - If the HTTP request fails
    /// * `ReacherError::ApiError` - If the API responds with a non-success status
    ///
    /// # Example
    ///
    /// ```no_run
    /// use reacher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let xml = client.fetch_record("24476521").await?;
    ///     println!("Fetched {} bytes of XML", xml.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_record(&self, pmid: &str) -> Result<String> {
        if pmid.trim().is_empty() {
            return Err(ReacherError::InvalidPmid {
                pmid: pmid.to_string(),
            });
        }

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url, pmid
        );

        debug!("Making EFetch API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!("EFetch request failed with status: {}", response.status());
            return Err(ReacherError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let xml = response.text().await?;
        debug!(xml_size = xml.len(), "Fetched EFetch record");
        Ok(xml)
    }

    /// Fetch a record and extract its abstract text in one step
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when the record exists but carries no abstract
    /// content.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use reacher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     match client.fetch_abstract("24476521").await? {
    ///         Some(text) => println!("{}", text),
    ///         None => eprintln!("no abstract available"),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmid = %pmid))]
    pub async fn fetch_abstract(&self, pmid: &str) -> Result<Option<String>> {
        let xml = self.fetch_record(pmid).await?;
        extract_abstract(&xml)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
