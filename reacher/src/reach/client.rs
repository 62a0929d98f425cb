//! HTTP client for the REACH event extraction web service

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{ReacherError, Result};

/// Client for the REACH biomedical event extraction service
#[derive(Clone)]
pub struct ReachClient {
    client: Client,
    pub(crate) base_url: String,
}

impl ReachClient {
    /// Create a new REACH client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new REACH client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use reacher::{ClientConfig, ReachClient};
    ///
    /// let config = ClientConfig::new().with_reach_base_url("http://localhost:8080/odinweb");
    /// let client = ReachClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_reach_base_url().to_string();

        let mut builder = Client::builder().user_agent(config.effective_user_agent());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    /// Run REACH event extraction over a block of text
    ///
    /// Submits the text to the service's `/api/text` endpoint requesting
    /// FRIES output and returns the response body verbatim, leaving the
    /// JSON untouched for persistence. Extraction can take a while on the
    /// public instance; the request is awaited without a deadline unless a
    /// timeout was configured.
    ///
    /// # Arguments
    ///
    /// * `text` - Text to analyze; the caller is expected to pass
    ///   non-empty content
    ///
    /// # Returns
    ///
    /// Returns a `Result<String>` containing the raw FRIES JSON body
    ///
    /// # Errors
    ///
    /// * `ReacherError::RequestError` - If the HTTP request fails
    /// * `ReacherError::ApiError` - If the service responds with a non-success status
    ///
    /// # Example
    ///
    /// ```no_run
    /// use reacher::ReachClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = ReachClient::new();
    ///     let result = client.process_text("MEK phosphorylates ERK.").await?;
    ///     println!("{}", result);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, text), fields(text_length = text.len()))]
    pub async fn process_text(&self, text: &str) -> Result<String> {
        // Build form data for POST request
        let params = vec![
            ("text".to_string(), text.to_string()),
            ("output".to_string(), "fries".to_string()),
        ];

        let url = format!("{}/api/text", self.base_url);

        debug!("Making REACH API request to: {}", url);
        let response = self.client.post(&url).form(&params).send().await?;

        if !response.status().is_success() {
            warn!("REACH request failed with status: {}", response.status());
            return Err(ReacherError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        let body = response.text().await?;
        debug!(response_size = body.len(), "REACH processing completed");
        Ok(body)
    }
}

impl Default for ReachClient {
    fn default() -> Self {
        Self::new()
    }
}
