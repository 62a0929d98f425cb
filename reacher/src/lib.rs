//! # reacher
//!
//! A Rust client for running PubMed abstracts through the REACH biomedical
//! event extraction service. Given a PMID, this crate fetches the citation
//! record from the NCBI E-utilities, extracts the abstract text, submits it
//! to REACH for FRIES-format event extraction, and persists the raw result.
//!
//! ## Features
//!
//! - **PubMed EFetch Integration**: Fetch citation records as XML by PMID
//! - **Abstract Extraction**: Streaming XML parsing of structured abstracts
//! - **REACH Submission**: Form-encoded submission with FRIES output
//! - **Result Summarization**: Event-frame counts grouped by type
//! - **Async Support**: Built on tokio for async/await support
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use reacher::{PipelineOutcome, Reacher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reacher = Reacher::new();
//!
//!     match reacher.process_pmid("24476521", Path::new(".")).await? {
//!         PipelineOutcome::Saved { path, stats } => {
//!             stats.write_report(&mut std::io::stderr())?;
//!             eprintln!("result written to {}", path.display());
//!         }
//!         PipelineOutcome::NoAbstract => {
//!             eprintln!("record has no abstract to analyze");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod pubmed;
pub mod reach;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{ReacherError, Result};
pub use pubmed::{PubMedClient, extract_abstract};
pub use reach::{EventStats, ReachClient};

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

/// Terminal states of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The analysis result was written to `path`
    Saved {
        /// Location of the persisted FRIES JSON
        path: PathBuf,
        /// Event counts derived from the persisted result
        stats: EventStats,
    },
    /// The record carries no abstract text; nothing was submitted or written
    NoAbstract,
}

/// Convenience client that combines PubMed fetching and REACH processing
#[derive(Clone)]
pub struct Reacher {
    /// PubMed client for citation records
    pub pubmed: PubMedClient,
    /// REACH client for event extraction
    pub reach: ReachClient,
}

impl Reacher {
    /// Create a new combined client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use reacher::Reacher;
    ///
    /// let reacher = Reacher::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new combined client with custom configuration
    ///
    /// Both service clients share the same timeout and user agent; the
    /// endpoint bases are taken per service.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use reacher::{ClientConfig, Reacher};
    ///
    /// let config = ClientConfig::new().with_timeout(Duration::from_secs(120));
    /// let reacher = Reacher::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            pubmed: PubMedClient::with_config(config.clone()),
            reach: ReachClient::with_config(config),
        }
    }

    /// Fetch a PMID's citation record and extract its abstract text
    ///
    /// Returns `Ok(None)` when the record exists but has no abstract
    /// content.
    pub async fn fetch_abstract(&self, pmid: &str) -> Result<Option<String>> {
        self.pubmed.fetch_abstract(pmid).await
    }

    /// Run the full pipeline for one PMID
    ///
    /// Fetches the citation record, extracts the abstract text, submits it
    /// to REACH, writes the raw FRIES JSON (plus a trailing newline) to
    /// `{pmid}.json` under `out_dir`, and summarizes the event frames.
    ///
    /// Each stage completes before the next starts. A record without
    /// abstract content short-circuits to [`PipelineOutcome::NoAbstract`]
    /// without contacting REACH or touching the filesystem.
    ///
    /// # Errors
    ///
    /// Any stage's error aborts the run: remote failures from either
    /// service, an unparseable record, a filesystem failure, or a REACH
    /// response that is not valid JSON. In the last case the raw response
    /// has already been written.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    ///
    /// use reacher::Reacher;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let reacher = Reacher::new();
    ///     let outcome = reacher.process_pmid("24476521", Path::new(".")).await?;
    ///     println!("{:?}", outcome);
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, out_dir), fields(pmid = %pmid))]
    pub async fn process_pmid(&self, pmid: &str, out_dir: &Path) -> Result<PipelineOutcome> {
        let xml = self.pubmed.fetch_record(pmid).await?;

        let abstract_text = match extract_abstract(&xml)? {
            Some(text) => text,
            None => {
                info!("Record carries no abstract text, skipping analysis");
                return Ok(PipelineOutcome::NoAbstract);
            }
        };

        let mut file_contents = self.reach.process_text(&abstract_text).await?;
        file_contents.push('\n');

        // Persist before summarizing; a result that fails to parse must
        // still land on disk.
        let path = out_dir.join(format!("{}.json", pmid));
        tokio::fs::write(&path, &file_contents)
            .await
            .map_err(|e| ReacherError::IoError {
                message: e.to_string(),
            })?;
        info!(path = %path.display(), "Saved analysis result");

        let stats = EventStats::from_json(&file_contents)?;

        Ok(PipelineOutcome::Saved { path, stats })
    }
}

impl Default for Reacher {
    fn default() -> Self {
        Self::new()
    }
}
