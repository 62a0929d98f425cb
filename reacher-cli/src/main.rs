use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reacher::{ClientConfig, PipelineOutcome, Reacher};

#[derive(Parser)]
#[command(
    name = "reacher",
    about = "Run REACH event extraction over a PubMed abstract",
    long_about = "Fetches a PubMed citation record by PMID, extracts the abstract text, \
                  submits it to the REACH event extraction service, and saves the raw \
                  FRIES JSON result to {PMID}.json"
)]
struct Cli {
    /// PubMed ID of the article to process
    pmid: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Directory the result file is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Override the PubMed E-utilities base URL
    #[arg(long, env = "REACHER_PUBMED_URL")]
    pubmed_url: Option<String>,

    /// Override the REACH service base URL
    #[arg(long, env = "REACHER_REACH_URL")]
    reach_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // All diagnostics go to stderr; stdout stays silent.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = ClientConfig::new();
    if let Some(url) = cli.pubmed_url {
        config = config.with_pubmed_base_url(url);
    }
    if let Some(url) = cli.reach_url {
        config = config.with_reach_base_url(url);
    }

    let reacher = Reacher::with_config(config);

    match reacher.process_pmid(&cli.pmid, &cli.output_dir).await? {
        PipelineOutcome::Saved { path, stats } => {
            stats
                .write_report(&mut std::io::stderr())
                .context("Failed to write event report")?;
            tracing::debug!(path = %path.display(), "Analysis result saved");
        }
        PipelineOutcome::NoAbstract => {
            use std::io::Write;
            writeln!(std::io::stderr(), "error: no abstract text could be extracted")
                .context("Failed to write diagnostic message")?;
            std::process::exit(1);
        }
    }

    Ok(())
}
