//! PubMed record fetching and abstract extraction
//!
//! This module talks to the NCBI E-utilities EFetch API to retrieve citation
//! records as XML and pulls the abstract text out of them:
//! - `client` - HTTP client for the EFetch endpoint
//! - `parser` - streaming extraction of abstract text from a record

pub mod client;
pub mod parser;

// Re-export public types
pub use client::PubMedClient;
pub use parser::extract_abstract;
