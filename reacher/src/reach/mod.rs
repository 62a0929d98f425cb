//! REACH event extraction and result summarization
//!
//! This module submits text to the REACH web service and summarizes the
//! FRIES documents it returns:
//! - `client` - HTTP client for the `/api/text` endpoint
//! - `stats` - event-frame counting and report formatting

pub mod client;
pub mod stats;

// Re-export public types
pub use client::ReachClient;
pub use stats::EventStats;
