//! Minimal NCBI E-utilities client: search by taxonomy id, then page through
//! the matching GenBank records.

pub mod client;
pub mod config;
pub mod stream;

use bioscript_formats::ParseError;
use thiserror::Error;

pub use client::{EntrezClient, HistoryHandle, SearchResult, SequenceDatabase};
pub use config::{EntrezConfig, Paging};
pub use stream::RecordStream;

#[derive(Debug, Error)]
pub enum EntrezError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Entrez returned an error: {0}")]
    Api(String),
    #[error("Invalid record count in search response: {0:?}")]
    InvalidCount(String),
    #[error("Search response has no history handle to page through")]
    MissingHistory,
    #[error("Page size must be greater than zero")]
    InvalidPaging,
    #[error("Failed to parse GenBank records: {0}")]
    Parse(#[from] ParseError),
}
