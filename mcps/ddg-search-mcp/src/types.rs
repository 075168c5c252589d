//! Shared types for search results and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single web or academic search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title
    pub title: String,
    /// Result URL
    pub url: String,
    /// Text snippet, empty when the engine provided none
    #[serde(default)]
    pub snippet: String,
}

/// A single news search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResult {
    /// Article title
    pub title: String,
    /// Article URL
    pub url: String,
    /// Article excerpt, empty when the engine provided none
    #[serde(default)]
    pub snippet: String,
    /// Publishing outlet, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Publication time as an RFC 3339 timestamp, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Errors raised while fulfilling a search request
///
/// Every variant is rendered into response text at the dispatch boundary.
/// Nothing here escapes the server as a protocol fault.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Request arguments failed validation; no network call was made
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP request to the engine failed (connect, timeout, body read)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The engine answered with a non-success status code
    #[error("search engine returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),

    /// The engine response body could not be interpreted
    #[error("unexpected engine response: {0}")]
    Malformed(String),
}
