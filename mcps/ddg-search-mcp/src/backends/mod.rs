//! Search backend implementations
//!
//! This module provides a trait-based abstraction over the search engine.
//! The production backend talks to DuckDuckGo; tests substitute their own
//! implementations through the same trait.

use async_trait::async_trait;

use crate::types::{NewsResult, SearchError, SearchResult};

pub mod ddg;

/// Trait for search backends
///
/// All search backends must implement this trait to provide a consistent
/// interface for the MCP server.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Perform a web search, returning at most `limit` results
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError>;

    /// Perform a news search, returning at most `limit` results
    async fn search_news(&self, query: &str, limit: usize)
        -> Result<Vec<NewsResult>, SearchError>;

    /// Check if this backend is configured and available
    fn is_available(&self) -> bool;
}
