//! DuckDuckGo Search MCP Library
//!
//! Web, news, and academic search over DuckDuckGo's public JSON endpoints.
//! No API keys required.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use ddg_search_mcp::DdgSearchMcpServer;
//!
//! let server = DdgSearchMcpServer::new();
//! // Drive it in-process via EmbeddableMcp, or serve it over stdio
//! ```
//!
//! # Configuration
//! Set `DDG_SEARCH_CONFIG_PATH` env var or configure in `~/.ddg-search.toml`

pub mod backends;
pub mod config;
pub mod format;
pub mod handlers;
pub mod params;
pub mod query;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::DdgSearchMcpServer;

// Re-export parameter types for direct API usage
pub use params::{AcademicSearchParams, NewsSearchParams, WebSearchParams};
