//! DuckDuckGo Search MCP Server
//!
//! Web, news, and academic search over DuckDuckGo's public JSON endpoints.
//! No API keys required.
//!
//! # Configuration
//! Set `DDG_SEARCH_CONFIG_PATH` env var or configure in `~/.ddg-search.toml`

mod backends;
mod config;
mod format;
mod handlers;
mod params;
mod query;
mod server;
mod types;

use server::DdgSearchMcpServer;

mcp_common::serve_stdio!(DdgSearchMcpServer, "ddg_search_mcp");
