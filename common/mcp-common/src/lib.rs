//! MCP Common - Shared utilities for MCP servers
//!
//! This crate provides common functionality used across all MCP servers:
//!
//! - **Initialization**: `serve_stdio!` macro for standardized server startup
//! - **Results**: Helper functions for creating `CallToolResult` responses
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, text_success};
//! use rmcp::model::CallToolResult;
//!
//! // In main.rs - replaces ~30 lines of boilerplate
//! serve_stdio!(MyServer, "my-mcp");
//!
//! // In tool implementations
//! fn my_tool(&self) -> CallToolResult {
//!     text_success("Operation completed")
//! }
//! ```
//!
//! # Embedding MCPs
//!
//! For in-process execution without subprocess spawning:
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use ddg_search_mcp::DdgSearchMcpServer;
//!
//! let server = DdgSearchMcpServer::new();
//! let tools = server.list_tools();
//! let result = server.call_tool("web_search", serde_json::json!({"query": "rust"})).await?;
//! ```

pub mod embeddable;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use init::init_tracing;
pub use result::{error_text, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
