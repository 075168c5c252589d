//! Result helpers for MCP tool responses
//!
//! Provides convenient functions for creating `CallToolResult` responses,
//! reducing boilerplate in tool implementations.

use rmcp::model::{CallToolResult, Content};

/// Create a successful plain text response
///
/// For tools that return simple text rather than structured data.
///
/// # Arguments
///
/// * `text` - Any type that can be converted to a `String`
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::text_success;
///
/// fn my_tool(&self) -> CallToolResult {
///     text_success("Operation completed successfully")
/// }
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create an error-flagged plain text response
///
/// The result carries `is_error: true` but is still an ordinary tool
/// result, not a protocol fault. Servers that report failures as text
/// use this so the caller sees the message in the normal content stream.
///
/// # Arguments
///
/// * `text` - Any type that can be converted to a `String`
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::error_text;
///
/// fn my_tool(&self) -> CallToolResult {
///     error_text("Upstream service unavailable")
/// }
/// ```
pub fn error_text(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}
