//! MCP Server implementation for DuckDuckGo search
//!
//! This module defines the main MCP server that exposes the three search
//! tools and wires them to a search backend.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;
use std::sync::Arc;

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult};

use crate::backends::{ddg::DdgBackend, SearchBackend};
use crate::config::Config;
use crate::handlers;
use crate::params::{AcademicSearchParams, NewsSearchParams, WebSearchParams};
use crate::query::SearchTool;

/// The main DuckDuckGo Search MCP Server
#[derive(Clone)]
pub struct DdgSearchMcpServer {
    backend: Arc<dyn SearchBackend>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl DdgSearchMcpServer {
    /// Create a server with configuration loaded from the environment
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    /// Create a server from an explicit configuration
    pub fn with_config(config: Config) -> Self {
        tracing::info!("Using DuckDuckGo backend at {}", config.ddg.base_url);
        let backend: Arc<dyn SearchBackend> =
            Arc::new(DdgBackend::new(&config.search, config.ddg.clone()));

        if !backend.is_available() {
            tracing::warn!(
                "Backend '{}' is not available (check configured endpoints)",
                backend.name()
            );
        }

        Self::with_backend(backend)
    }

    /// Create a server around an existing backend
    pub fn with_backend(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            tool_router: Self::tool_router(),
        }
    }

    // ========================================================================
    // Search Tools
    // ========================================================================

    #[tool(
        description = "Search the web for current information on any topic. Returns a numbered text listing of titles, URLs, and descriptions."
    )]
    async fn web_search(
        &self,
        Parameters(params): Parameters<WebSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(handlers::web_search(self.backend.as_ref(), params).await)
    }

    #[tool(
        description = "Search for recent news articles and current events. Returns titles, sources, publication dates, URLs, and excerpts."
    )]
    async fn news_search(
        &self,
        Parameters(params): Parameters<NewsSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(handlers::news_search(self.backend.as_ref(), params).await)
    }

    #[tool(
        description = "Search for academic and educational content such as research papers, university courses, and tutorials. An optional focus narrows the kind of material returned."
    )]
    async fn academic_search(
        &self,
        Parameters(params): Parameters<AcademicSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(handlers::academic_search(self.backend.as_ref(), params).await)
    }
}

impl Default for DdgSearchMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for DdgSearchMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "DuckDuckGo Search MCP Server - provides web search, news search, \
                 and academic search backed by DuckDuckGo. Results come back as \
                 formatted text listings and failures are reported as text, so \
                 callers never need to handle protocol errors. No API keys required."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for DdgSearchMcpServer {
    fn server_name(&self) -> &str {
        "ddg-search"
    }

    fn server_description(&self) -> Option<&str> {
        Some("DuckDuckGo web, news, and academic search")
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let Some(tool) = SearchTool::from_name(name) else {
            return Err(EmbeddableError::ToolNotFound(name.to_string()));
        };

        let result = match tool {
            SearchTool::Web => {
                let params: WebSearchParams = serde_json::from_value(params)?;
                handlers::web_search(self.backend.as_ref(), params).await
            }
            SearchTool::News => {
                let params: NewsSearchParams = serde_json::from_value(params)?;
                handlers::news_search(self.backend.as_ref(), params).await
            }
            SearchTool::Academic => {
                let params: AcademicSearchParams = serde_json::from_value(params)?;
                handlers::academic_search(self.backend.as_ref(), params).await
            }
        };

        Ok(result)
    }
}
