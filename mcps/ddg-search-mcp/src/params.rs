//! Parameter types for the search tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::query::Focus;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchParams {
    /// The search query
    #[schemars(
        description = "Search query. Examples: 'machine learning courses', 'AI ethics research', 'rust async traits'"
    )]
    pub query: String,
    /// Number of results to return
    #[schemars(description = "Number of results to return (1-20, default 10)")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct NewsSearchParams {
    /// The news search query
    #[schemars(
        description = "News search query. Examples: 'AI developments', 'tech industry layoffs', 'climate policy'"
    )]
    pub query: String,
    /// Number of articles to return
    #[schemars(description = "Number of articles to return (1-15, default 8)")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AcademicSearchParams {
    /// The academic search query
    #[schemars(
        description = "Academic search query. Examples: 'transformer architectures', 'distributed systems course'"
    )]
    pub query: String,
    /// What kind of academic material to prioritize
    #[schemars(
        description = "Type of academic content to focus on: papers, courses, tutorials, or general (default: general)"
    )]
    pub focus: Option<Focus>,
}
