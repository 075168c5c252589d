//! Query construction rules for the search tools
//!
//! Defines the closed tool set, per-tool result count bounds, argument
//! validation, and the focus-based query augmentation used by academic
//! search.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::SearchError;

/// Default result count for web search
pub const WEB_DEFAULT_RESULTS: usize = 10;
/// Upper bound on web search results
pub const WEB_MAX_RESULTS: usize = 20;
/// Default result count for news search
pub const NEWS_DEFAULT_RESULTS: usize = 8;
/// Upper bound on news search results
pub const NEWS_MAX_RESULTS: usize = 15;
/// Academic search always requests this many results
pub const ACADEMIC_RESULTS: usize = 10;

/// The closed set of tools this server exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTool {
    Web,
    News,
    Academic,
}

impl SearchTool {
    /// Resolve a wire-level tool name, `None` for anything unknown
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "web_search" => Some(Self::Web),
            "news_search" => Some(Self::News),
            "academic_search" => Some(Self::Academic),
            _ => None,
        }
    }

    /// Wire-level tool name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Web => "web_search",
            Self::News => "news_search",
            Self::Academic => "academic_search",
        }
    }
}

/// Academic content category used to bias the engine query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Papers,
    Courses,
    Tutorials,
    #[default]
    General,
}

impl Focus {
    /// Lowercase label, as accepted on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Papers => "papers",
            Self::Courses => "courses",
            Self::Tutorials => "tutorials",
            Self::General => "general",
        }
    }

    /// Query suffix appended for this focus
    const fn suffix(self) -> &'static str {
        match self {
            Self::Papers => " site:arxiv.org OR site:scholar.google.com OR filetype:pdf",
            Self::Courses => " site:edu course OR curriculum OR syllabus",
            Self::Tutorials => " tutorial OR guide OR how-to site:edu",
            Self::General => " site:edu OR site:arxiv.org",
        }
    }
}

/// Reject empty or whitespace-only queries before any network traffic
pub fn validate_query(query: &str) -> Result<(), SearchError> {
    if query.trim().is_empty() {
        return Err(SearchError::InvalidArgument(
            "'query' must not be empty or whitespace-only".to_string(),
        ));
    }
    Ok(())
}

/// Resolve the effective result count for a tool call
///
/// A missing count falls back to the tool's default. Zero is rejected
/// since it can only mean a caller bug. Counts above the tool's bound
/// are clamped rather than rejected.
pub fn clamp_results(
    requested: Option<usize>,
    default: usize,
    max: usize,
) -> Result<usize, SearchError> {
    match requested {
        None => Ok(default),
        Some(0) => Err(SearchError::InvalidArgument(
            "'max_results' must be a positive integer".to_string(),
        )),
        Some(n) => Ok(n.min(max)),
    }
}

/// Build the engine query for an academic search
pub fn augment_academic(query: &str, focus: Focus) -> String {
    format!("{}{}", query, focus.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_round_trip() {
        for tool in [SearchTool::Web, SearchTool::News, SearchTool::Academic] {
            assert_eq!(SearchTool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(SearchTool::from_name("image_search"), None);
        assert_eq!(SearchTool::from_name(""), None);
    }

    #[test]
    fn test_validate_query_rejects_empty() {
        assert!(matches!(
            validate_query(""),
            Err(SearchError::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_query("   \t\n"),
            Err(SearchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_validate_query_accepts_text() {
        assert!(validate_query("rust async traits").is_ok());
        assert!(validate_query(" padded ").is_ok());
    }

    #[test]
    fn test_clamp_results_default() {
        assert_eq!(
            clamp_results(None, WEB_DEFAULT_RESULTS, WEB_MAX_RESULTS).unwrap(),
            WEB_DEFAULT_RESULTS
        );
    }

    #[test]
    fn test_clamp_results_zero_rejected() {
        assert!(matches!(
            clamp_results(Some(0), WEB_DEFAULT_RESULTS, WEB_MAX_RESULTS),
            Err(SearchError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_clamp_results_in_range_kept() {
        assert_eq!(clamp_results(Some(3), 10, 20).unwrap(), 3);
        assert_eq!(clamp_results(Some(20), 10, 20).unwrap(), 20);
    }

    #[test]
    fn test_clamp_results_above_bound_clamped() {
        assert_eq!(clamp_results(Some(50), 10, 20).unwrap(), 20);
        assert_eq!(clamp_results(Some(99), 8, 15).unwrap(), 15);
    }

    #[test]
    fn test_focus_labels() {
        assert_eq!(Focus::Papers.as_str(), "papers");
        assert_eq!(Focus::General.as_str(), "general");
        assert_eq!(Focus::default(), Focus::General);
    }

    #[test]
    fn test_focus_deserializes_lowercase() {
        let focus: Focus = serde_json::from_str("\"papers\"").unwrap();
        assert_eq!(focus, Focus::Papers);
        assert!(serde_json::from_str::<Focus>("\"textbooks\"").is_err());
    }

    #[test]
    fn test_augment_academic_appends_focus_terms() {
        let q = augment_academic("machine learning", Focus::Papers);
        assert!(q.starts_with("machine learning "));
        assert!(q.contains("site:arxiv.org"));
        assert!(q.contains("filetype:pdf"));
    }

    #[test]
    fn test_augmented_queries_differ_per_focus() {
        let focuses = [Focus::Papers, Focus::Courses, Focus::Tutorials, Focus::General];
        for a in focuses {
            for b in focuses {
                if a != b {
                    assert_ne!(augment_academic("dsp", a), augment_academic("dsp", b));
                }
            }
        }
    }
}
