//! Tool handlers - validation, dispatch, and response assembly
//!
//! Each handler validates its arguments, builds the engine query, runs the
//! search, and renders the outcome as text. Failures of any kind become
//! error-flagged text results here, so callers always receive an ordinary
//! `CallToolResult` and never a protocol fault.

use mcp_common::{error_text, text_success};
use rmcp::model::CallToolResult;

use crate::backends::SearchBackend;
use crate::format;
use crate::params::{AcademicSearchParams, NewsSearchParams, WebSearchParams};
use crate::query::{
    self, ACADEMIC_RESULTS, NEWS_DEFAULT_RESULTS, NEWS_MAX_RESULTS, WEB_DEFAULT_RESULTS,
    WEB_MAX_RESULTS,
};
use crate::types::SearchError;

/// Cap on the failure reason embedded in response text
const ERROR_REASON_CHARS: usize = 100;

/// Render a search failure as an error-flagged text result
fn error_response(err: &SearchError) -> CallToolResult {
    let text = match err {
        SearchError::InvalidArgument(reason) => format!("Invalid argument: {}", reason),
        other => format!(
            "Search temporarily unavailable. Please try again in a moment. Error: {}",
            format::truncate_chars(&other.to_string(), ERROR_REASON_CHARS),
        ),
    };
    error_text(text)
}

/// Handle a `web_search` call
pub async fn web_search(backend: &dyn SearchBackend, params: WebSearchParams) -> CallToolResult {
    if let Err(err) = query::validate_query(&params.query) {
        return error_response(&err);
    }
    let limit = match query::clamp_results(params.max_results, WEB_DEFAULT_RESULTS, WEB_MAX_RESULTS)
    {
        Ok(limit) => limit,
        Err(err) => return error_response(&err),
    };

    tracing::info!("Web search: {} (limit: {})", params.query, limit);

    let mut results = match backend.search(&params.query, limit).await {
        Ok(results) => results,
        Err(err) => {
            tracing::warn!("web_search failed: {}", err);
            return error_response(&err);
        }
    };
    // Bound holds even if the backend over-returns
    results.truncate(limit);

    if results.is_empty() {
        return text_success(format::no_web_results(&params.query));
    }
    text_success(format::web_listing(&params.query, &results))
}

/// Handle a `news_search` call
pub async fn news_search(backend: &dyn SearchBackend, params: NewsSearchParams) -> CallToolResult {
    if let Err(err) = query::validate_query(&params.query) {
        return error_response(&err);
    }
    let limit =
        match query::clamp_results(params.max_results, NEWS_DEFAULT_RESULTS, NEWS_MAX_RESULTS) {
            Ok(limit) => limit,
            Err(err) => return error_response(&err),
        };

    tracing::info!("News search: {} (limit: {})", params.query, limit);

    let mut results = match backend.search_news(&params.query, limit).await {
        Ok(results) => results,
        Err(err) => {
            tracing::warn!("news_search failed: {}", err);
            return error_response(&err);
        }
    };
    results.truncate(limit);

    if results.is_empty() {
        return text_success(format::no_news_results(&params.query));
    }
    text_success(format::news_listing(&params.query, &results))
}

/// Handle an `academic_search` call
pub async fn academic_search(
    backend: &dyn SearchBackend,
    params: AcademicSearchParams,
) -> CallToolResult {
    if let Err(err) = query::validate_query(&params.query) {
        return error_response(&err);
    }
    let focus = params.focus.unwrap_or_default();
    let engine_query = query::augment_academic(&params.query, focus);

    tracing::info!("Academic search: {} (focus: {})", params.query, focus.as_str());

    let mut results = match backend.search(&engine_query, ACADEMIC_RESULTS).await {
        Ok(results) => results,
        Err(err) => {
            tracing::warn!("academic_search failed: {}", err);
            return error_response(&err);
        }
    };
    results.truncate(ACADEMIC_RESULTS);

    if results.is_empty() {
        return text_success(format::no_academic_results(&params.query));
    }
    text_success(format::academic_listing(&params.query, focus, &results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content.first().unwrap().raw {
            RawContent::Text(t) => t.text.as_str(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_invalid_argument_response_text() {
        let result = error_response(&SearchError::InvalidArgument("'query' is empty".to_string()));
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Invalid argument: 'query' is empty");
    }

    #[test]
    fn test_upstream_failure_reason_is_capped() {
        let long_reason = "x".repeat(400);
        let result = error_response(&SearchError::Malformed(long_reason));
        let text = text_of(&result);

        assert!(text.starts_with("Search temporarily unavailable."));
        // "unexpected engine response: xxx…" cut to 100 chars
        let reason = text.split("Error: ").nth(1).unwrap();
        assert_eq!(reason.chars().count(), ERROR_REASON_CHARS);
    }
}
