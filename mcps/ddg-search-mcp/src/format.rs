//! Rendering of search results into response text
//!
//! All three tools answer with a markdown-ish text listing: a bold header
//! line, then one numbered block per result with emoji field markers.
//! Individual fields and the whole response are capped by character count
//! so a single tool call cannot flood the client.

use crate::query::Focus;
use crate::types::{NewsResult, SearchResult};

/// Whole-response character cap
pub const RESPONSE_CHAR_LIMIT: usize = 4000;

const TITLE_CHARS: usize = 100;
const NEWS_TITLE_CHARS: usize = 120;
const SNIPPET_CHARS: usize = 300;
const NEWS_SNIPPET_CHARS: usize = 250;

/// Truncate to at most `max` characters, always on a char boundary
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn or_fallback<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() {
        fallback
    } else {
        text
    }
}

fn cap_response(sections: Vec<String>) -> String {
    truncate_chars(&sections.join("\n"), RESPONSE_CHAR_LIMIT).to_string()
}

/// Render a web search listing
pub fn web_listing(query: &str, results: &[SearchResult]) -> String {
    let mut sections = vec![format!("**Search Results for: {}**\n", query)];

    for (i, result) in results.iter().enumerate() {
        sections.push(format!(
            "\n**{}. {}**\n🔗 {}\n📝 {}\n",
            i + 1,
            truncate_chars(or_fallback(&result.title, "No Title"), TITLE_CHARS),
            or_fallback(&result.url, "No URL"),
            truncate_chars(or_fallback(&result.snippet, "No description"), SNIPPET_CHARS),
        ));
    }

    cap_response(sections)
}

/// Render a news listing
pub fn news_listing(query: &str, results: &[NewsResult]) -> String {
    let mut sections = vec![format!("**Recent News: {}**\n", query)];

    for (i, article) in results.iter().enumerate() {
        sections.push(format!(
            "\n**{}. {}**\n📰 {} | 📅 {}\n🔗 {}\n📄 {}\n",
            i + 1,
            truncate_chars(or_fallback(&article.title, "No Title"), NEWS_TITLE_CHARS),
            article.source.as_deref().unwrap_or("Unknown Source"),
            article.date.as_deref().unwrap_or("No Date"),
            or_fallback(&article.url, "No URL"),
            truncate_chars(or_fallback(&article.snippet, "No summary"), NEWS_SNIPPET_CHARS),
        ));
    }

    cap_response(sections)
}

/// Render an academic listing with a content-type tag per result
pub fn academic_listing(query: &str, focus: Focus, results: &[SearchResult]) -> String {
    let mut sections = vec![format!(
        "**Academic Search: {}** (Focus: {})\n",
        query,
        focus.as_str()
    )];

    for (i, result) in results.iter().enumerate() {
        sections.push(format!(
            "\n**{}. {}**\n{} | 🔗 {}\n📝 {}\n",
            i + 1,
            truncate_chars(or_fallback(&result.title, "No Title"), TITLE_CHARS),
            content_tag(result),
            or_fallback(&result.url, "No URL"),
            truncate_chars(or_fallback(&result.snippet, "No description"), SNIPPET_CHARS),
        ));
    }

    cap_response(sections)
}

/// Best-effort content classification for academic results
fn content_tag(result: &SearchResult) -> &'static str {
    let title = result.title.to_lowercase();

    if result.url.contains("arxiv.org") {
        "📊 Paper"
    } else if title.contains("course") || result.snippet.to_lowercase().contains("syllabus") {
        "📚 Course"
    } else if title.contains("tutorial") || title.contains("guide") {
        "🎯 Tutorial"
    } else {
        "📄 Resource"
    }
}

/// Zero-result response for web search
pub fn no_web_results(query: &str) -> String {
    format!(
        "No results found for '{}'. Try rephrasing your search or using different keywords.",
        query
    )
}

/// Zero-result response for news search
pub fn no_news_results(query: &str) -> String {
    format!(
        "No recent news found for '{}'. Try different keywords or check spelling.",
        query
    )
}

/// Zero-result response for academic search
pub fn no_academic_results(query: &str) -> String {
    format!(
        "No academic results found for '{}'. Try broader terms or different focus area.",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, url: &str, snippet: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        // Each of these is multiple bytes but one char
        assert_eq!(truncate_chars("héllo wörld", 6), "héllo ");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn test_web_listing_header_and_order() {
        let results = vec![
            result("First", "https://a.example", "alpha"),
            result("Second", "https://b.example", "beta"),
            result("Third", "https://c.example", "gamma"),
        ];
        let text = web_listing("rust", &results);

        assert!(text.starts_with("**Search Results for: rust**\n"));
        let first = text.find("**1. First**").unwrap();
        let second = text.find("**2. Second**").unwrap();
        let third = text.find("**3. Third**").unwrap();
        assert!(first < second && second < third);
        assert!(text.contains("🔗 https://a.example"));
        assert!(text.contains("📝 alpha"));
    }

    #[test]
    fn test_web_listing_empty_snippet_fallback() {
        let results = vec![result("Bare", "https://bare.example", "")];
        let text = web_listing("q", &results);
        assert!(text.contains("📝 No description"));
    }

    #[test]
    fn test_web_listing_truncates_long_fields() {
        let long_title = "t".repeat(500);
        let long_snippet = "s".repeat(1000);
        let results = vec![result(&long_title, "https://x.example", &long_snippet)];
        let text = web_listing("q", &results);

        assert!(text.contains(&"t".repeat(100)));
        assert!(!text.contains(&"t".repeat(101)));
        assert!(text.contains(&"s".repeat(300)));
        assert!(!text.contains(&"s".repeat(301)));
    }

    #[test]
    fn test_listing_respects_response_cap() {
        let results: Vec<SearchResult> = (0..50)
            .map(|i| {
                result(
                    &format!("Result number {}", i),
                    "https://example.org/some/long/path",
                    &"words ".repeat(60),
                )
            })
            .collect();
        let text = web_listing("big", &results);
        assert!(text.chars().count() <= RESPONSE_CHAR_LIMIT);
    }

    #[test]
    fn test_news_listing_fields_and_fallbacks() {
        let results = vec![
            NewsResult {
                title: "Launch day".to_string(),
                url: "https://news.example/launch".to_string(),
                snippet: "It launched.".to_string(),
                source: Some("Example Times".to_string()),
                date: Some("2025-06-01T12:00:00+00:00".to_string()),
            },
            NewsResult {
                title: "Mystery".to_string(),
                url: "https://news.example/mystery".to_string(),
                snippet: String::new(),
                source: None,
                date: None,
            },
        ];
        let text = news_listing("launches", &results);

        assert!(text.starts_with("**Recent News: launches**\n"));
        assert!(text.contains("📰 Example Times | 📅 2025-06-01T12:00:00+00:00"));
        assert!(text.contains("📰 Unknown Source | 📅 No Date"));
        assert!(text.contains("📄 No summary"));
    }

    #[test]
    fn test_academic_listing_header_carries_focus() {
        let results = vec![result("Attention Is All You Need", "https://arxiv.org/abs/1706.03762", "transformers")];
        let text = academic_listing("transformers", Focus::Papers, &results);
        assert!(text.starts_with("**Academic Search: transformers** (Focus: papers)\n"));
        assert!(text.contains("📊 Paper | 🔗 https://arxiv.org/abs/1706.03762"));
    }

    #[test]
    fn test_content_tag_classification() {
        assert_eq!(
            content_tag(&result("Some preprint", "https://arxiv.org/abs/1234", "")),
            "📊 Paper"
        );
        assert_eq!(
            content_tag(&result("Intro Course CS101", "https://cs.example.edu", "")),
            "📚 Course"
        );
        assert_eq!(
            content_tag(&result("Spring schedule", "https://cs.example.edu", "See the Syllabus here")),
            "📚 Course"
        );
        assert_eq!(
            content_tag(&result("Borrow checker tutorial", "https://blog.example", "")),
            "🎯 Tutorial"
        );
        assert_eq!(
            content_tag(&result("A Field Guide", "https://blog.example", "")),
            "🎯 Tutorial"
        );
        assert_eq!(
            content_tag(&result("Plain page", "https://blog.example", "nothing special")),
            "📄 Resource"
        );
    }

    #[test]
    fn test_no_result_messages() {
        assert_eq!(
            no_web_results("obscure"),
            "No results found for 'obscure'. Try rephrasing your search or using different keywords."
        );
        assert_eq!(
            no_news_results("obscure"),
            "No recent news found for 'obscure'. Try different keywords or check spelling."
        );
        assert_eq!(
            no_academic_results("obscure"),
            "No academic results found for 'obscure'. Try broader terms or different focus area."
        );
    }
}
