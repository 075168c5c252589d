//! DuckDuckGo backend
//!
//! Implements the SearchBackend trait against DuckDuckGo's unofficial JSON
//! endpoints, the same ones the site's own frontend calls. Every search is
//! a two-step exchange: fetch a per-query `vqd` token from the main site,
//! then hit the results endpoint with that token. No API key is involved.

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use super::SearchBackend;
use crate::config::{DdgConfig, SearchConfig};
use crate::types::{NewsResult, SearchError, SearchResult};

static VQD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"vqd=["']?([\d-]+)"#).unwrap());

/// DuckDuckGo backend
pub struct DdgBackend {
    client: Client,
    config: DdgConfig,
}

impl DdgBackend {
    pub fn new(search: &SearchConfig, config: DdgConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(search.timeout_seconds))
            .user_agent(&search.user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch the per-query vqd token from the main site
    ///
    /// The token is embedded in the HTML of the search page and is required
    /// by both the web and news endpoints.
    async fn fetch_vqd(&self, query: &str) -> Result<String, SearchError> {
        let url = format!("{}/", self.config.base_url);
        let response = self.client.get(&url).query(&[("q", query)]).send().await?;

        if !response.status().is_success() {
            return Err(SearchError::UpstreamStatus(response.status()));
        }

        let body = response.text().await?;
        VQD_RE
            .captures(&body)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| SearchError::Malformed("no vqd token in engine page".to_string()))
    }
}

// ============================================================================
// Raw payload types
// ============================================================================

/// One row of the d.js results payload
///
/// Navigation rows carry `n` and no result fields; real results carry at
/// least `t` (title) and `u` (url), with `a` holding the HTML snippet.
#[derive(Debug, Deserialize)]
struct DdgWebRow {
    t: Option<String>,
    u: Option<String>,
    a: Option<String>,
    n: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DdgNewsPayload {
    #[serde(default)]
    results: Vec<DdgNewsRow>,
}

#[derive(Debug, Deserialize)]
struct DdgNewsRow {
    title: Option<String>,
    url: Option<String>,
    excerpt: Option<String>,
    source: Option<String>,
    /// Publication time as a unix epoch in seconds
    date: Option<i64>,
}

// ============================================================================
// Payload helpers
// ============================================================================

/// Locate the JSON array of result rows inside a d.js body
///
/// The endpoint normally answers with a JavaScript file that feeds the row
/// array to `DDG.pageLayout.load('d', [...]);`. Some variants serve the
/// bare array instead, so both shapes are accepted.
fn extract_results_json(body: &str) -> Result<&str, SearchError> {
    const MARKER: &str = "DDG.pageLayout.load('d',";

    if let Some(pos) = body.find(MARKER) {
        let rest = &body[pos + MARKER.len()..];
        if let Some(start) = rest.find('[') {
            if let Some(array) = json_array_at(&rest[start..]) {
                return Ok(array);
            }
        }
        return Err(SearchError::Malformed(
            "result payload is not a JSON array".to_string(),
        ));
    }

    let trimmed = body.trim_start();
    if trimmed.starts_with('[') {
        if let Some(array) = json_array_at(trimmed) {
            return Ok(array);
        }
    }

    Err(SearchError::Malformed(
        "no result payload in engine response".to_string(),
    ))
}

/// Slice the balanced JSON array beginning at the first byte of `s`
///
/// Tracks string literals and escapes so brackets inside snippet text do
/// not terminate the scan early. Scanning bytes is safe here: the bytes
/// of interest are all ASCII and never occur inside UTF-8 continuations.
fn json_array_at(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in s.as_bytes().iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Strip HTML tags and decode the entities DuckDuckGo emits in snippets
fn strip_html(text: &str) -> String {
    static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

    let text = TAG_RE.replace_all(text, "");
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        // &amp; last, so double-escaped text decodes one level only
        .replace("&amp;", "&")
}

/// Unix epoch seconds to an RFC 3339 timestamp
fn epoch_to_rfc3339(secs: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(secs, 0).map(|dt| dt.to_rfc3339())
}

fn web_rows_to_results(rows: Vec<DdgWebRow>, limit: usize) -> Vec<SearchResult> {
    rows.into_iter()
        .filter(|row| row.n.is_none())
        .filter_map(|row| {
            let DdgWebRow { t, u, a, n: _ } = row;
            match (t, u) {
                (Some(title), Some(url)) => Some(SearchResult {
                    title: strip_html(&title),
                    url,
                    snippet: strip_html(&a.unwrap_or_default()),
                }),
                _ => None,
            }
        })
        .take(limit)
        .collect()
}

fn news_rows_to_results(rows: Vec<DdgNewsRow>, limit: usize) -> Vec<NewsResult> {
    rows.into_iter()
        .filter_map(|row| {
            let DdgNewsRow { title, url, excerpt, source, date } = row;
            match (title, url) {
                (Some(title), Some(url)) => Some(NewsResult {
                    title: strip_html(&title),
                    url,
                    snippet: strip_html(&excerpt.unwrap_or_default()),
                    source,
                    date: date.and_then(epoch_to_rfc3339),
                }),
                _ => None,
            }
        })
        .take(limit)
        .collect()
}

// ============================================================================
// SearchBackend Implementation
// ============================================================================

#[async_trait]
impl SearchBackend for DdgBackend {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    fn is_available(&self) -> bool {
        !self.config.base_url.is_empty() && !self.config.links_base_url.is_empty()
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError> {
        let vqd = self.fetch_vqd(query).await?;

        let url = format!("{}/d.js", self.config.links_base_url);
        let params = [
            ("q", query),
            ("kl", self.config.region.as_str()),
            ("l", self.config.region.as_str()),
            ("s", "0"),
            ("df", ""),
            ("vqd", vqd.as_str()),
            ("o", "json"),
        ];

        let response = self.client.get(&url).query(&params).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::UpstreamStatus(response.status()));
        }
        let body = response.text().await?;

        let payload = extract_results_json(&body)?;
        let rows: Vec<DdgWebRow> = serde_json::from_str(payload)
            .map_err(|e| SearchError::Malformed(format!("result rows did not parse: {}", e)))?;

        Ok(web_rows_to_results(rows, limit))
    }

    async fn search_news(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<NewsResult>, SearchError> {
        let vqd = self.fetch_vqd(query).await?;

        let url = format!("{}/news.js", self.config.base_url);
        let params = [
            ("q", query),
            ("o", "json"),
            ("noamp", "1"),
            ("l", self.config.region.as_str()),
            ("vqd", vqd.as_str()),
            ("p", "-1"),
            ("df", ""),
        ];

        let response = self.client.get(&url).query(&params).send().await?;
        if !response.status().is_success() {
            return Err(SearchError::UpstreamStatus(response.status()));
        }
        let body = response.text().await?;

        let payload: DdgNewsPayload = serde_json::from_str(&body)
            .map_err(|e| SearchError::Malformed(format!("news payload did not parse: {}", e)))?;

        Ok(news_rows_to_results(payload.results, limit))
    }
}
