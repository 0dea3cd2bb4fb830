//! Web search helper, unrelated to the embedding pipeline.
//!
//! Fetches DuckDuckGo's HTML results page and extracts result titles and
//! snippets. Used by the chatbot layer for live lookups; the CLI exposes a
//! one-off smoke check (`foodembed search-check`).

use scraper::{Html, Selector};
use std::time::Duration;

use crate::config::SearchConfig;

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; foodembed/0.1)";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search returned HTTP {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("no results found for query")]
    NoResults,
}

/// One extracted search result.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
}

pub struct WebSearchTool {
    client: reqwest::Client,
}

impl WebSearchTool {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Run a search and format the top `max_results` results as numbered text.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<String, SearchError> {
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::BadStatus(response.status()));
        }

        let body = response.text().await?;
        let results = parse_results(&body, max_results);
        if results.is_empty() {
            return Err(SearchError::NoResults);
        }

        Ok(format_results(&results))
    }
}

/// Extract result titles and snippets from the DuckDuckGo HTML page.
fn parse_results(html: &str, limit: usize) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    let result_selector = Selector::parse(".result").expect("valid selector");
    let title_selector = Selector::parse(".result__title").expect("valid selector");
    let snippet_selector = Selector::parse(".result__snippet").expect("valid selector");

    let mut results = Vec::new();
    for element in document.select(&result_selector) {
        let title = element
            .select(&title_selector)
            .next()
            .map(|t| collapse_whitespace(&t.text().collect::<String>()))
            .unwrap_or_default();
        let snippet = element
            .select(&snippet_selector)
            .next()
            .map(|s| collapse_whitespace(&s.text().collect::<String>()))
            .unwrap_or_default();

        if title.is_empty() && snippet.is_empty() {
            continue;
        }
        results.push(SearchResult { title, snippet });
        if results.len() >= limit {
            break;
        }
    }
    results
}

fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. {}\n{}", i + 1, r.title, r.snippet))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
