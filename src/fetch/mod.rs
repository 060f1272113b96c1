//! Query fetcher: search URL construction, page download and parsing.
//!
//! The fetcher performs exactly one blocking GET per invocation. Any failure
//! is returned as [`EmotermError::Network`] and treated as fatal by the
//! caller, so the list is never shown with results of unknown completeness.
//!
//! # Example
//!
//! ```rust
//! use emoterm::fetch::search_url;
//!
//! let url = search_url("https://www.fastemote.com/search?q=", "happy cat");
//! assert_eq!(url, "https://www.fastemote.com/search?q=happy+cat");
//! ```

mod parser;

pub use parser::parse_entries;

use crate::domain::{EmotermError, EmoticonEntry, Result};
use crate::Config;

/// Search endpoint; the query is appended directly.
pub const DEFAULT_BASE_URL: &str = "https://www.fastemote.com/search?q=";

/// User agent sent with the search request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the search URL for a query.
///
/// Appends the query to `base` and replaces every space with `+`. No other
/// characters are encoded.
#[must_use]
pub fn search_url(base: &str, query: &str) -> String {
    format!("{base}{query}").replace(' ', "+")
}

/// Fetches and parses the search results for `query`.
///
/// # Errors
///
/// Returns [`EmotermError::Network`] if the endpoint cannot be reached, the
/// response status is not 2xx, or the body cannot be read.
pub fn fetch(config: &Config, query: &str) -> Result<Vec<EmoticonEntry>> {
    let url = search_url(&config.base_url, query);
    let _span = tracing::debug_span!("fetch", url = %url).entered();

    let html = download(&url)?;
    tracing::debug!(bytes = html.len(), "search page downloaded");

    parse_entries(&html)
}

fn download(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(network_error)?;

    let response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(network_error)?;

    tracing::debug!(status = %response.status(), "search request completed");

    response.text().map_err(network_error)
}

fn network_error(err: reqwest::Error) -> EmotermError {
    tracing::error!(error = %err, "search request failed");
    EmotermError::Network(err.to_string())
}
