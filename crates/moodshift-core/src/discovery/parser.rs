//! Best-effort decoder for free-form discovery responses.
//!
//! The provider is asked to answer with three labelled lines:
//!
//! ```text
//! Game Name: <name>
//! Description: <one sentence>
//! Primary URL: <link>
//! ```
//!
//! Each line is extracted independently. A missing or empty field never fails
//! the decode; it is replaced by the defaults below.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;

use super::model::{DiscoveryResult, MAX_SOURCES, SourceLink};

pub const DEFAULT_NAME: &str = "Popular Discovery";
pub const DEFAULT_DESCRIPTION: &str = "A world-renowned favorite to shift your mood.";
pub const DEFAULT_SEARCH_TERM: &str = "popular games";
pub const SEARCH_BASE_URL: &str = "https://google.com/search";

static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Game Name:[ \t]*(.*)").expect("valid regex"));
static DESCRIPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Description:[ \t]*(.*)").expect("valid regex"));
static URL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Primary URL:[ \t]*(.*)").expect("valid regex"));

/// Decodes provider text and citations into a [`DiscoveryResult`].
///
/// Field defaults:
/// - name: [`DEFAULT_NAME`]
/// - description: [`DEFAULT_DESCRIPTION`]
/// - url: the first citation uri, else a search query for the parsed name
///   (or [`DEFAULT_SEARCH_TERM`])
///
/// Citations without a uri are dropped and at most [`MAX_SOURCES`] are kept.
pub fn parse_discovery(text: &str, citations: Vec<SourceLink>) -> DiscoveryResult {
    let name = extract(&NAME_LINE, text);
    let description = extract(&DESCRIPTION_LINE, text);
    let url = extract(&URL_LINE, text);

    let sources: Vec<SourceLink> = citations
        .into_iter()
        .filter(|source| source.uri.as_deref().is_some_and(|uri| !uri.is_empty()))
        .collect();

    let url = url
        .or_else(|| sources.first().and_then(|source| source.uri.clone()))
        .unwrap_or_else(|| search_url(name.as_deref().unwrap_or(DEFAULT_SEARCH_TERM)));

    if name.is_none() || description.is_none() {
        tracing::debug!(
            has_name = name.is_some(),
            has_description = description.is_some(),
            "discovery response was partial, substituting defaults"
        );
    }

    DiscoveryResult {
        name: name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        url,
        sources: sources.into_iter().take(MAX_SOURCES).collect(),
        id: None,
    }
}

/// Search engine query URL for `term`.
pub fn search_url(term: &str) -> String {
    match Url::parse_with_params(SEARCH_BASE_URL, &[("q", term)]) {
        Ok(url) => url.to_string(),
        Err(_) => SEARCH_BASE_URL.to_string(),
    }
}

fn extract(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
