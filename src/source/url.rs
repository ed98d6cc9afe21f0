use super::SourceError;
use crate::Config;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use std::time::Duration;

lazy_static! {
    // Main content elements; script/style never match so their contents
    // are dropped along with the rest of the boilerplate.
    static ref CONTENT: Selector =
        Selector::parse("p, h1, h2, h3, h4, h5, h6, li, td").unwrap();
}

/// Fetch a web page and return its visible text content.
pub fn fetch(url: &str, config: &Config) -> Result<String, SourceError> {
    let parsed = reqwest::Url::parse(url).map_err(|_| SourceError::InvalidUrl)?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(SourceError::InvalidUrl);
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| SourceError::Fetch(e.to_string()))?;

    let response = client
        .get(parsed)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| SourceError::Fetch(e.to_string()))?;

    let body = response
        .text()
        .map_err(|e| SourceError::Fetch(e.to_string()))?;

    let text = extract_text(&body);
    if text.trim().is_empty() {
        return Err(SourceError::EmptyPage);
    }

    Ok(text)
}

/// Pull the text of the main content elements out of an HTML document,
/// joined by single spaces. Separate from [`fetch`] so it can be tested
/// without a network.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .select(&CONTENT)
        .map(|element| element.text().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(" ")
}
