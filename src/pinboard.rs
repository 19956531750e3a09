//! Bookmarks from the Pinboard API.

use std::borrow::Cow;

use anyhow::Context;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

#[derive(Debug, Clone, Deserialize)]
pub struct Bookmark {
    pub href: String,
    pub description: String,
    pub time: DateTime<Utc>,
}

/// Fetch all bookmarks having `tag`, in the order returned by Pinboard (most recent first).
pub async fn fetch_bookmarks(
    client: &reqwest::Client,
    api_url: &str,
    token: &str,
    tag: &str,
) -> anyhow::Result<Vec<Bookmark>> {
    let url = format!("{}/v1/posts/all", api_url.trim_end_matches('/'));
    tracing::debug!("Fetching bookmarks tagged '{}' from {}", tag, url);

    let response = client
        .get(&url)
        .query(&[("auth_token", token), ("tag", tag), ("format", "json")])
        .send()
        .await
        // The URL holds the auth token
        .map_err(|e| e.without_url())
        .context("Failed to fetch bookmarks from Pinboard")?;

    let body = crate::response_text(response)
        .await
        .context("Failed to fetch bookmarks from Pinboard")?;

    Payload::classify(body).into_bookmarks()
}

///
/// A Pinboard response body. Pinboard sometimes sends zero-width characters around otherwise
/// valid JSON, which makes it unparseable as-is: such bodies are kept as raw text to be cleaned
/// up before parsing.
///
#[derive(Debug)]
pub enum Payload {
    Structured(Vec<Bookmark>),
    RawText(String),
}

impl Payload {
    pub fn classify(body: String) -> Payload {
        match serde_json::from_str(&body) {
            Ok(bookmarks) => Payload::Structured(bookmarks),
            Err(_) => Payload::RawText(body),
        }
    }

    pub fn into_bookmarks(self) -> anyhow::Result<Vec<Bookmark>> {
        match self {
            Payload::Structured(bookmarks) => Ok(bookmarks),
            Payload::RawText(text) => {
                tracing::debug!("Pinboard response is not valid JSON, removing zero-width characters");
                serde_json::from_str(&strip_zero_width(&text)).context("Failed to parse Pinboard bookmarks")
            }
        }
    }
}

lazy_static! {
    static ref ZERO_WIDTH_RE: Regex = Regex::new("[\u{200B}-\u{200D}\u{FEFF}]").unwrap();
}

/// Remove zero-width spaces, joiners and byte order marks.
pub fn strip_zero_width(text: &str) -> Cow<'_, str> {
    ZERO_WIDTH_RE.replace_all(text, "")
}
