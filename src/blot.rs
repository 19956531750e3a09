//! Recent posts from the Blot blog.

use anyhow::Context;

#[derive(Debug, Clone, Deserialize)]
pub struct PostEntry {
    /// Publication date, already formatted by the blog
    pub date: String,
    pub title: String,
    pub url: String,
}

/// A page of the blog listing, as returned in Blot's `debug=true` mode.
#[derive(Debug, Deserialize)]
pub struct PostListing {
    pub entries: Vec<PostEntry>,
}

pub async fn fetch_posts(client: &reqwest::Client, posts_url: &str) -> anyhow::Result<Vec<PostEntry>> {
    tracing::debug!("Fetching posts from {}", posts_url);

    let response = client
        .get(posts_url)
        .send()
        .await
        .context("Failed to fetch posts from Blot")?;

    let body = crate::response_text(response)
        .await
        .context("Failed to fetch posts from Blot")?;

    let listing: PostListing = serde_json::from_str(&body).context("Failed to parse Blot post listing")?;

    Ok(listing.entries)
}
