#[macro_use]
extern crate serde_derive;

use anyhow::bail;

pub mod blot;
pub mod config;
pub mod dates;
pub mod dropbox;
pub mod front_matter;
pub mod pinboard;
pub mod publish;
pub mod render;

/// Body of a successful response, or an error with the status and body of a failed one.
pub(crate) async fn response_text(response: reqwest::Response) -> anyhow::Result<String> {
    let status = response.status();
    // The query may hold an auth token
    let mut url = response.url().clone();
    url.set_query(None);
    let body = response.text().await?;

    if !status.is_success() {
        bail!("HTTP failure: {} for {} - {}", status, url, body);
    }

    Ok(body)
}
