//! Upload of pages to the Dropbox folder backing the Blot site.

use anyhow::Context;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

/// Arguments of the `files/upload` endpoint, sent in the `Dropbox-API-Arg` header.
#[derive(Debug, Serialize)]
pub struct UploadArg<'a> {
    pub path: &'a str,
    pub mode: &'static str,
    /// Don't notify the user's devices of the change
    pub mute: bool,
}

impl<'a> UploadArg<'a> {
    pub fn overwrite(path: &'a str) -> Self {
        UploadArg {
            path,
            mode: "overwrite",
            mute: true,
        }
    }

    /// JSON value of the header. Header values must be printable ASCII, so other characters
    /// (including DEL) are escaped.
    pub fn to_header(&self) -> anyhow::Result<String> {
        let json = serde_json::to_string(self)?;
        let mut result = String::with_capacity(json.len());
        let mut buf = [0u16; 2];
        for c in json.chars() {
            if c.is_ascii() && c != '\u{7f}' {
                result.push(c);
            } else {
                for unit in c.encode_utf16(&mut buf) {
                    result.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
        Ok(result)
    }
}

/// Dropbox path of a page: `<folder>/pages/<page>.md`
pub fn page_path(folder: &str, page: &str) -> String {
    format!("{}/pages/{}.md", folder.trim_end_matches('/'), page)
}

/// Upload a file, replacing any existing file at `path`.
pub async fn upload(
    client: &reqwest::Client,
    upload_url: &str,
    token: &str,
    path: &str,
    content: &str,
) -> anyhow::Result<()> {
    let arg = UploadArg::overwrite(path).to_header()?;
    tracing::debug!("Uploading {} bytes to {}", content.len(), path);

    let response = client
        .post(upload_url)
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .header(CONTENT_TYPE, "application/octet-stream")
        .header("Dropbox-API-Arg", arg)
        .body(content.as_bytes().to_vec())
        .send()
        .await
        .with_context(|| format!("Failed to upload {}", path))?;

    crate::response_text(response)
        .await
        .with_context(|| format!("Failed to upload {}", path))?;

    Ok(())
}
