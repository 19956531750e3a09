use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use chrono::{Duration, Utc};

use crate::blot;
use crate::config::{Config, Credentials};
use crate::dropbox;
use crate::pinboard;
use crate::render;

pub const BOOKMARKS_PAGE: &str = "bookmarks";
pub const ABOUT_PAGE: &str = "about";

/// Where rendered pages go.
pub enum Target {
    /// The Dropbox folder of the Blot site
    Dropbox {
        upload_url: String,
        folder: String,
        token: String,
    },
    /// A local directory, to check pages before publishing them
    Directory(PathBuf),
}

impl Target {
    pub fn dropbox(config: &Config, token: String) -> Target {
        Target::Dropbox {
            upload_url: config.dropbox_upload_url.clone(),
            folder: config.dropbox_folder.clone(),
            token,
        }
    }

    pub async fn put(&self, client: &reqwest::Client, page: &str, markdown: &str) -> Result<()> {
        match self {
            Target::Dropbox { upload_url, folder, token } => {
                let path = dropbox::page_path(folder, page);
                dropbox::upload(client, upload_url, token, &path, markdown).await
            }
            Target::Directory(dir) => {
                fs::create_dir_all(dir).with_context(|| format!("Cannot create directory {:?}", dir))?;
                let path = dir.join(format!("{}.md", page));
                fs::write(&path, markdown).with_context(|| format!("Cannot write to {:?}", &path))?;
                tracing::info!("Wrote {:?}", path);
                Ok(())
            }
        }
    }
}

//--------------------------------------------------------------------------------------------------
///
/// Fetch bookmarks and posts, and publish the bookmarks and about pages. Steps are run in
/// sequence, and the first failure stops the run.
///
pub async fn run(config: &Config, creds: &Credentials, target: &Target) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let template = about_template(config)?;
    let recent = Duration::hours(config.recent_hours);

    //----- Bookmarks page

    let bookmarks = pinboard::fetch_bookmarks(
        &client,
        &config.pinboard_api_url,
        &creds.pinboard,
        &config.pinboard_tag,
    )
    .await?;
    tracing::info!("Fetched {} bookmarks from Pinboard", bookmarks.len());

    let markdown = render::bookmarks_page(&bookmarks, &Utc::now(), recent)?;
    target.put(&client, BOOKMARKS_PAGE, &markdown).await?;
    tracing::info!("Bookmarks updated");

    //----- About page

    let posts = blot::fetch_posts(&client, &config.posts_url).await?;
    tracing::info!("Fetched {} posts from Blot", posts.len());

    let about = render::AboutPage {
        template: &template,
        summary: &config.about_summary,
        preview_count: config.preview_count,
    };
    let markdown = about.render(&posts, &bookmarks)?;
    target.put(&client, ABOUT_PAGE, &markdown).await?;
    tracing::info!("About updated");

    Ok(())
}

fn about_template(config: &Config) -> Result<Cow<'static, str>> {
    match &config.about_template {
        None => Ok(Cow::Borrowed(render::ABOUT_TEMPLATE)),
        Some(path) => {
            let template = fs::read_to_string(path)
                .with_context(|| format!("Failed to read about page template {:?}", path))?;
            if !template.contains(render::WRITING_PLACEHOLDER) || !template.contains(render::BOOKMARKS_PLACEHOLDER) {
                tracing::warn!(
                    "About page template {:?} is missing {} or {}",
                    path,
                    render::WRITING_PLACEHOLDER,
                    render::BOOKMARKS_PLACEHOLDER
                );
            }
            Ok(Cow::Owned(template))
        }
    }
}
