//! Markdown rendering of the bookmarks and about pages.

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use indoc::formatdoc;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::blot::PostEntry;
use crate::dates;
use crate::front_matter::FrontMatter;
use crate::pinboard::Bookmark;

/// Built-in body of the about page.
pub const ABOUT_TEMPLATE: &str = include_str!("about.md");

pub const WRITING_PLACEHOLDER: &str = "{{writing}}";
pub const BOOKMARKS_PLACEHOLDER: &str = "{{bookmarks}}";

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{\{(writing|bookmarks)\}\}").unwrap();
}

/// Host name of a URL, without its "www." prefix
pub fn hostname(href: &str) -> anyhow::Result<String> {
    let url = url::Url::parse(href).with_context(|| format!("Invalid bookmark URL {}", href))?;
    let host = url.host_str().unwrap_or_default();
    Ok(host.strip_prefix("www.").unwrap_or(host).to_string())
}

//--------------------------------------------------------------------------------------------------
// Bookmarks page

///
/// Render the full bookmarks page. Bookmarks are expected most recent first, and are grouped by
/// month in the order they're given.
///
/// Bookmarks added less than `recent` before `now` get a relative date.
///
pub fn bookmarks_page(bookmarks: &[Bookmark], now: &DateTime<Utc>, recent: Duration) -> anyhow::Result<String> {
    let fm = FrontMatter {
        title: "bookmarks".into(),
        page: true,
        permalink: "/bookmarks".into(),
        ..FrontMatter::default()
    };

    let previous = std::iter::once(None).chain(bookmarks.iter().map(Some));
    let entries = bookmarks
        .iter()
        .zip(previous)
        .map(|(bookmark, previous)| render_bookmark(bookmark, previous, now, recent))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let doc = formatdoc! {"
        {fm}
        # Bookmarks

        This page is an [occasionally updated collection](/blog/publishing-my-bookmarks) of my personal bookmarks.

        {entries}
        ",
        fm = fm,
        entries = entries.join("\n\n"),
    };

    Ok(doc.trim().to_string())
}

///
/// Render a bookmark line, preceded by a month heading if it's not in the same month as the
/// previous one.
///
pub fn render_bookmark(
    bookmark: &Bookmark,
    previous: Option<&Bookmark>,
    now: &DateTime<Utc>,
    recent: Duration,
) -> anyhow::Result<String> {
    let mut result = String::new();

    let month = dates::month_label(&bookmark.time);
    let previous_month = previous.map(|p| dates::month_label(&p.time));
    if previous_month.as_ref() != Some(&month) {
        result.push_str(&format!("<span class=\"bookmark-month\">{}</span>\n\n", month));
    }

    let host = hostname(&bookmark.href)?;

    let (day, day_class) = if dates::is_recent(&bookmark.time, now, recent) {
        (dates::time_ago(&bookmark.time, now), "bookmark-day bookmark-day-recent")
    } else {
        (dates::day_label(&bookmark.time), "bookmark-day")
    };

    result.push_str(&format!(
        "<span class=\"bookmark\">[{}]({}) <span class=\"hostname\">{}</span> <span class=\"{}\">{}</span></span>",
        bookmark.description, bookmark.href, host, day_class, day
    ));

    Ok(result)
}

//--------------------------------------------------------------------------------------------------
// About page

pub struct AboutPage<'a> {
    /// Page body, with placeholders for the post and bookmark previews
    pub template: &'a str,
    pub summary: &'a str,
    /// Number of posts and bookmarks to show
    pub preview_count: usize,
}

impl<'a> AboutPage<'a> {
    pub fn render(&self, posts: &[PostEntry], bookmarks: &[Bookmark]) -> anyhow::Result<String> {
        let fm = FrontMatter {
            title: "about".into(),
            page: true,
            menu: Some(false),
            permalink: "/".into(),
            summary: Some(self.summary.to_string()),
        };

        let writing = posts.iter().take(self.preview_count).map(post_preview).join("\n");

        let bookmarks = bookmarks
            .iter()
            .take(self.preview_count)
            .map(bookmark_preview)
            .collect::<anyhow::Result<Vec<_>>>()?
            .join("\n");

        // Single pass, so that placeholders in titles or descriptions are left as-is
        let body = PLACEHOLDER_RE.replace_all(self.template, |caps: &Captures| match &caps[1] {
            "writing" => writing.clone(),
            _ => bookmarks.clone(),
        });

        Ok(format!("{}\n{}", fm, body))
    }
}

fn post_preview(post: &PostEntry) -> String {
    formatdoc! {r#"

        <p class="index-entry">
        <div><span class="index-date">{date}</span>
        <div class="tags-date">
        </div>
        </div>
        <div class="details">
        <a href="{url}">{title}</a>
        </div>
        </p>
        "#,
        date = post.date,
        url = post.url,
        title = post.title,
    }
}

fn bookmark_preview(bookmark: &Bookmark) -> anyhow::Result<String> {
    Ok(format!(
        "\n<p><a href=\"{}\">{}</a> <span class=\"hostname\">{}</span></p>\n",
        bookmark.href,
        bookmark.description,
        hostname(&bookmark.href)?
    ))
}
