use chrono::{DateTime, Duration, Utc};
use pinboard2blot::blot::PostListing;
use pinboard2blot::pinboard::Payload;
use pinboard2blot::render;
use testresult::TestResult;

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z").unwrap().with_timezone(&Utc)
}

#[test]
fn test_render_bookmarks_page() -> TestResult {
    let json = std::fs::read_to_string("tests/data/bookmarks.json")?;
    let bookmarks = Payload::classify(json).into_bookmarks()?;

    let markdown = render::bookmarks_page(&bookmarks, &now(), Duration::hours(12))?;

    insta::assert_snapshot!("bookmarks_page", markdown);

    Ok(())
}

#[test]
fn test_render_about_page() -> TestResult {
    let json = std::fs::read_to_string("tests/data/bookmarks.json")?;
    let bookmarks = Payload::classify(json).into_bookmarks()?;

    let json = std::fs::read_to_string("tests/data/posts.json")?;
    let posts: PostListing = serde_json::from_str(&json)?;

    let about = render::AboutPage {
        template: render::ABOUT_TEMPLATE,
        summary: "My name is luke miles.",
        preview_count: 3,
    };
    let markdown = about.render(&posts.entries, &bookmarks)?;

    assert!(markdown.starts_with("Title: about\nPage: Yes\nMenu: No\nPermalink: /\nSummary: My name is luke miles.\n\n"));
    assert!(!markdown.contains("{{"));

    // Previews are in the writing and bookmarks sections, in order
    let writing = markdown.find("## Writing").unwrap();
    let bookmarks_section = markdown.find("## Bookmarks").unwrap();
    let first_post = markdown.find("<a href=\"/blog/moving-to-rust\">Moving to Rust</a>").unwrap();
    let third_post = markdown.find("<a href=\"/blog/new-year\">New year</a>").unwrap();
    assert!(writing < first_post && first_post < third_post && third_post < bookmarks_section);
    assert!(!markdown.contains("/blog/publishing-my-bookmarks\">"));

    let first_bookmark = markdown
        .find("<p><a href=\"https://doc.rust-lang.org/edition-guide/rust-2024/\">Rust 2024 edition</a> <span class=\"hostname\">doc.rust-lang.org</span></p>")
        .unwrap();
    let third_bookmark = markdown
        .find("<p><a href=\"https://blot.im/\">Blot</a> <span class=\"hostname\">blot.im</span></p>")
        .unwrap();
    assert!(bookmarks_section < first_bookmark && first_bookmark < third_bookmark);
    assert!(!markdown.contains("Old one"));

    assert!(markdown.contains("[More →](/page/1)"));
    assert!(markdown.contains("[More →](/bookmarks)"));

    Ok(())
}

#[test]
fn test_render_empty_inputs() -> TestResult {
    let markdown = render::bookmarks_page(&[], &now(), Duration::hours(12))?;
    assert!(markdown.ends_with("of my personal bookmarks."));
    assert!(!markdown.contains("<span class=\"bookmark"));

    let about = render::AboutPage {
        template: render::ABOUT_TEMPLATE,
        summary: "Hi",
        preview_count: 3,
    };
    let markdown = about.render(&[], &[])?;
    assert!(!markdown.contains("index-entry"));
    assert!(!markdown.contains("class=\"hostname\""));

    Ok(())
}
