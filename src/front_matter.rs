use std::fmt;

/// Blot page metadata, written as `Key: value` lines at the top of a markdown file.
#[derive(Debug, Default)]
pub struct FrontMatter {
    pub title: String,
    pub page: bool,
    // Show the page in the site menu. Blot's default is used when unset.
    pub menu: Option<bool>,
    pub permalink: String,
    pub summary: Option<String>,
}

fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

impl fmt::Display for FrontMatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Page: {}", yes_no(self.page))?;
        if let Some(menu) = self.menu {
            writeln!(f, "Menu: {}", yes_no(menu))?;
        }
        writeln!(f, "Permalink: {}", self.permalink)?;
        if let Some(summary) = &self.summary {
            writeln!(f, "Summary: {}", summary)?;
        }
        Ok(())
    }
}
