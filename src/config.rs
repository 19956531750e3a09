use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

//----- Command line parameters

/// Publish Pinboard bookmarks and Blot posts as markdown pages on Dropbox
#[derive(Parser, Debug)]
pub struct RootCommand {
    /// Path to the config file [default: pinboard2blot.yml]
    #[clap(global = true, long)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}

impl RootCommand {
    // Avoids importing Parser in main
    pub fn read() -> RootCommand {
        RootCommand::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, render and upload the pages to Dropbox (the default)
    Publish,

    /// Fetch and render the pages, writing them to a local directory instead of Dropbox
    Preview {
        /// Directory where pages are written
        #[clap(long, default_value = "pages")]
        out_dir: PathBuf,
    },
}

//----- Config file

pub const DEFAULT_CONFIG_FILE: &str = "pinboard2blot.yml";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_pinboard_api_url")]
    pub pinboard_api_url: String,
    #[serde(default = "default_pinboard_tag")]
    pub pinboard_tag: String,
    /// Blog listing page. Blot's `debug=true` mode returns the page data as JSON.
    #[serde(default = "default_posts_url")]
    pub posts_url: String,
    #[serde(default = "default_dropbox_upload_url")]
    pub dropbox_upload_url: String,
    /// Dropbox folder of the Blot site, with a leading '/' and no trailing '/'
    #[serde(default = "default_dropbox_folder")]
    pub dropbox_folder: String,
    /// Number of posts and bookmarks shown on the about page
    #[serde(default = "default_preview_count")]
    pub preview_count: usize,
    /// Bookmarks younger than this are labeled with a relative time
    #[serde(default = "default_recent_hours")]
    pub recent_hours: i64,
    /// Markdown template for the about page, replacing the built-in one
    pub about_template: Option<PathBuf>,
    /// Summary in the about page's metadata
    #[serde(default = "default_about_summary")]
    pub about_summary: String,
}

fn default_pinboard_api_url() -> String {
    "https://api.pinboard.in".into()
}

fn default_pinboard_tag() -> String {
    "publish".into()
}

fn default_posts_url() -> String {
    "https://ylukem.com/page/1?debug=true".into()
}

fn default_dropbox_upload_url() -> String {
    "https://content.dropboxapi.com/2/files/upload".into()
}

fn default_dropbox_folder() -> String {
    "/ylukem".into()
}

fn default_preview_count() -> usize {
    3
}

fn default_recent_hours() -> i64 {
    12
}

fn default_about_summary() -> String {
    "My name is luke miles and I'm a software engineer based in San Francisco.".into()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pinboard_api_url: default_pinboard_api_url(),
            pinboard_tag: default_pinboard_tag(),
            posts_url: default_posts_url(),
            dropbox_upload_url: default_dropbox_upload_url(),
            dropbox_folder: default_dropbox_folder(),
            preview_count: default_preview_count(),
            recent_hours: default_recent_hours(),
            about_template: None,
            about_summary: default_about_summary(),
        }
    }
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
        let config = serde_yaml::from_reader(file).with_context(|| format!("Failed to read {:?}", path))?;
        Ok(config)
    }

    /// Reads an explicitly requested config file, or the default one if it exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            Some(path) => Config::read(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Config::read(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }
}

//----- Credentials

pub const PINBOARD_TOKEN_VAR: &str = "PINBOARD";
pub const DROPBOX_TOKEN_VAR: &str = "DROPBOX";

/// Tokens needed to fetch content, passed through as-is to the services.
#[derive(Clone, Default)]
pub struct Credentials {
    pub pinboard: String,
}

impl Credentials {
    /// Missing variables are not an error here: the service will reject the request.
    pub fn from_env() -> Credentials {
        Credentials {
            pinboard: env_token(PINBOARD_TOKEN_VAR),
        }
    }
}

/// Dropbox token, only read when pages are uploaded.
pub fn dropbox_token_from_env() -> String {
    env_token(DROPBOX_TOKEN_VAR)
}

fn env_token(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::warn!("{} is not set, requests using it will be rejected", name);
        String::new()
    })
}

// Don't leak tokens in logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("pinboard", &(!self.pinboard.is_empty()))
            .finish()
    }
}
