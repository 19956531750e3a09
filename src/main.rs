use pinboard2blot::config::*;
use pinboard2blot::publish::{self, Target};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = RootCommand::read();
    let config = Config::load(args.config.as_deref())?;
    let creds = Credentials::from_env();

    // Running without a command publishes, so that schedulers don't need arguments
    let target = match args.command.unwrap_or(Commands::Publish) {
        Commands::Publish => Target::dropbox(&config, dropbox_token_from_env()),
        Commands::Preview { out_dir } => Target::Directory(out_dir),
    };

    publish::run(&config, &creds, &target).await
}
