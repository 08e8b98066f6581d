use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dumb_rss::cli::Cli;
use dumb_rss::config::Config;
use dumb_rss::fetcher::Fetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dumb_rss=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config)?;
    info!(
        "Loaded {} categories from {}",
        config.categories.len(),
        cli.config.display()
    );

    let fetcher = Fetcher::new()?;
    let index = dumb_rss::build_site(&fetcher, &config, &cli.output, cli.failure_policy()).await?;
    info!("Site generated at {}", index.display());

    Ok(())
}
