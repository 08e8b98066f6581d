use std::path::PathBuf;

use clap::Parser;

use crate::fetcher::FailurePolicy;

/// Aggregate RSS feeds by category into a single static HTML page.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Config file holding categories of feeds
    #[arg(short, long, default_value = "config.toml", value_parser = parse_path)]
    pub config: PathBuf,

    /// Directory in which to output web assets
    #[arg(short, long, default_value = ".", value_parser = parse_path)]
    pub output: PathBuf,

    /// Skip feeds that fail to fetch instead of aborting the run
    #[arg(long)]
    pub keep_going: bool,
}

impl Cli {
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        }
    }
}

/// Expand a leading `~` to the user's home directory.
fn parse_path(s: &str) -> Result<PathBuf, String> {
    let home = || std::env::var_os("HOME").map(PathBuf::from);

    if s == "~" {
        return home().ok_or_else(|| "HOME is not set".to_string());
    }
    if let Some(rest) = s.strip_prefix("~/") {
        return home()
            .map(|h| h.join(rest))
            .ok_or_else(|| "HOME is not set".to_string());
    }
    Ok(PathBuf::from(s))
}
