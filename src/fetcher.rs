use std::time::Duration;

use reqwest::Client;
use tracing::{error, info};

use crate::config::Config;
use crate::error::FetchError;
use crate::model::{Category, Feed};
use crate::parser;

/// What to do when a single feed cannot be fetched or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole run at the first failing feed.
    #[default]
    Abort,
    /// Log the failure and leave the feed out of its category.
    Skip,
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("DumbRSS/1.0 (RSS Aggregator)")
            .build()?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch one feed and parse it.
    pub async fn fetch_feed(&self, url: &str) -> Result<Feed, FetchError> {
        info!("Fetching feed: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

        let feed = parser::parse_feed(&body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })?;

        info!("Fetched {} ({} articles)", feed.title, feed.articles.len());
        Ok(feed)
    }

    /// Fetch every configured feed, one after another, in configuration order.
    pub async fn fetch_all(
        &self,
        config: &Config,
        policy: FailurePolicy,
    ) -> Result<Vec<Category>, FetchError> {
        let mut categories = Vec::with_capacity(config.categories.len());

        for category in &config.categories {
            let mut feeds = Vec::with_capacity(category.urls.len());

            for url in &category.urls {
                match self.fetch_feed(url).await {
                    Ok(feed) => feeds.push(feed),
                    Err(e) if policy == FailurePolicy::Skip => {
                        error!("Skipping feed in '{}': {}", category.name, e);
                    }
                    Err(e) => return Err(e),
                }
            }

            categories.push(Category {
                name: category.name.clone(),
                feeds,
            });
        }

        Ok(categories)
    }
}
