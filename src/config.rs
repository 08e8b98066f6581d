use std::path::Path;

use anyhow::Context;

/// Feed URLs grouped by category, in the order they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub name: String,
    pub urls: Vec<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse config from a TOML string (useful for testing)
    ///
    /// Every top-level key is a category name mapped to an array of feed URLs.
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let table: toml::Table = toml::from_str(content)?;

        let categories = table
            .into_iter()
            .map(|(name, value)| {
                let urls: Vec<String> = value.try_into().with_context(|| {
                    format!("Category '{}' must be an array of feed URLs", name)
                })?;
                Ok(CategoryConfig { name, urls })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { categories })
    }

    pub fn feed_count(&self) -> usize {
        self.categories.iter().map(|c| c.urls.len()).sum()
    }
}
