//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// CSS selectors used to extract links and items
    #[serde(default)]
    pub selectors: SelectorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::config("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::config("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::config("crawler.max_concurrent must be > 0"));
        }
        if self.crawler.start_url.trim().is_empty() {
            return Err(AppError::config("crawler.start_url is empty"));
        }
        if self.selectors.pagination.trim().is_empty() {
            return Err(AppError::config("selectors.pagination is empty"));
        }
        if self.selectors.item.trim().is_empty() {
            return Err(AppError::config("selectors.item is empty"));
        }
        Ok(())
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Default root URL to crawl when none is given on the command line
    #[serde(default = "defaults::start_url")]
    pub start_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum link hops to follow from the root page
    #[serde(default = "defaults::max_depth")]
    pub max_depth: usize,

    /// Maximum concurrent page fetches
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Overall deadline for one crawl run in seconds; unset means no deadline
    #[serde(default)]
    pub deadline_secs: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_url: defaults::start_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_depth: defaults::max_depth(),
            max_concurrent: defaults::max_concurrent(),
            deadline_secs: None,
        }
    }
}

/// CSS selectors for pagination links and item fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Selector for pagination anchors, relative to the document
    #[serde(default = "defaults::pagination_selector")]
    pub pagination: String,

    /// Selector for one item container, relative to the document
    #[serde(default = "defaults::item_selector")]
    pub item: String,

    /// Selector for the item link, relative to the item container
    #[serde(default = "defaults::link_selector")]
    pub link: String,

    /// Selector for the display name, relative to the item link
    #[serde(default = "defaults::name_selector")]
    pub name: String,

    /// Selector for the image, relative to the item link
    #[serde(default = "defaults::image_selector")]
    pub image: String,

    /// Attribute on the image element holding the image URL
    #[serde(default = "defaults::image_attr")]
    pub image_attr: String,

    /// Selector for the price text, relative to the item link
    #[serde(default = "defaults::price_selector")]
    pub price: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            pagination: defaults::pagination_selector(),
            item: defaults::item_selector(),
            link: defaults::link_selector(),
            name: defaults::name_selector(),
            image: defaults::image_selector(),
            image_attr: defaults::image_attr(),
            price: defaults::price_selector(),
        }
    }
}

mod defaults {
    // Crawler defaults
    pub fn start_url() -> String {
        "https://www.scrapingcourse.com/ecommerce/".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; catalog-crawler/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_depth() -> usize {
        5
    }
    pub fn max_concurrent() -> usize {
        8
    }

    // Selector defaults match the reference catalog markup
    pub fn pagination_selector() -> String {
        "#pagination a".into()
    }
    pub fn item_selector() -> String {
        "li.product".into()
    }
    pub fn link_selector() -> String {
        "a".into()
    }
    pub fn name_selector() -> String {
        "h2".into()
    }
    pub fn image_selector() -> String {
        "img".into()
    }
    pub fn image_attr() -> String {
        "src".into()
    }
    pub fn price_selector() -> String {
        "bdi".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_concurrency() {
        let mut config = Config::default();
        config.crawler.max_concurrent = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_item_selector() {
        let mut config = Config::default();
        config.selectors.item = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_partial_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[crawler]\nmax_depth = 2\nmax_concurrent = 3\n\n[selectors]\npagination = \"nav.pages a\"\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.crawler.max_depth, 2);
        assert_eq!(config.crawler.max_concurrent, 3);
        assert_eq!(config.selectors.pagination, "nav.pages a");
        // Unspecified fields fall back to defaults.
        assert_eq!(config.selectors.item, "li.product");
        assert_eq!(config.crawler.timeout_secs, 30);
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.crawler.max_depth, 5);
    }
}
