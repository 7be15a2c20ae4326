//! Service configuration

use crate::downloader::DEFAULT_USER_AGENT;
use crate::rawg::{UrlConfig, DEFAULT_API_BASE_URL, GAMES_ROUTE};

/// Number of downloaded images kept in memory
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 100;

/// Settings for a [`GamesService`](crate::service::GamesService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// RAWG API key, sent with every catalog request
    pub api_key: String,
    pub base_url: String,
    pub route: String,
    pub image_cache_capacity: usize,
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            route: GAMES_ROUTE.to_string(),
            image_cache_capacity: DEFAULT_IMAGE_CACHE_CAPACITY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn url_config(&self) -> UrlConfig {
        UrlConfig::new(&self.base_url, &self.route)
    }
}
