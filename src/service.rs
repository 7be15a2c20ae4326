//! RAWG catalog service
//!
//! Builds request URLs, calls the downloader, and keeps recently downloaded
//! images in a [`BasicCache`] keyed by resolved URL.

use std::sync::{Mutex, MutexGuard};

use crate::cache::BasicCache;
use crate::config::ServiceConfig;
use crate::downloader::{DataDownloader, Payload};
use crate::error::Result;
use crate::rawg::{
    cropped_image_url, GameDetails, GamesListParameters, GamesListResponse, UrlConfig,
};

/// Searches up to this many characters are matched locally against the
/// default page instead of being sent to RAWG
pub const LOCAL_SEARCH_THRESHOLD: usize = 3;

/// Client for the RAWG games endpoints with an in-memory image cache
#[derive(Debug)]
pub struct GamesService {
    downloader: DataDownloader,
    urls: UrlConfig,
    api_key: String,
    image_cache: Mutex<BasicCache<String, Payload>>,
}

impl GamesService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_downloader(config, DataDownloader::new(&config.user_agent))
    }

    pub fn with_downloader(config: &ServiceConfig, downloader: DataDownloader) -> Self {
        Self {
            downloader,
            urls: config.url_config(),
            api_key: config.api_key.clone(),
            image_cache: Mutex::new(BasicCache::new(config.image_cache_capacity)),
        }
    }

    /// Fetch one page of the games list. The service's API key is used when
    /// `params` carries none.
    ///
    /// A search of at most [`LOCAL_SEARCH_THRESHOLD`] characters (or none)
    /// fetches the page without `search` and filters it by name locally.
    pub async fn games_list(&self, params: &GamesListParameters) -> Result<GamesListResponse> {
        let mut request = params.clone();
        if request.key.is_none() {
            request.key = Some(self.api_key.clone());
        }

        let remote_search = request
            .search
            .as_deref()
            .is_some_and(|q| q.chars().count() > LOCAL_SEARCH_THRESHOLD);
        let local_query = if remote_search {
            None
        } else {
            Some(request.search.take().unwrap_or_default())
        };

        let url = self.urls.games_list_url(&request);
        let mut page: GamesListResponse = self.downloader.fetch_json(&url).await?;

        if let Some(query) = local_query {
            log::debug!("Filtering games list locally by {:?}", query);
            page = page.filter_by_name(&query);
        }

        log::debug!(
            "Games list returned {} of {:?} results",
            page.games().len(),
            page.count
        );
        Ok(page)
    }

    pub async fn game_details(&self, game_id: u64) -> Result<GameDetails> {
        let url = self.urls.game_details_url(game_id, &self.api_key);
        self.downloader.fetch_json(&url).await
    }

    /// Download an image, optionally as its cropped variant.
    ///
    /// With `use_cache`, a cached copy is returned without a request.
    /// Successful downloads are always stored under the resolved URL.
    pub async fn download_image(
        &self,
        image_url: &str,
        cropped: bool,
        use_cache: bool,
    ) -> Result<Payload> {
        let url = if cropped {
            cropped_image_url(image_url)
        } else {
            image_url.to_string()
        };

        if use_cache {
            let cached = self.cache().get(url.as_str()).cloned();
            if let Some(image) = cached {
                log::debug!("Image cache hit: {}", url);
                return Ok(image);
            }
            log::debug!("Image cache miss: {}", url);
        }

        let image = self.downloader.fetch(&url).await?;
        self.cache().put(url, image.clone());

        Ok(image)
    }

    /// Number of images currently cached
    pub fn cached_image_count(&self) -> usize {
        self.cache().len()
    }

    pub fn image_cache_capacity(&self) -> usize {
        self.cache().capacity()
    }

    fn cache(&self) -> MutexGuard<'_, BasicCache<String, Payload>> {
        self.image_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
