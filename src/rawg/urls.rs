//! URL construction for the RAWG games endpoints and media CDN

use super::params::GamesListParameters;

pub const DEFAULT_API_BASE_URL: &str = "https://api.rawg.io";
pub const GAMES_ROUTE: &str = "api/games";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Prefix of full-size cover images on the RAWG media CDN
pub const FULL_SIZE_MEDIA_BASE_URL: &str = "https://media.rawg.io/media/games/";
/// Same images served cropped to 600x400
pub const CROPPED_MEDIA_BASE_URL: &str = "https://media.rawg.io/media/crop/600/400/games/";

/// Format of `released` dates in RAWG responses
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Base URL and route of the games resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlConfig {
    pub base_url: String,
    pub route: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, GAMES_ROUTE)
    }
}

impl UrlConfig {
    pub fn new(base_url: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            route: route.into(),
        }
    }

    fn games_root(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.route.trim_matches('/')
        )
    }

    /// Build the games list URL. Page and page size fall back to RAWG's
    /// defaults; unset search, ordering and key are left out.
    pub fn games_list_url(&self, params: &GamesListParameters) -> String {
        let mut query: Vec<String> = Vec::with_capacity(5);

        if let Some(search) = params.search.as_deref() {
            query.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(ordering) = params.ordering {
            query.push(format!("ordering={}", ordering.as_str()));
        }
        query.push(format!("page={}", params.page.unwrap_or(DEFAULT_PAGE)));
        query.push(format!(
            "page_size={}",
            params.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
        ));
        if let Some(key) = params.key.as_deref() {
            query.push(format!("key={}", urlencoding::encode(key)));
        }

        format!("{}?{}", self.games_root(), query.join("&"))
    }

    /// Build the details URL for a single game
    pub fn game_details_url(&self, game_id: u64, key: &str) -> String {
        format!(
            "{}/{}?key={}",
            self.games_root(),
            game_id,
            urlencoding::encode(key)
        )
    }
}

/// Rewrite a full-size media URL to its cropped variant.
///
/// URLs outside the full-size media prefix are returned unchanged.
pub fn cropped_image_url(url: &str) -> String {
    url.replacen(FULL_SIZE_MEDIA_BASE_URL, CROPPED_MEDIA_BASE_URL, 1)
}
