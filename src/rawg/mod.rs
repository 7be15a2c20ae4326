//! RAWG API request building and response models

mod models;
mod params;
mod urls;

pub use models::{
    GameDetails, GamesListModel, GamesListResponse, NamedEntity, PlatformEntry, Rating,
    ShortScreenshot,
};
pub use params::{GamesListParameters, Ordering};
pub use urls::{
    cropped_image_url, UrlConfig, CROPPED_MEDIA_BASE_URL, DEFAULT_API_BASE_URL, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE, FULL_SIZE_MEDIA_BASE_URL, GAMES_ROUTE, RELEASE_DATE_FORMAT,
};
