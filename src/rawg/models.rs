//! RAWG response models
//!
//! RAWG omits or nulls fields freely, so everything is optional.

use super::urls::RELEASE_DATE_FORMAT;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One page of the games list
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GamesListResponse {
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Option<Vec<GamesListModel>>,
}

impl GamesListResponse {
    /// Games on this page (empty when RAWG sent none)
    pub fn games(&self) -> &[GamesListModel] {
        self.results.as_deref().unwrap_or_default()
    }

    /// Whether RAWG advertised another page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Keep named games whose name contains `query`, ignoring case.
    /// Games without a name are always dropped.
    pub fn filter_by_name(mut self, query: &str) -> Self {
        let query = query.to_lowercase();
        if let Some(results) = self.results.as_mut() {
            results.retain(|game| {
                game.name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&query))
            });
        }
        self
    }
}

/// Summary entry in the games list
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GamesListModel {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub released: Option<String>,
    pub background_image: Option<String>,
    pub rating: Option<f64>,
    pub rating_top: Option<f64>,
    pub ratings_count: Option<u64>,
    pub metacritic: Option<u32>,
    pub reviews_count: Option<u64>,
    pub short_screenshots: Option<Vec<ShortScreenshot>>,
}

impl GamesListModel {
    pub fn release_date(&self) -> Option<NaiveDate> {
        parse_release_date(self.released.as_deref())
    }

    /// Screenshot URLs in the order RAWG listed them
    pub fn screenshot_urls(&self) -> Vec<&str> {
        self.short_screenshots
            .iter()
            .flatten()
            .filter_map(|s| s.image.as_deref())
            .collect()
    }
}

/// Full record for a single game
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameDetails {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub name_original: Option<String>,
    pub metacritic: Option<u32>,
    pub released: Option<String>,
    pub background_image: Option<String>,
    pub background_image_additional: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub rating_top: Option<f64>,
    pub ratings: Option<Vec<Rating>>,
    pub platforms: Option<Vec<PlatformEntry>>,
    pub developers: Option<Vec<NamedEntity>>,
    pub publishers: Option<Vec<NamedEntity>>,
    pub esrb_rating: Option<NamedEntity>,
    /// Plain-text description (RAWG's `description_raw`)
    #[serde(rename = "description_raw")]
    pub description: Option<String>,
}

impl GameDetails {
    pub fn release_date(&self) -> Option<NaiveDate> {
        parse_release_date(self.released.as_deref())
    }

    /// Whether the game releases after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.release_date().is_some_and(|d| d > today)
    }

    pub fn platform_names(&self) -> Vec<&str> {
        self.platforms
            .iter()
            .flatten()
            .filter_map(|p| p.platform.as_ref()?.name.as_deref())
            .collect()
    }

    pub fn developer_names(&self) -> Vec<&str> {
        entity_names(self.developers.as_deref())
    }

    pub fn publisher_names(&self) -> Vec<&str> {
        entity_names(self.publishers.as_deref())
    }
}

/// Rating bucket ("exceptional", "recommended", ...)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Rating {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub count: Option<u64>,
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShortScreenshot {
    pub id: Option<i64>,
    pub image: Option<String>,
}

/// Platform availability for a game
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlatformEntry {
    pub platform: Option<NamedEntity>,
    pub released_at: Option<String>,
}

/// id/name/slug triple used for platforms, developers, publishers and ESRB ratings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NamedEntity {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

fn parse_release_date(released: Option<&str>) -> Option<NaiveDate> {
    let released = released?;
    match NaiveDate::parse_from_str(released, RELEASE_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::debug!("Unparseable release date {:?}: {}", released, e);
            None
        }
    }
}

fn entity_names(entities: Option<&[NamedEntity]>) -> Vec<&str> {
    entities
        .unwrap_or_default()
        .iter()
        .filter_map(|e| e.name.as_deref())
        .collect()
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
