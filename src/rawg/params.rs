//! Games list query parameters

use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Sort order accepted by the games list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordering {
    /// RAWG's relevance order (empty parameter)
    #[default]
    Suggested,
    Name,
    NameReversed,
    Released,
    ReleasedReversed,
    Added,
    AddedReversed,
    Created,
    CreatedReversed,
    Updated,
    UpdatedReversed,
    Rating,
    RatingReversed,
    Metacritic,
    MetacriticReversed,
}

impl Ordering {
    /// Every ordering, in the order a filter list would show them
    pub const ALL: [Ordering; 15] = [
        Ordering::Suggested,
        Ordering::Name,
        Ordering::NameReversed,
        Ordering::Released,
        Ordering::ReleasedReversed,
        Ordering::Added,
        Ordering::AddedReversed,
        Ordering::Created,
        Ordering::CreatedReversed,
        Ordering::Updated,
        Ordering::UpdatedReversed,
        Ordering::Rating,
        Ordering::RatingReversed,
        Ordering::Metacritic,
        Ordering::MetacriticReversed,
    ];

    /// The query string value RAWG expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Ordering::Suggested => "",
            Ordering::Name => "name",
            Ordering::NameReversed => "-name",
            Ordering::Released => "released",
            Ordering::ReleasedReversed => "-released",
            Ordering::Added => "added",
            Ordering::AddedReversed => "-added",
            Ordering::Created => "created",
            Ordering::CreatedReversed => "-created",
            Ordering::Updated => "updated",
            Ordering::UpdatedReversed => "-updated",
            Ordering::Rating => "rating",
            Ordering::RatingReversed => "-rating",
            Ordering::Metacritic => "metacritic",
            Ordering::MetacriticReversed => "-metacritic",
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ordering {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ordering::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidOrdering(s.to_string()))
    }
}

/// Query for the games list endpoint. Unset fields fall back to RAWG defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamesListParameters {
    pub search: Option<String>,
    pub ordering: Option<Ordering>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub key: Option<String>,
}

impl GamesListParameters {
    /// Parameters for a plain text search
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}
