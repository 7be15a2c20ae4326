//! Tests for RAWG response models

use chrono::NaiveDate;

use crate::rawg::{GameDetails, GamesListResponse};

#[test]
fn games_list_deserializes_sample_page() {
    let json = r#"{
        "count": 2,
        "next": "https://api.rawg.io/api/games?page=2",
        "previous": null,
        "results": [
            {
                "id": 3328,
                "name": "The Witcher 3: Wild Hunt",
                "released": "2015-05-18",
                "background_image": "https://media.rawg.io/media/games/618/618c2031a07bbff6b4f611f10b6bcdbc.jpg",
                "rating": 4.66,
                "rating_top": 5,
                "ratings_count": 6543,
                "metacritic": 92,
                "reviews_count": 6600,
                "short_screenshots": [
                    { "id": -1, "image": "https://media.rawg.io/media/games/618/a.jpg" },
                    { "id": 30336, "image": "https://media.rawg.io/media/screenshots/b.jpg" }
                ],
                "platforms": [{ "platform": { "id": 4, "name": "PC" } }]
            },
            { "id": 1, "name": "Untitled" }
        ]
    }"#;

    let page: GamesListResponse = serde_json::from_str(json).unwrap();
    assert_eq!(page.count, Some(2));
    assert!(page.has_next());
    assert_eq!(page.games().len(), 2);

    let witcher = &page.games()[0];
    assert_eq!(witcher.name.as_deref(), Some("The Witcher 3: Wild Hunt"));
    assert_eq!(witcher.rating_top, Some(5.0));
    assert_eq!(witcher.metacritic, Some(92));
    assert_eq!(
        witcher.release_date(),
        NaiveDate::from_ymd_opt(2015, 5, 18)
    );
    assert_eq!(witcher.screenshot_urls().len(), 2);

    let untitled = &page.games()[1];
    assert!(untitled.released.is_none());
    assert!(untitled.screenshot_urls().is_empty());
}

#[test]
fn games_list_without_results_is_empty() {
    let page: GamesListResponse = serde_json::from_str(r#"{"count": 0}"#).unwrap();
    assert!(page.games().is_empty());
    assert!(!page.has_next());
}

#[test]
fn game_details_maps_raw_description_and_entities() {
    let json = r#"{
        "id": 3498,
        "name": "Grand Theft Auto V",
        "name_original": "Grand Theft Auto V",
        "metacritic": 92,
        "released": "2013-09-17",
        "background_image": "https://media.rawg.io/media/games/456/a.jpg",
        "background_image_additional": "https://media.rawg.io/media/screenshots/b.jpg",
        "website": "http://www.rockstargames.com/V/",
        "rating": 4.47,
        "rating_top": 5,
        "ratings": [
            { "id": 5, "title": "exceptional", "count": 3000, "percent": 59.1 }
        ],
        "platforms": [
            { "platform": { "id": 187, "name": "PlayStation 5", "slug": "playstation5" }, "released_at": "2013-09-17" },
            { "platform": { "id": 4, "name": "PC", "slug": "pc" } },
            { "released_at": null }
        ],
        "developers": [{ "id": 3524, "name": "Rockstar North", "slug": "rockstar-north" }],
        "publishers": [{ "id": 2155, "name": "Rockstar Games", "slug": "rockstar-games" }],
        "esrb_rating": { "id": 4, "name": "Mature", "slug": "mature" },
        "description": "<p>html</p>",
        "description_raw": "Rockstar Games went bigger."
    }"#;

    let details: GameDetails = serde_json::from_str(json).unwrap();
    assert_eq!(details.id, Some(3498));
    assert_eq!(
        details.description.as_deref(),
        Some("Rockstar Games went bigger.")
    );
    assert_eq!(details.platform_names(), vec!["PlayStation 5", "PC"]);
    assert_eq!(details.developer_names(), vec!["Rockstar North"]);
    assert_eq!(details.publisher_names(), vec!["Rockstar Games"]);
    assert_eq!(
        details.esrb_rating.as_ref().and_then(|r| r.name.as_deref()),
        Some("Mature")
    );
    assert_eq!(details.ratings.as_ref().map(Vec::len), Some(1));
}

#[test]
fn game_details_minimal() {
    let details: GameDetails = serde_json::from_str("{}").unwrap();
    assert!(details.name.is_none());
    assert!(details.platform_names().is_empty());
    assert!(details.developer_names().is_empty());
}

#[test]
fn release_date_and_upcoming() {
    let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    let upcoming = GameDetails {
        released: Some("2026-11-19".to_string()),
        ..GameDetails::default()
    };
    assert!(upcoming.is_upcoming(today));

    let past = GameDetails {
        released: Some("2013-09-17".to_string()),
        ..GameDetails::default()
    };
    assert!(!past.is_upcoming(today));

    let tba = GameDetails {
        released: Some("TBA".to_string()),
        ..GameDetails::default()
    };
    assert_eq!(tba.release_date(), None);
    assert!(!tba.is_upcoming(today));
}

#[test]
fn filter_by_name_ignores_case_and_drops_unnamed() {
    let page: GamesListResponse = serde_json::from_str(
        r#"{
            "count": 4,
            "results": [
                { "id": 1, "name": "Hollow Knight" },
                { "id": 2, "name": "HOLLOW" },
                { "id": 3, "name": "Celeste" },
                { "id": 4, "name": null }
            ]
        }"#,
    )
    .unwrap();

    let filtered = page.filter_by_name("hOl");
    let ids: Vec<_> = filtered.games().iter().filter_map(|g| g.id).collect();

    assert_eq!(ids, vec![1, 2]);
    assert_eq!(filtered.count, Some(4));
}

#[test]
fn filter_by_empty_name_keeps_named_games() {
    let page: GamesListResponse =
        serde_json::from_str(r#"{ "results": [{ "id": 1, "name": "Celeste" }, { "id": 2 }] }"#)
            .unwrap();

    let filtered = page.filter_by_name("");

    assert_eq!(filtered.games().len(), 1);
    assert_eq!(filtered.games()[0].id, Some(1));
}

#[test]
fn filter_by_name_without_results_stays_empty() {
    let filtered = GamesListResponse::default().filter_by_name("wi");
    assert!(filtered.results.is_none());
}
