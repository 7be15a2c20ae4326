//! Terminal formatting and file output for the CLI

use std::path::Path;

use crate::error::Result;
use crate::rawg::{GameDetails, GamesListModel, GamesListResponse};

/// One line per game: id, name, release date, rating
pub fn format_game_line(game: &GamesListModel) -> String {
    format!(
        "{:>8}  {}  ({})  {}",
        game.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
        game.name.as_deref().unwrap_or("<unnamed>"),
        game.released.as_deref().unwrap_or("TBA"),
        format_rating(game.rating, game.rating_top),
    )
}

pub fn format_games_page(page: &GamesListResponse) -> String {
    let mut out: Vec<String> = page.games().iter().map(format_game_line).collect();
    match page.count {
        Some(count) => out.push(format!("{} of {} games", page.games().len(), count)),
        None => out.push(format!("{} games", page.games().len())),
    }
    out.join("\n")
}

/// Multi-line summary of a game's details
pub fn format_details(details: &GameDetails) -> String {
    let mut lines = vec![format!(
        "{} ({})",
        details.name.as_deref().unwrap_or("<unnamed>"),
        details.released.as_deref().unwrap_or("TBA")
    )];

    lines.push(format!(
        "Rating: {}",
        format_rating(details.rating, details.rating_top)
    ));
    if let Some(score) = details.metacritic {
        lines.push(format!("Metacritic: {}", score));
    }

    let platforms = details.platform_names();
    if !platforms.is_empty() {
        lines.push(format!("Platforms: {}", platforms.join(", ")));
    }
    let developers = details.developer_names();
    if !developers.is_empty() {
        lines.push(format!("Developers: {}", developers.join(", ")));
    }
    let publishers = details.publisher_names();
    if !publishers.is_empty() {
        lines.push(format!("Publishers: {}", publishers.join(", ")));
    }
    if let Some(esrb) = details.esrb_rating.as_ref().and_then(|r| r.name.as_deref()) {
        lines.push(format!("ESRB: {}", esrb));
    }
    if let Some(website) = details.website.as_deref().filter(|w| !w.is_empty()) {
        lines.push(format!("Website: {}", website));
    }
    if let Some(description) = details.description.as_deref() {
        lines.push(String::new());
        lines.push(description.to_string());
    }

    lines.join("\n")
}

fn format_rating(rating: Option<f64>, top: Option<f64>) -> String {
    match (rating, top) {
        (Some(r), Some(t)) => format!("{:.2}/{}", r, t),
        (Some(r), None) => format!("{:.2}", r),
        _ => "unrated".to_string(),
    }
}

/// Write downloaded image bytes, creating parent directories as needed
pub fn write_image(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
