//! RAWG Catalog - command line client
//!
//! Searches the RAWG catalog, shows game details, downloads cover images and
//! can run a local proxy that shares one image cache.

use clap::{Parser, Subcommand};
use rawg_catalog::config::DEFAULT_IMAGE_CACHE_CAPACITY;
use rawg_catalog::rawg::{GamesListParameters, Ordering, DEFAULT_API_BASE_URL};
use rawg_catalog::{output, web, GamesService, Result, ServiceConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// RAWG video game catalog client
#[derive(Parser, Debug)]
#[command(name = "rawg_catalog")]
#[command(version, about, long_about = None)]
struct Args {
    /// RAWG API key
    #[arg(long, env = "RAWG_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Base URL of the RAWG API
    #[arg(long, env = "RAWG_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Number of downloaded images kept in memory
    #[arg(long, default_value_t = DEFAULT_IMAGE_CACHE_CAPACITY)]
    cache_capacity: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the games list
    Search {
        /// Free-text search
        query: Option<String>,

        /// Sort order, e.g. "-rating" or "released"
        #[arg(long, allow_hyphen_values = true)]
        ordering: Option<Ordering>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show details for a game
    Details {
        /// RAWG game id
        id: u64,
    },
    /// Download an image to a file
    Image {
        /// Image URL as returned by the API
        url: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Fetch the 600x400 cropped variant
        #[arg(long, default_value_t = false)]
        cropped: bool,
    },
    /// Run the local catalog proxy
    Serve {
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.api_key.is_empty() {
        log::warn!("No RAWG API key set (use --api-key or RAWG_API_KEY); requests may be rejected");
    }

    let config = ServiceConfig {
        api_key: args.api_key,
        base_url: args.base_url,
        image_cache_capacity: args.cache_capacity,
        ..ServiceConfig::default()
    };
    log::debug!(
        "Using {} with an image cache of {} entries",
        config.base_url,
        config.image_cache_capacity
    );

    let service = Arc::new(GamesService::new(&config));

    if let Err(e) = run(args.command, service).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command, service: Arc<GamesService>) -> Result<()> {
    match command {
        Command::Search {
            query,
            ordering,
            page,
            page_size,
        } => {
            let params = GamesListParameters {
                search: query,
                ordering,
                page,
                page_size,
                key: None,
            };
            let page = service.games_list(&params).await?;
            println!("{}", output::format_games_page(&page));
        }
        Command::Details { id } => {
            let details = service.game_details(id).await?;
            println!("{}", output::format_details(&details));
        }
        Command::Image {
            url,
            output: path,
            cropped,
        } => {
            let image = service.download_image(&url, cropped, true).await?;
            output::write_image(&path, &image.bytes)?;
        }
        Command::Serve { port } => {
            web::serve(service, port).await?;
        }
    }

    Ok(())
}
