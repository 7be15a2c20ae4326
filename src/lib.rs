//! RAWG Catalog - video game catalog client
//!
//! Browses the RAWG games API and keeps recently downloaded cover images in a
//! bounded recency cache.

pub mod cache;
pub mod config;
pub mod downloader;
pub mod error;
pub mod output;
pub mod rawg;
pub mod service;
pub mod web;

pub use cache::{BasicCache, DuplicatePolicy};
pub use config::ServiceConfig;
pub use downloader::{DataDownloader, Payload};
pub use error::{CatalogError, Result};
pub use service::GamesService;
