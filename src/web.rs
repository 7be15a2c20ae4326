//! Local HTTP proxy for the RAWG catalog
//!
//! Exposes games list, game details and cached image downloads so several
//! local tools can share one image cache.

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::CatalogError;
use crate::rawg::{GameDetails, GamesListParameters, GamesListResponse, Ordering};
use crate::service::GamesService;

/// Sent when the image host declares no type
const DEFAULT_IMAGE_CONTENT_TYPE: &str = "application/octet-stream";

/// Shared application state
#[derive(Clone)]
struct AppState {
    service: Arc<GamesService>,
}

/// Games list query parameters
#[derive(Debug, Default, Deserialize)]
struct ListParams {
    search: Option<String>,
    ordering: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
}

impl ListParams {
    fn into_parameters(self) -> Result<GamesListParameters, CatalogError> {
        let ordering = self
            .ordering
            .as_deref()
            .map(str::parse::<Ordering>)
            .transpose()?;

        Ok(GamesListParameters {
            search: self.search,
            ordering,
            page: self.page,
            page_size: self.page_size,
            key: None,
        })
    }
}

/// Image query parameters
#[derive(Debug, Deserialize)]
struct ImageParams {
    url: String,
    #[serde(default)]
    cropped: bool,
    #[serde(default = "default_use_cache")]
    cache: bool,
}

fn default_use_cache() -> bool {
    true
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    let body: ApiResponse<()> = ApiResponse {
        success: false,
        data: None,
        error: Some(message),
    };
    (status, Json(body)).into_response()
}

/// Map a service error to a status: upstream 404s pass through, bad input
/// (URL or ordering) is a 400, anything else is a bad gateway
fn upstream_error(e: CatalogError) -> Response {
    let status = match &e {
        CatalogError::HttpStatus { status, .. } if *status == StatusCode::NOT_FOUND => {
            StatusCode::NOT_FOUND
        }
        CatalogError::InvalidUrl(_) | CatalogError::InvalidOrdering(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    };
    error_response(status, e.to_string())
}

/// GET /api/games?search={q}&ordering={o}&page={n}&page_size={n}
async fn games_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<GamesListResponse>>, Response> {
    let params = params.into_parameters().map_err(upstream_error)?;

    match state.service.games_list(&params).await {
        Ok(page) => Ok(ApiResponse::ok(page)),
        Err(e) => {
            log::error!("Games list error: {}", e);
            Err(upstream_error(e))
        }
    }
}

/// GET /api/games/{id}
async fn game_details_handler(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Result<Json<ApiResponse<GameDetails>>, Response> {
    match state.service.game_details(game_id).await {
        Ok(details) => Ok(ApiResponse::ok(details)),
        Err(e) => {
            log::warn!("Failed to fetch details for game {}: {}", game_id, e);
            Err(upstream_error(e))
        }
    }
}

/// GET /api/image?url={url}&cropped={bool}&cache={bool}
async fn image_handler(
    State(state): State<AppState>,
    Query(params): Query<ImageParams>,
) -> Response {
    match state
        .service
        .download_image(&params.url, params.cropped, params.cache)
        .await
    {
        Ok(image) => {
            let content_type = image
                .content_type
                .unwrap_or_else(|| DEFAULT_IMAGE_CONTENT_TYPE.to_string());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
                ],
                Body::from(image.bytes),
            )
                .into_response()
        }
        Err(e) => {
            log::warn!("Failed to fetch image {}: {}", params.url, e);
            upstream_error(e)
        }
    }
}

/// Build the proxy router
pub fn create_router(service: Arc<GamesService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/api/games", get(games_handler))
        .route("/api/games/{id}", get(game_details_handler))
        .route("/api/image", get(image_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the proxy on 127.0.0.1:`port`
pub async fn serve(service: Arc<GamesService>, port: u16) -> Result<(), CatalogError> {
    let app = create_router(service);
    let addr = format!("127.0.0.1:{}", port);

    log::info!("Catalog proxy listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
    log::info!("Shutting down catalog proxy");
}
