//! Route configuration and setup.
//!
//! Video routes live here; health checks in [health](health).

mod health;

use crate::handlers::{fetch, upload};
use crate::state::AppState;
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use vidvault_core::Config;
use vidvault_infra::request_id_middleware;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let allow_origin = setup_allowed_origins(config)?;

    let video_routes = Router::new()
        .route(
            "/upload",
            post(upload::upload_video).layer(cors_layer(allow_origin.clone(), Method::POST)),
        )
        .route(
            "/fetch",
            get(fetch::fetch_videos).layer(cors_layer(allow_origin, Method::GET)),
        )
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes()))
        .layer(DefaultBodyLimit::disable());

    tracing::info!(
        max_upload_bytes = config.max_upload_size_bytes(),
        cors_origins = %config.cors_origins().join(","),
        "Video routes configured"
    );

    let app = video_routes
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state);

    Ok(app)
}

fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
}

fn setup_allowed_origins(config: &Config) -> Result<AllowOrigin, anyhow::Error> {
    if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        return Ok(AllowOrigin::from(Any));
    }

    let origins = config
        .cors_origins()
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", o))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AllowOrigin::list(origins))
}

/// CORS for a single video route: its method plus preflight, and the upload headers.
fn cors_layer(allow_origin: AllowOrigin, method: Method) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([method, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-file-name")])
        .expose_headers([HeaderName::from_static("x-request-id")])
}

