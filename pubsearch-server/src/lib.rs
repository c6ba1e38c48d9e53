#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # PubSearch Server
//!
//! HTTP API over `pubsearch-client`:
//!
//! - `GET /` service name and version
//! - `POST /search` keyword search against PubMed (or the bioRxiv no-op)
//! - `POST /generate-query` natural language to PubMed query via an LLM
//! - `POST /classify` dataset and topic classification of an abstract
//!
//! Errors are returned as `{"detail": "..."}` bodies.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use config::Cli;
pub use error::ApiError;
pub use state::{AppState, SharedState};

/// Build the full router with CORS for `cors_origins`
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(routes::root::index))
        .route("/search", post(routes::search::search))
        .route("/generate-query", post(routes::generate_query::generate_query))
        .route("/classify", post(routes::classify::classify))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Listed origins with any method and header, credentials allowed
///
/// Wildcards cannot be combined with credentials, so methods and headers are
/// mirrored from the preflight request. A `*` entry allows every origin by
/// mirroring the request's `Origin`.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin.trim() == "*") {
        warn!("CORS wildcard configured, every origin is allowed with credentials");
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
