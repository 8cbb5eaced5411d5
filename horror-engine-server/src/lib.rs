//! Horror Engine Server: the HTTP face of the story generator.
//!
//! `POST /api/generate` accepts a loosely typed JSON request, normalizes it,
//! and answers with a freshly seeded story.

pub mod api;
pub mod config;
pub mod request;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use horror_engine::StoryGenerator;

/// Shared application state. Read-only after startup.
#[derive(Debug)]
pub struct App {
    pub generator: StoryGenerator,
}

impl App {
    pub fn new(generator: StoryGenerator) -> Self {
        Self { generator }
    }
}

/// Build the full router with tracing, panic recovery, and optional CORS.
pub fn router(app: Arc<App>, cors_allowed_origins: Option<&str>) -> Router {
    let router = api::routes()
        .with_state(app)
        .layer(CatchPanicLayer::custom(api::panic_response))
        .layer(TraceLayer::new_for_http());

    match cors_allowed_origins.and_then(build_cors_layer) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.trim() == "*" {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        return None;
    }
    Some(cors.allow_origin(origins))
}
