//! HTTP routes.

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use horror_engine::HorrorStory;

use crate::request::RawStoryRequest;
use crate::App;

/// The only message clients ever see on failure.
pub const CRAFT_FAILED_MESSAGE: &str = "Unable to craft horror story";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(generate))
}

async fn health() -> &'static str {
    "OK"
}

/// Body of every `/api/generate` response, tagged by `status`.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerateResponse {
    Ok { story: HorrorStory },
    Error { message: String },
}

async fn generate(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, ApiError> {
    let raw = RawStoryRequest::from_json(&body).map_err(ApiError::MalformedBody)?;
    let request = raw.normalize();
    let story = app.generator.craft_fresh(&request);
    tracing::info!(
        theme = %request.theme,
        style = %request.style,
        intensity = request.intensity,
        scenes = story.scenes.len(),
        "generated story"
    );
    Ok(Json(GenerateResponse::Ok { story }))
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("malformed request body: {0}")]
    MalformedBody(serde_json::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "story generation failed");
        let body = GenerateResponse::Error {
            message: CRAFT_FAILED_MESSAGE.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Turn a handler panic into the standard error response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}
