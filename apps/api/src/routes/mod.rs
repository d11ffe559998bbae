pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{routing::get, routing::post, Router};
use serde::Serialize;

use crate::parser::handlers as parse_handlers;
use crate::scoring::handlers as score_handlers;
use crate::state::AppState;

/// Envelope for successful responses: `{"success": true, "data": ...}`.
/// Errors use the `AppError` envelope instead.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Slack on top of the upload cap for multipart framing overhead.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + BODY_LIMIT_SLACK;

    Router::new()
        .route("/health", get(health::health_handler))
        // Parsing
        .route(
            "/api/v1/resumes/parse",
            post(parse_handlers::handle_parse_upload),
        )
        .route(
            "/api/v1/resumes/parse-text",
            post(parse_handlers::handle_parse_text),
        )
        // Scoring & matching
        .route("/api/v1/resumes/score", post(score_handlers::handle_score))
        .route("/api/v1/resumes/match", post(score_handlers::handle_match))
        // Bullet improvement
        .route(
            "/api/v1/bullets/improve",
            post(score_handlers::handle_improve_bullet),
        )
        .route(
            "/api/v1/resumes/apply-improvement",
            post(score_handlers::handle_apply_improvement),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
