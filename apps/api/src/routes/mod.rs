pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::resume::handlers as resume;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume intake
        .route("/api/v1/resume/upload", post(resume::handle_upload))
        .route("/api/v1/resume/export", post(resume::handle_export))
        // Keyword analysis
        .route("/api/v1/keywords/extract", post(analysis::handle_extract))
        .route("/api/v1/keywords/match", post(analysis::handle_match))
        .route("/api/v1/score", post(analysis::handle_score))
        .route("/api/v1/optimize", post(analysis::handle_optimize))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
