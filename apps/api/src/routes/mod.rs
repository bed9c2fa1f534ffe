pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::admin;
use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/resumes", post(handlers::handle_upload))
        .route("/api/v1/videos", get(handlers::handle_videos))
        // Admin API
        .route("/api/v1/admin/login", post(admin::handle_login))
        .route("/api/v1/admin/analyses", get(admin::handle_list_analyses))
        .route("/api/v1/admin/analyses.csv", get(admin::handle_export_csv))
        .route("/api/v1/admin/stats", get(admin::handle_stats))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
