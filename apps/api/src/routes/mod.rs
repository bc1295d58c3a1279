pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::errors::AppError;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume tree
        .route("/api/v1/resume/sample", get(resume_handlers::handle_sample))
        .route(
            "/api/v1/resume/transform",
            post(resume_handlers::handle_transform),
        )
        .route("/api/v1/resume/export", post(resume_handlers::handle_export))
        // Component lookup, analysis and edits
        .route(
            "/api/v1/components/lookup",
            post(resume_handlers::handle_lookup),
        )
        .route(
            "/api/v1/components/analyze",
            post(analysis_handlers::handle_analyze),
        )
        .route(
            "/api/v1/components/apply",
            post(resume_handlers::handle_apply_suggestion),
        )
        .route(
            "/api/v1/components/content",
            post(resume_handlers::handle_update_content),
        )
        // Reserved: upload, critique and job-application analytics
        .route("/api/v1/resume/upload", post(not_implemented))
        .route("/api/v1/resume/critique", post(not_implemented))
        .route("/api/v1/resume/blocks/alternatives", post(not_implemented))
        .route("/api/v1/job-applications/stats", get(not_implemented))
        .route("/api/v1/job-applications/matches", post(not_implemented))
        .route("/api/v1/job-applications/deadlines", get(not_implemented))
        .with_state(state)
}
