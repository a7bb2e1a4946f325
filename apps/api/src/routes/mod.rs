pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::profile::handlers as profile;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job search
        .route("/api/v1/jobs/search", get(search::handle_search_jobs))
        // Posting write path (owner-only)
        .route("/api/v1/jobs", post(jobs::handle_create_job))
        .route("/api/v1/jobs/:id", patch(jobs::handle_update_job))
        .route(
            "/api/v1/jobs/:id/status",
            patch(jobs::handle_update_job_status),
        )
        .route("/api/v1/jobs/:id", delete(jobs::handle_delete_job))
        .route(
            "/api/v1/recruiters/:id/jobs",
            get(jobs::handle_recruiter_jobs),
        )
        // Posting form reference data
        .route("/api/v1/catalog/skills", get(jobs::handle_list_skills))
        .route("/api/v1/catalog/benefits", get(jobs::handle_list_benefits))
        // Profile
        .route(
            "/api/v1/profile/:user_id/completeness",
            get(profile::handle_profile_completeness),
        )
        .route("/api/v1/profile/:user_id", put(profile::handle_put_profile))
        .with_state(state)
}
