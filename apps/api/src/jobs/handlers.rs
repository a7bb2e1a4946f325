use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::catalog::{list_benefits, list_skills, BenefitRef, SkillRef};
use crate::jobs::postings::{
    create_posting, delete_posting, recruiter_postings, set_posting_status, update_posting,
};
use crate::models::job::{JobDraft, JobPosting, JobPostingPatch, JobStatus};
use crate::state::AppState;

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    let posting = create_posting(state.store.as_ref(), draft).await?;
    Ok((StatusCode::CREATED, Json(posting)))
}

#[derive(Deserialize)]
pub struct UpdateJobRequest {
    pub recruiter_id: Uuid,
    #[serde(flatten)]
    pub patch: JobPostingPatch,
}

/// PATCH /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<JobPosting>, AppError> {
    let posting = update_posting(state.store.as_ref(), id, req.recruiter_id, req.patch).await?;
    Ok(Json(posting))
}

#[derive(Deserialize)]
pub struct StatusChangeRequest {
    pub recruiter_id: Uuid,
    pub status: JobStatus,
}

/// PATCH /api/v1/jobs/:id/status
pub async fn handle_update_job_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusChangeRequest>,
) -> Result<Json<JobPosting>, AppError> {
    let posting =
        set_posting_status(state.store.as_ref(), id, req.recruiter_id, req.status).await?;
    Ok(Json(posting))
}

#[derive(Deserialize)]
pub struct RecruiterIdQuery {
    pub recruiter_id: Uuid,
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<RecruiterIdQuery>,
) -> Result<StatusCode, AppError> {
    delete_posting(state.store.as_ref(), id, params.recruiter_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/recruiters/:id/jobs
pub async fn handle_recruiter_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let postings = recruiter_postings(state.store.as_ref(), id).await?;
    Ok(Json(postings))
}

/// GET /api/v1/catalog/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillRef>>, AppError> {
    Ok(Json(list_skills(&state.db).await?))
}

/// GET /api/v1/catalog/benefits
pub async fn handle_list_benefits(
    State(state): State<AppState>,
) -> Result<Json<Vec<BenefitRef>>, AppError> {
    Ok(Json(list_benefits(&state.db).await?))
}
