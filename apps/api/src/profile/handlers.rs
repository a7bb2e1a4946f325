use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileDocument;
use crate::profile::completeness::{
    completeness_score, incomplete_fields, strength_label, StrengthLabel,
};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CompletenessResponse {
    pub score: u8,
    pub tier: StrengthLabel,
    pub incomplete_fields: Vec<&'static str>,
}

/// GET /api/v1/profile/:user_id/completeness
pub async fn handle_profile_completeness(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<CompletenessResponse>, AppError> {
    let snapshot = state.profiles.load(user_id).await?;
    let score = completeness_score(snapshot.as_ref());
    Ok(Json(CompletenessResponse {
        score,
        tier: strength_label(score),
        incomplete_fields: incomplete_fields(snapshot.as_ref()),
    }))
}

/// PUT /api/v1/profile/:user_id
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(document): Json<ProfileDocument>,
) -> Result<StatusCode, AppError> {
    state.profiles.save(user_id, &document).await?;
    Ok(StatusCode::NO_CONTENT)
}
