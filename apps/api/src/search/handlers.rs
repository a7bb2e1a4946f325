use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::search::filters::{JobSearchFilters, DEFAULT_PAGE_SIZE};
use crate::search::service::SearchPage;
use crate::state::AppState;

/// Query parameters for GET /api/v1/jobs/search. The facet set is closed:
/// unknown parameters are rejected rather than ignored.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<crate::models::job::EmploymentType>,
    pub workplace_type: Option<crate::models::job::WorkplaceType>,
    pub experience_level: Option<crate::models::job::ExperienceLevel>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    /// Comma-separated skill names.
    pub skills: Option<String>,
    pub page_size: Option<u32>,
    pub cursor: Option<String>,
}

impl SearchParams {
    fn filters(&self) -> JobSearchFilters {
        JobSearchFilters {
            keyword: self.keyword.clone(),
            location: self.location.clone(),
            employment_type: self.employment_type,
            workplace_type: self.workplace_type,
            experience_level: self.experience_level,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            skills: self.skills.as_deref().map(|csv| {
                csv.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            }),
        }
    }
}

/// GET /api/v1/jobs/search
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, AppError> {
    let filters = params.filters();
    let page = state
        .search
        .search(
            &filters,
            params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            params.cursor.as_deref(),
        )
        .await?;
    Ok(Json(page))
}
