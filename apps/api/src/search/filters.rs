use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::{EmploymentType, ExperienceLevel, WorkplaceType};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// The closed set of recognized search facets. Omitted facets impose no
/// constraint; provided facets are AND-composed. Enum-valued facets are
/// closed by construction, so out-of-domain values fail at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSearchFilters {
    pub keyword: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
    pub workplace_type: Option<WorkplaceType>,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub skills: Option<Vec<String>>,
}

impl JobSearchFilters {
    /// Boundary validation. Rejects values outside their documented domain
    /// before any store call; nothing is silently clamped or dropped.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(keyword) = &self.keyword {
            if keyword.trim().is_empty() {
                return Err(AppError::InvalidFacet(
                    "keyword must not be blank".to_string(),
                ));
            }
        }
        if let Some(skills) = &self.skills {
            if skills.is_empty() {
                return Err(AppError::InvalidFacet(
                    "skills must name at least one skill".to_string(),
                ));
            }
        }
        for bound in [self.salary_min, self.salary_max].into_iter().flatten() {
            if bound <= 0 {
                return Err(AppError::InvalidFacet(
                    "salary bounds must be positive".to_string(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(AppError::InvalidFacet(
                    "salary_min must not exceed salary_max".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Fingerprint of the facet combination, embedded in pagination cursors
    /// so a cursor replayed against different filters is rejected instead of
    /// silently mixing result sequences. The keyword is hashed in its
    /// normalized (lowercase) form, matching how it is queried.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.keyword.as_deref().map(str::to_lowercase).hash(&mut hasher);
        self.location.hash(&mut hasher);
        self.employment_type.hash(&mut hasher);
        self.workplace_type.hash(&mut hasher);
        self.experience_level.hash(&mut hasher);
        self.salary_min.hash(&mut hasher);
        self.salary_max.hash(&mut hasher);
        self.skills.hash(&mut hasher);
        hasher.finish()
    }
}

pub fn validate_page_size(page_size: u32) -> Result<(), AppError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(AppError::InvalidFacet(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    Ok(())
}
