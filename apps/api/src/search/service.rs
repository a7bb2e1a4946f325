//! Faceted job search: translates a facet combination into one store query
//! per call and paginates with resume-after cursors.

use std::sync::Arc;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobStatus};
use crate::search::cursor::PageCursor;
use crate::search::filters::{validate_page_size, JobSearchFilters};
use crate::store::{JobPageQuery, JobStore, PagePosition};

/// One page of search results. `has_more` is a heuristic: a page of exactly
/// `page_size` rows is assumed to mean "possibly more", so a result count
/// that is an exact multiple of the page size yields one trailing empty
/// page. Callers must tolerate it.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub jobs: Vec<JobPosting>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Clone)]
pub struct JobSearchService {
    store: Arc<dyn JobStore>,
}

impl JobSearchService {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// Runs one store query for the given facet combination.
    ///
    /// Only active postings are considered, always in creation-descending
    /// order. The keyword facet is lowercased and matched by whole-token
    /// containment against the posting's keyword index. A multi-word
    /// keyword only matches where the full string was indexed as one token
    /// (locations), which is the documented baseline behavior.
    ///
    /// Store failures surface as `SearchFailed` with the store's message;
    /// there is no retry here.
    pub async fn search(
        &self,
        filters: &JobSearchFilters,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<SearchPage, AppError> {
        filters.validate()?;
        validate_page_size(page_size)?;

        let fingerprint = filters.fingerprint();
        let after = match cursor {
            Some(token) => {
                let cursor = PageCursor::decode(token)?;
                if cursor.filters != fingerprint {
                    return Err(AppError::InvalidFacet(
                        "cursor was issued for a different filter combination".to_string(),
                    ));
                }
                Some(PagePosition {
                    created_at: cursor.created_at,
                    id: cursor.id,
                })
            }
            None => None,
        };

        let query = JobPageQuery {
            status: JobStatus::Active,
            keyword: filters.keyword.as_deref().map(str::to_lowercase),
            location: filters.location.clone(),
            employment_type: filters.employment_type,
            workplace_type: filters.workplace_type,
            experience_level: filters.experience_level,
            salary_min: filters.salary_min,
            salary_max: filters.salary_max,
            skills: filters.skills.clone(),
            limit: page_size,
            after,
        };

        let jobs = self
            .store
            .find_page(&query)
            .await
            .map_err(|e| AppError::SearchFailed(e.to_string()))?;

        let has_more = jobs.len() as u32 == page_size;
        let next_cursor = jobs.last().map(|job| {
            PageCursor {
                created_at: job.created_at,
                id: job.id,
                filters: fingerprint,
            }
            .encode()
        });

        Ok(SearchPage {
            jobs,
            next_cursor,
            has_more,
        })
    }
}
