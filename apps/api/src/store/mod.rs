//! Job posting persistence behind a narrow document-store contract:
//! conjunctive exact-match predicates, per-field inequality predicates,
//! array-containment, descending order on creation time, limit, and
//! resume-after-cursor. `PgJobStore` is the production backend;
//! `MemoryJobStore` serves unit tests and local experiments.

mod memory;
mod postgres;

pub use memory::MemoryJobStore;
pub use postgres::PgJobStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::job::{
    EmploymentType, ExperienceLevel, JobDraft, JobPosting, JobStatus, WorkplaceType,
};

/// A store-level failure, carrying the backend's own message so callers can
/// surface it verbatim.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError(e.to_string())
    }
}

/// Position of the last row of a page, used to resume a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePosition {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
}

/// Structured translation of a facet combination. All present predicates are
/// AND-composed; results are always ordered by `(created_at, id)` descending.
#[derive(Debug, Clone)]
pub struct JobPageQuery {
    pub status: JobStatus,
    /// A single lowercase token matched by containment against
    /// `search_keywords`.
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub workplace_type: Option<WorkplaceType>,
    pub experience_level: Option<ExperienceLevel>,
    /// Postings whose `salary.min` is at least this value.
    pub salary_min: Option<i64>,
    /// Postings whose `salary.max` is at most this value.
    pub salary_max: Option<i64>,
    /// Postings whose skill-name set intersects this list.
    pub skills: Option<Vec<String>>,
    pub limit: u32,
    pub after: Option<PagePosition>,
}

/// The persistence boundary for job postings.
///
/// `insert` and `update` take the keyword index alongside the draft: callers
/// regenerate it in full at the write boundary, so the index never
/// observably diverges from the record it indexes.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// One query per call: filtered page plus nothing else. Rows come back
    /// in `(created_at, id)` descending order, at most `limit` of them.
    async fn find_page(&self, query: &JobPageQuery) -> Result<Vec<JobPosting>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<JobPosting>, StoreError>;

    async fn insert(
        &self,
        draft: &JobDraft,
        search_keywords: &[String],
    ) -> Result<JobPosting, StoreError>;

    async fn update(
        &self,
        id: Uuid,
        draft: &JobDraft,
        search_keywords: &[String],
    ) -> Result<JobPosting, StoreError>;

    async fn set_status(&self, id: Uuid, status: JobStatus) -> Result<JobPosting, StoreError>;

    /// Hard delete, no tombstone. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    /// A recruiter's own postings regardless of status, newest first.
    async fn recruiter_jobs(&self, recruiter_id: Uuid) -> Result<Vec<JobPosting>, StoreError>;
}
