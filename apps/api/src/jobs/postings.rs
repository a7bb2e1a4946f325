//! The posting write path. Every create and update regenerates the keyword
//! index in full before anything is persisted. The call is explicit here,
//! at the single write boundary, rather than hidden in a store trigger.

use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobDraft, JobPosting, JobPostingPatch, JobStatus, SalaryRange};
use crate::search::keywords::generate_search_keywords;
use crate::store::JobStore;

fn validate_salary(salary: &SalaryRange) -> Result<(), AppError> {
    if salary.min <= 0 || salary.max <= 0 {
        return Err(AppError::Validation(
            "salary bounds must be positive".to_string(),
        ));
    }
    if salary.min > salary.max {
        return Err(AppError::Validation(
            "salary minimum must not exceed maximum".to_string(),
        ));
    }
    Ok(())
}

/// Creates a posting. Status defaults to active when the draft leaves it
/// unset.
pub async fn create_posting(
    store: &dyn JobStore,
    draft: JobDraft,
) -> Result<JobPosting, AppError> {
    validate_salary(&draft.salary)?;
    let keywords = generate_search_keywords(&draft);
    Ok(store.insert(&draft, &keywords).await?)
}

/// Applies a field-level edit. Only the owning recruiter may edit; the
/// merged record is re-validated and re-indexed as a whole.
pub async fn update_posting(
    store: &dyn JobStore,
    id: Uuid,
    recruiter_id: Uuid,
    patch: JobPostingPatch,
) -> Result<JobPosting, AppError> {
    let existing = fetch_owned(store, id, recruiter_id).await?;
    let draft = patch.apply_to(&existing);
    validate_salary(&draft.salary)?;
    let keywords = generate_search_keywords(&draft);
    Ok(store.update(id, &draft, &keywords).await?)
}

/// Owner-only status transition (active ↔ closed, draft publication).
pub async fn set_posting_status(
    store: &dyn JobStore,
    id: Uuid,
    recruiter_id: Uuid,
    status: JobStatus,
) -> Result<JobPosting, AppError> {
    fetch_owned(store, id, recruiter_id).await?;
    Ok(store.set_status(id, status).await?)
}

/// Owner-only hard delete. There is no tombstone; a deleted posting is gone.
pub async fn delete_posting(
    store: &dyn JobStore,
    id: Uuid,
    recruiter_id: Uuid,
) -> Result<(), AppError> {
    fetch_owned(store, id, recruiter_id).await?;
    store.delete(id).await?;
    Ok(())
}

/// A recruiter's own postings, newest first, drafts and closed included.
pub async fn recruiter_postings(
    store: &dyn JobStore,
    recruiter_id: Uuid,
) -> Result<Vec<JobPosting>, AppError> {
    Ok(store.recruiter_jobs(recruiter_id).await?)
}

async fn fetch_owned(
    store: &dyn JobStore,
    id: Uuid,
    recruiter_id: Uuid,
) -> Result<JobPosting, AppError> {
    let posting = store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    if posting.recruiter_id != recruiter_id {
        return Err(AppError::Forbidden);
    }
    Ok(posting)
}
