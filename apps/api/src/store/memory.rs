#![allow(dead_code)]

//! In-memory `JobStore` backend with the same predicate semantics as the
//! Postgres one. Used by unit tests and local experiments; never wired into
//! a deployed binary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::job::{JobDraft, JobPosting, JobStatus, SalaryRange};
use crate::store::{JobPageQuery, JobStore, StoreError};

#[derive(Default)]
pub struct MemoryJobStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    jobs: Vec<JobPosting>,
    last_micros: i64,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    /// Server-assigned creation times are strictly increasing, truncated to
    /// microseconds to match timestamp columns and cursor encoding.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now().timestamp_micros().max(self.last_micros + 1);
        self.last_micros = now;
        DateTime::from_timestamp_micros(now).unwrap_or_else(Utc::now)
    }
}

fn matches(job: &JobPosting, query: &JobPageQuery) -> bool {
    job.status == query.status
        && query
            .keyword
            .as_deref()
            .map_or(true, |kw| job.search_keywords.iter().any(|t| t == kw))
        && query
            .location
            .as_deref()
            .map_or(true, |loc| job.location == loc)
        && query
            .employment_type
            .map_or(true, |t| job.employment_type == t)
        && query
            .workplace_type
            .map_or(true, |t| job.workplace_type == t)
        && query
            .experience_level
            .map_or(true, |l| job.experience_level == l)
        && query.salary_min.map_or(true, |min| job.salary.min >= min)
        && query.salary_max.map_or(true, |max| job.salary.max <= max)
        && query.skills.as_ref().map_or(true, |wanted| {
            job.skills
                .iter()
                .any(|s| wanted.iter().any(|w| *w == s.name))
        })
}

fn from_draft(draft: &JobDraft, id: Uuid, now: DateTime<Utc>, keywords: &[String]) -> JobPosting {
    JobPosting {
        id,
        recruiter_id: draft.recruiter_id,
        title: draft.title.clone(),
        company: draft.company.clone(),
        location: draft.location.clone(),
        employment_type: draft.employment_type,
        workplace_type: draft.workplace_type,
        experience_level: draft.experience_level,
        description: draft.description.clone(),
        responsibilities: draft.responsibilities.clone(),
        requirements: draft.requirements.clone(),
        skills: draft.skills.clone(),
        benefits: draft.benefits.clone(),
        salary: SalaryRange {
            min: draft.salary.min,
            max: draft.salary.max,
            currency: draft.salary.currency.clone(),
        },
        status: draft.status.unwrap_or(JobStatus::Active),
        search_keywords: keywords.to_vec(),
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn find_page(&self, query: &JobPageQuery) -> Result<Vec<JobPosting>, StoreError> {
        let inner = self.inner.read().await;
        let mut page: Vec<JobPosting> = inner
            .jobs
            .iter()
            .filter(|j| matches(j, query))
            .filter(|j| {
                query.after.map_or(true, |after| {
                    (j.created_at, j.id) < (after.created_at, after.id)
                })
            })
            .cloned()
            .collect();
        page.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        page.truncate(query.limit as usize);
        Ok(page)
    }

    async fn get(&self, id: Uuid) -> Result<Option<JobPosting>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn insert(
        &self,
        draft: &JobDraft,
        search_keywords: &[String],
    ) -> Result<JobPosting, StoreError> {
        let mut inner = self.inner.write().await;
        let now = inner.next_timestamp();
        let job = from_draft(draft, Uuid::new_v4(), now, search_keywords);
        inner.jobs.push(job.clone());
        Ok(job)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &JobDraft,
        search_keywords: &[String],
    ) -> Result<JobPosting, StoreError> {
        let mut inner = self.inner.write().await;
        let now = inner.next_timestamp();
        let job = inner
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| StoreError(format!("job {id} not found")))?;
        let mut updated = from_draft(draft, id, job.created_at, search_keywords);
        updated.status = job.status;
        updated.updated_at = now;
        *job = updated.clone();
        Ok(updated)
    }

    async fn set_status(&self, id: Uuid, status: JobStatus) -> Result<JobPosting, StoreError> {
        let mut inner = self.inner.write().await;
        let now = inner.next_timestamp();
        let job = inner
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| StoreError(format!("job {id} not found")))?;
        job.status = status;
        job.updated_at = now;
        Ok(job.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.jobs.len();
        inner.jobs.retain(|j| j.id != id);
        Ok(inner.jobs.len() < before)
    }

    async fn recruiter_jobs(&self, recruiter_id: Uuid) -> Result<Vec<JobPosting>, StoreError> {
        let inner = self.inner.read().await;
        let mut jobs: Vec<JobPosting> = inner
            .jobs
            .iter()
            .filter(|j| j.recruiter_id == recruiter_id)
            .cloned()
            .collect();
        jobs.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(jobs)
    }
}
