#![allow(dead_code)]

//! Caller-side pagination session with request sequencing.
//!
//! The store query is the only suspension point in a search, and nothing
//! cancels an in-flight query when the caller changes filters. Without a
//! guard, a slow response for an old filter set could land after a newer one
//! and overwrite fresher state. The session closes that race: every filter
//! change bumps a generation counter, each request snapshots the generation
//! before awaiting, and a response whose generation is no longer current is
//! discarded instead of applied.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::search::filters::JobSearchFilters;
use crate::search::service::JobSearchService;

/// What happened to a request's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response was applied; `appended` rows joined the result list.
    Applied { appended: usize },
    /// The filters changed while the request was in flight; the response
    /// was discarded and the session state is untouched.
    Stale,
    /// The previous page was short, so there is nothing further to load.
    Exhausted,
    /// Another load is already in flight.
    InFlight,
}

/// Accumulated state visible to the caller.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub jobs: Vec<JobPosting>,
    pub has_more: bool,
}

pub struct SearchSession {
    service: JobSearchService,
    page_size: u32,
    generation: AtomicU64,
    inner: Mutex<SessionInner>,
}

struct SessionInner {
    filters: JobSearchFilters,
    jobs: Vec<JobPosting>,
    cursor: Option<String>,
    has_more: bool,
    in_flight: bool,
}

impl SearchSession {
    pub fn new(service: JobSearchService, page_size: u32) -> Self {
        Self {
            service,
            page_size,
            generation: AtomicU64::new(0),
            inner: Mutex::new(SessionInner {
                filters: JobSearchFilters::default(),
                jobs: Vec::new(),
                cursor: None,
                has_more: true,
                in_flight: false,
            }),
        }
    }

    /// Replaces the filter set and restarts pagination: accumulated results
    /// and the cursor are discarded, and any in-flight response is
    /// invalidated by bumping the generation.
    pub async fn update_filters(&self, filters: JobSearchFilters) {
        let mut inner = self.inner.lock().await;
        inner.filters = filters;
        inner.jobs.clear();
        inner.cursor = None;
        inner.has_more = true;
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Fetches the first page for the current filters, replacing any
    /// accumulated results, unless the filters changed while the request
    /// was in flight, in which case the response is dropped.
    pub async fn refresh(&self) -> Result<SearchOutcome, AppError> {
        let (generation, filters) = {
            let inner = self.inner.lock().await;
            (
                self.generation.load(Ordering::Acquire),
                inner.filters.clone(),
            )
        };

        let page = self.service.search(&filters, self.page_size, None).await?;

        let mut inner = self.inner.lock().await;
        if self.generation.load(Ordering::Acquire) != generation {
            return Ok(SearchOutcome::Stale);
        }
        let appended = page.jobs.len();
        inner.jobs = page.jobs;
        inner.cursor = page.next_cursor;
        inner.has_more = page.has_more;
        Ok(SearchOutcome::Applied { appended })
    }

    /// Fetches the next page and appends it. On error the accumulated
    /// results are left untouched, so the caller keeps whatever was already
    /// displayed.
    pub async fn load_more(&self) -> Result<SearchOutcome, AppError> {
        let (generation, filters, cursor) = {
            let mut inner = self.inner.lock().await;
            if !inner.has_more {
                return Ok(SearchOutcome::Exhausted);
            }
            if inner.in_flight {
                return Ok(SearchOutcome::InFlight);
            }
            inner.in_flight = true;
            (
                self.generation.load(Ordering::Acquire),
                inner.filters.clone(),
                inner.cursor.clone(),
            )
        };

        let result = self
            .service
            .search(&filters, self.page_size, cursor.as_deref())
            .await;

        let mut inner = self.inner.lock().await;
        inner.in_flight = false;
        let page = result?;
        if self.generation.load(Ordering::Acquire) != generation {
            return Ok(SearchOutcome::Stale);
        }
        let appended = page.jobs.len();
        inner.jobs.extend(page.jobs);
        inner.cursor = page.next_cursor;
        inner.has_more = page.has_more;
        Ok(SearchOutcome::Applied { appended })
    }

    pub async fn view(&self) -> SessionView {
        let inner = self.inner.lock().await;
        SessionView {
            jobs: inner.jobs.clone(),
            has_more: inner.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::postings::create_posting;
    use crate::models::job::{
        EmploymentType, ExperienceLevel, JobDraft, SalaryRange, WorkplaceType,
    };
    use crate::store::{JobPageQuery, JobStore, MemoryJobStore, StoreError};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Semaphore;
    use uuid::Uuid;

    fn draft(title: &str) -> JobDraft {
        JobDraft {
            recruiter_id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            employment_type: EmploymentType::FullTime,
            workplace_type: WorkplaceType::OnSite,
            experience_level: ExperienceLevel::Mid,
            description: String::new(),
            responsibilities: String::new(),
            requirements: String::new(),
            skills: vec![],
            benefits: vec![],
            salary: SalaryRange {
                min: 50_000,
                max: 70_000,
                currency: "EUR".to_string(),
            },
            status: None,
        }
    }

    /// Store whose reads block until a permit is released, so tests control
    /// exactly when an in-flight response lands.
    struct GatedStore {
        inner: MemoryJobStore,
        gate: Arc<Semaphore>,
    }

    #[async_trait]
    impl JobStore for GatedStore {
        async fn find_page(&self, query: &JobPageQuery) -> Result<Vec<JobPosting>, StoreError> {
            let permit = self
                .gate
                .acquire()
                .await
                .map_err(|e| StoreError(e.to_string()))?;
            permit.forget();
            self.inner.find_page(query).await
        }
        async fn get(&self, id: Uuid) -> Result<Option<JobPosting>, StoreError> {
            self.inner.get(id).await
        }
        async fn insert(
            &self,
            draft: &JobDraft,
            keywords: &[String],
        ) -> Result<JobPosting, StoreError> {
            self.inner.insert(draft, keywords).await
        }
        async fn update(
            &self,
            id: Uuid,
            draft: &JobDraft,
            keywords: &[String],
        ) -> Result<JobPosting, StoreError> {
            self.inner.update(id, draft, keywords).await
        }
        async fn set_status(
            &self,
            id: Uuid,
            status: crate::models::job::JobStatus,
        ) -> Result<JobPosting, StoreError> {
            self.inner.set_status(id, status).await
        }
        async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
            self.inner.delete(id).await
        }
        async fn recruiter_jobs(&self, recruiter_id: Uuid) -> Result<Vec<JobPosting>, StoreError> {
            self.inner.recruiter_jobs(recruiter_id).await
        }
    }

    #[tokio::test]
    async fn test_load_more_accumulates_pages() {
        let store = Arc::new(MemoryJobStore::new());
        for i in 0..5 {
            create_posting(store.as_ref(), draft(&format!("Role {i}")))
                .await
                .unwrap();
        }
        let session = SearchSession::new(JobSearchService::new(store), 2);

        assert_eq!(
            session.load_more().await.unwrap(),
            SearchOutcome::Applied { appended: 2 }
        );
        assert_eq!(
            session.load_more().await.unwrap(),
            SearchOutcome::Applied { appended: 2 }
        );
        assert_eq!(
            session.load_more().await.unwrap(),
            SearchOutcome::Applied { appended: 1 }
        );
        let view = session.view().await;
        assert_eq!(view.jobs.len(), 5);
        assert!(!view.has_more);
        assert_eq!(session.load_more().await.unwrap(), SearchOutcome::Exhausted);
    }

    #[tokio::test]
    async fn test_update_filters_discards_accumulated_state() {
        let store = Arc::new(MemoryJobStore::new());
        for i in 0..3 {
            create_posting(store.as_ref(), draft(&format!("Role {i}")))
                .await
                .unwrap();
        }
        let session = SearchSession::new(JobSearchService::new(store), 2);
        session.load_more().await.unwrap();
        assert_eq!(session.view().await.jobs.len(), 2);

        session
            .update_filters(JobSearchFilters {
                location: Some("Munich".to_string()),
                ..Default::default()
            })
            .await;
        let view = session.view().await;
        assert!(view.jobs.is_empty());
        assert!(view.has_more);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let gate = Arc::new(Semaphore::new(0));
        let gated = Arc::new(GatedStore {
            inner: MemoryJobStore::new(),
            gate: gate.clone(),
        });
        create_posting(gated.as_ref(), draft("Old World"))
            .await
            .unwrap();

        let session = Arc::new(SearchSession::new(JobSearchService::new(gated), 10));

        let in_flight = {
            let session = session.clone();
            tokio::spawn(async move { session.refresh().await })
        };
        // Let the refresh reach the gated store call, then invalidate it.
        tokio::task::yield_now().await;
        session
            .update_filters(JobSearchFilters {
                keyword: Some("new".to_string()),
                ..Default::default()
            })
            .await;
        gate.add_permits(1);

        assert_eq!(in_flight.await.unwrap().unwrap(), SearchOutcome::Stale);
        let view = session.view().await;
        assert!(
            view.jobs.is_empty(),
            "stale response must not overwrite fresher state"
        );
    }

    #[tokio::test]
    async fn test_failed_load_leaves_results_untouched() {
        let gate = Arc::new(Semaphore::new(1));
        let gated = Arc::new(GatedStore {
            inner: MemoryJobStore::new(),
            gate: gate.clone(),
        });
        for i in 0..2 {
            create_posting(gated.as_ref(), draft(&format!("Role {i}")))
                .await
                .unwrap();
        }

        let session = Arc::new(SearchSession::new(JobSearchService::new(gated), 1));
        session.load_more().await.unwrap();
        assert_eq!(session.view().await.jobs.len(), 1);

        // Close the gate so the next load fails.
        gate.close();
        let err = session.load_more().await;
        assert!(err.is_err());
        let view = session.view().await;
        assert_eq!(view.jobs.len(), 1, "error must not clear displayed results");
    }
}
