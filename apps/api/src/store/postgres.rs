use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::models::job::{
    EmploymentType, ExperienceLevel, JobDraft, JobPosting, JobSkill, JobStatus, SalaryRange,
    WorkplaceType,
};
use crate::store::{JobPageQuery, JobStore, StoreError};

const SELECT_COLUMNS: &str = "id, recruiter_id, title, company, location, employment_type, \
     workplace_type, experience_level, description, responsibilities, requirements, skills, \
     benefits, salary_min, salary_max, salary_currency, status, search_keywords, created_at, \
     updated_at";

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct JobRow {
    id: Uuid,
    recruiter_id: Uuid,
    title: String,
    company: String,
    location: String,
    employment_type: EmploymentType,
    workplace_type: WorkplaceType,
    experience_level: ExperienceLevel,
    description: String,
    responsibilities: String,
    requirements: String,
    skills: Json<Vec<JobSkill>>,
    benefits: Vec<String>,
    salary_min: i64,
    salary_max: i64,
    salary_currency: String,
    status: JobStatus,
    search_keywords: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        JobPosting {
            id: row.id,
            recruiter_id: row.recruiter_id,
            title: row.title,
            company: row.company,
            location: row.location,
            employment_type: row.employment_type,
            workplace_type: row.workplace_type,
            experience_level: row.experience_level,
            description: row.description,
            responsibilities: row.responsibilities,
            requirements: row.requirements,
            skills: row.skills.0,
            benefits: row.benefits,
            salary: SalaryRange {
                min: row.salary_min,
                max: row.salary_max,
                currency: row.salary_currency,
            },
            status: row.status,
            search_keywords: row.search_keywords,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn skill_names(draft: &JobDraft) -> Vec<String> {
    draft.skills.iter().map(|s| s.name.clone()).collect()
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn find_page(&self, query: &JobPageQuery) -> Result<Vec<JobPosting>, StoreError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {SELECT_COLUMNS} FROM job_postings WHERE status = "
        ));
        qb.push_bind(query.status);

        if let Some(keyword) = &query.keyword {
            qb.push(" AND ");
            qb.push_bind(keyword);
            qb.push(" = ANY(search_keywords)");
        }
        if let Some(location) = &query.location {
            qb.push(" AND location = ");
            qb.push_bind(location);
        }
        if let Some(employment_type) = query.employment_type {
            qb.push(" AND employment_type = ");
            qb.push_bind(employment_type);
        }
        if let Some(workplace_type) = query.workplace_type {
            qb.push(" AND workplace_type = ");
            qb.push_bind(workplace_type);
        }
        if let Some(experience_level) = query.experience_level {
            qb.push(" AND experience_level = ");
            qb.push_bind(experience_level);
        }
        if let Some(salary_min) = query.salary_min {
            qb.push(" AND salary_min >= ");
            qb.push_bind(salary_min);
        }
        if let Some(salary_max) = query.salary_max {
            qb.push(" AND salary_max <= ");
            qb.push_bind(salary_max);
        }
        if let Some(skills) = &query.skills {
            qb.push(" AND skill_names && ");
            qb.push_bind(skills);
        }
        if let Some(after) = &query.after {
            qb.push(" AND (created_at, id) < (");
            qb.push_bind(after.created_at);
            qb.push(", ");
            qb.push_bind(after.id);
            qb.push(")");
        }

        qb.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        qb.push_bind(i64::from(query.limit));

        let rows: Vec<JobRow> = qb.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<JobPosting>, StoreError> {
        let row: Option<JobRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM job_postings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn insert(
        &self,
        draft: &JobDraft,
        search_keywords: &[String],
    ) -> Result<JobPosting, StoreError> {
        let row: JobRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO job_postings
                (id, recruiter_id, title, company, location, employment_type, workplace_type,
                 experience_level, description, responsibilities, requirements, skills, benefits,
                 salary_min, salary_max, salary_currency, status, search_keywords, skill_names)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                    $18, $19)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(draft.recruiter_id)
        .bind(&draft.title)
        .bind(&draft.company)
        .bind(&draft.location)
        .bind(draft.employment_type)
        .bind(draft.workplace_type)
        .bind(draft.experience_level)
        .bind(&draft.description)
        .bind(&draft.responsibilities)
        .bind(&draft.requirements)
        .bind(Json(&draft.skills))
        .bind(&draft.benefits)
        .bind(draft.salary.min)
        .bind(draft.salary.max)
        .bind(&draft.salary.currency)
        .bind(draft.status.unwrap_or(JobStatus::Active))
        .bind(search_keywords)
        .bind(skill_names(draft))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &JobDraft,
        search_keywords: &[String],
    ) -> Result<JobPosting, StoreError> {
        let row: JobRow = sqlx::query_as(&format!(
            r#"
            UPDATE job_postings SET
                title = $2, company = $3, location = $4, employment_type = $5,
                workplace_type = $6, experience_level = $7, description = $8,
                responsibilities = $9, requirements = $10, skills = $11, benefits = $12,
                salary_min = $13, salary_max = $14, salary_currency = $15,
                search_keywords = $16, skill_names = $17, updated_at = now()
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.company)
        .bind(&draft.location)
        .bind(draft.employment_type)
        .bind(draft.workplace_type)
        .bind(draft.experience_level)
        .bind(&draft.description)
        .bind(&draft.responsibilities)
        .bind(&draft.requirements)
        .bind(Json(&draft.skills))
        .bind(&draft.benefits)
        .bind(draft.salary.min)
        .bind(draft.salary.max)
        .bind(&draft.salary.currency)
        .bind(search_keywords)
        .bind(skill_names(draft))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn set_status(&self, id: Uuid, status: JobStatus) -> Result<JobPosting, StoreError> {
        let row: JobRow = sqlx::query_as(&format!(
            r#"
            UPDATE job_postings SET status = $2, updated_at = now()
            WHERE id = $1
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn recruiter_jobs(&self, recruiter_id: Uuid) -> Result<Vec<JobPosting>, StoreError> {
        let rows: Vec<JobRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM job_postings WHERE recruiter_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(recruiter_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
