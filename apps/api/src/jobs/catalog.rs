//! Reference collections backing the posting form: the skill and benefit
//! pick-lists.

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SkillRef {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BenefitRef {
    pub id: Uuid,
    pub label: String,
}

pub async fn list_skills(pool: &PgPool) -> Result<Vec<SkillRef>, AppError> {
    Ok(
        sqlx::query_as("SELECT id, name, category FROM skill_catalog ORDER BY name")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn list_benefits(pool: &PgPool) -> Result<Vec<BenefitRef>, AppError> {
    Ok(
        sqlx::query_as("SELECT id, label FROM benefit_catalog ORDER BY label")
            .fetch_all(pool)
            .await?,
    )
}
