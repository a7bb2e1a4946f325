//! Profile access behind an explicit, constructor-injected provider. The
//! provider is built once at startup and carried in `AppState`. There is
//! no module-level singleton and no import-time initialization.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{ProfileDocument, ProfileSnapshot, User};
use crate::store::StoreError;

#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Loads the scoring snapshot for a user. An unknown user yields `None`;
    /// a user without a stored document yields a snapshot built from the
    /// user record alone.
    async fn load(&self, user_id: Uuid) -> Result<Option<ProfileSnapshot>, StoreError>;

    /// Replaces the user's profile document.
    async fn save(&self, user_id: Uuid, document: &ProfileDocument) -> Result<(), StoreError>;
}

pub struct PgProfileProvider {
    pool: PgPool,
}

impl PgProfileProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileProvider for PgProfileProvider {
    async fn load(&self, user_id: Uuid) -> Result<Option<ProfileSnapshot>, StoreError> {
        let user: Option<User> = sqlx::query_as(
            "SELECT id, email, name, role, phone, city, country, company, company_size, \
             industry, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        let Some(user) = user else {
            return Ok(None);
        };

        let document: Option<sqlx::types::Json<ProfileDocument>> =
            sqlx::query_scalar("SELECT document FROM profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        let document = document.map(|d| d.0).unwrap_or_default();

        Ok(Some(ProfileSnapshot::assemble(&user, &document)))
    }

    async fn save(&self, user_id: Uuid, document: &ProfileDocument) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, document, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (user_id) DO UPDATE SET document = $2, updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(sqlx::types::Json(document))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
