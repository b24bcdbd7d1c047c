use crate::domain::{models::feature::FeatureFlag, ports::FeatureFlagRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresFeatureRepo {
    pool: PgPool,
}

impl PostgresFeatureRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeatureFlagRepository for PostgresFeatureRepo {
    async fn find(&self, slug: &str) -> Result<Option<FeatureFlag>, AppError> {
        sqlx::query_as::<_, FeatureFlag>("SELECT * FROM features WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn upsert(&self, flag: &FeatureFlag) -> Result<FeatureFlag, AppError> {
        sqlx::query_as::<_, FeatureFlag>(
            "INSERT INTO features (slug, enabled, description, updated_at) VALUES ($1, $2, $3, $4)
             ON CONFLICT(slug) DO UPDATE SET enabled = excluded.enabled,
                description = COALESCE(excluded.description, features.description),
                updated_at = excluded.updated_at
             RETURNING *"
        )
            .bind(&flag.slug)
            .bind(flag.enabled)
            .bind(&flag.description)
            .bind(flag.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<FeatureFlag>, AppError> {
        sqlx::query_as::<_, FeatureFlag>("SELECT * FROM features ORDER BY slug ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
