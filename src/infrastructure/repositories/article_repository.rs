use crate::infrastructure::db::DbPool;
use crate::{
    domain::editorial::Article,
    error::AppResult,
};
use std::sync::Arc;

/// Insert-only store for published article records.
/// There is no update or delete path; a published record is final.
pub struct ArticleRepository {
    pool: Arc<DbPool>,
}

impl ArticleRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Insert a published article record
    pub async fn insert(&self, article: &Article) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO articles (
                id, headline, summary, category, audio_url,
                duration_seconds, is_breaking, is_crisis, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(article.id)
        .bind(&article.headline)
        .bind(&article.summary)
        .bind(&article.category)
        .bind(&article.audio_url)
        .bind(article.duration_seconds)
        .bind(article.is_breaking)
        .bind(article.is_crisis)
        .bind(article.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }
}
