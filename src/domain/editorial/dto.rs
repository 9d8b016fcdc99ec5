use super::model::{Article, Category};
use super::normalizer::ParsePath;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request for POST /api/articles/analyze
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Draft returned from analyze. The caller reviews (and may edit) it, then
/// threads the result into a publish request; the server keeps no session
/// state between the two actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftResponse {
    pub headline: String,
    pub script: String,
    pub parse_path: ParsePath,
    pub estimated_duration_seconds: i32,
}

/// Request for POST /api/articles/publish
#[derive(Debug, Serialize, Deserialize)]
pub struct PublishRequest {
    pub headline: String,
    pub script: String,
    pub category: Category,
    #[serde(default)]
    pub is_breaking: bool,
    #[serde(default)]
    pub is_crisis: bool,
}

/// Stored record returned from publish
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: Uuid,
    pub headline: String,
    pub summary: String,
    pub category: String,
    pub audio_url: String,
    pub duration_seconds: Option<i32>,
    pub is_breaking: bool,
    pub is_crisis: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            headline: article.headline,
            summary: article.summary,
            category: article.category,
            audio_url: article.audio_url,
            duration_seconds: article.duration_seconds,
            is_breaking: article.is_breaking,
            is_crisis: article.is_crisis,
            created_at: article.created_at,
        }
    }
}
