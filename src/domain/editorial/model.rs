use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A published article record. Insert-only; rows are never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
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

/// Fixed bucket tags attached to published records for downstream filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Markets,
    Politics,
    Sports,
    Global,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Markets => "Markets",
            Category::Politics => "Politics",
            Category::Sports => "Sports",
            Category::Global => "Global",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
