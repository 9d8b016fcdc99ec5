use super::dto::{DraftResponse, PublishRequest};
use super::duration::estimate_duration_seconds;
use super::error::EditorialServiceError;
use super::model::Article;
use super::normalizer::{normalize, ParsePath};
use crate::infrastructure::repositories::{
    ArticleRepository, GenerationRepository, StorageRepository, TtsRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use html2text::from_read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

pub struct EditorialService {
    generation_repo: Arc<dyn GenerationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    storage_repo: Arc<dyn StorageRepository>,
    article_repo: Arc<ArticleRepository>,
    voice: Option<String>,
    audio_workdir: PathBuf,
}

impl EditorialService {
    pub fn new(
        generation_repo: Arc<dyn GenerationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        storage_repo: Arc<dyn StorageRepository>,
        article_repo: Arc<ArticleRepository>,
        voice: Option<String>,
        audio_workdir: PathBuf,
    ) -> Self {
        Self {
            generation_repo,
            tts_repo,
            storage_repo,
            article_repo,
            voice,
            audio_workdir,
        }
    }
}

#[async_trait]
pub trait EditorialServiceApi: Send + Sync {
    /// Turn pasted article text into a reviewed draft
    ///
    /// This operation:
    /// - Cleans the pasted text (strips HTML, URLs, normalizes whitespace)
    /// - Asks the generation collaborator for a headline|script pair
    /// - Normalizes the raw response (delimiter split with line fallback)
    ///
    /// Returns the draft with an estimated playback duration. The raw
    /// generation output is discarded after normalization; a parse failure
    /// surfaces the raw text and nothing is retried.
    async fn analyze(&self, text: String) -> Result<DraftResponse, EditorialServiceError>;

    /// Synthesize a reviewed draft and store the published record
    ///
    /// This operation:
    /// - Synthesizes the script through the configured TTS collaborator
    /// - Stages the audio as a local `news_{unix_timestamp}.mp3` file
    /// - Uploads it to object storage and inserts the metadata row
    ///
    /// The staged file is removed whether the upload/insert chain succeeds
    /// or not. A failed step aborts the action; nothing is retried.
    async fn publish(&self, request: PublishRequest) -> Result<Article, EditorialServiceError>;
}

#[async_trait]
impl EditorialServiceApi for EditorialService {
    async fn analyze(&self, text: String) -> Result<DraftResponse, EditorialServiceError> {
        if text.trim().is_empty() {
            return Err(EditorialServiceError::Invalid(
                "Article text cannot be empty".to_string(),
            ));
        }

        // 1. Clean the pasted text (remove HTML, URLs, normalize whitespace)
        let cleaned_text = clean_article_text(&text);

        tracing::info!(
            original_length = text.len(),
            cleaned_length = cleaned_text.len(),
            "Article text cleaned"
        );

        // 2. Ask the generation collaborator for a headline|script pair
        let prompt = build_prompt(&cleaned_text);
        let raw = self
            .generation_repo
            .generate(&prompt)
            .await
            .map_err(EditorialServiceError::Dependency)?;

        // 3. Normalize the raw response
        let result = normalize(&raw).map_err(|e| EditorialServiceError::Unparseable(e.raw))?;

        match result.path {
            ParsePath::Delimiter => tracing::info!(
                parse_path = %result.path,
                headline_length = result.headline.len(),
                script_length = result.script.len(),
                "Analysis complete"
            ),
            ParsePath::Lines => tracing::warn!(
                parse_path = %result.path,
                headline_length = result.headline.len(),
                script_length = result.script.len(),
                "Generation output missed the delimiter format, line fallback used"
            ),
        }

        let estimated_duration_seconds = estimate_duration_seconds(&result.script);

        Ok(DraftResponse {
            headline: result.headline,
            script: result.script,
            parse_path: result.path,
            estimated_duration_seconds,
        })
    }

    async fn publish(&self, request: PublishRequest) -> Result<Article, EditorialServiceError> {
        if request.headline.trim().is_empty() {
            return Err(EditorialServiceError::Invalid(
                "Headline cannot be empty".to_string(),
            ));
        }
        if request.script.trim().is_empty() {
            return Err(EditorialServiceError::Invalid(
                "Script cannot be empty".to_string(),
            ));
        }

        tracing::info!(
            headline = %request.headline,
            category = %request.category,
            script_length = request.script.len(),
            "Publishing article"
        );

        // 1. Synthesize the script
        let audio_data = self
            .tts_repo
            .synthesize(&request.script, self.voice.as_deref())
            .await
            .map_err(EditorialServiceError::Dependency)?;

        // 2. Stage the audio locally. Second-resolution timestamps mean rapid
        // repeated publishes can collide on the filename; accepted risk.
        let filename = format!("news_{}.mp3", Utc::now().timestamp());
        let file_path = self.audio_workdir.join(&filename);

        tokio::fs::write(&file_path, &audio_data)
            .await
            .map_err(|e| {
                EditorialServiceError::Dependency(format!(
                    "Failed to write temporary audio file: {}",
                    e
                ))
            })?;

        // 3. Upload and insert; the staged file is removed on both outcomes
        let outcome = self.upload_and_insert(&filename, &file_path, &request).await;

        if let Err(e) = tokio::fs::remove_file(&file_path).await {
            tracing::warn!(
                error = %e,
                path = %file_path.display(),
                "Failed to remove temporary audio file"
            );
        }

        let article = outcome?;

        tracing::info!(
            article_id = %article.id,
            audio_url = %article.audio_url,
            "Article published"
        );

        Ok(article)
    }
}

impl EditorialService {
    async fn upload_and_insert(
        &self,
        filename: &str,
        file_path: &Path,
        request: &PublishRequest,
    ) -> Result<Article, EditorialServiceError> {
        // Read the staged file back and upload it
        let file_data = tokio::fs::read(file_path).await.map_err(|e| {
            EditorialServiceError::Dependency(format!("Failed to read temporary audio file: {}", e))
        })?;

        self.storage_repo
            .upload(filename, file_data, AUDIO_CONTENT_TYPE)
            .await
            .map_err(EditorialServiceError::Dependency)?;

        let audio_url = self.storage_repo.public_url(filename);

        let article = Article {
            id: Uuid::new_v4(),
            headline: request.headline.trim().to_string(),
            summary: request.script.trim().to_string(),
            category: request.category.as_str().to_string(),
            audio_url,
            duration_seconds: Some(estimate_duration_seconds(&request.script)),
            is_breaking: request.is_breaking,
            is_crisis: request.is_crisis,
            created_at: Utc::now(),
        };

        self.article_repo
            .insert(&article)
            .await
            .map_err(|e| EditorialServiceError::Dependency(e.to_string()))?;

        Ok(article)
    }
}

/// Clean pasted article text by removing HTML tags, URLs and normalizing
/// whitespace before it goes into the prompt
fn clean_article_text(text: &str) -> String {
    // Convert HTML to plain text
    let plain_text = from_read(text.as_bytes(), usize::MAX);

    // Remove URLs (both http and https)
    let url_pattern = regex::Regex::new(r"https?://[^\s]+").unwrap();
    let without_urls = url_pattern.replace_all(&plain_text, "");

    // Normalize whitespace (replace multiple spaces/newlines with single space)
    let whitespace_pattern = regex::Regex::new(r"\s+").unwrap();
    let normalized = whitespace_pattern.replace_all(&without_urls, " ");

    normalized.trim().to_string()
}

/// Strict prompt: the pipe format is what the normalizer's primary path
/// expects, and the no-markdown instruction is what its cleanup rule
/// compensates for when ignored
fn build_prompt(article_text: &str) -> String {
    format!(
        "You are a news editor system.\n\
         Task:\n\
         1. Write a punchy headline (max 8 words).\n\
         2. Write a short audio script (max 60 words).\n\
         \n\
         Input Text: {article_text}\n\
         \n\
         CRITICAL INSTRUCTION:\n\
         Return ONLY the headline and script separated by a vertical pipe symbol (|).\n\
         Do not use bolding, markdown, or labels like \"Headline:\".\n\
         \n\
         Format example:\n\
         Bitcoin hits 100k | Bitcoin has reached a new all time high today..."
    )
}
