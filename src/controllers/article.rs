use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{
    domain::editorial::{
        AnalyzeRequest, ArticleResponse, DraftResponse, EditorialService, EditorialServiceApi,
        PublishRequest,
    },
    error::{AppError, AppResult},
};

/// Pasted articles larger than this are rejected outright
const MAX_ARTICLE_CHARS: usize = 50_000;
/// Scripts are meant to be ~60 words; this cap keeps them within every
/// provider's single-request limit
const MAX_SCRIPT_CHARS: usize = 10_000;

pub struct ArticleController {
    editorial_service: Arc<EditorialService>,
}

impl ArticleController {
    pub fn new(editorial_service: Arc<EditorialService>) -> Self {
        Self { editorial_service }
    }

    /// POST /api/articles/analyze - Derive a headline/script draft from pasted text
    pub async fn analyze(
        State(controller): State<Arc<ArticleController>>,
        Json(request): Json<AnalyzeRequest>,
    ) -> AppResult<Json<DraftResponse>> {
        if request.text.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Article text cannot be empty".to_string(),
            ));
        }

        if request.text.len() > MAX_ARTICLE_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "Article text must be {} characters or less",
                MAX_ARTICLE_CHARS
            )));
        }

        let draft = controller
            .editorial_service
            .analyze(request.text)
            .await
            .map_err(AppError::from)?;

        Ok(Json(draft))
    }

    /// POST /api/articles/publish - Synthesize a reviewed draft and store the record
    pub async fn publish(
        State(controller): State<Arc<ArticleController>>,
        Json(request): Json<PublishRequest>,
    ) -> AppResult<(StatusCode, Json<ArticleResponse>)> {
        if request.headline.trim().is_empty() {
            return Err(AppError::BadRequest("Headline cannot be empty".to_string()));
        }

        if request.script.trim().is_empty() {
            return Err(AppError::BadRequest("Script cannot be empty".to_string()));
        }

        if request.script.len() > MAX_SCRIPT_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "Script must be {} characters or less",
                MAX_SCRIPT_CHARS
            )));
        }

        let article = controller
            .editorial_service
            .publish(request)
            .await
            .map_err(AppError::from)?;

        Ok((StatusCode::CREATED, Json(ArticleResponse::from(article))))
    }
}
