use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum EditorialServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("unparseable model output: {0}")]
    Unparseable(String),
}

impl From<AppError> for EditorialServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => EditorialServiceError::Invalid(msg),
            AppError::Unprocessable(raw) => EditorialServiceError::Unparseable(raw),
            _ => EditorialServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<EditorialServiceError> for AppError {
    fn from(err: EditorialServiceError) -> Self {
        match err {
            EditorialServiceError::Invalid(msg) => AppError::BadRequest(msg),
            EditorialServiceError::Unparseable(raw) => AppError::Unprocessable(raw),
            EditorialServiceError::Dependency(msg) => AppError::ExternalService(msg),
        }
    }
}
