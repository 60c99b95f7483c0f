use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum WordServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("definition lookup failed: {0}")]
    Definition(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<AppError> for WordServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => WordServiceError::Invalid(msg),
            AppError::Storage(msg) => WordServiceError::Storage(msg),
            other => WordServiceError::Definition(other.to_string()),
        }
    }
}

impl From<WordServiceError> for AppError {
    fn from(err: WordServiceError) -> Self {
        match err {
            WordServiceError::Invalid(msg) => AppError::BadRequest(msg),
            WordServiceError::Definition(msg) => AppError::Definition(msg),
            WordServiceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
