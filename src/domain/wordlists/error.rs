use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum WordListServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("word list not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<AppError> for WordListServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => WordListServiceError::Invalid(msg),
            AppError::NotFound(_) => WordListServiceError::NotFound,
            other => WordListServiceError::Storage(other.to_string()),
        }
    }
}

impl From<WordListServiceError> for AppError {
    fn from(err: WordListServiceError) -> Self {
        match err {
            WordListServiceError::Invalid(msg) => AppError::BadRequest(msg),
            WordListServiceError::NotFound => AppError::NotFound("Word list not found".to_string()),
            WordListServiceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
