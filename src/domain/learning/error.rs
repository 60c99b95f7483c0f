use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum LearningServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("learning record not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<AppError> for LearningServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => LearningServiceError::Invalid(msg),
            AppError::NotFound(_) => LearningServiceError::NotFound,
            other => LearningServiceError::Storage(other.to_string()),
        }
    }
}

impl From<LearningServiceError> for AppError {
    fn from(err: LearningServiceError) -> Self {
        match err {
            LearningServiceError::Invalid(msg) => AppError::BadRequest(msg),
            LearningServiceError::NotFound => {
                AppError::NotFound("Learning record not found".to_string())
            }
            LearningServiceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
