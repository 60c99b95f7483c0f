use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("synthesis failed: {0}")]
    Synthesis(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<AppError> for SpeechServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => SpeechServiceError::Invalid(msg),
            AppError::Storage(msg) => SpeechServiceError::Storage(msg),
            other => SpeechServiceError::Synthesis(other.to_string()),
        }
    }
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::Synthesis(msg) => AppError::Synthesis(msg),
            SpeechServiceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}
