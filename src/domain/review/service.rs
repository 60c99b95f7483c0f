use crate::domain::learning::{LearningRecord, LearningServiceError};
use crate::infrastructure::repositories::LearningRecordRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Stateless façade deriving the review queue from the record store.
///
/// Eligibility is review-list membership alone; there is no time-based
/// due-date algorithm in this contract.
pub struct ReviewService {
    learning_repo: Arc<LearningRecordRepository>,
}

impl ReviewService {
    pub fn new(learning_repo: Arc<LearningRecordRepository>) -> Self {
        Self { learning_repo }
    }
}

#[async_trait]
pub trait ReviewServiceApi: Send + Sync {
    /// The user's records currently flagged for review.
    async fn due_for_review(
        &self,
        user_id: &str,
    ) -> Result<Vec<LearningRecord>, LearningServiceError>;

    /// Record one review event: increments the count and stamps the time,
    /// atomically with respect to concurrent reviews of the same record.
    async fn mark_reviewed(
        &self,
        user_id: &str,
        word_id: Uuid,
    ) -> Result<LearningRecord, LearningServiceError>;
}

#[async_trait]
impl ReviewServiceApi for ReviewService {
    async fn due_for_review(
        &self,
        user_id: &str,
    ) -> Result<Vec<LearningRecord>, LearningServiceError> {
        if user_id.trim().is_empty() {
            return Err(LearningServiceError::Invalid(
                "userId cannot be empty".to_string(),
            ));
        }
        self.learning_repo
            .find_review_list(user_id)
            .await
            .map_err(LearningServiceError::from)
    }

    async fn mark_reviewed(
        &self,
        user_id: &str,
        word_id: Uuid,
    ) -> Result<LearningRecord, LearningServiceError> {
        let record = self
            .learning_repo
            .record_review(user_id, word_id)
            .await
            .map_err(LearningServiceError::from)?
            .ok_or(LearningServiceError::NotFound)?;

        tracing::info!(
            user_id = %user_id,
            word_id = %word_id,
            review_count = record.review_count,
            "Review recorded"
        );

        Ok(record)
    }
}
