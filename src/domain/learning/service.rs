use super::error::LearningServiceError;
use super::model::LearningRecord;
use crate::domain::words::WordDefinition;
use crate::infrastructure::repositories::LearningRecordRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Save/list façade over the learning record store.
pub struct LearningService {
    learning_repo: Arc<LearningRecordRepository>,
}

impl LearningService {
    pub fn new(learning_repo: Arc<LearningRecordRepository>) -> Self {
        Self { learning_repo }
    }
}

#[async_trait]
pub trait LearningServiceApi: Send + Sync {
    /// Persist a definition as a learning record. Saving an already-known
    /// word never duplicates or overwrites the record, but may still add it
    /// to the review list when requested.
    async fn save_record(
        &self,
        user_id: &str,
        definition: WordDefinition,
        add_to_review_list: bool,
    ) -> Result<LearningRecord, LearningServiceError>;

    async fn get_user_records(
        &self,
        user_id: &str,
    ) -> Result<Vec<LearningRecord>, LearningServiceError>;

    /// Toggle review-list membership. Idempotent.
    async fn set_review_membership(
        &self,
        user_id: &str,
        word_id: Uuid,
        in_list: bool,
    ) -> Result<LearningRecord, LearningServiceError>;
}

#[async_trait]
impl LearningServiceApi for LearningService {
    async fn save_record(
        &self,
        user_id: &str,
        definition: WordDefinition,
        add_to_review_list: bool,
    ) -> Result<LearningRecord, LearningServiceError> {
        Self::validate_user_id(user_id)?;
        if definition.word.trim().is_empty() {
            return Err(LearningServiceError::Invalid(
                "Word cannot be empty".to_string(),
            ));
        }

        let (record, created) = self
            .learning_repo
            .upsert(user_id, definition)
            .await
            .map_err(LearningServiceError::from)?;

        tracing::info!(
            user_id = %user_id,
            word = %record.word,
            word_id = %record.word_id,
            created,
            "Learning record saved"
        );

        if add_to_review_list && !record.is_in_review_list {
            return self
                .set_review_membership(user_id, record.word_id, true)
                .await;
        }

        Ok(record)
    }

    async fn get_user_records(
        &self,
        user_id: &str,
    ) -> Result<Vec<LearningRecord>, LearningServiceError> {
        Self::validate_user_id(user_id)?;
        self.learning_repo
            .find_by_user(user_id)
            .await
            .map_err(LearningServiceError::from)
    }

    async fn set_review_membership(
        &self,
        user_id: &str,
        word_id: Uuid,
        in_list: bool,
    ) -> Result<LearningRecord, LearningServiceError> {
        Self::validate_user_id(user_id)?;
        self.learning_repo
            .set_review_membership(user_id, word_id, in_list)
            .await
            .map_err(LearningServiceError::from)?
            .ok_or(LearningServiceError::NotFound)
    }
}

impl LearningService {
    fn validate_user_id(user_id: &str) -> Result<(), LearningServiceError> {
        if user_id.trim().is_empty() {
            return Err(LearningServiceError::Invalid(
                "userId cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
