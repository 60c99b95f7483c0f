use super::error::WordListServiceError;
use super::model::WordList;
use crate::domain::words::WordDefinition;
use crate::infrastructure::repositories::WordListRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Save/list façade over the word list store.
pub struct WordListService {
    word_list_repo: Arc<WordListRepository>,
}

impl WordListService {
    pub fn new(word_list_repo: Arc<WordListRepository>) -> Self {
        Self { word_list_repo }
    }
}

#[async_trait]
pub trait WordListServiceApi: Send + Sync {
    /// Persist a new named list. Every call creates a fresh list; names are
    /// labels, not keys.
    async fn create_list(
        &self,
        user_id: &str,
        name: &str,
        words: Vec<WordDefinition>,
    ) -> Result<WordList, WordListServiceError>;

    async fn get_user_lists(&self, user_id: &str) -> Result<Vec<WordList>, WordListServiceError>;

    /// Fetch one list by id, any owner.
    async fn get_list(&self, list_id: Uuid) -> Result<WordList, WordListServiceError>;
}

#[async_trait]
impl WordListServiceApi for WordListService {
    async fn create_list(
        &self,
        user_id: &str,
        name: &str,
        words: Vec<WordDefinition>,
    ) -> Result<WordList, WordListServiceError> {
        Self::validate_user_id(user_id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(WordListServiceError::Invalid(
                "List name cannot be empty".to_string(),
            ));
        }

        let list = self
            .word_list_repo
            .insert(WordList::new(user_id, name.to_string(), words))
            .await
            .map_err(WordListServiceError::from)?;

        tracing::info!(
            user_id = %user_id,
            list_id = %list.id,
            name = %list.name,
            word_count = list.words.len(),
            "Word list saved"
        );

        Ok(list)
    }

    async fn get_user_lists(&self, user_id: &str) -> Result<Vec<WordList>, WordListServiceError> {
        Self::validate_user_id(user_id)?;
        self.word_list_repo
            .find_by_user(user_id)
            .await
            .map_err(WordListServiceError::from)
    }

    async fn get_list(&self, list_id: Uuid) -> Result<WordList, WordListServiceError> {
        self.word_list_repo
            .find_by_id(list_id)
            .await
            .map_err(WordListServiceError::from)?
            .ok_or(WordListServiceError::NotFound)
    }
}

impl WordListService {
    fn validate_user_id(user_id: &str) -> Result<(), WordListServiceError> {
        if user_id.trim().is_empty() {
            return Err(WordListServiceError::Invalid(
                "userId cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
