use crate::domain::words::{ExampleSentence, WordDefinition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-(user, word) learning record. `word`, `phonetic`, `meaning` and
/// `examples` are immutable after creation; re-saving a known word never
/// overwrites them. Uniqueness: (`user_id`, lower-cased `word`); the stored
/// word is always trimmed so padded input cannot sidestep the check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecord {
    pub word_id: Uuid,
    pub user_id: String,
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
    pub examples: Vec<ExampleSentence>,
    pub review_count: u32,
    pub last_reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub is_in_review_list: bool,
}

impl LearningRecord {
    pub fn new(user_id: &str, definition: WordDefinition) -> Self {
        Self {
            word_id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            word: definition.word.trim().to_string(),
            phonetic: definition.phonetic,
            meaning: definition.meaning,
            examples: definition.examples,
            review_count: 0,
            last_reviewed_at: None,
            created_at: Utc::now(),
            is_in_review_list: false,
        }
    }

    /// The definition part of the record, as the provider shaped it.
    pub fn definition(&self) -> WordDefinition {
        WordDefinition {
            word: self.word.clone(),
            phonetic: self.phonetic.clone(),
            meaning: self.meaning.clone(),
            examples: self.examples.clone(),
        }
    }
}
