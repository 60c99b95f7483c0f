use crate::domain::words::WordDefinition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, user-curated collection of word definitions. Lists are snapshots:
/// saving the same name twice creates two lists rather than merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordList {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub words: Vec<WordDefinition>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WordList {
    pub fn new(user_id: &str, name: String, words: Vec<WordDefinition>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            name,
            words,
            created_at: now,
            updated_at: now,
        }
    }
}
