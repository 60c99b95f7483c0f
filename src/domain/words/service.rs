use super::error::WordServiceError;
use crate::domain::learning::LearningRecord;
use crate::infrastructure::repositories::{DefinitionRepository, LearningRecordRepository};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

/// Outcome of one ingest batch. `records` are in input order (first spelling
/// of each distinct word wins); `failures` maps words the definition
/// provider could not handle to a message.
#[derive(Debug)]
pub struct IngestReport {
    pub records: Vec<LearningRecord>,
    pub failures: BTreeMap<String, String>,
}

/// Deduplicates an incoming word batch against existing records, fetches
/// definitions for unseen words and persists them.
pub struct WordService {
    learning_repo: Arc<LearningRecordRepository>,
    definition_repo: Arc<dyn DefinitionRepository>,
    provider_timeout: Duration,
}

impl WordService {
    pub fn new(
        learning_repo: Arc<LearningRecordRepository>,
        definition_repo: Arc<dyn DefinitionRepository>,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            learning_repo,
            definition_repo,
            provider_timeout,
        }
    }
}

#[async_trait]
pub trait WordServiceApi: Send + Sync {
    /// Ingest a raw word batch for one user.
    ///
    /// Known words (an existing record for this user, case-insensitive) are
    /// returned as-is without touching the provider. Unknown words go to the
    /// definition provider in one call; each successful definition is
    /// persisted. A provider failure for some words never aborts the batch —
    /// those words are reported individually in the result.
    async fn ingest(
        &self,
        user_id: &str,
        raw_words: &[String],
    ) -> Result<IngestReport, WordServiceError>;
}

#[async_trait]
impl WordServiceApi for WordService {
    async fn ingest(
        &self,
        user_id: &str,
        raw_words: &[String],
    ) -> Result<IngestReport, WordServiceError> {
        let words = Self::distinct_words(raw_words);
        if words.is_empty() {
            return Err(WordServiceError::Invalid(
                "Please provide at least one word".to_string(),
            ));
        }

        // One read of the user's records partitions the batch into
        // known and unknown.
        let existing = self
            .learning_repo
            .find_by_user(user_id)
            .await
            .map_err(WordServiceError::from)?;
        let known: HashMap<String, LearningRecord> = existing
            .into_iter()
            .map(|r| (r.word.to_lowercase(), r))
            .collect();

        let unknown: Vec<String> = words
            .iter()
            .filter(|w| !known.contains_key(&w.to_lowercase()))
            .cloned()
            .collect();

        tracing::info!(
            user_id = %user_id,
            batch_size = words.len(),
            known = words.len() - unknown.len(),
            unknown = unknown.len(),
            "Ingesting word batch"
        );

        let mut created: HashMap<String, LearningRecord> = HashMap::new();
        let mut failures = BTreeMap::new();

        if !unknown.is_empty() {
            match self.fetch_definitions(&unknown).await {
                Ok(mut definitions) => {
                    for word in &unknown {
                        // Re-associate by word, not by position: the provider
                        // may reorder or drop entries.
                        match definitions.remove(&word.to_lowercase()) {
                            Some(definition) => {
                                let (record, _) = self
                                    .learning_repo
                                    .upsert(user_id, definition)
                                    .await
                                    .map_err(WordServiceError::from)?;
                                created.insert(word.to_lowercase(), record);
                            }
                            None => {
                                failures.insert(
                                    word.clone(),
                                    "no definition returned by provider".to_string(),
                                );
                            }
                        }
                    }
                }
                Err(message) => {
                    // Total provider failure: every unknown word fails, but
                    // known words still succeed below.
                    for word in &unknown {
                        failures.insert(word.clone(), message.clone());
                    }
                }
            }
        }

        let records = words
            .iter()
            .filter_map(|w| {
                let key = w.to_lowercase();
                known.get(&key).or_else(|| created.get(&key)).cloned()
            })
            .collect();

        Ok(IngestReport { records, failures })
    }
}

impl WordService {
    /// Trim, drop empties, dedupe case-insensitively. The first spelling of
    /// a word wins and input order is preserved.
    fn distinct_words(raw_words: &[String]) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        raw_words
            .iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.to_lowercase()))
            .collect()
    }

    /// One provider call for the batch, indexed by lower-cased word.
    async fn fetch_definitions(
        &self,
        words: &[String],
    ) -> Result<HashMap<String, super::WordDefinition>, String> {
        let definitions =
            tokio::time::timeout(self.provider_timeout, self.definition_repo.define(words))
                .await
                .map_err(|_| "definition provider timed out".to_string())??;

        Ok(definitions
            .into_iter()
            .map(|d| (d.word.to_lowercase(), d))
            .collect())
    }
}
