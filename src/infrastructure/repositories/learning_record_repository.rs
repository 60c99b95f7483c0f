use crate::domain::learning::LearningRecord;
use crate::domain::words::WordDefinition;
use crate::error::{AppError, AppResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

const RECORDS_FILE: &str = "learning_records.json";

/// Embedded durable store of learning records.
///
/// Records live in memory behind a single `RwLock`; every mutation runs as
/// one read-modify-write under the write lock, so concurrent review
/// increments cannot lose updates. Durability comes from flushing the full
/// record set to a JSON file via temp-file + atomic rename on each mutation;
/// a failed flush rolls the in-memory change back, so the store never holds
/// a half-applied mutation.
pub struct LearningRecordRepository {
    path: PathBuf,
    records: RwLock<HashMap<Uuid, LearningRecord>>,
}

impl LearningRecordRepository {
    /// Open the store rooted at `data_dir`, loading any existing snapshot.
    pub async fn open(data_dir: &Path) -> AppResult<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let path = data_dir.join(RECORDS_FILE);

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let loaded: Vec<LearningRecord> = serde_json::from_slice(&bytes)
                    .map_err(|e| AppError::Storage(format!("corrupt record store: {}", e)))?;
                loaded.into_iter().map(|r| (r.word_id, r)).collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %path.display(),
            record_count = records.len(),
            "Learning record store opened"
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Return the existing record for (`user_id`, case-insensitive word),
    /// or create a new one from `definition`. The bool is true on creation.
    pub async fn upsert(
        &self,
        user_id: &str,
        definition: WordDefinition,
    ) -> AppResult<(LearningRecord, bool)> {
        let mut records = self.records.write().await;

        let word_lower = definition.word.trim().to_lowercase();
        if let Some(existing) = records
            .values()
            .find(|r| r.user_id == user_id && r.word.to_lowercase() == word_lower)
        {
            // Fields are immutable post-creation; re-ingestion is a no-op.
            return Ok((existing.clone(), false));
        }

        let record = LearningRecord::new(user_id, definition);
        let word_id = record.word_id;
        records.insert(word_id, record.clone());

        if let Err(e) = self.flush(&records).await {
            records.remove(&word_id);
            return Err(e);
        }

        Ok((record, true))
    }

    pub async fn find_by_id(
        &self,
        user_id: &str,
        word_id: Uuid,
    ) -> AppResult<Option<LearningRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&word_id)
            .filter(|r| r.user_id == user_id)
            .cloned())
    }

    pub async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<LearningRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    pub async fn find_review_list(&self, user_id: &str) -> AppResult<Vec<LearningRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.user_id == user_id && r.is_in_review_list)
            .cloned()
            .collect())
    }

    /// Set review-list membership. Idempotent: setting the current value
    /// skips the flush and returns the record as-is. `Ok(None)` when the
    /// record does not exist or belongs to another user.
    pub async fn set_review_membership(
        &self,
        user_id: &str,
        word_id: Uuid,
        in_list: bool,
    ) -> AppResult<Option<LearningRecord>> {
        let mut records = self.records.write().await;

        let Some(record) = records.get_mut(&word_id).filter(|r| r.user_id == user_id) else {
            return Ok(None);
        };

        if record.is_in_review_list == in_list {
            return Ok(Some(record.clone()));
        }

        let previous = record.clone();
        record.is_in_review_list = in_list;
        let updated = record.clone();

        if let Err(e) = self.flush(&records).await {
            records.insert(word_id, previous);
            return Err(e);
        }

        Ok(Some(updated))
    }

    /// Atomically increment `review_count` and stamp `last_reviewed_at`.
    /// `Ok(None)` when the record does not exist or belongs to another user.
    pub async fn record_review(
        &self,
        user_id: &str,
        word_id: Uuid,
    ) -> AppResult<Option<LearningRecord>> {
        let mut records = self.records.write().await;

        let Some(record) = records.get_mut(&word_id).filter(|r| r.user_id == user_id) else {
            return Ok(None);
        };

        let previous = record.clone();
        record.review_count += 1;
        record.last_reviewed_at = Some(chrono::Utc::now());
        let updated = record.clone();

        if let Err(e) = self.flush(&records).await {
            records.insert(word_id, previous);
            return Err(e);
        }

        Ok(Some(updated))
    }

    /// Write the full record set to disk. Temp file + rename keeps the
    /// snapshot atomic with respect to a crash mid-write.
    async fn flush(&self, records: &HashMap<Uuid, LearningRecord>) -> AppResult<()> {
        let snapshot: Vec<&LearningRecord> = records.values().collect();
        let json = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}
