use crate::error::AppResult;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Cache statistics computed over the current entry set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub file_count: u64,
    pub total_size_bytes: u64,
    pub oldest_entry_time: Option<DateTime<Utc>>,
    pub newest_entry_time: Option<DateTime<Utc>>,
}

/// Disk-backed audio cache: canonical text key -> synthesized MP3 bytes.
///
/// The cache key is the canonical string itself; the md5 digest in the file
/// name is only a filesystem-safe rendering of it, so texts that normalize
/// to the same key share one entry. Entries are written once and never
/// mutated; the only removal path is `clear_all`.
pub struct AudioCacheRepository {
    cache_dir: PathBuf,
}

impl AudioCacheRepository {
    /// Open the cache rooted at `cache_dir`, creating the directory if needed.
    pub async fn open(cache_dir: &Path) -> AppResult<Self> {
        tokio::fs::create_dir_all(cache_dir).await?;
        tracing::info!(cache_dir = %cache_dir.display(), "Audio cache opened");
        Ok(Self {
            cache_dir: cache_dir.to_path_buf(),
        })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let digest = md5::compute(key.as_bytes());
        self.cache_dir.join(format!("{:x}.mp3", digest))
    }

    /// Store audio bytes under `key`, overwriting any existing entry.
    /// Writes go to a unique temp file first and land via atomic rename, so
    /// a concurrent `get` never observes a partially written entry and
    /// concurrent writers for the same key settle last-write-wins.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> AppResult<()> {
        let path = self.entry_path(key);
        let tmp_path = self
            .cache_dir
            .join(format!(".{}.tmp", Uuid::new_v4()));

        tokio::fs::write(&tmp_path, bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        tracing::debug!(key, size = bytes.len(), "Audio cached");
        Ok(())
    }

    /// Pure lookup, no side effects.
    pub async fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        match tokio::fs::read(self.entry_path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Compute stats over the current entry set. Timestamps are absent when
    /// the cache is empty.
    pub async fn stats(&self) -> AppResult<CacheStats> {
        let mut file_count = 0u64;
        let mut total_size_bytes = 0u64;
        let mut oldest: Option<DateTime<Utc>> = None;
        let mut newest: Option<DateTime<Utc>> = None;

        let mut entries = tokio::fs::read_dir(&self.cache_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.path().extension().and_then(|e| e.to_str()) != Some("mp3") {
                continue;
            }
            let metadata = entry.metadata().await?;
            file_count += 1;
            total_size_bytes += metadata.len();

            let modified: DateTime<Utc> = metadata.modified()?.into();
            oldest = Some(oldest.map_or(modified, |t| t.min(modified)));
            newest = Some(newest.map_or(modified, |t| t.max(modified)));
        }

        Ok(CacheStats {
            file_count,
            total_size_bytes,
            oldest_entry_time: oldest,
            newest_entry_time: newest,
        })
    }

    /// Remove every entry unconditionally; returns the count removed.
    pub async fn clear_all(&self) -> AppResult<u64> {
        let mut removed = 0u64;

        let mut entries = tokio::fs::read_dir(&self.cache_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.path().extension().and_then(|e| e.to_str()) != Some("mp3") {
                continue;
            }
            tokio::fs::remove_file(entry.path()).await?;
            removed += 1;
        }

        tracing::info!(removed, "Audio cache cleared");
        Ok(removed)
    }
}
