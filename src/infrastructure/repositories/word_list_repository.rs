use crate::domain::wordlists::WordList;
use crate::error::{AppError, AppResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

const LISTS_FILE: &str = "word_lists.json";

/// Embedded durable store of word lists, sibling of the learning record
/// store: lists in memory behind a `RwLock`, full JSON snapshot flushed via
/// temp-file + atomic rename on every mutation, rolled back in memory when
/// the flush fails.
pub struct WordListRepository {
    path: PathBuf,
    lists: RwLock<HashMap<Uuid, WordList>>,
}

impl WordListRepository {
    /// Open the store rooted at `data_dir`, loading any existing snapshot.
    pub async fn open(data_dir: &Path) -> AppResult<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let path = data_dir.join(LISTS_FILE);

        let lists = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let loaded: Vec<WordList> = serde_json::from_slice(&bytes)
                    .map_err(|e| AppError::Storage(format!("corrupt word list store: {}", e)))?;
                loaded.into_iter().map(|l| (l.id, l)).collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %path.display(),
            list_count = lists.len(),
            "Word list store opened"
        );

        Ok(Self {
            path,
            lists: RwLock::new(lists),
        })
    }

    /// Persist a new list. Every save gets its own id; two lists may share
    /// a name.
    pub async fn insert(&self, list: WordList) -> AppResult<WordList> {
        let mut lists = self.lists.write().await;

        let id = list.id;
        lists.insert(id, list.clone());

        if let Err(e) = self.flush(&lists).await {
            lists.remove(&id);
            return Err(e);
        }

        Ok(list)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<WordList>> {
        let lists = self.lists.read().await;
        Ok(lists.get(&id).cloned())
    }

    pub async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<WordList>> {
        let lists = self.lists.read().await;
        Ok(lists
            .values()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn flush(&self, lists: &HashMap<Uuid, WordList>) -> AppResult<()> {
        let snapshot: Vec<&WordList> = lists.values().collect();
        let json =
            serde_json::to_vec_pretty(&snapshot).map_err(|e| AppError::Storage(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}
