use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    domain::words::{WordDefinition, WordService, WordServiceApi},
    error::{AppError, AppResult},
    infrastructure::config::Config,
};

/// Request for POST /process-words
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessWordsRequest {
    pub words: Vec<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response for POST /process-words. `words` preserves input order;
/// `errors` reports per-word provider failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessWordsResponse {
    pub words: Vec<WordDefinition>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

pub struct WordsController {
    word_service: Arc<WordService>,
    config: Arc<Config>,
}

impl WordsController {
    pub fn new(word_service: Arc<WordService>, config: Arc<Config>) -> Self {
        Self {
            word_service,
            config,
        }
    }

    /// POST /process-words - Enrich a raw word batch with definitions
    pub async fn process_words(
        State(controller): State<Arc<WordsController>>,
        Json(request): Json<ProcessWordsRequest>,
    ) -> AppResult<Json<ProcessWordsResponse>> {
        let user_id = request
            .user_id
            .unwrap_or_else(|| controller.config.default_user_id.clone());

        let report = controller
            .word_service
            .ingest(&user_id, &request.words)
            .await
            .map_err(AppError::from)?;

        Ok(Json(ProcessWordsResponse {
            words: report.records.iter().map(|r| r.definition()).collect(),
            errors: report.failures,
        }))
    }
}
