use axum::{extract::State, Json};
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    domain::speech::{SpeechService, SpeechServiceApi},
    error::{AppError, AppResult},
    infrastructure::repositories::AudioCacheRepository,
};

/// Request for POST /generate-speech
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
}

/// Response for POST /generate-speech
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    pub audio: String,
    pub format: String,
    pub cached: bool,
}

/// Response for GET /cache-stats
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStatsResponse {
    pub cache_dir: String,
    pub file_count: u64,
    pub total_size_bytes: u64,
    pub total_size_mb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_file_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_file_time: Option<DateTime<Utc>>,
}

/// Response for DELETE /clear-cache
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    pub message: String,
    pub removed_count: u64,
}

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
    audio_cache: Arc<AudioCacheRepository>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>, audio_cache: Arc<AudioCacheRepository>) -> Self {
        Self {
            speech_service,
            audio_cache,
        }
    }

    /// POST /generate-speech - Synthesize text, serving repeats from cache
    pub async fn generate_speech(
        State(controller): State<Arc<SpeechController>>,
        Json(request): Json<SpeechRequest>,
    ) -> AppResult<Json<SpeechResponse>> {
        let result = controller
            .speech_service
            .synthesize(&request.text)
            .await
            .map_err(AppError::from)?;

        Ok(Json(SpeechResponse {
            audio: base64::engine::general_purpose::STANDARD.encode(&result.audio_data),
            format: "mp3".to_string(),
            cached: result.cached,
        }))
    }

    /// GET /test-speech - Diagnostic probe, no provider call
    pub async fn test_speech() -> Json<Value> {
        Json(json!({
            "audio": "test_audio_base64_string",
            "format": "mp3",
            "message": "This is a test response to verify the API is working"
        }))
    }

    /// GET /cache-stats - Audio cache statistics
    pub async fn cache_stats(
        State(controller): State<Arc<SpeechController>>,
    ) -> AppResult<Json<CacheStatsResponse>> {
        let stats = controller.audio_cache.stats().await?;

        let total_size_mb =
            (stats.total_size_bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0;

        Ok(Json(CacheStatsResponse {
            cache_dir: controller.audio_cache.cache_dir().display().to_string(),
            file_count: stats.file_count,
            total_size_bytes: stats.total_size_bytes,
            total_size_mb,
            oldest_file_time: stats.oldest_entry_time,
            newest_file_time: stats.newest_entry_time,
        }))
    }

    /// DELETE /clear-cache - Remove every cached audio entry
    pub async fn clear_cache(
        State(controller): State<Arc<SpeechController>>,
    ) -> AppResult<Json<ClearCacheResponse>> {
        let removed_count = controller.audio_cache.clear_all().await?;

        Ok(Json(ClearCacheResponse {
            message: format!("Cleared {} files from cache", removed_count),
            removed_count,
        }))
    }
}
