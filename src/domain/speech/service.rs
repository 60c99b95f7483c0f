use super::error::SpeechServiceError;
use crate::infrastructure::repositories::{AudioCacheRepository, SpeechRepository};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SpeechSynthesisResult {
    pub audio_data: Vec<u8>,
    pub cached: bool,
}

/// Orchestrates cache lookup and write-through synthesis.
pub struct SpeechService {
    audio_cache: Arc<AudioCacheRepository>,
    speech_repo: Arc<dyn SpeechRepository>,
    provider_timeout: Duration,
    whitespace: regex::Regex,
}

impl SpeechService {
    pub fn new(
        audio_cache: Arc<AudioCacheRepository>,
        speech_repo: Arc<dyn SpeechRepository>,
        provider_timeout: Duration,
    ) -> Self {
        Self {
            audio_cache,
            speech_repo,
            provider_timeout,
            whitespace: regex::Regex::new(r"\s+").unwrap(),
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize text to speech through the disk cache.
    ///
    /// This operation:
    /// - Rejects empty or whitespace-only text
    /// - Returns the cached audio when the canonical key is already known
    /// - On miss, calls the provider with the original text and writes the
    ///   result through to the cache before returning it
    ///
    /// Provider failures are never written to the cache, so a later retry
    /// re-attempts synthesis instead of serving a poisoned entry.
    async fn synthesize(&self, text: &str) -> Result<SpeechSynthesisResult, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(&self, text: &str) -> Result<SpeechSynthesisResult, SpeechServiceError> {
        if text.trim().is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        let key = self.canonical_key(text);

        if let Some(audio_data) = self
            .audio_cache
            .get(&key)
            .await
            .map_err(SpeechServiceError::from)?
        {
            tracing::info!(
                key = %key,
                audio_size = audio_data.len(),
                "Speech cache hit"
            );
            return Ok(SpeechSynthesisResult {
                audio_data,
                cached: true,
            });
        }

        tracing::info!(key = %key, text_length = text.len(), "Speech cache miss");

        // The provider sees the original text; canonicalization exists only
        // to key the cache.
        let audio_data =
            tokio::time::timeout(self.provider_timeout, self.speech_repo.synthesize(text))
                .await
                .map_err(|_| {
                    SpeechServiceError::Synthesis("synthesis provider timed out".to_string())
                })?
                .map_err(SpeechServiceError::Synthesis)?;

        self.audio_cache
            .put(&key, &audio_data)
            .await
            .map_err(SpeechServiceError::from)?;

        Ok(SpeechSynthesisResult {
            audio_data,
            cached: false,
        })
    }
}

impl SpeechService {
    /// Canonical cache key: trimmed, internal whitespace collapsed,
    /// case preserved.
    fn canonical_key(&self, text: &str) -> String {
        self.whitespace.replace_all(text.trim(), " ").to_string()
    }
}
