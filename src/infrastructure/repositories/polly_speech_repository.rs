use super::speech_repository::SpeechRepository;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, LanguageCode, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly implementation of the speech repository.
/// Inputs are single words or short example sentences, well under Polly's
/// per-request character limit, so no batching is needed.
pub struct PollySpeechRepository {
    polly_client: Arc<PollyClient>,
    voice_id: VoiceId,
}

impl PollySpeechRepository {
    pub fn new(polly_client: Arc<PollyClient>, voice: &str) -> Self {
        Self {
            polly_client,
            voice_id: VoiceId::from(voice),
        }
    }
}

#[async_trait]
impl SpeechRepository for PollySpeechRepository {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice_id = ?self.voice_id,
            engine = "neural",
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(self.voice_id.clone())
            .output_format(OutputFormat::Mp3)
            .engine(Engine::Neural)
            .language_code(LanguageCode::EnUs)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    voice_id = ?self.voice_id,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {:?}", e)
            })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        let audio_bytes = audio_stream.into_bytes().to_vec();

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "polly",
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_bytes.len(),
            "Speech synthesis completed"
        );

        Ok(audio_bytes)
    }
}
