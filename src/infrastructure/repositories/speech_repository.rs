use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying provider (AWS Polly in production).
///
/// One engine, one voice: the contract assumes English vocabulary text, so
/// implementations own voice selection and output format.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize `text` to MP3 audio bytes.
    ///
    /// `text` is the caller's original text, not the cache key; providers
    /// may be sensitive to punctuation and casing the canonical form drops.
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unavailable.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, String>;
}
