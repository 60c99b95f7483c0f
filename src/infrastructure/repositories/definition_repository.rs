use crate::domain::words::WordDefinition;
use async_trait::async_trait;

/// Repository for word definition lookup.
/// Abstracts the underlying provider (Amazon Bedrock Claude in production).
#[async_trait]
pub trait DefinitionRepository: Send + Sync {
    /// Produce phonetic/meaning/examples for each requested word.
    ///
    /// One call covers the whole batch. The returned definitions are not
    /// guaranteed to be in request order, and words the provider could not
    /// handle may simply be absent; callers must re-associate results with
    /// the originating word rather than assume positions.
    ///
    /// # Errors
    /// Returns error if the provider call fails outright or its output
    /// cannot be parsed.
    async fn define(&self, words: &[String]) -> Result<Vec<WordDefinition>, String>;
}
