use serde::{Deserialize, Serialize};

/// Bilingual example sentence. The English side carries the target word
/// wrapped in **bold** markers, as produced by the definition provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub en: String,
    pub zh: String,
}

/// The unit produced by the definition provider for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub word: String,
    pub phonetic: String,
    pub meaning: String,
    pub examples: Vec<ExampleSentence>,
}
