use super::definition_repository::DefinitionRepository;
use crate::domain::words::WordDefinition;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{primitives::Blob, Client as BedrockClient};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Amazon Bedrock (Claude) implementation of the definition repository.
/// Sends one prompt covering the whole word batch and expects strict JSON
/// back: `{"words": [{word, phonetic, meaning, examples: [{en, zh}]}]}`.
pub struct BedrockDefinitionRepository {
    bedrock_client: Arc<BedrockClient>,
    model_id: String,
}

#[derive(Debug, Deserialize)]
struct ModelResponse {
    content: Vec<ModelContent>,
}

#[derive(Debug, Deserialize)]
struct ModelContent {
    text: String,
}

#[derive(Debug, Deserialize)]
struct DefinitionPayload {
    words: Vec<WordDefinition>,
}

impl BedrockDefinitionRepository {
    pub fn new(bedrock_client: Arc<BedrockClient>, model_id: String) -> Self {
        Self {
            bedrock_client,
            model_id,
        }
    }

    fn build_prompt(words: &[String]) -> String {
        format!(
            r#"## Instruction
You are an expert English teacher specializing in vocabulary instruction. Your task is to create bilingual learning materials for a given word list, following these requirements:

1. Provide the standard phonetic transcription for each word.
2. Provide the Chinese translation of each word's primary meaning.
3. For each word, provide three example sentences that meet the following criteria:
    - Concise (under 15 words)
    - Suitable for intermediate English learners
    - Demonstrate varied usage and contexts
    - Use natural, idiomatic expressions
    - Include Chinese translations
    - Mark the target word in **bold** format

## Word List
{}

## Output Format
Your response MUST follow this exact JSON structure:
{{"words": [
{{
"word": "target_word",
"phonetic": "phonetic_transcription",
"meaning": "chinese_meaning",
"examples": [
{{"en": "Example sentence with the **target_word**.", "zh": "对应的中文翻译"}},
{{"en": "Another example with the **target_word**.", "zh": "对应的中文翻译"}},
{{"en": "Final example using the **target_word**.", "zh": "对应的中文翻译"}}
]
}}
]
}}

Do not include any text outside the JSON structure."#,
            words.join(", ")
        )
    }

    /// Models occasionally wrap the JSON in a markdown code fence despite
    /// the instruction not to.
    fn strip_code_fence(text: &str) -> &str {
        let trimmed = text.trim();
        trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .and_then(|s| s.strip_suffix("```"))
            .map(str::trim)
            .unwrap_or(trimmed)
    }

    fn parse_definitions(completion: &str) -> Result<Vec<WordDefinition>, String> {
        let payload: DefinitionPayload =
            serde_json::from_str(Self::strip_code_fence(completion))
                .map_err(|e| format!("unparseable model output: {}", e))?;
        Ok(payload.words)
    }
}

#[async_trait]
impl DefinitionRepository for BedrockDefinitionRepository {
    async fn define(&self, words: &[String]) -> Result<Vec<WordDefinition>, String> {
        let start_time = std::time::Instant::now();

        let request_body = json!({
            "anthropic_version": "bedrock-2023-05-31",
            "max_tokens": 4000,
            "temperature": 0.5,
            "top_p": 0.9,
            "messages": [
                {
                    "role": "user",
                    "content": Self::build_prompt(words)
                }
            ]
        });
        let body = serde_json::to_vec(&request_body)
            .map_err(|e| format!("failed to encode request: {}", e))?;

        tracing::info!(
            model_id = %self.model_id,
            word_count = words.len(),
            "Calling Bedrock invoke_model for word definitions"
        );

        let response = self
            .bedrock_client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    model_id = %self.model_id,
                    word_count = words.len(),
                    "Bedrock invoke_model failed"
                );
                format!("Bedrock error: {:?}", e)
            })?;

        let model_response: ModelResponse = serde_json::from_slice(response.body().as_ref())
            .map_err(|e| format!("unparseable Bedrock response: {}", e))?;
        let completion = model_response
            .content
            .first()
            .map(|c| c.text.as_str())
            .ok_or_else(|| "empty Bedrock response".to_string())?;

        let definitions = Self::parse_definitions(completion)?;

        tracing::info!(
            provider = "bedrock",
            latency_ms = start_time.elapsed().as_millis(),
            requested = words.len(),
            returned = definitions.len(),
            "Word definition lookup completed"
        );

        Ok(definitions)
    }
}
