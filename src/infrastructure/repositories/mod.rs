pub mod audio_cache_repository;
pub mod bedrock_definition_repository;
pub mod definition_repository;
pub mod learning_record_repository;
pub mod polly_speech_repository;
pub mod speech_repository;
pub mod word_list_repository;

pub use audio_cache_repository::{AudioCacheRepository, CacheStats};
pub use bedrock_definition_repository::BedrockDefinitionRepository;
pub use definition_repository::DefinitionRepository;
pub use learning_record_repository::LearningRecordRepository;
pub use polly_speech_repository::PollySpeechRepository;
pub use speech_repository::SpeechRepository;
pub use word_list_repository::WordListRepository;
