use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use wordbook_backend::controllers::learning::LearningController;
use wordbook_backend::controllers::speech::SpeechController;
use wordbook_backend::controllers::wordlists::WordListsController;
use wordbook_backend::controllers::words::WordsController;
use wordbook_backend::domain::learning::LearningService;
use wordbook_backend::domain::review::ReviewService;
use wordbook_backend::domain::speech::SpeechService;
use wordbook_backend::domain::wordlists::WordListService;
use wordbook_backend::domain::words::WordService;
use wordbook_backend::infrastructure::config::{Config, Environment, LogFormat};
use wordbook_backend::infrastructure::http::build_router;
use wordbook_backend::infrastructure::repositories::{
    AudioCacheRepository, LearningRecordRepository, WordListRepository,
};

pub mod api_client;

use api_client::TestClient;
use provider_mocks::{MockDefinitionProvider, MockSpeechProvider};

/// One fully wired application per test: real router, real disk-backed
/// stores in tempdirs, mocked external providers. Tests run in parallel
/// without interference because every context owns its directories.
pub struct TestContext {
    pub client: TestClient,
    pub config: Config,
    pub audio_cache: Arc<AudioCacheRepository>,
    pub learning_repo: Arc<LearningRecordRepository>,
    pub speech_provider: Arc<MockSpeechProvider>,
    pub definition_provider: Arc<MockDefinitionProvider>,
    _cache_dir: tempfile::TempDir,
    _data_dir: tempfile::TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let cache_dir = tempfile::tempdir()?;
        let data_dir = tempfile::tempdir()?;

        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Will be assigned by the OS
            aws_region: "us-east-1".to_string(),
            environment: Environment::Development,
            log_format: LogFormat::Pretty,
            cache_dir: cache_dir.path().to_path_buf(),
            data_dir: data_dir.path().to_path_buf(),
            default_user_id: "default-user".to_string(),
            polly_voice_id: "Joanna".to_string(),
            bedrock_model_id: "test-model".to_string(),
            provider_timeout_secs: 5,
        };

        let audio_cache = Arc::new(AudioCacheRepository::open(&config.cache_dir).await?);
        let learning_repo = Arc::new(LearningRecordRepository::open(&config.data_dir).await?);
        let word_list_repo = Arc::new(WordListRepository::open(&config.data_dir).await?);

        let speech_provider = Arc::new(MockSpeechProvider::new());
        let definition_provider = Arc::new(MockDefinitionProvider::new());

        let provider_timeout = Duration::from_secs(config.provider_timeout_secs);
        let speech_service = Arc::new(SpeechService::new(
            audio_cache.clone(),
            speech_provider.clone(),
            provider_timeout,
        ));
        let word_service = Arc::new(WordService::new(
            learning_repo.clone(),
            definition_provider.clone(),
            provider_timeout,
        ));
        let learning_service = Arc::new(LearningService::new(learning_repo.clone()));
        let review_service = Arc::new(ReviewService::new(learning_repo.clone()));
        let word_list_service = Arc::new(WordListService::new(word_list_repo));

        let arc_config = Arc::new(config.clone());
        let speech_controller = Arc::new(SpeechController::new(
            speech_service,
            audio_cache.clone(),
        ));
        let words_controller = Arc::new(WordsController::new(word_service, arc_config.clone()));
        let learning_controller = Arc::new(LearningController::new(
            learning_service,
            review_service,
            arc_config.clone(),
        ));
        let wordlists_controller =
            Arc::new(WordListsController::new(word_list_service, arc_config));

        let app = build_router(
            audio_cache.clone(),
            speech_controller,
            words_controller,
            learning_controller,
            wordlists_controller,
        );

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&base_url),
            config,
            audio_cache,
            learning_repo,
            speech_provider,
            definition_provider,
            _cache_dir: cache_dir,
            _data_dir: data_dir,
        })
    }
}
