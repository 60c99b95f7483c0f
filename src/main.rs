use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordbook_backend::infrastructure::config::{Config, LogFormat};
use wordbook_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Wordbook Backend on {}:{}",
        config.host,
        config.port
    );

    // AWS clients (Polly for speech, Bedrock for definitions)
    tracing::info!("Initializing AWS clients with region: {}", config.aws_region);

    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    if !has_access_key || !has_secret_key {
        tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
    }

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let bedrock_client = Arc::new(aws_sdk_bedrockruntime::Client::new(&aws_config));
    tracing::info!("AWS clients initialized");

    let config = Arc::new(config);
    let provider_timeout = Duration::from_secs(config.provider_timeout_secs);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Stores (disk-backed)
    tracing::info!("Opening stores...");
    let audio_cache = Arc::new(
        wordbook_backend::infrastructure::repositories::AudioCacheRepository::open(
            &config.cache_dir,
        )
        .await?,
    );
    let learning_repo = Arc::new(
        wordbook_backend::infrastructure::repositories::LearningRecordRepository::open(
            &config.data_dir,
        )
        .await?,
    );
    let word_list_repo = Arc::new(
        wordbook_backend::infrastructure::repositories::WordListRepository::open(&config.data_dir)
            .await?,
    );

    // 2. Provider repositories
    let speech_repo = Arc::new(
        wordbook_backend::infrastructure::repositories::PollySpeechRepository::new(
            polly_client,
            &config.polly_voice_id,
        ),
    );
    let definition_repo = Arc::new(
        wordbook_backend::infrastructure::repositories::BedrockDefinitionRepository::new(
            bedrock_client,
            config.bedrock_model_id.clone(),
        ),
    );

    // 3. Services (inject stores and providers)
    tracing::info!("Instantiating services...");
    let speech_service = Arc::new(wordbook_backend::domain::speech::SpeechService::new(
        audio_cache.clone(),
        speech_repo,
        provider_timeout,
    ));
    let word_service = Arc::new(wordbook_backend::domain::words::WordService::new(
        learning_repo.clone(),
        definition_repo,
        provider_timeout,
    ));
    let learning_service = Arc::new(wordbook_backend::domain::learning::LearningService::new(
        learning_repo.clone(),
    ));
    let review_service = Arc::new(wordbook_backend::domain::review::ReviewService::new(
        learning_repo.clone(),
    ));
    let word_list_service = Arc::new(wordbook_backend::domain::wordlists::WordListService::new(
        word_list_repo,
    ));

    // 4. Controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let speech_controller = Arc::new(wordbook_backend::controllers::speech::SpeechController::new(
        speech_service,
        audio_cache.clone(),
    ));
    let words_controller = Arc::new(wordbook_backend::controllers::words::WordsController::new(
        word_service,
        config.clone(),
    ));
    let learning_controller = Arc::new(
        wordbook_backend::controllers::learning::LearningController::new(
            learning_service,
            review_service,
            config.clone(),
        ),
    );
    let wordlists_controller = Arc::new(
        wordbook_backend::controllers::wordlists::WordListsController::new(
            word_list_service,
            config.clone(),
        ),
    );

    // Start HTTP server with all routes
    start_http_server(
        config,
        audio_cache,
        speech_controller,
        words_controller,
        learning_controller,
        wordlists_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "wordbook_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "wordbook_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
