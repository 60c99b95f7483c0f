use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    health, learning::LearningController, speech::SpeechController,
    wordlists::WordListsController, words::WordsController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::AudioCacheRepository;

pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};

/// Assemble the full application router. Shared between the server binary
/// and the integration tests so both exercise the same app.
pub fn build_router(
    audio_cache: Arc<AudioCacheRepository>,
    speech_controller: Arc<SpeechController>,
    words_controller: Arc<WordsController>,
    learning_controller: Arc<LearningController>,
    wordlists_controller: Arc<WordListsController>,
) -> Router {
    // Speech + cache housekeeping routes
    let speech_routes = Router::new()
        .route("/generate-speech", post(SpeechController::generate_speech))
        .route("/test-speech", get(SpeechController::test_speech))
        .route("/cache-stats", get(SpeechController::cache_stats))
        .route("/clear-cache", delete(SpeechController::clear_cache))
        .with_state(speech_controller);

    // Word ingestion routes
    let words_routes = Router::new()
        .route("/process-words", post(WordsController::process_words))
        .with_state(words_controller);

    // Learning record + review routes
    let learning_routes = Router::new()
        .route(
            "/save-learning-record",
            post(LearningController::save_learning_record),
        )
        .route(
            "/get-learning-records",
            get(LearningController::get_learning_records),
        )
        .route("/get-review-list", get(LearningController::get_review_list))
        .route(
            "/update-review-status",
            post(LearningController::update_review_status),
        )
        .route(
            "/increment-review-count",
            post(LearningController::increment_review_count),
        )
        .with_state(learning_controller);

    // Word list routes
    let wordlist_routes = Router::new()
        .route("/save-wordlist", post(WordListsController::save_wordlist))
        .route("/get-wordlists", get(WordListsController::get_wordlists))
        .route(
            "/get-wordlist/:list_id",
            get(WordListsController::get_wordlist),
        )
        .with_state(wordlists_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(audio_cache)
        .merge(speech_routes)
        .merge(words_routes)
        .merge(learning_routes)
        .merge(wordlist_routes)
        .layer(middleware::from_fn(request_id_middleware))
        // The observed frontend is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    audio_cache: Arc<AudioCacheRepository>,
    speech_controller: Arc<SpeechController>,
    words_controller: Arc<WordsController>,
    learning_controller: Arc<LearningController>,
    wordlists_controller: Arc<WordListsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(
        audio_cache,
        speech_controller,
        words_controller,
        learning_controller,
        wordlists_controller,
    );

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
