use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audiline_backend::infrastructure::config::{Config, LogFormat, TtsProvider};
use audiline_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use audiline_backend::infrastructure::http::start_http_server;
use audiline_backend::infrastructure::repositories::{
    ArticleRepository, ElevenLabsTtsRepository, OpenAiGenerationRepository, OpenAiTtsRepository,
    PollyTtsRepository, SupabaseStorageRepository, TtsRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; missing required keys block startup
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Audiline Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    // Apply pending migrations
    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // OpenAI client (reads OPENAI_API_KEY from the environment), used for
    // generation and, depending on configuration, for speech
    let openai_client = Arc::new(async_openai::Client::new());

    // Select the speech synthesis provider
    let tts_repo: Arc<dyn TtsRepository> = match config.tts_provider {
        TtsProvider::Openai => {
            tracing::info!(model = %config.openai_tts_model, "Using OpenAI TTS provider");
            Arc::new(OpenAiTtsRepository::new(
                openai_client.clone(),
                config.openai_tts_model.clone(),
                "alloy".to_string(),
            ))
        }
        TtsProvider::Polly => {
            tracing::info!(region = %config.aws_region, "Using AWS Polly TTS provider");
            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
            Arc::new(PollyTtsRepository::new(polly_client, None))
        }
        TtsProvider::Elevenlabs => {
            tracing::info!("Using ElevenLabs TTS provider");
            // Presence of both keys is enforced by Config::from_env
            let api_key = config.elevenlabs_api_key.clone().unwrap_or_default();
            let voice_id = config.elevenlabs_voice_id.clone().unwrap_or_default();
            Arc::new(ElevenLabsTtsRepository::new(api_key, voice_id))
        }
    };

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    tracing::info!("Instantiating repositories...");
    let article_repo = Arc::new(ArticleRepository::new(pool.clone()));
    let generation_repo = Arc::new(OpenAiGenerationRepository::new(
        openai_client.clone(),
        config.generation_model.clone(),
    ));
    let storage_repo = Arc::new(SupabaseStorageRepository::new(
        config.storage_base_url.clone(),
        config.storage_service_key.clone(),
        config.storage_bucket.clone(),
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let editorial_service = Arc::new(audiline_backend::domain::editorial::EditorialService::new(
        generation_repo,
        tts_repo,
        storage_repo,
        article_repo,
        config.tts_voice.clone(),
        config.audio_workdir.clone(),
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let article_controller = Arc::new(audiline_backend::controllers::article::ArticleController::new(
        editorial_service,
    ));

    // Start HTTP server with all routes
    start_http_server(pool, config, article_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "audiline_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "audiline_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
