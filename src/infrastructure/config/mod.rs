use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Generation
    pub generation_model: String,
    // Speech synthesis
    pub tts_provider: TtsProvider,
    pub tts_voice: Option<String>,
    pub openai_tts_model: String,
    pub aws_region: String,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_voice_id: Option<String>,
    // Object storage
    pub storage_base_url: String,
    pub storage_service_key: String,
    pub storage_bucket: String,
    // Scratch directory for temporary audio files
    pub audio_workdir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TtsProvider {
    Openai,
    Polly,
    Elevenlabs,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let tts_provider = match env::var("TTS_PROVIDER")
            .unwrap_or_else(|_| "openai".to_string())
            .to_lowercase()
            .as_str()
        {
            "openai" => TtsProvider::Openai,
            "polly" => TtsProvider::Polly,
            "elevenlabs" => TtsProvider::Elevenlabs,
            other => return Err(format!("Unknown TTS_PROVIDER: {}", other).into()),
        };

        let elevenlabs_api_key = env::var("ELEVENLABS_API_KEY").ok();
        let elevenlabs_voice_id = env::var("ELEVENLABS_VOICE_ID").ok();

        if tts_provider == TtsProvider::Elevenlabs
            && (elevenlabs_api_key.is_none() || elevenlabs_voice_id.is_none())
        {
            return Err(
                "TTS_PROVIDER=elevenlabs requires ELEVENLABS_API_KEY and ELEVENLABS_VOICE_ID"
                    .into(),
            );
        }

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: parse_environment(
                &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            ),
            log_format: parse_log_format(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            ),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            tts_provider,
            tts_voice: env::var("TTS_VOICE").ok(),
            openai_tts_model: env::var("OPENAI_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
            elevenlabs_api_key,
            elevenlabs_voice_id,
            storage_base_url: env::var("STORAGE_BASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            storage_service_key: env::var("STORAGE_SERVICE_KEY")?,
            storage_bucket: env::var("STORAGE_BUCKET").unwrap_or_else(|_| "news-audio".to_string()),
            audio_workdir: env::var("AUDIO_WORKDIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_environment(value: &str) -> Environment {
    match value {
        "production" => Environment::Production,
        _ => Environment::Development,
    }
}

fn parse_log_format(value: &str) -> LogFormat {
    match value {
        "json" => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}
