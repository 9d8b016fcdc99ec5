use super::tts_repository::{text_preview, TtsRepository};
use async_trait::async_trait;

const API_BASE: &str = "https://api.elevenlabs.io/v1";
const MODEL_ID: &str = "eleven_monolingual_v1";

/// ElevenLabs REST implementation of TTS repository, keyed by API token.
/// Voices are addressed by voice id rather than name.
pub struct ElevenLabsTtsRepository {
    http_client: reqwest::Client,
    api_key: String,
    default_voice_id: String,
}

impl ElevenLabsTtsRepository {
    pub fn new(api_key: String, default_voice_id: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
            default_voice_id,
        }
    }

    fn synthesis_url(&self, voice_id: &str) -> String {
        format!("{}/text-to-speech/{}", API_BASE, voice_id)
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();
        let voice_id = voice.unwrap_or(&self.default_voice_id);

        tracing::info!(
            voice_id = voice_id,
            model_id = MODEL_ID,
            text_length = text.len(),
            text_preview = text_preview(text),
            "Calling ElevenLabs TTS API"
        );

        let response = self
            .http_client
            .post(self.synthesis_url(voice_id))
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&serde_json::json!({
                "text": text,
                "model_id": MODEL_ID,
            }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, voice_id = voice_id, "ElevenLabs request failed");
                format!("ElevenLabs error: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                voice_id = voice_id,
                "ElevenLabs returned error status"
            );
            return Err(format!("ElevenLabs error: {} - {}", status, body));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read ElevenLabs audio body: {}", e))?
            .to_vec();

        tracing::info!(
            provider = "elevenlabs",
            voice_id = voice_id,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }
}
