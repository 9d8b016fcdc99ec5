// Test doubles for the external collaborators. Each implements the public
// repository trait the real provider implements, so the app under test is
// wired exactly like production minus the network.

use async_trait::async_trait;
use audiline_backend::infrastructure::repositories::{
    GenerationRepository, StorageRepository, TtsRepository,
};
use parking_lot::RwLock;

/// Stand-in MP3 payload returned by the TTS double
pub const FAKE_AUDIO: &[u8] = b"ID3\x03\x00fake-mp3-payload";

/// Generation double returning a scripted response (or failure)
pub struct StubGenerationRepository {
    response: RwLock<Result<String, String>>,
}

impl StubGenerationRepository {
    pub fn new() -> Self {
        Self {
            response: RwLock::new(Ok("Default Headline | Default script body.".to_string())),
        }
    }

    pub fn respond_with(&self, text: &str) {
        *self.response.write() = Ok(text.to_string());
    }

    pub fn fail_with(&self, message: &str) {
        *self.response.write() = Err(message.to_string());
    }
}

#[async_trait]
impl GenerationRepository for StubGenerationRepository {
    async fn generate(&self, _prompt: &str) -> Result<String, String> {
        self.response.read().clone()
    }
}

/// TTS double recording synthesized texts and returning a fixed payload
pub struct StubTtsRepository {
    failure: RwLock<Option<String>>,
    pub synthesized: RwLock<Vec<String>>,
}

impl StubTtsRepository {
    pub fn new() -> Self {
        Self {
            failure: RwLock::new(None),
            synthesized: RwLock::new(Vec::new()),
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.write() = Some(message.to_string());
    }
}

#[async_trait]
impl TtsRepository for StubTtsRepository {
    async fn synthesize(&self, text: &str, _voice: Option<&str>) -> Result<Vec<u8>, String> {
        if let Some(message) = self.failure.read().clone() {
            return Err(message);
        }
        self.synthesized.write().push(text.to_string());
        Ok(FAKE_AUDIO.to_vec())
    }
}

#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub path: String,
    pub content_type: String,
    pub size: usize,
}

/// Storage double recording uploads and building real-format public URLs
pub struct RecordingStorageRepository {
    base_url: String,
    bucket: String,
    failure: RwLock<Option<String>>,
    pub uploads: RwLock<Vec<RecordedUpload>>,
}

impl RecordingStorageRepository {
    pub fn new(base_url: &str, bucket: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            bucket: bucket.to_string(),
            failure: RwLock::new(None),
            uploads: RwLock::new(Vec::new()),
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.write() = Some(message.to_string());
    }
}

#[async_trait]
impl StorageRepository for RecordingStorageRepository {
    async fn upload(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<(), String> {
        if let Some(message) = self.failure.read().clone() {
            return Err(message);
        }
        self.uploads.write().push(RecordedUpload {
            path: path.to_string(),
            content_type: content_type.to_string(),
            size: data.len(),
        });
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}
