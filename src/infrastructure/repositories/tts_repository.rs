use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (OpenAI, AWS Polly, ElevenLabs)
///
/// Implementations are responsible for:
/// - Provider-specific voice selection and defaults
/// - Surfacing the provider's status/message on failure
///
/// Scripts are short (the editorial target is 60 words, with a hard cap at
/// the controller), so a single provider call per synthesis is sufficient.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech
    ///
    /// Returns audio data ready for upload (MP3 format)
    ///
    /// # Arguments
    /// * `text` - The script to synthesize
    /// * `voice` - Optional provider-specific voice name; implementations fall
    ///   back to their configured default when absent
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider is unavailable
    async fn synthesize(&self, text: &str, voice: Option<&str>) -> Result<Vec<u8>, String>;
}

const PREVIEW_BYTES: usize = 200;

/// First ~200 bytes of the script for log fields, cut on a char boundary
/// so multi-byte text never panics the slice.
pub(crate) fn text_preview(text: &str) -> &str {
    if text.len() <= PREVIEW_BYTES {
        return text;
    }
    let mut end = PREVIEW_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
