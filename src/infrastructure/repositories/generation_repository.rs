use async_trait::async_trait;

/// Repository for text generation.
/// Abstracts the underlying language-model provider.
///
/// Implementations receive a fully built prompt and return the provider's
/// free-form text response untouched. Parsing that response is the caller's
/// concern.
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    /// Generate text for a prompt
    ///
    /// # Errors
    /// Returns error if the provider call fails or returns an empty response
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}
