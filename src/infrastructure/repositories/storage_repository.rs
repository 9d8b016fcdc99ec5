use async_trait::async_trait;

/// Repository for object storage uploads.
///
/// The public URL of an uploaded object is deterministic and can be built
/// without a round trip, so `public_url` is synchronous.
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Upload a byte payload under the given path
    ///
    /// # Errors
    /// Returns error if the storage provider rejects the upload
    async fn upload(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<(), String>;

    /// Public URL the object will be served from once uploaded
    fn public_url(&self, path: &str) -> String;
}
