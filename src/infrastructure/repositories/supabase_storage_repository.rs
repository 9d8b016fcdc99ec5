use super::storage_repository::StorageRepository;
use async_trait::async_trait;

/// Supabase Storage implementation of the storage repository.
/// Objects land in a public bucket; the bucket itself is provisioned
/// out of band.
pub struct SupabaseStorageRepository {
    http_client: reqwest::Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseStorageRepository {
    pub fn new(base_url: String, service_key: String, bucket: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            bucket,
        }
    }

    fn upload_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path)
    }
}

#[async_trait]
impl StorageRepository for SupabaseStorageRepository {
    async fn upload(&self, path: &str, data: Vec<u8>, content_type: &str) -> Result<(), String> {
        let start_time = std::time::Instant::now();
        let payload_size = data.len();

        tracing::info!(
            bucket = %self.bucket,
            path = path,
            content_type = content_type,
            payload_size = payload_size,
            "Uploading object to storage"
        );

        let response = self
            .http_client
            .post(self.upload_url(path))
            .bearer_auth(&self.service_key)
            .header("Content-Type", content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, path = path, "Storage upload request failed");
                format!("Storage upload error: {}", e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                path = path,
                "Storage upload rejected"
            );
            return Err(format!("Storage upload error: {} - {}", status, body));
        }

        tracing::info!(
            bucket = %self.bucket,
            path = path,
            payload_size = payload_size,
            latency_ms = start_time.elapsed().as_millis(),
            "Object uploaded"
        );

        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}
