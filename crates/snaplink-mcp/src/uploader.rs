//! Upload workflow: validate a local image, store it under a
//! date-grouped key, and mint a presigned GET URL.
//!
//! No step is retried; the first failure aborts the workflow. An object
//! uploaded before a signing failure stays in the bucket.

use serde::Serialize;
use snaplink_core::content_type::{guess_content_type, is_image};
use snaplink_core::{Config, UploadError};
use snaplink_storage::{keys, Storage};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Per-invocation overrides for the upload workflow.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Key prefix; falls back to the configured default.
    pub key_prefix: Option<String>,
    /// Presigned URL TTL in seconds; falls back to the configured default.
    /// Range-checked at the protocol boundary before it gets here.
    pub expires_in: Option<u64>,
}

/// Result of a successful upload, returned to the caller both as a bare
/// URL and as formatted JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub url: String,
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub size: u64,
    pub region: String,
}

pub struct Uploader {
    config: Arc<Config>,
    storage: Arc<dyn Storage>,
}

impl Uploader {
    pub fn new(config: Arc<Config>, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }

    /// Upload the image at `input_path` and return a presigned GET URL.
    pub async fn upload(
        &self,
        input_path: impl AsRef<Path>,
        opts: UploadOptions,
    ) -> Result<UploadOutcome, UploadError> {
        let input_path = input_path.as_ref();
        let abs = std::path::absolute(input_path).map_err(|source| UploadError::NotFound {
            path: input_path.display().to_string(),
            source,
        })?;
        let display = abs.display().to_string();

        let meta = tokio::fs::metadata(&abs)
            .await
            .map_err(|source| UploadError::NotFound {
                path: display.clone(),
                source,
            })?;
        if !meta.is_file() {
            return Err(UploadError::NotAFile(display));
        }

        let content_type = guess_content_type(&abs);
        if !is_image(content_type) {
            return Err(UploadError::UnsupportedType(display));
        }

        let ext = abs
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_else(|| ".bin".to_string());
        let prefix = opts
            .key_prefix
            .as_deref()
            .unwrap_or(&self.config.key_prefix)
            .trim_start_matches('/');
        let key = keys::object_key(prefix, &ext);

        let body = tokio::fs::read(&abs)
            .await
            .map_err(|source| UploadError::Read {
                path: display,
                source,
            })?;

        self.storage
            .put_object(&key, body, content_type)
            .await
            .map_err(|e| UploadError::StorageWrite(e.to_string()))?;

        let expires_in =
            Duration::from_secs(opts.expires_in.unwrap_or(self.config.default_expires_secs));
        let url = self
            .storage
            .presigned_get_url(&key, expires_in)
            .await
            .map_err(|e| UploadError::Signing(e.to_string()))?;

        tracing::info!(
            key = %key,
            content_type = %content_type,
            size_bytes = meta.len(),
            expires_secs = expires_in.as_secs(),
            "image uploaded"
        );

        Ok(UploadOutcome {
            url,
            bucket: self.storage.bucket().to_string(),
            key,
            content_type: content_type.to_string(),
            size: meta.len(),
            region: self.storage.region().to_string(),
        })
    }
}
