//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement. The upload workflow only ever talks to this trait, so tests
//! can substitute an in-memory backend and assert on the exact key,
//! content type, and TTL passed.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    WriteFailed(String),

    #[error("Presigning failed: {0}")]
    SignFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object-storage capability.
///
/// Two operations cover this system's entire storage surface: writing an
/// object with a declared content type, and minting a time-bounded
/// presigned GET URL for it. Neither is retried by callers; backend error
/// messages are surfaced verbatim.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload `data` under `key` with `content_type` set as the object's
    /// declared type.
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()>;

    /// Generate a presigned GET URL for `key`, valid for `expires_in`.
    async fn presigned_get_url(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Bucket this backend writes to.
    fn bucket(&self) -> &str;

    /// Region identifier reported in upload results.
    fn region(&self) -> &str;
}
