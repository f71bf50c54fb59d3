//! In-memory storage backend.
//!
//! Records every put and sign call so workflow tests can assert on the
//! exact key, content type, and TTL that reached the backend, without any
//! network I/O. Either operation can be made to fail for error-path tests.

use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// One recorded `put_object` call.
#[derive(Debug, Clone)]
pub struct PutRecord {
    pub key: String,
    pub data: Vec<u8>,
    pub content_type: String,
}

/// One recorded `presigned_get_url` call.
#[derive(Debug, Clone)]
pub struct SignRecord {
    pub key: String,
    pub expires_in: Duration,
}

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    bucket: String,
    region: String,
    fail_puts: bool,
    fail_signing: bool,
    puts: Mutex<Vec<PutRecord>>,
    signs: Mutex<Vec<SignRecord>>,
}

impl InMemoryStorage {
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        InMemoryStorage {
            bucket: bucket.into(),
            region: region.into(),
            ..Default::default()
        }
    }

    /// Make every `put_object` call fail.
    pub fn failing_puts(mut self) -> Self {
        self.fail_puts = true;
        self
    }

    /// Make every `presigned_get_url` call fail.
    pub fn failing_signing(mut self) -> Self {
        self.fail_signing = true;
        self
    }

    pub fn puts(&self) -> Vec<PutRecord> {
        self.puts.lock().unwrap().clone()
    }

    pub fn signs(&self) -> Vec<SignRecord> {
        self.signs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()> {
        if self.fail_puts {
            return Err(StorageError::WriteFailed(
                "injected put failure".to_string(),
            ));
        }

        self.puts.lock().unwrap().push(PutRecord {
            key: key.to_string(),
            data,
            content_type: content_type.to_string(),
        });

        Ok(())
    }

    async fn presigned_get_url(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        if self.fail_signing {
            return Err(StorageError::SignFailed(
                "injected signing failure".to_string(),
            ));
        }

        self.signs.lock().unwrap().push(SignRecord {
            key: key.to_string(),
            expires_in,
        });

        Ok(format!(
            "https://{}.s3.{}.amazonaws.com/{}?X-Amz-Expires={}",
            self.bucket,
            self.region,
            key,
            expires_in.as_secs()
        ))
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn region(&self) -> &str {
        &self.region
    }
}
