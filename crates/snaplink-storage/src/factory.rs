//! Config-driven storage construction.

use crate::s3::S3Storage;
use crate::traits::{Storage, StorageResult};
use snaplink_core::Config;
use std::sync::Arc;

/// Create the S3 storage backend from application configuration.
pub fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = S3Storage::new(
        config.bucket.clone(),
        config.region.clone(),
        config.endpoint.clone(),
    )?;
    Ok(Arc::new(storage))
}
