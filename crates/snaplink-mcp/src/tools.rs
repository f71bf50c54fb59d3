//! MCP tool request types with JSON Schema for AI parameter generation

use schemars::JsonSchema;
use serde::Deserialize;
use snaplink_core::config::MAX_URL_EXPIRES_SECS;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    #[schemars(description = "Local image path (.png/.jpg/.jpeg/.webp/.gif/.svg)")]
    pub path: String,
    #[schemars(description = "S3 key prefix (default: env S3_PREFIX)")]
    pub key_prefix: Option<String>,
    #[schemars(
        range(min = 1, max = 604800),
        description = "Presigned URL TTL in seconds, at most 604800 (default: env URL_EXPIRES_IN or 86400)"
    )]
    pub expires_in_seconds: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadClipboardImageRequest {
    #[schemars(description = "S3 key prefix (default: env S3_PREFIX)")]
    pub key_prefix: Option<String>,
    #[schemars(
        range(min = 1, max = 604800),
        description = "Presigned URL TTL in seconds, at most 604800 (default: env URL_EXPIRES_IN or 86400)"
    )]
    pub expires_in_seconds: Option<u32>,
}

/// Validate a caller-supplied TTL at the schema boundary: a positive
/// integer capped at 7 days. The workflow trusts this range and does not
/// re-validate.
pub fn validate_expires_in(expires_in_seconds: Option<u32>) -> Result<(), String> {
    match expires_in_seconds {
        Some(secs) if secs == 0 || u64::from(secs) > MAX_URL_EXPIRES_SECS => Err(format!(
            "expiresInSeconds must be between 1 and {}, got {}",
            MAX_URL_EXPIRES_SECS, secs
        )),
        _ => Ok(()),
    }
}
