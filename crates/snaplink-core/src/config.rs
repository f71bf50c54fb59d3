//! Configuration module
//!
//! Process-wide settings are read from the environment exactly once at
//! startup into an immutable [`Config`] value, which is then passed
//! explicitly to the storage factory and the upload workflow.

use std::env;

/// Upper bound on a caller-supplied presigned-URL TTL: 7 days.
pub const MAX_URL_EXPIRES_SECS: u64 = 7 * 24 * 3600;

const DEFAULT_REGION: &str = "ap-northeast-2";
const DEFAULT_PREFIX: &str = "uploads";
const DEFAULT_EXPIRES_SECS: u64 = 86_400;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Target S3 bucket name.
    pub bucket: String,
    /// AWS region (or region identifier for S3-compatible providers).
    pub region: String,
    /// Custom endpoint URL for S3-compatible providers (MinIO, Spaces, ...).
    pub endpoint: Option<String>,
    /// Default key prefix, stored with leading slashes stripped.
    pub key_prefix: String,
    /// Default presigned-URL TTL in seconds.
    pub default_expires_secs: u64,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `S3_BUCKET` is required; everything else has a default. Region falls
    /// back from `AWS_REGION` to `AWS_DEFAULT_REGION` to a literal default.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let bucket = env::var("S3_BUCKET")
            .map_err(|_| anyhow::anyhow!("S3_BUCKET must be set"))?;

        let region = env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|_| DEFAULT_REGION.to_string());

        let key_prefix = env::var("S3_PREFIX")
            .unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
            .trim_start_matches('/')
            .to_string();

        let default_expires_secs = env::var("URL_EXPIRES_IN")
            .unwrap_or_else(|_| DEFAULT_EXPIRES_SECS.to_string())
            .parse::<u64>()
            .unwrap_or(DEFAULT_EXPIRES_SECS);

        let config = Config {
            bucket,
            region,
            endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            key_prefix,
            default_expires_secs,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.bucket.trim().is_empty() {
            return Err(anyhow::anyhow!("S3_BUCKET cannot be empty"));
        }
        if self.default_expires_secs == 0 {
            return Err(anyhow::anyhow!(
                "URL_EXPIRES_IN must be a positive number of seconds"
            ));
        }
        Ok(())
    }
}
