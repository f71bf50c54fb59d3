//! Snaplink MCP Server
//!
//! Uploads local or clipboard images to S3 and returns presigned GET URLs.
//! Run with: S3_BUCKET=my-bucket snaplink-mcp

use anyhow::Context;
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use snaplink_core::Config;
use snaplink_mcp::{clipboard, SnaplinkService};
use snaplink_storage::create_storage;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let config = Arc::new(
        Config::from_env().context("Invalid configuration. Set the S3_BUCKET environment variable")?,
    );
    let storage = create_storage(&config).context("Failed to initialize S3 storage")?;

    tracing::info!(
        bucket = %config.bucket,
        region = %config.region,
        prefix = %config.key_prefix,
        "snaplink-mcp running on stdio"
    );

    let service = SnaplinkService::new(config, storage, clipboard::detect());
    let running = service.serve(stdio()).await.context("MCP transport failed")?;
    running.waiting().await.context("MCP server error")?;

    Ok(())
}
