//! MCP server using rmcp SDK
//!
//! Exposes the upload workflow as two tools over stdio. Every workflow
//! failure is folded into an `ERROR: <message>` tool reply so the host
//! always receives a well-formed result, never a protocol fault.

use crate::clipboard::ClipboardSource;
use crate::tools::*;
use crate::uploader::{UploadOptions, UploadOutcome, Uploader};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::tool::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use snaplink_core::Config;
use snaplink_storage::Storage;
use std::future::Future;
use std::sync::Arc;

fn text_content(s: impl Into<String>) -> Content {
    Content {
        raw: RawContent::Text(RawTextContent { text: s.into() }),
        annotations: None,
    }
}

/// Success reply: bare URL first (for easy chaining into a downstream
/// tool), then the full structured result as formatted JSON.
fn success_reply(outcome: &UploadOutcome) -> CallToolResult {
    match serde_json::to_string_pretty(outcome) {
        Ok(json) => {
            CallToolResult::success(vec![text_content(outcome.url.clone()), text_content(json)])
        }
        Err(e) => error_reply(format!("Failed to encode result: {}", e)),
    }
}

fn error_reply(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![text_content(format!("ERROR: {}", message.into()))])
}

#[derive(Clone)]
pub struct SnaplinkService {
    uploader: Arc<Uploader>,
    clipboard: Arc<dyn ClipboardSource>,
    tool_router: ToolRouter<SnaplinkService>,
}

#[tool_router]
impl SnaplinkService {
    pub fn new(
        config: Arc<Config>,
        storage: Arc<dyn Storage>,
        clipboard: Arc<dyn ClipboardSource>,
    ) -> Self {
        Self {
            uploader: Arc::new(Uploader::new(config, storage)),
            clipboard,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Upload a local image file to S3 and return a presigned GET URL.")]
    async fn upload_image(
        &self,
        Parameters(req): Parameters<UploadImageRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        if let Err(msg) = validate_expires_in(req.expires_in_seconds) {
            return Ok(error_reply(msg));
        }

        let opts = UploadOptions {
            key_prefix: req.key_prefix,
            expires_in: req.expires_in_seconds.map(u64::from),
        };

        Ok(match self.uploader.upload(&req.path, opts).await {
            Ok(outcome) => success_reply(&outcome),
            Err(e) => error_reply(e.to_string()),
        })
    }

    #[tool(
        description = "Upload the current clipboard image (macOS) to S3 and return a presigned GET URL."
    )]
    async fn upload_clipboard_image(
        &self,
        Parameters(req): Parameters<UploadClipboardImageRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        if let Err(msg) = validate_expires_in(req.expires_in_seconds) {
            return Ok(error_reply(msg));
        }

        let tmp = match self.clipboard.capture_png().await {
            Ok(path) => path,
            Err(e) => return Ok(error_reply(e.to_string())),
        };

        let opts = UploadOptions {
            key_prefix: req.key_prefix,
            expires_in: req.expires_in_seconds.map(u64::from),
        };
        let result = self.uploader.upload(&tmp, opts).await;

        // The temp file goes away on every exit path once capture made it.
        if let Err(e) = tokio::fs::remove_file(&tmp).await {
            tracing::warn!(
                path = %tmp.display(),
                error = %e,
                "failed to remove clipboard temp file"
            );
        }

        Ok(match result {
            Ok(outcome) => success_reply(&outcome),
            Err(e) => error_reply(e.to_string()),
        })
    }
}

#[tool_handler]
impl ServerHandler for SnaplinkService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "snaplink-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            instructions: Some(
                "Snaplink MCP: upload a local image file or the current clipboard image (macOS) \
                 to S3 and get back a presigned GET URL. Set S3_BUCKET; optional AWS_REGION, \
                 S3_PREFIX, URL_EXPIRES_IN."
                    .to_string(),
            ),
        }
    }
}
