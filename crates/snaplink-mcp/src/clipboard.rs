//! Clipboard capture capability.
//!
//! Platform-conditional external-tool invocation lives behind
//! [`ClipboardSource`], with one implementation per supported platform and
//! a default unsupported one, selected at startup from the runtime's
//! reported platform. The workflow itself never checks platforms.
//!
//! macOS: prefer `pngpaste` (brew install pngpaste), fall back to
//! `pbpaste -Prefer png`. A tool being absent and a tool finding no image
//! data collapse to the same fallback path.

use async_trait::async_trait;
use snaplink_core::UploadError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::process::Command;
use uuid::Uuid;

#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Write the current clipboard image to a freshly named temp PNG and
    /// return its path. The caller owns the file and must remove it.
    async fn capture_png(&self) -> Result<PathBuf, UploadError>;
}

/// Select the clipboard implementation for the current platform.
pub fn detect() -> Arc<dyn ClipboardSource> {
    match std::env::consts::OS {
        "macos" => Arc::new(MacosClipboard),
        _ => Arc::new(UnsupportedClipboard),
    }
}

const CLIPBOARD_HINT: &str = "Failed to read clipboard image.\n\
- Ensure clipboard currently contains an IMAGE (e.g., take a screenshot, then copy)\n\
- Recommended: brew install pngpaste (more reliable)\n\
- Fallback used: pbpaste -Prefer png (may fail depending on clipboard format)";

pub struct MacosClipboard;

impl MacosClipboard {
    async fn try_pngpaste(tmp: &Path) -> bool {
        match Command::new("pngpaste").arg(tmp).output().await {
            Ok(output) if output.status.success() => non_empty_file(tmp).await,
            _ => false,
        }
    }

    async fn try_pbpaste(tmp: &Path) -> bool {
        let output = match Command::new("pbpaste")
            .args(["-Prefer", "png"])
            .output()
            .await
        {
            Ok(output) if output.status.success() => output,
            _ => return false,
        };

        if output.stdout.is_empty() {
            return false;
        }
        if tokio::fs::write(tmp, &output.stdout).await.is_err() {
            return false;
        }
        non_empty_file(tmp).await
    }
}

async fn non_empty_file(path: &Path) -> bool {
    matches!(tokio::fs::metadata(path).await, Ok(meta) if meta.is_file() && meta.len() > 0)
}

#[async_trait]
impl ClipboardSource for MacosClipboard {
    async fn capture_png(&self) -> Result<PathBuf, UploadError> {
        let tmp =
            std::env::temp_dir().join(format!("snaplink-clipboard-{}.png", Uuid::new_v4()));

        if Self::try_pngpaste(&tmp).await {
            return Ok(tmp);
        }
        if Self::try_pbpaste(&tmp).await {
            return Ok(tmp);
        }

        // Drop any partially written file before reporting.
        let _ = tokio::fs::remove_file(&tmp).await;
        Err(UploadError::ClipboardRead(CLIPBOARD_HINT.to_string()))
    }
}

pub struct UnsupportedClipboard;

#[async_trait]
impl ClipboardSource for UnsupportedClipboard {
    async fn capture_png(&self) -> Result<PathBuf, UploadError> {
        Err(UploadError::UnsupportedPlatform)
    }
}
