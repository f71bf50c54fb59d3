//! Error types module
//!
//! All upload-workflow failures are unified under [`UploadError`]. Every
//! variant is caught at the tool-registration boundary and rendered as a
//! textual reply; none of them crash the process. Storage and signing
//! errors carry the backend's message verbatim.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Cannot access {path}: {source}")]
    NotFound { path: String, source: io::Error },

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Not an image (by extension): {0}")]
    UnsupportedType(String),

    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("{0}")]
    StorageWrite(String),

    #[error("{0}")]
    Signing(String),

    #[error("upload_clipboard_image currently supports macOS only.")]
    UnsupportedPlatform,

    #[error("{0}")]
    ClipboardRead(String),
}
