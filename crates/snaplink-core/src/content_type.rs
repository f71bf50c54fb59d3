//! Content-type resolution by file extension.
//!
//! Pure and total: unknown extensions map to `application/octet-stream`
//! rather than failing. The upload workflow rejects anything that is not
//! an `image/*` type before touching the network.

use std::path::Path;

/// Map a path's extension (case-insensitive) to a MIME type.
pub fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Whether a resolved content type is an image type.
pub fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}
