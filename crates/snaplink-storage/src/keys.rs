//! Shared key generation for storage backends.
//!
//! Key format: `{prefix}/{yyyy}/{mm}/{dd}/{uuid}{ext}`. The date comes
//! from the UTC wall clock at call time, so uploads group lexicographically
//! by day; the UUID segment makes collisions negligible at any realistic
//! upload volume.

use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

/// Generate a storage key for the given prefix and file extension.
///
/// The extension is lower-cased, gets a leading dot if missing, and
/// defaults to `.bin` when empty. The prefix may contain stray or doubled
/// slashes; the result never starts or ends with `/` and never contains
/// `//`.
pub fn object_key(prefix: &str, ext: &str) -> String {
    object_key_at(prefix, ext, Utc::now())
}

pub(crate) fn object_key_at(prefix: &str, ext: &str, now: DateTime<Utc>) -> String {
    let ext = normalize_ext(ext);
    let id = Uuid::new_v4();
    posix_join(&[
        prefix,
        &format!("{:04}", now.year()),
        &format!("{:02}", now.month()),
        &format!("{:02}", now.day()),
        &format!("{}{}", id, ext),
    ])
}

fn normalize_ext(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.is_empty() || ext == "." {
        ".bin".to_string()
    } else if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Join path segments with `/`, converting backslashes, trimming
/// leading/trailing slashes per segment, dropping segments that end up
/// empty, and collapsing any remaining run of slashes to one.
fn posix_join(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .map(|p| p.replace('\\', "/"))
        .map(|p| p.trim_matches('/').to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    collapse_slashes(&joined)
}

fn collapse_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            prev_slash = false;
            out.push(c);
        }
    }
    out
}
