//! Upload workflow tests against the in-memory storage backend.

use snaplink_core::{Config, UploadError};
use snaplink_mcp::{UploadOptions, Uploader};
use snaplink_storage::InMemoryStorage;
use std::path::PathBuf;
use std::sync::Arc;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake";

fn test_config() -> Arc<Config> {
    Arc::new(Config {
        bucket: "snaplink-test".to_string(),
        region: "us-east-1".to_string(),
        endpoint: None,
        key_prefix: "uploads".to_string(),
        default_expires_secs: 86_400,
    })
}

fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[tokio::test]
async fn test_upload_returns_presigned_url_containing_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "shot.png", PNG_BYTES);

    let storage = Arc::new(InMemoryStorage::new("snaplink-test", "us-east-1"));
    let uploader = Uploader::new(test_config(), storage.clone());

    let outcome = uploader
        .upload(&path, UploadOptions::default())
        .await
        .unwrap();

    assert!(outcome.url.starts_with("https://"));
    assert!(outcome.url.contains(&outcome.key));
    assert_eq!(outcome.bucket, "snaplink-test");
    assert_eq!(outcome.region, "us-east-1");
    assert_eq!(outcome.content_type, "image/png");
    assert_eq!(outcome.size, PNG_BYTES.len() as u64);

    assert!(outcome.key.starts_with("uploads/"));
    assert!(outcome.key.ends_with(".png"));
    assert!(!outcome.key.contains("//"));
    assert!(!outcome.key.starts_with('/'));

    let puts = storage.puts();
    assert_eq!(puts.len(), 1);
    assert_eq!(puts[0].key, outcome.key);
    assert_eq!(puts[0].content_type, "image/png");
    assert_eq!(puts[0].data, PNG_BYTES);
}

#[tokio::test]
async fn test_caller_prefix_is_normalized() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "shot.png", PNG_BYTES);

    let storage = Arc::new(InMemoryStorage::new("snaplink-test", "us-east-1"));
    let uploader = Uploader::new(test_config(), storage.clone());

    let outcome = uploader
        .upload(
            &path,
            UploadOptions {
                key_prefix: Some("/a//b/".to_string()),
                expires_in: None,
            },
        )
        .await
        .unwrap();

    assert!(outcome.key.starts_with("a/b/"), "got {}", outcome.key);
    assert!(!outcome.key.contains("//"));
}

#[tokio::test]
async fn test_default_ttl_round_trips_to_signer() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "shot.jpg", b"\xff\xd8\xff\xe0fake");

    let storage = Arc::new(InMemoryStorage::new("snaplink-test", "us-east-1"));
    let uploader = Uploader::new(test_config(), storage.clone());

    uploader
        .upload(&path, UploadOptions::default())
        .await
        .unwrap();

    let signs = storage.signs();
    assert_eq!(signs.len(), 1);
    assert_eq!(signs[0].expires_in.as_secs(), 86_400);
}

#[tokio::test]
async fn test_explicit_ttl_round_trips_to_signer() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "shot.webp", b"RIFFfakeWEBP");

    let storage = Arc::new(InMemoryStorage::new("snaplink-test", "us-east-1"));
    let uploader = Uploader::new(test_config(), storage.clone());

    uploader
        .upload(
            &path,
            UploadOptions {
                key_prefix: None,
                expires_in: Some(600),
            },
        )
        .await
        .unwrap();

    assert_eq!(storage.signs()[0].expires_in.as_secs(), 600);
}

#[tokio::test]
async fn test_non_image_extension_fails_before_any_storage_call() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "notes.txt", b"not an image");

    let storage = Arc::new(InMemoryStorage::new("snaplink-test", "us-east-1"));
    let uploader = Uploader::new(test_config(), storage.clone());

    let err = uploader
        .upload(&path, UploadOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::UnsupportedType(_)));
    assert!(storage.puts().is_empty());
    assert!(storage.signs().is_empty());
}

#[tokio::test]
async fn test_missing_file_fails_before_any_storage_call() {
    let storage = Arc::new(InMemoryStorage::new("snaplink-test", "us-east-1"));
    let uploader = Uploader::new(test_config(), storage.clone());

    let err = uploader
        .upload("/definitely/not/here.png", UploadOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::NotFound { .. }));
    assert!(storage.puts().is_empty());
}

#[tokio::test]
async fn test_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let subdir = dir.path().join("album.png");
    std::fs::create_dir(&subdir).unwrap();

    let storage = Arc::new(InMemoryStorage::new("snaplink-test", "us-east-1"));
    let uploader = Uploader::new(test_config(), storage.clone());

    let err = uploader
        .upload(&subdir, UploadOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::NotAFile(_)));
    assert!(storage.puts().is_empty());
}

#[tokio::test]
async fn test_storage_write_failure_is_surfaced_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "shot.png", PNG_BYTES);

    let storage = Arc::new(
        InMemoryStorage::new("snaplink-test", "us-east-1").failing_puts(),
    );
    let uploader = Uploader::new(test_config(), storage);

    let err = uploader
        .upload(&path, UploadOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::StorageWrite(_)));
    assert!(err.to_string().contains("injected put failure"));
}

#[tokio::test]
async fn test_signing_failure_leaves_uploaded_object_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "shot.png", PNG_BYTES);

    let storage = Arc::new(
        InMemoryStorage::new("snaplink-test", "us-east-1").failing_signing(),
    );
    let uploader = Uploader::new(test_config(), storage.clone());

    let err = uploader
        .upload(&path, UploadOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Signing(_)));
    // The object was uploaded before signing failed and is not rolled back.
    assert_eq!(storage.puts().len(), 1);
}

#[tokio::test]
async fn test_concurrent_uploads_get_distinct_keys() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(&dir, "a.png", PNG_BYTES);
    let b = write_file(&dir, "b.png", PNG_BYTES);

    let storage = Arc::new(InMemoryStorage::new("snaplink-test", "us-east-1"));
    let uploader = Arc::new(Uploader::new(test_config(), storage.clone()));

    let (ra, rb) = tokio::join!(
        uploader.upload(&a, UploadOptions::default()),
        uploader.upload(&b, UploadOptions::default()),
    );

    let (ra, rb) = (ra.unwrap(), rb.unwrap());
    assert_ne!(ra.key, rb.key);
    assert_eq!(storage.puts().len(), 2);
}
