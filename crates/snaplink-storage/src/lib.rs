//! Snaplink storage library
//!
//! Storage abstraction and implementations: the [`Storage`] trait, the S3
//! backend used in production, an in-memory backend for tests, and the
//! shared storage-key builder.
//!
//! # Storage key format
//!
//! Keys are date-grouped and UUID-randomized:
//! `{prefix}/{yyyy}/{mm}/{dd}/{uuid}{ext}`. Key generation is centralized
//! in the `keys` module; keys never start or end with `/` and never
//! contain `//`.

pub mod factory;
pub mod keys;
pub mod memory;
pub mod s3;
pub mod traits;

pub use factory::create_storage;
pub use memory::InMemoryStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
