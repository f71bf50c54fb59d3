//! Snaplink core library
//!
//! Shared configuration, the workflow error taxonomy, and the
//! content-type resolver used by the storage and MCP crates.

pub mod config;
pub mod content_type;
pub mod error;

pub use config::Config;
pub use error::UploadError;
