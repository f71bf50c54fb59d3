//! Snaplink MCP Server
//!
//! Model Context Protocol server that uploads local or clipboard images
//! to S3 and returns presigned GET URLs.

pub mod clipboard;
pub mod server;
pub mod tools;
pub mod uploader;

pub use server::SnaplinkService;
pub use uploader::{UploadOptions, UploadOutcome, Uploader};
