//! Picstore Core Library
//!
//! This crate provides the upload configuration and error types shared
//! across all Picstore components.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::UploadConfig;
pub use error::{AppError, ErrorMetadata, LogLevel};
