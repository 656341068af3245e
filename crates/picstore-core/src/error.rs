//! Error types module
//!
//! This module provides the error types used throughout the Picstore
//! application. All failures surface through the `AppError` enum; every
//! rejection is terminal for its call and no partial state is left behind.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_IMAGE")
    fn error_code(&self) -> &'static str;

    /// Client-facing message
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("File type not allowed: {0}")]
    UnsupportedFileType(String),

    #[error("Invalid image file: {0}")]
    InvalidImage(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Static metadata per variant: (http_status, error_code, log_level).
/// The original upload endpoint answered 400 for every defined rejection
/// kind, which is kept here; only server-side failures map to 500.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::PayloadTooLarge(_) => (400, "PAYLOAD_TOO_LARGE", LogLevel::Debug),
        AppError::UnsupportedFileType(_) => (400, "UNSUPPORTED_FILE_TYPE", LogLevel::Debug),
        AppError::InvalidImage(_) => (400, "INVALID_IMAGE", LogLevel::Debug),
        AppError::Storage(_) => (500, "STORAGE_ERROR", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::UnsupportedFileType(_) => "UnsupportedFileType",
            AppError::InvalidImage(_) => "InvalidImage",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::UnsupportedFileType(ref msg) => msg.clone(),
            AppError::InvalidImage(ref msg) => msg.clone(),
            AppError::Storage(_) => "Failed to store image".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}
