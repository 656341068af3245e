use picstore_core::AppError;

/// Validation errors for uploaded files
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("File type not allowed: {extension} (allowed: {allowed:?})")]
    DisallowedExtension {
        extension: String,
        allowed: Vec<String>,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::FileTooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            ValidationError::InvalidFilename(_) | ValidationError::DisallowedExtension { .. } => {
                AppError::UnsupportedFileType(err.to_string())
            }
        }
    }
}

/// Upload validator
///
/// Provides the pre-decode gates: byte-length ceiling and claimed-filename
/// extension allow-list.
pub struct UploadValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_file_size: usize, allowed_extensions: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_extensions,
        }
    }

    /// Validate file size. Runs before any other gate so oversized payloads
    /// never reach the decoder.
    pub fn validate_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate the claimed filename's extension and return it lower-cased.
    ///
    /// Name-based check only: the suffix after the last `.` is never matched
    /// against file content, so a mismatched pair still reaches the decode
    /// gate.
    pub fn validate_extension(&self, filename: &str) -> Result<String, ValidationError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty())
            .ok_or_else(|| ValidationError::InvalidFilename(filename.to_string()))?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::DisallowedExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(extension)
    }
}
