//! Configuration module
//!
//! This module provides the upload processing configuration. Limits are an
//! explicit structure handed to the processor rather than hidden globals,
//! so tests can run the pipeline with varied thresholds.

use std::env;
use std::path::PathBuf;

const MAX_FILE_SIZE_MB: usize = 5;
const MAX_IMAGE_WIDTH: u32 = 800;
const JPEG_QUALITY: u8 = 85;
const UPLOAD_DIR: &str = "uploads";

/// Upload processing configuration.
///
/// Defaults: 5 MiB size cap, `png/jpg/jpeg/gif` extensions, 800px width
/// ceiling, JPEG quality 85, relative `uploads` directory.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub max_file_size_bytes: usize,
    pub allowed_extensions: Vec<String>,
    pub max_width: u32,
    pub jpeg_quality: u8,
    pub upload_dir: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            max_file_size_bytes: MAX_FILE_SIZE_MB * 1024 * 1024,
            allowed_extensions: ["png", "jpg", "jpeg", "gif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_width: MAX_IMAGE_WIDTH,
            jpeg_quality: JPEG_QUALITY,
            upload_dir: PathBuf::from(UPLOAD_DIR),
        }
    }
}

impl UploadConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_FILE_SIZE_MB);

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| "png,jpg,jpeg,gif".to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let config = UploadConfig {
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            allowed_extensions,
            max_width: env::var("MAX_IMAGE_WIDTH")
                .unwrap_or_else(|_| MAX_IMAGE_WIDTH.to_string())
                .parse()
                .unwrap_or(MAX_IMAGE_WIDTH),
            jpeg_quality: env::var("JPEG_QUALITY")
                .unwrap_or_else(|_| JPEG_QUALITY.to_string())
                .parse()
                .unwrap_or(JPEG_QUALITY),
            upload_dir: PathBuf::from(
                env::var("UPLOAD_DIR").unwrap_or_else(|_| UPLOAD_DIR.to_string()),
            ),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        if self.max_width == 0 {
            return Err(anyhow::anyhow!("MAX_IMAGE_WIDTH must be greater than 0"));
        }

        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(anyhow::anyhow!("JPEG_QUALITY must be between 1 and 100"));
        }

        if self.allowed_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS must contain at least one extension"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_limits() {
        let config = UploadConfig::default();
        assert_eq!(config.max_file_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.max_width, 800);
        assert_eq!(config.jpeg_quality, 85);
        assert_eq!(
            config.allowed_extensions,
            vec!["png", "jpg", "jpeg", "gif"]
        );
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_width() {
        let config = UploadConfig {
            max_width: 0,
            ..UploadConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_quality() {
        let config = UploadConfig {
            jpeg_quality: 0,
            ..UploadConfig::default()
        };
        assert!(config.validate().is_err());

        let config = UploadConfig {
            jpeg_quality: 101,
            ..UploadConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_allow_list() {
        let config = UploadConfig {
            allowed_extensions: vec![],
            ..UploadConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
