//! Upload pipeline: validate → decode → normalize → store.
//!
//! One straight-line sequence with early-exit failure at each gate. No
//! retries; a failed call leaves no partial state behind, and concurrent
//! calls are isolated by UUID naming rather than locking.

use picstore_core::{AppError, UploadConfig};
use picstore_storage::ImageStore;
use uuid::Uuid;

use crate::image::{ImageRenderer, RenderedImage};
use crate::validator::UploadValidator;

/// Run the upload pipeline and return the generated stored filename.
///
/// The stored name is `{uuid}.{claimed extension}` even though content is
/// always re-encoded to JPEG; callers that need the true content format
/// must rely on the bytes, not the suffix.
pub async fn process_upload(
    data: Vec<u8>,
    original_filename: &str,
    config: &UploadConfig,
    store: &ImageStore,
) -> Result<String, AppError> {
    let start = std::time::Instant::now();

    let validator = UploadValidator::new(
        config.max_file_size_bytes,
        config.allowed_extensions.clone(),
    );
    validator.validate_size(data.len())?;
    let extension = validator.validate_extension(original_filename)?;

    let stored_filename = format!("{}.{}", Uuid::new_v4(), extension);

    let original_size = data.len();
    let max_width = config.max_width;
    let quality = config.jpeg_quality;

    // Decode and re-encode are CPU-bound; run off the async pool.
    let rendered =
        tokio::task::spawn_blocking(move || ImageRenderer::render(&data, max_width, quality))
            .await
            .map_err(|e| AppError::Internal(format!("Image task failed: {}", e)))?
            .map_err(|e| AppError::InvalidImage(e.to_string()))?;

    let RenderedImage {
        data: encoded,
        width,
        height,
    } = rendered;
    let encoded_size = encoded.len();

    store.save(&stored_filename, encoded).await?;

    tracing::info!(
        filename = %stored_filename,
        original_filename = %original_filename,
        width = width,
        height = height,
        original_size_bytes = original_size,
        stored_size_bytes = encoded_size,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Upload processed"
    );

    Ok(stored_filename)
}
