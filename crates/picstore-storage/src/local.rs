use bytes::Bytes;
use picstore_core::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Storage operation errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Upload directory does not exist: {0}")]
    MissingDirectory(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Local filesystem image store.
///
/// Writes one file per successful upload into a fixed directory. The
/// directory must exist before construction; provisioning it is the
/// deployment's responsibility, not this component's.
#[derive(Clone)]
pub struct ImageStore {
    base_path: PathBuf,
}

impl ImageStore {
    pub fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        if !base_path.is_dir() {
            return Err(StorageError::MissingDirectory(
                base_path.display().to_string(),
            ));
        }

        Ok(ImageStore { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a stored filename to its filesystem path.
    ///
    /// Generated names are flat (`{uuid}.{ext}`); anything that could
    /// escape the upload directory is rejected.
    fn filename_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }

        Ok(self.base_path.join(filename))
    }

    /// Write encoded image bytes under the given filename.
    pub async fn save(&self, filename: &str, data: Bytes) -> StorageResult<()> {
        let path = self.filename_to_path(filename)?;
        let size = data.len();
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            filename = %filename,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Image stored"
        );

        Ok(())
    }

    /// Read a stored file back.
    pub async fn load(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let path = self.filename_to_path(filename)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(filename.to_string()));
        }

        fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })
    }

    pub async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.filename_to_path(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = ImageStore::new(&missing);
        assert!(matches!(result, Err(StorageError::MissingDirectory(_))));
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = ImageStore::new(dir.path()).unwrap();

        let data = Bytes::from_static(b"jpeg bytes");
        store.save("abc.png", data.clone()).await.unwrap();

        assert!(store.exists("abc.png").await.unwrap());
        let loaded = store.load("abc.png").await.unwrap();
        assert_eq!(loaded, data);
    }

    #[tokio::test]
    async fn test_traversal_filenames_rejected() {
        let dir = tempdir().unwrap();
        let store = ImageStore::new(dir.path()).unwrap();

        let result = store.save("../escape.png", Bytes::from_static(b"x")).await;
        assert!(matches!(result, Err(StorageError::InvalidFilename(_))));

        let result = store.load("a/b.png").await;
        assert!(matches!(result, Err(StorageError::InvalidFilename(_))));

        let result = store.exists("..\\b.png").await;
        assert!(matches!(result, Err(StorageError::InvalidFilename(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let store = ImageStore::new(dir.path()).unwrap();

        let result = store.load("nope.jpg").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }
}
