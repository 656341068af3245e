//! Local-filesystem persistence for processed images.
//!
//! The upload directory is a deployment precondition: [`ImageStore::new`]
//! verifies it exists and never creates it. Writes are append-only (new
//! distinct filenames); there is no delete operation.

pub mod local;

pub use local::{ImageStore, StorageError, StorageResult};
