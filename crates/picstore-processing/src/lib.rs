//! Upload validation and image normalization.
//!
//! The entry point is [`process_upload`]: size gate, extension gate,
//! decode, color-mode flattening, width capping, JPEG re-encode, and
//! persistence into the local store, in that order. Every gate fails
//! terminally; no file is written unless all gates pass.

pub mod image;
pub mod upload;
pub mod validator;

pub use upload::process_upload;
pub use validator::{UploadValidator, ValidationError};
