//! Error types for buildnorm
//!
//! Only fatal conditions live here. Probe and accessor failures on module
//! configuration objects are absorbed inside the namespace normalizer and
//! never surface as a `BuildNormError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::PathError;

/// Result type alias for buildnorm operations
pub type BuildNormResult<T> = Result<T, BuildNormError>;

/// Main error type for buildnorm operations
#[derive(Error, Debug)]
pub enum BuildNormError {
    /// An output path could not be computed (aborts the whole run)
    #[error("invalid output path: {0}")]
    InvalidPath(#[from] PathError),

    /// Module name cannot be used as a directory name
    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    /// Two subprojects share a name
    #[error("duplicate subproject '{name}'")]
    DuplicateModule { name: String },

    /// The root module was also listed as a subproject
    #[error("root module '{name}' must not be listed as a subproject")]
    RootInSubprojects { name: String },

    /// Evaluation anchor does not name any module in the tree
    #[error("evaluation anchor '{name}' is not a module of this project")]
    UnknownAnchor { name: String },

    /// Manifest file does not exist
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest could not be parsed
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
