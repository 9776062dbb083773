//! Configuration module for buildnorm
//!
//! Settings hierarchy (highest wins):
//! 1. CLI flags
//! 2. Environment variables (BUILDNORM_*)
//! 3. `[settings]` table of the manifest
//! 4. Built-in defaults

mod loader;
mod types;

use std::path::Path;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{
    load_with_warnings, parse_with_warnings, with_env_overrides, with_overrides_from,
    MANIFEST_FILE,
};
pub use types::{AccessorMode, Manifest, ModuleSpec, ProjectSection, Settings};

use crate::error::BuildNormResult;

impl Manifest {
    /// Load a manifest, discarding unknown-key warnings
    pub fn load(path: &Path) -> BuildNormResult<Self> {
        load_with_warnings(path).map(|(manifest, _)| manifest)
    }
}
