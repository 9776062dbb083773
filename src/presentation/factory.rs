//! Use case factory
//!
//! Loads the manifest, layers settings, and wires the orchestrator with its
//! project tree.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::Orchestrator;
use crate::config::{self, ConfigWarning};
use crate::domain::entities::ProjectTree;
use crate::error::BuildNormResult;
use crate::infrastructure::project_tree_from_manifest;

/// Settings supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_dir: Option<PathBuf>,
    pub namespace_template: Option<String>,
}

/// A loaded project ready to run
#[derive(Debug)]
pub struct PreparedRun {
    pub tree: ProjectTree,
    pub orchestrator: Orchestrator,
    pub warnings: Vec<ConfigWarning>,
}

/// Load `manifest_path` and build the orchestrator for it.
///
/// Relative manifest and CLI paths resolve against `cwd`; relative paths in
/// the manifest or environment resolve against the manifest's directory.
pub fn prepare_run(
    manifest_path: &Path,
    overrides: &CliOverrides,
    cwd: &Path,
) -> BuildNormResult<PreparedRun> {
    let manifest_path = cwd.join(manifest_path);
    let (manifest, warnings) = config::load_with_warnings(&manifest_path)?;

    let mut settings = config::with_env_overrides(manifest.settings);
    if let Some(base_dir) = &overrides.base_dir {
        settings.base_directory = cwd.join(base_dir);
    }
    if let Some(template) = &overrides.namespace_template {
        settings.fallback_namespace_template = template.clone();
    }

    let manifest_dir = manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());
    debug!(manifest = %manifest_path.display(), ?settings, "resolved settings");

    let tree = project_tree_from_manifest(&manifest.project)?;
    let orchestrator = Orchestrator::new(settings.to_run_options(&manifest_dir))?;

    Ok(PreparedRun {
        tree,
        orchestrator,
        warnings,
    })
}
