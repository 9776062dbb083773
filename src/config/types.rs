//! Manifest type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::orchestrator::{
    RunOptions, DEFAULT_BUILD_DIR, DEFAULT_OUTPUT_SEGMENTS, DEFAULT_REPOSITORIES,
};
use crate::domain::value_objects::namespace::DEFAULT_TEMPLATE;

/// Run settings (`[settings]` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Project base directory; relative paths resolve against the manifest
    #[serde(default = "default_base_directory")]
    pub base_directory: PathBuf,

    #[serde(default = "default_template")]
    pub fallback_namespace_template: String,

    #[serde(default = "default_output_segments")]
    pub output_segments: Vec<String>,

    #[serde(default = "default_build_dir")]
    pub default_build_dir: String,

    #[serde(default)]
    pub evaluation_anchor: Option<String>,

    #[serde(default = "default_repositories")]
    pub repositories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_directory: default_base_directory(),
            fallback_namespace_template: default_template(),
            output_segments: default_output_segments(),
            default_build_dir: default_build_dir(),
            evaluation_anchor: None,
            repositories: default_repositories(),
        }
    }
}

impl Settings {
    /// Resolve into orchestrator options; relative paths anchor at `manifest_dir`
    pub fn to_run_options(&self, manifest_dir: &Path) -> RunOptions {
        RunOptions::new(&self.base_directory, manifest_dir)
            .with_template(&self.fallback_namespace_template)
            .with_output_segments(self.output_segments.clone())
            .with_build_dir(&self.default_build_dir)
            .with_anchor(self.evaluation_anchor.clone())
            .with_repositories(self.repositories.clone())
    }
}

fn default_base_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_output_segments() -> Vec<String> {
    DEFAULT_OUTPUT_SEGMENTS.iter().map(|s| s.to_string()).collect()
}

fn default_build_dir() -> String {
    DEFAULT_BUILD_DIR.to_string()
}

fn default_repositories() -> Vec<String> {
    DEFAULT_REPOSITORIES.iter().map(|s| s.to_string()).collect()
}

/// Which namespace accessors a module's configuration object exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AccessorMode {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
    /// No configuration object at all
    None,
}

impl AccessorMode {
    pub fn can_read(&self) -> bool {
        matches!(self, AccessorMode::ReadWrite | AccessorMode::ReadOnly)
    }

    pub fn can_write(&self) -> bool {
        matches!(self, AccessorMode::ReadWrite | AccessorMode::WriteOnly)
    }
}

/// One `[[project.modules]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub name: String,

    #[serde(default)]
    pub capabilities: Vec<String>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub accessors: AccessorMode,
}

/// `[project]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    pub root: String,

    #[serde(default)]
    pub modules: Vec<ModuleSpec>,
}

/// A parsed `buildnorm.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub settings: Settings,

    pub project: ProjectSection,
}
