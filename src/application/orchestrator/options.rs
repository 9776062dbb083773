//! Orchestrator Options
//!
//! Fully resolved inputs for one run. Layering of manifest, environment and
//! CLI values happens in `config`; by the time options reach the
//! orchestrator every value is final.

use std::path::PathBuf;

use crate::domain::value_objects::namespace::DEFAULT_TEMPLATE;

/// Conventional build directory name of a project
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Segments redirecting the root output two levels above the project
pub const DEFAULT_OUTPUT_SEGMENTS: &[&str] = &["..", "..", "build"];

/// Artifact repositories declared for every module
pub const DEFAULT_REPOSITORIES: &[&str] = &["google", "mavenCentral"];

/// Options for the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Project base directory (may be relative to `working_dir`)
    pub base_dir: PathBuf,
    /// Anchor for relative paths
    pub working_dir: PathBuf,
    /// Directory name `output_segments` are resolved against (empty = base_dir)
    pub default_build_dir: String,
    /// Path components appended to compute the root output directory
    pub output_segments: Vec<String>,
    /// Prefix for derived namespaces
    pub fallback_template: String,
    /// Module every subproject is evaluated after (None = root)
    pub evaluation_anchor: Option<String>,
    /// Repositories declared for every module, in order
    pub repositories: Vec<String>,
}

impl RunOptions {
    pub fn new(base_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            working_dir: working_dir.into(),
            default_build_dir: DEFAULT_BUILD_DIR.to_string(),
            output_segments: DEFAULT_OUTPUT_SEGMENTS.iter().map(|s| s.to_string()).collect(),
            fallback_template: DEFAULT_TEMPLATE.to_string(),
            evaluation_anchor: None,
            repositories: DEFAULT_REPOSITORIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Set the fallback namespace template
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.fallback_template = template.into();
        self
    }

    /// Set the output segments
    pub fn with_output_segments(mut self, segments: Vec<String>) -> Self {
        self.output_segments = segments;
        self
    }

    /// Set the conventional build directory name
    pub fn with_build_dir(mut self, name: impl Into<String>) -> Self {
        self.default_build_dir = name.into();
        self
    }

    /// Set the evaluation anchor
    pub fn with_anchor(mut self, anchor: Option<String>) -> Self {
        self.evaluation_anchor = anchor;
        self
    }

    /// Set the declared repositories
    pub fn with_repositories(mut self, repositories: Vec<String>) -> Self {
        self.repositories = repositories;
        self
    }
}
