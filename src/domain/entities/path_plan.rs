//! PathPlan entity - resolved output directory per module

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Mapping from module name to its resolved output directory.
///
/// Keeps insertion order: root first, then subprojects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathPlan {
    entries: Vec<PlannedPath>,
}

/// One resolved output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedPath {
    pub module: String,
    pub output_dir: PathBuf,
}

impl PathPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the output directory of a module
    pub fn insert(&mut self, module: impl Into<String>, output_dir: PathBuf) {
        let module = module.into();
        match self.entries.iter_mut().find(|e| e.module == module) {
            Some(entry) => entry.output_dir = output_dir,
            None => self.entries.push(PlannedPath { module, output_dir }),
        }
    }

    pub fn get(&self, module: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|e| e.module == module)
            .map(|e| e.output_dir.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedPath> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
