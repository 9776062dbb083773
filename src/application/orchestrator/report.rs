//! Run Report
//!
//! Serializable view of a finished configuration pass, used by the CLI for
//! both text and JSON output.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::ProjectTree;
use crate::domain::services::{NormalizeOutcome, OrderConstraint};

use super::context::BuildContext;

/// Per-module section of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    pub name: String,
    pub output_dir: Option<PathBuf>,
    pub capabilities: Vec<String>,
    pub namespace: Option<String>,
    /// `None` for the root, which is never normalized
    pub normalization: Option<NormalizeOutcome>,
    pub repositories: Vec<String>,
}

/// Everything the host needs to apply after a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub root: String,
    pub modules: Vec<ModuleReport>,
    pub constraints: Vec<OrderConstraint>,
    pub clean_target: Option<PathBuf>,
}

impl RunReport {
    pub fn new(tree: &ProjectTree, ctx: &BuildContext) -> Self {
        let modules = tree
            .modules()
            .map(|module| ModuleReport {
                name: module.name().to_string(),
                output_dir: module.output_dir().map(|p| p.to_path_buf()),
                capabilities: module
                    .capabilities()
                    .iter()
                    .map(|c| c.as_str().to_string())
                    .collect(),
                namespace: module.namespace(),
                normalization: ctx.normalization_for(module.name()).cloned(),
                repositories: module.repositories().to_vec(),
            })
            .collect();

        Self {
            root: ctx.root().to_string(),
            modules,
            constraints: ctx.constraints().as_slice().to_vec(),
            clean_target: ctx.clean_task().map(|t| t.output_dir().to_path_buf()),
        }
    }

    /// Number of modules whose namespace was derived in this run
    pub fn applied_count(&self) -> usize {
        self.modules
            .iter()
            .filter(|m| m.normalization.as_ref().is_some_and(|n| n.is_applied()))
            .count()
    }
}
