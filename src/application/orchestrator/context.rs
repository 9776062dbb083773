//! Build Context
//!
//! Everything one orchestrator pass produces for the host: resolved output
//! paths, order constraints, normalization outcomes and the registered
//! clean task. Created fresh per invocation, never shared.

use crate::application::clean::CleanTask;
use crate::domain::entities::PathPlan;
use crate::domain::services::{NormalizeOutcome, OrderConstraintRegistry};

/// Normalization outcome of one subproject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNormalization {
    pub module: String,
    pub outcome: NormalizeOutcome,
}

/// Per-invocation build state
#[derive(Debug, Clone)]
pub struct BuildContext {
    root: String,
    path_plan: PathPlan,
    constraints: OrderConstraintRegistry,
    normalizations: Vec<ModuleNormalization>,
    clean_task: Option<CleanTask>,
}

impl BuildContext {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            path_plan: PathPlan::new(),
            constraints: OrderConstraintRegistry::new(),
            normalizations: Vec::new(),
            clean_task: None,
        }
    }

    /// Name of the root module
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn path_plan(&self) -> &PathPlan {
        &self.path_plan
    }

    pub(crate) fn path_plan_mut(&mut self) -> &mut PathPlan {
        &mut self.path_plan
    }

    pub fn constraints(&self) -> &OrderConstraintRegistry {
        &self.constraints
    }

    pub(crate) fn constraints_mut(&mut self) -> &mut OrderConstraintRegistry {
        &mut self.constraints
    }

    pub fn normalizations(&self) -> &[ModuleNormalization] {
        &self.normalizations
    }

    /// Outcome recorded for `module`, if it was normalized
    pub fn normalization_for(&self, module: &str) -> Option<&NormalizeOutcome> {
        self.normalizations
            .iter()
            .find(|n| n.module == module)
            .map(|n| &n.outcome)
    }

    pub(crate) fn record_normalization(
        &mut self,
        module: impl Into<String>,
        outcome: NormalizeOutcome,
    ) {
        self.normalizations.push(ModuleNormalization {
            module: module.into(),
            outcome,
        });
    }

    pub fn clean_task(&self) -> Option<&CleanTask> {
        self.clean_task.as_ref()
    }

    pub(crate) fn register_clean_task(&mut self, task: CleanTask) {
        self.clean_task = Some(task);
    }
}
