//! Orchestrator Use Case
//!
//! Runs one configuration pass over a project tree, in a fixed order:
//! 1. declare repositories on every module
//! 2. plan and assign output directories (fatal on failure)
//! 3. register evaluation-order constraints
//! 4. normalize subproject namespaces (per-module best effort)
//! 5. register the clean task for the root output directory

use std::path::PathBuf;

use tracing::{debug, info};

use crate::application::clean::CleanTask;
use crate::domain::entities::ProjectTree;
use crate::domain::services::{NamespaceNormalizer, PathPlanner};
use crate::error::{BuildNormError, BuildNormResult};

use super::context::BuildContext;
use super::options::RunOptions;

/// Wires path planning, order constraints, namespace normalization and
/// clean-task registration together
#[derive(Debug, Clone)]
pub struct Orchestrator {
    options: RunOptions,
    planner: PathPlanner,
    normalizer: NamespaceNormalizer,
}

impl Orchestrator {
    /// Fails only if the configured build directory name is unusable
    pub fn new(options: RunOptions) -> BuildNormResult<Self> {
        let planner =
            PathPlanner::new(&options.working_dir).with_build_dir(&options.default_build_dir)?;
        let normalizer = NamespaceNormalizer::new(&options.fallback_template);

        Ok(Self {
            options,
            planner,
            normalizer,
        })
    }

    /// Run the configuration pass.
    ///
    /// Path failures abort before any module is modified. Namespace
    /// normalization never fails the run.
    pub fn run(&self, tree: &mut ProjectTree) -> BuildNormResult<BuildContext> {
        let anchor = self.resolve_anchor(tree)?;
        let planned = self.plan_paths(tree)?;

        let mut ctx = BuildContext::new(tree.root().name());

        self.declare_repositories(tree);
        self.assign_paths(tree, planned, &mut ctx);
        self.register_order(tree, &anchor, &mut ctx);
        self.normalize_namespaces(tree, &mut ctx);
        self.register_clean(tree, &mut ctx);

        info!(
            root = ctx.root(),
            modules = ctx.path_plan().len(),
            constraints = ctx.constraints().len(),
            "configuration pass complete"
        );

        Ok(ctx)
    }

    fn resolve_anchor(&self, tree: &ProjectTree) -> BuildNormResult<String> {
        match &self.options.evaluation_anchor {
            Some(anchor) if tree.contains(anchor) => Ok(anchor.clone()),
            Some(anchor) => Err(BuildNormError::UnknownAnchor {
                name: anchor.clone(),
            }),
            None => Ok(tree.root().name().to_string()),
        }
    }

    /// Compute every output path up front so a failure leaves the tree untouched
    fn plan_paths(&self, tree: &ProjectTree) -> BuildNormResult<Vec<(String, PathBuf)>> {
        let root_path = self
            .planner
            .plan_root_path(&self.options.base_dir, &self.options.output_segments)?;
        debug!(path = %root_path.display(), "planned root output directory");

        let mut planned = Vec::with_capacity(tree.subprojects().len() + 1);
        for module in tree.subprojects() {
            let path = self.planner.plan_subproject_path(&root_path, module.name())?;
            planned.push((module.name().to_string(), path));
        }
        planned.insert(0, (tree.root().name().to_string(), root_path));

        Ok(planned)
    }

    fn assign_paths(
        &self,
        tree: &mut ProjectTree,
        planned: Vec<(String, PathBuf)>,
        ctx: &mut BuildContext,
    ) {
        for (module, (name, path)) in tree.modules_mut().zip(planned) {
            module.set_output_dir(path.clone());
            ctx.path_plan_mut().insert(name, path);
        }
    }

    fn declare_repositories(&self, tree: &mut ProjectTree) {
        let mut repositories: Vec<String> = Vec::with_capacity(self.options.repositories.len());
        for repo in &self.options.repositories {
            if !repositories.contains(repo) {
                repositories.push(repo.clone());
            }
        }

        for module in tree.modules_mut() {
            module.set_repositories(repositories.clone());
        }
    }

    fn register_order(&self, tree: &ProjectTree, anchor: &str, ctx: &mut BuildContext) {
        for module in tree.subprojects() {
            if module.name() == anchor {
                continue;
            }
            ctx.constraints_mut().add_constraint(module.name(), anchor);
        }
    }

    fn normalize_namespaces(&self, tree: &mut ProjectTree, ctx: &mut BuildContext) {
        for module in tree.subprojects_mut() {
            let outcome = self.normalizer.normalize(module);
            if outcome.is_applied() {
                info!(module = module.name(), namespace = ?module.namespace(), "derived namespace");
            }
            ctx.record_normalization(module.name(), outcome);
        }
    }

    fn register_clean(&self, tree: &ProjectTree, ctx: &mut BuildContext) {
        if let Some(root_dir) = tree.root().output_dir() {
            ctx.register_clean_task(CleanTask::new(root_dir));
        }
    }
}
