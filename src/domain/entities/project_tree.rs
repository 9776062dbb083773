//! ProjectTree entity - a root module plus its ordered subprojects

use std::collections::HashSet;

use crate::domain::value_objects::PathSegment;
use crate::error::{BuildNormError, BuildNormResult};

use super::Module;

/// Root module and subprojects of one build invocation
///
/// Invariants (checked by [`ProjectTree::new`]):
/// - every module name is usable as a single directory name
/// - subproject names are unique
/// - the root is never one of the subprojects
#[derive(Debug)]
pub struct ProjectTree {
    root: Module,
    subprojects: Vec<Module>,
}

impl ProjectTree {
    pub fn new(root: Module, subprojects: Vec<Module>) -> BuildNormResult<Self> {
        validate_name(root.name())?;

        let mut seen = HashSet::new();
        for module in &subprojects {
            validate_name(module.name())?;
            if module.name() == root.name() {
                return Err(BuildNormError::RootInSubprojects {
                    name: module.name().to_string(),
                });
            }
            if !seen.insert(module.name()) {
                return Err(BuildNormError::DuplicateModule {
                    name: module.name().to_string(),
                });
            }
        }

        Ok(Self { root, subprojects })
    }

    pub fn root(&self) -> &Module {
        &self.root
    }

    pub fn subprojects(&self) -> &[Module] {
        &self.subprojects
    }

    pub fn subprojects_mut(&mut self) -> &mut [Module] {
        &mut self.subprojects
    }

    /// Root first, then subprojects in declaration order
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        std::iter::once(&self.root).chain(self.subprojects.iter())
    }

    pub fn modules_mut(&mut self) -> impl Iterator<Item = &mut Module> {
        std::iter::once(&mut self.root).chain(self.subprojects.iter_mut())
    }

    /// Look up a module (root or subproject) by name
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules().find(|m| m.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.module(name).is_some()
    }
}

fn validate_name(name: &str) -> BuildNormResult<()> {
    PathSegment::directory_name(name).map_err(|e| BuildNormError::InvalidModuleName {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
