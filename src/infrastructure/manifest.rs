//! Project tree construction from a manifest

use crate::config::{AccessorMode, ModuleSpec, ProjectSection};
use crate::domain::entities::{Module, ProjectTree};
use crate::error::BuildNormResult;

use super::extension::DeclaredExtension;

/// Build a validated project tree from the `[project]` table.
///
/// The root module carries no capabilities or configuration object.
pub fn project_tree_from_manifest(project: &ProjectSection) -> BuildNormResult<ProjectTree> {
    let root = Module::new(&project.root);
    let subprojects = project.modules.iter().map(module_from_spec).collect();
    ProjectTree::new(root, subprojects)
}

fn module_from_spec(spec: &ModuleSpec) -> Module {
    let mut module = Module::new(&spec.name);
    for capability in &spec.capabilities {
        module = module.with_capability(capability.as_str());
    }

    if spec.accessors != AccessorMode::None {
        module = module.with_extension(DeclaredExtension::new(
            spec.namespace.clone(),
            spec.accessors,
        ));
    }

    module
}
