//! Domain Entities
//!
//! Core domain entities constructed fresh for every build invocation.
//! - `Module` - A named unit of the project tree
//! - `ProjectTree` - Root module plus ordered subprojects
//! - `PathPlan` - Resolved output directory per module

mod module;
mod path_plan;
mod project_tree;

pub use module::Module;
pub use path_plan::{PathPlan, PlannedPath};
pub use project_tree::ProjectTree;
