//! buildnorm - build configuration normalizer
//!
//! Walks the modules of a project, redirects their output directories under
//! one shared build directory, records evaluation-order constraints,
//! derives missing namespaces for library modules, and registers a clean
//! task for the redirected output.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildContext, CleanOutcome, CleanTask, Orchestrator, RunOptions, RunReport};
pub use config::{Manifest, Settings};
pub use domain::entities::{Module, ProjectTree};
pub use domain::services::{NamespaceNormalizer, NormalizeOutcome, PathPlanner};
pub use domain::value_objects::sanitize;
pub use error::{BuildNormError, BuildNormResult};
