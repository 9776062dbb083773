//! Orchestrator Use Case
//!
//! Applies path planning, order constraints, namespace normalization and
//! clean-task registration to a whole project tree.

mod context;
mod options;
mod report;
mod use_case;

pub use context::{BuildContext, ModuleNormalization};
pub use options::{RunOptions, DEFAULT_BUILD_DIR, DEFAULT_OUTPUT_SEGMENTS, DEFAULT_REPOSITORIES};
pub use report::{ModuleReport, RunReport};
pub use use_case::Orchestrator;
