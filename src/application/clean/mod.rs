//! Clean Task
//!
//! Removes the redirected root output directory (which contains every
//! subproject's output directory). Tolerates an already absent directory.

mod result;
mod task;

pub use result::CleanOutcome;
pub use task::CleanTask;
