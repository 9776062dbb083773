//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Orchestrator` - One configuration pass over a project tree
//! - `CleanTask` - Deletes the redirected root output directory

pub mod clean;
pub mod orchestrator;

pub use clean::{CleanOutcome, CleanTask};
pub use orchestrator::{BuildContext, Orchestrator, RunOptions, RunReport};
