//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod namespace_normalizer;
mod order_registry;
mod path_planner;

pub use namespace_normalizer::{NamespaceNormalizer, NormalizeOutcome};
pub use order_registry::{OrderConstraint, OrderConstraintRegistry};
pub use path_planner::PathPlanner;
