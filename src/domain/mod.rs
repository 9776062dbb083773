//! Domain Layer
//!
//! Pure build-configuration logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Module, ProjectTree, PathPlan
//! - `value_objects/` - Capability, PathSegment, namespace rules
//! - `services/` - PathPlanner, OrderConstraintRegistry, NamespaceNormalizer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Plugin objects and file removal go through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
