//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod capability;
mod config_warning;
pub mod namespace;
mod path;

pub use capability::Capability;
pub use config_warning::ConfigWarning;
pub use namespace::{fallback_namespace, sanitize};
pub use path::{normalize_lexically, PathError, PathSegment};
