//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `extension` - Manifest-declared module configuration objects
//! - `manifest` - Project tree construction from a manifest

pub mod extension;
pub mod fs;
pub mod manifest;

// Re-export for convenience
pub use extension::DeclaredExtension;
pub use fs::LocalFs;
pub use manifest::project_tree_from_manifest;
