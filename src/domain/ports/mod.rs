//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod module_extension;

pub use file_system::{FileSystem, FsError, FsResult};
pub use module_extension::{
    AccessorError, ModuleExtension, NamespaceGetter, NamespaceSetter, ProbeError,
};
