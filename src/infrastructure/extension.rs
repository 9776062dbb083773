//! Manifest-declared module extension
//!
//! Stands in for a plugin configuration object when the project tree is
//! described by a manifest. The declared accessor mode decides which
//! namespace accessors the object exposes.

use crate::config::AccessorMode;
use crate::domain::ports::{
    AccessorError, ModuleExtension, NamespaceGetter, NamespaceSetter, ProbeError,
};

/// Extension name, after the plugin block it models
pub const EXTENSION_NAME: &str = "android";

/// Configuration object built from a `[[project.modules]]` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredExtension {
    namespace: Option<String>,
    mode: AccessorMode,
}

impl DeclaredExtension {
    pub fn new(namespace: Option<String>, mode: AccessorMode) -> Self {
        Self { namespace, mode }
    }
}

impl NamespaceGetter for DeclaredExtension {
    fn get_namespace(&self) -> Result<Option<String>, AccessorError> {
        Ok(self.namespace.clone())
    }
}

impl NamespaceSetter for DeclaredExtension {
    fn set_namespace(&mut self, namespace: &str) -> Result<(), AccessorError> {
        self.namespace = Some(namespace.to_string());
        Ok(())
    }
}

impl ModuleExtension for DeclaredExtension {
    fn name(&self) -> &str {
        EXTENSION_NAME
    }

    fn namespace_getter(&self) -> Result<&dyn NamespaceGetter, ProbeError> {
        if self.mode.can_read() {
            Ok(self)
        } else {
            Err(ProbeError::Absent)
        }
    }

    fn namespace_setter(&mut self) -> Result<&mut dyn NamespaceSetter, ProbeError> {
        if self.mode.can_write() {
            Ok(self)
        } else {
            Err(ProbeError::Absent)
        }
    }
}
