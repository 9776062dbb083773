//! ModuleExtension port - a module's plugin-provided configuration object
//!
//! Plugins attach configuration objects with differing shapes. Instead of
//! looking methods up at runtime, an extension advertises the namespace
//! accessors it supports through typed optional-capability probes. Each
//! probe and each accessor returns a `Result`; callers decide whether a
//! failure matters.

use std::fmt;

/// Why a capability probe did not yield an accessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The extension does not expose this accessor
    Absent,
    /// The extension failed while being probed
    Failed(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Absent => write!(f, "accessor not exposed"),
            ProbeError::Failed(msg) => write!(f, "capability probe failed: {}", msg),
        }
    }
}

impl std::error::Error for ProbeError {}

/// An accessor was found but invoking it failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorError {
    pub message: String,
}

impl AccessorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for AccessorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "accessor invocation failed: {}", self.message)
    }
}

impl std::error::Error for AccessorError {}

/// Zero-argument "get namespace" accessor
pub trait NamespaceGetter {
    /// `Ok(None)` means the namespace is not set
    fn get_namespace(&self) -> Result<Option<String>, AccessorError>;
}

/// One-argument "set namespace" accessor
pub trait NamespaceSetter {
    fn set_namespace(&mut self, namespace: &str) -> Result<(), AccessorError>;
}

/// A plugin configuration object attached to a module
///
/// Both probes default to [`ProbeError::Absent`], so an extension only
/// implements the accessors it actually has.
pub trait ModuleExtension: fmt::Debug {
    /// Name the plugin registered the extension under (e.g. `android`)
    fn name(&self) -> &str;

    fn namespace_getter(&self) -> Result<&dyn NamespaceGetter, ProbeError> {
        Err(ProbeError::Absent)
    }

    fn namespace_setter(&mut self) -> Result<&mut dyn NamespaceSetter, ProbeError> {
        Err(ProbeError::Absent)
    }
}
