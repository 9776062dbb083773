//! Module entity - a named unit of the project tree

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::ports::ModuleExtension;
use crate::domain::value_objects::Capability;

/// A project module with its declared capabilities and configuration object
#[derive(Debug)]
pub struct Module {
    name: String,
    capabilities: BTreeSet<Capability>,
    extension: Option<Box<dyn ModuleExtension>>,
    output_dir: Option<PathBuf>,
    repositories: Vec<String>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: BTreeSet::new(),
            extension: None,
            output_dir: None,
            repositories: Vec::new(),
        }
    }

    /// Builder method to declare a capability
    pub fn with_capability(mut self, capability: impl Into<Capability>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    /// Builder method to attach the plugin configuration object
    pub fn with_extension(mut self, extension: impl ModuleExtension + 'static) -> Self {
        self.extension = Some(Box::new(extension));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> &BTreeSet<Capability> {
        &self.capabilities
    }

    /// Returns true if any declared capability marks a library
    pub fn is_library(&self) -> bool {
        self.capabilities.iter().any(Capability::is_library)
    }

    pub fn extension(&self) -> Option<&dyn ModuleExtension> {
        self.extension.as_deref()
    }

    pub fn extension_mut(&mut self) -> Option<&mut (dyn ModuleExtension + 'static)> {
        self.extension.as_deref_mut()
    }

    /// Current namespace as reported by the extension's getter.
    ///
    /// Missing extension, missing getter or a failing getter all read as `None`.
    pub fn namespace(&self) -> Option<String> {
        let getter = self.extension()?.namespace_getter().ok()?;
        getter.get_namespace().ok().flatten()
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub(crate) fn set_output_dir(&mut self, dir: PathBuf) {
        self.output_dir = Some(dir);
    }

    /// Artifact repositories declared for this module, in order
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }

    pub(crate) fn set_repositories(&mut self, repositories: Vec<String>) {
        self.repositories = repositories;
    }
}
