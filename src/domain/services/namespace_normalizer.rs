//! Namespace normalization service
//!
//! Library modules must carry a namespace. Plugins do not always declare
//! one, so a fallback is derived from the module name when the module's
//! configuration object lets us read and write it. Everything here is best
//! effort: probe and accessor failures are logged and absorbed, never
//! returned.

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::Module;
use crate::domain::value_objects::namespace::{fallback_namespace, is_unset};

/// What normalization did to one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "namespace", rename_all = "snake_case")]
pub enum NormalizeOutcome {
    /// Module is not library-capable
    NotLibrary,
    /// No configuration object, or it exposes no namespace getter
    NoGetter,
    /// An explicit namespace is already set and was kept
    AlreadySet(String),
    /// Namespace is unset but the configuration object has no setter
    NoSetter,
    /// The fallback namespace was applied
    Applied(String),
    /// The setter failed; the namespace keeps its previous value
    SetFailed(String),
}

impl NormalizeOutcome {
    /// Returns true if this run changed the module's namespace
    pub fn is_applied(&self) -> bool {
        matches!(self, NormalizeOutcome::Applied(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            NormalizeOutcome::NotLibrary => "not a library",
            NormalizeOutcome::NoGetter => "no namespace getter",
            NormalizeOutcome::AlreadySet(_) => "kept",
            NormalizeOutcome::NoSetter => "no namespace setter",
            NormalizeOutcome::Applied(_) => "applied",
            NormalizeOutcome::SetFailed(_) => "setter failed",
        }
    }
}

/// Derives and applies fallback namespaces for library modules
#[derive(Debug, Clone)]
pub struct NamespaceNormalizer {
    template: String,
}

impl NamespaceNormalizer {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Normalize a single module's namespace.
    ///
    /// Idempotent: once a namespace is set, later calls return
    /// [`NormalizeOutcome::AlreadySet`] without touching it.
    pub fn normalize(&self, module: &mut Module) -> NormalizeOutcome {
        if !module.is_library() {
            return NormalizeOutcome::NotLibrary;
        }

        let name = module.name().to_string();
        let Some(extension) = module.extension_mut() else {
            debug!(module = %name, "no configuration object");
            return NormalizeOutcome::NoGetter;
        };

        let current = match extension.namespace_getter() {
            Ok(getter) => match getter.get_namespace() {
                Ok(value) => value,
                Err(err) => {
                    debug!(module = %name, error = %err, "namespace getter failed");
                    None
                }
            },
            Err(err) => {
                debug!(
                    module = %name,
                    extension = extension.name(),
                    error = %err,
                    "no namespace getter"
                );
                return NormalizeOutcome::NoGetter;
            }
        };

        if !is_unset(current.as_deref()) {
            return NormalizeOutcome::AlreadySet(current.unwrap_or_default());
        }

        let extension_name = extension.name().to_string();
        let setter = match extension.namespace_setter() {
            Ok(setter) => setter,
            Err(err) => {
                debug!(
                    module = %name,
                    extension = %extension_name,
                    error = %err,
                    "no namespace setter"
                );
                return NormalizeOutcome::NoSetter;
            }
        };

        let fallback = fallback_namespace(&self.template, &name);
        match setter.set_namespace(&fallback) {
            Ok(()) => {
                debug!(module = %name, namespace = %fallback, "applied fallback namespace");
                NormalizeOutcome::Applied(fallback)
            }
            Err(err) => {
                debug!(module = %name, error = %err, "namespace setter failed");
                NormalizeOutcome::SetFailed(fallback)
            }
        }
    }
}
