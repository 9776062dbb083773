//! Capability value object - a declared plugin feature tag of a module
//!
//! Capabilities decide which normalization rules apply to a module. Only
//! library-capable modules are candidates for namespace derivation.

use serde::{Deserialize, Serialize};

/// A declared plugin capability tag such as `library`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    /// Tag marking a library module
    pub const LIBRARY: &'static str = "library";

    /// Fully qualified plugin id accepted as an alias of [`Capability::LIBRARY`]
    pub const LIBRARY_PLUGIN_ID: &'static str = "com.android.library";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn library() -> Self {
        Self::new(Self::LIBRARY)
    }

    /// Returns true if this tag marks a library module
    pub fn is_library(&self) -> bool {
        self.0 == Self::LIBRARY || self.0 == Self::LIBRARY_PLUGIN_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Capability {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}
