//! Clean result types

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What a clean invocation found and did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum CleanOutcome {
    /// Directory existed and was deleted
    Removed(PathBuf),
    /// Directory exists and would be deleted (dry run)
    WouldRemove(PathBuf),
    /// Nothing to delete
    AlreadyAbsent(PathBuf),
}

impl CleanOutcome {
    pub fn path(&self) -> &Path {
        match self {
            CleanOutcome::Removed(p)
            | CleanOutcome::WouldRemove(p)
            | CleanOutcome::AlreadyAbsent(p) => p,
        }
    }

    /// Returns true if the directory was actually deleted
    pub fn removed(&self) -> bool {
        matches!(self, CleanOutcome::Removed(_))
    }
}

impl std::fmt::Display for CleanOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanOutcome::Removed(p) => write!(f, "removed {}", p.display()),
            CleanOutcome::WouldRemove(p) => write!(f, "would remove {}", p.display()),
            CleanOutcome::AlreadyAbsent(p) => write!(f, "{} already absent", p.display()),
        }
    }
}
