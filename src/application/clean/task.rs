//! Clean task - deletes the root output directory on demand
//!
//! The orchestrator only registers the task; the host decides when to run
//! it. Running it is idempotent: a missing directory is a successful no-op.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{FileSystem, FsResult};

use super::result::CleanOutcome;

/// Registered clean action bound to one output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanTask {
    output_dir: PathBuf,
}

impl CleanTask {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Delete the output directory and everything below it.
    ///
    /// A plain file sitting at the output path is deleted too.
    pub fn clean<FS: FileSystem>(&self, fs: &FS) -> FsResult<CleanOutcome> {
        if !fs.exists(&self.output_dir) {
            debug!(path = %self.output_dir.display(), "output directory already absent");
            return Ok(CleanOutcome::AlreadyAbsent(self.output_dir.clone()));
        }

        if fs.is_dir(&self.output_dir) {
            fs.remove_dir_all(&self.output_dir)?;
        } else {
            fs.remove_file(&self.output_dir)?;
        }
        debug!(path = %self.output_dir.display(), "removed output directory");
        Ok(CleanOutcome::Removed(self.output_dir.clone()))
    }

    /// Report what [`CleanTask::clean`] would do without deleting anything
    pub fn preview<FS: FileSystem>(&self, fs: &FS) -> CleanOutcome {
        if fs.exists(&self.output_dir) {
            CleanOutcome::WouldRemove(self.output_dir.clone())
        } else {
            CleanOutcome::AlreadyAbsent(self.output_dir.clone())
        }
    }
}
