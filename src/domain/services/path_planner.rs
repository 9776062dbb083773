//! Output path planning service
//!
//! Computes redirected output directories for the root project and its
//! subprojects. Purely lexical: no file system access, and the only state
//! is the working directory captured at construction, used to anchor
//! relative base directories.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{normalize_lexically, PathError, PathSegment};

/// Plans root and subproject output directories
#[derive(Debug, Clone)]
pub struct PathPlanner {
    working_dir: PathBuf,
    build_dir: Option<PathSegment>,
}

impl PathPlanner {
    /// Relative base directories are resolved against `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            build_dir: None,
        }
    }

    /// Resolve root segments against `base/<name>` instead of `base`.
    ///
    /// This is the host's conventional build directory, the one a relative
    /// build-directory override is interpreted against. An empty name
    /// resolves against the base directory itself.
    pub fn with_build_dir(mut self, name: &str) -> Result<Self, PathError> {
        self.build_dir = if name.is_empty() {
            None
        } else {
            Some(PathSegment::directory_name(name)?)
        };
        Ok(self)
    }

    /// Compute the root output directory.
    ///
    /// Returns an absolute, lexically normalized path.
    pub fn plan_root_path<S: AsRef<str>>(
        &self,
        base_dir: &Path,
        segments: &[S],
    ) -> Result<PathBuf, PathError> {
        let mut path = self.absolute(base_dir)?;

        if let Some(build_dir) = &self.build_dir {
            path.push(build_dir);
        }

        for segment in segments {
            path.push(PathSegment::new(segment.as_ref())?);
        }

        Ok(normalize_lexically(&path))
    }

    /// Compute a subproject's output directory nested under the root's.
    ///
    /// The module name must be a plain directory name, so the result is
    /// always a direct child of `root_path`.
    pub fn plan_subproject_path(
        &self,
        root_path: &Path,
        module_name: &str,
    ) -> Result<PathBuf, PathError> {
        let root = normalize_lexically(&self.absolute(root_path)?);
        let name = PathSegment::directory_name(module_name)?;
        Ok(root.join(name))
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf, PathError> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        };

        if joined.is_absolute() {
            Ok(joined)
        } else {
            Err(PathError::RelativeAnchor {
                path: path.to_path_buf(),
            })
        }
    }
}
