//! Output Path Value Objects
//!
//! Path segments come from the manifest author and are validated before
//! they are joined onto a base directory:
//! - Non-empty
//! - Exactly one component (no separators)
//! - No NUL or control characters (and no reserved characters on Windows)

use std::fmt;
use std::path::{Component, Path, PathBuf};

#[cfg(windows)]
const RESERVED: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];
#[cfg(not(windows))]
const RESERVED: &[char] = &['/', '\\'];

/// Error when an output path cannot be computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Segment is empty
    Empty,
    /// Segment contains a character the platform does not allow in a file name
    IllegalCharacter { segment: String, ch: char },
    /// Segment is `.` or `..` where a directory name is required
    NotADirectoryName { segment: String },
    /// Path could not be made absolute
    RelativeAnchor { path: PathBuf },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "path segment is empty"),
            PathError::IllegalCharacter { segment, ch } => {
                write!(f, "segment '{}' contains illegal character {:?}", segment, ch)
            }
            PathError::NotADirectoryName { segment } => {
                write!(f, "'{}' is not a directory name", segment)
            }
            PathError::RelativeAnchor { path } => {
                write!(f, "cannot resolve relative path '{}'", path.display())
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A single validated path component
///
/// `..` and `.` are accepted here; use [`PathSegment::directory_name`] where
/// the segment must name a real directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment(String);

impl PathSegment {
    /// Validate a relative segment such as `..` or `build`
    pub fn new(segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();

        if segment.is_empty() {
            return Err(PathError::Empty);
        }

        if let Some(ch) = segment
            .chars()
            .find(|c| c.is_control() || RESERVED.contains(c))
        {
            return Err(PathError::IllegalCharacter { segment, ch });
        }

        Ok(Self(segment))
    }

    /// Validate a segment that must name a directory (module names)
    pub fn directory_name(segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = Self::new(segment)?;
        if segment.0 == "." || segment.0 == ".." {
            return Err(PathError::NotADirectoryName { segment: segment.0 });
        }
        Ok(segment)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for PathSegment {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Lexically normalize a path: drop `.`, fold `..` into its parent.
///
/// Never touches the file system. `..` above the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(out.components().next_back(), Some(Component::Normal(_)));
                if last_is_normal {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}
