//! Error types for path resolution

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The error type for path resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The platform could not canonicalize the path
    #[error("Cannot resolve {}: {message}", path.display())]
    ResolutionFailed {
        /// The path as the caller passed it
        path: PathBuf,
        /// Raw platform error code (errno on Unix), when the platform reported one
        code: Option<i32>,
        /// Classification of the failure
        kind: io::ErrorKind,
        /// Human-readable reason reported by the platform
        message: String,
    },
}

impl ResolveError {
    /// Build a resolution failure from the platform's report for `path`.
    pub(crate) fn from_io(path: &Path, err: &io::Error) -> Self {
        ResolveError::ResolutionFailed {
            path: path.to_path_buf(),
            code: err.raw_os_error(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Build a resolution failure from a raw platform error code.
    #[cfg(unix)]
    pub(crate) fn from_code(path: &Path, code: i32) -> Self {
        Self::from_io(path, &io::Error::from_raw_os_error(code))
    }

    /// The path that failed to resolve, unchanged from the input.
    pub fn path(&self) -> &Path {
        match self {
            ResolveError::ResolutionFailed { path, .. } => path,
        }
    }

    /// Raw platform error code, or `None` when the failure did not come from the platform.
    pub fn code(&self) -> Option<i32> {
        match self {
            ResolveError::ResolutionFailed { code, .. } => *code,
        }
    }

    /// Classification of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            ResolveError::ResolutionFailed { kind, .. } => *kind,
        }
    }

    /// Whether the path, or one of its components, does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }

    /// Whether a component of the path could not be searched or read.
    pub fn is_permission_denied(&self) -> bool {
        self.kind() == io::ErrorKind::PermissionDenied
    }
}

impl From<ResolveError> for io::Error {
    fn from(err: ResolveError) -> Self {
        match err.code() {
            Some(code) => io::Error::from_raw_os_error(code),
            None => io::Error::new(err.kind(), err),
        }
    }
}

/// Result type for path resolution
pub type Result<T> = std::result::Result<T, ResolveError>;
