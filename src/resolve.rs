//! Canonical path resolution
//!
//! Everything about what "canonical" means is left to the host: on Unix the
//! work is done by `realpath(3)`, elsewhere by `std::fs::canonicalize`. This
//! module only moves the path across and turns the answer back into Rust values.

use crate::error::{ResolveError, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Resolve a path to its canonical absolute form
///
/// Symlinks, `.` and `..` components and redundant separators are resolved by
/// the operating system. The path may be relative (to the current directory) or
/// absolute. An empty path is passed through as is, so its outcome is whatever
/// the platform primitive decides.
///
/// The call blocks on filesystem lookups and cannot be cancelled.
///
/// # Errors
/// Returns [`ResolveError::ResolutionFailed`] when the platform reports a
/// failure. The error carries the input path and the platform error code, so
/// "not found" can be told apart from "permission denied" and the rest.
///
/// # Examples
/// ```
/// use path_resolve::resolve;
///
/// let temp_dir = tempfile::TempDir::new().unwrap();
/// std::fs::create_dir_all(temp_dir.path().join("x/y")).unwrap();
///
/// let noisy = temp_dir.path().join("x/./y/../y");
/// let resolved = resolve(&noisy).unwrap();
/// assert!(resolved.is_absolute());
/// assert!(resolved.ends_with("x/y"));
///
/// assert!(resolve("/definitely/does/not/exist/ever").unwrap_err().is_not_found());
/// ```
#[cfg(unix)]
pub fn resolve<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    use crate::buffer::NativePath;
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path = path.as_ref();
    log::trace!("resolving {}", path.display());

    // Interior NUL cannot be expressed as a C string.
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| failed(ResolveError::from_code(path, libc::EINVAL)))?;

    // SAFETY: `c_path` is NUL-terminated and outlives the call. A NULL
    // resolved buffer asks the C library to allocate one for us.
    let raw = unsafe { libc::realpath(c_path.as_ptr(), std::ptr::null_mut()) };
    // errno belongs to this call only until anything else runs.
    let os_error = io::Error::last_os_error();

    // SAFETY: realpath returns NULL or a malloc'd string we now own.
    match unsafe { NativePath::from_raw(raw) } {
        Some(native) => {
            let resolved = native.to_path_buf();
            log::trace!("resolved {} to {}", path.display(), resolved.display());
            Ok(resolved)
        }
        None => Err(failed(ResolveError::from_io(path, &os_error))),
    }
}

/// Resolve a path to its canonical absolute form
///
/// See the Unix version for the contract; here the platform primitive is
/// `std::fs::canonicalize`.
#[cfg(not(unix))]
pub fn resolve<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    log::trace!("resolving {}", path.display());

    match std::fs::canonicalize(path) {
        Ok(resolved) => {
            log::trace!("resolved {} to {}", path.display(), resolved.display());
            Ok(resolved)
        }
        Err(err) => Err(failed(ResolveError::from_io(path, &err))),
    }
}

/// Resolve a string path and return the canonical form as a `String`
///
/// This is [`resolve`] for callers that deal in strings rather than paths.
///
/// # Errors
/// Everything [`resolve`] reports, plus a failure of kind
/// [`io::ErrorKind::InvalidData`] (without a platform code) when the canonical
/// path is not valid UTF-8.
///
/// # Examples
/// ```
/// use path_resolve::resolve_str;
///
/// let temp_dir = tempfile::TempDir::new().unwrap();
/// let dir = temp_dir.path().to_str().unwrap();
///
/// let resolved = resolve_str(dir).unwrap();
/// assert_eq!(resolve_str(&resolved).unwrap(), resolved);
/// ```
pub fn resolve_str(path: &str) -> Result<String> {
    resolve(path)?.into_os_string().into_string().map_err(|_| {
        let err = io::Error::new(
            io::ErrorKind::InvalidData,
            "canonical path is not valid UTF-8",
        );
        failed(ResolveError::from_io(Path::new(path), &err))
    })
}

fn failed(err: ResolveError) -> ResolveError {
    log::debug!(
        "cannot resolve {} (code {:?}): {}",
        err.path().display(),
        err.code(),
        err
    );
    err
}
