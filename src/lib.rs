//! # path-resolve
//!
//! Canonical path resolution delegated to the operating system.
//!
//! The crate is a thin boundary around the platform's canonicalization
//! primitive (`realpath(3)` on Unix). It does no path parsing of its own: it
//! passes the path in, copies the canonical form out into an owned value, and
//! releases the buffer the platform allocated. The same operation is exported
//! over a C ABI for managed runtimes.
//!
//! ## Features
//!
//! - **Platform semantics**: symlinks, `.`, `..` and redundant separators are
//!   resolved exactly as the host resolves them
//! - **Structured errors**: the input path and the platform error code travel
//!   with every failure
//! - **No leaks**: the native buffer is released on every exit path
//! - **C ABI**: `path_resolve_realpath` / `path_resolve_free` on Unix
//!
//! ## Examples
//!
//! ```rust
//! use path_resolve::{resolve, resolve_str};
//!
//! let temp_dir = tempfile::TempDir::new().unwrap();
//! let canonical = resolve(temp_dir.path()).unwrap();
//! assert!(canonical.is_absolute());
//!
//! // Failures carry the platform's reason
//! let err = resolve_str("/definitely/does/not/exist/ever").unwrap_err();
//! assert!(err.is_not_found());
//! ```

#![deny(missing_docs)]

#[cfg(unix)]
mod buffer;
mod error;
#[cfg(unix)]
pub mod ffi;
mod resolve;

#[cfg(test)]
pub mod generators;

pub use error::{ResolveError, Result};
pub use resolve::{resolve, resolve_str};

#[cfg(unix)]
pub use buffer::outstanding_native_buffers;

/// Number of native buffers currently held by the resolver in this process.
///
/// This platform resolves through `std::fs::canonicalize`, which never hands
/// out native buffers, so the count is always zero.
#[cfg(not(unix))]
pub fn outstanding_native_buffers() -> usize {
    0
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
