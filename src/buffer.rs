//! Ownership of path buffers allocated by the C library

use std::ffi::{CStr, OsStr};
use std::os::raw::c_char;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

static OUTSTANDING: AtomicUsize = AtomicUsize::new(0);

/// A NUL-terminated path owned by this process and released with `free(3)`.
///
/// `realpath(3)` called with a NULL output buffer hands back memory from the C
/// allocator. Wrapping it here ties its release to scope exit, so every return
/// path out of the resolver frees it exactly once.
pub(crate) struct NativePath {
    ptr: NonNull<c_char>,
}

impl NativePath {
    /// Take ownership of a buffer returned by the C allocator.
    ///
    /// Returns `None` for NULL, which is how the platform signals failure.
    ///
    /// # Safety
    /// A non-NULL `ptr` must point to a NUL-terminated string allocated with
    /// `malloc` that nothing else will free.
    pub(crate) unsafe fn from_raw(ptr: *mut c_char) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| {
            OUTSTANDING.fetch_add(1, Ordering::SeqCst);
            NativePath { ptr }
        })
    }

    pub(crate) fn as_c_str(&self) -> &CStr {
        // SAFETY: `from_raw` requires a live NUL-terminated buffer.
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
    }

    /// Copy the bytes out into a caller-owned path. Non-UTF-8 names survive.
    pub(crate) fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(OsStr::from_bytes(self.as_c_str().to_bytes()))
    }
}

impl Drop for NativePath {
    fn drop(&mut self) {
        // SAFETY: we own the allocation and drop runs once.
        unsafe { libc::free(self.ptr.as_ptr().cast()) };
        OUTSTANDING.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Number of native buffers currently held by the resolver in this process.
///
/// Outside a call in progress this is zero. It is meant for leak checks.
pub fn outstanding_native_buffers() -> usize {
    OUTSTANDING.load(Ordering::SeqCst)
}
