//! C ABI for callers across a foreign-function boundary
//!
//! A managed runtime binds two symbols:
//!
//! ```c
//! char *path_resolve_realpath(const char *path, int *errno_out);
//! void path_resolve_free(char *resolved);
//! ```
//!
//! The string returned by `path_resolve_realpath` belongs to the caller and
//! must go back through `path_resolve_free`, never `free(3)`.

use crate::resolve::resolve;
use std::ffi::{CStr, CString, OsStr};
use std::os::raw::{c_char, c_int};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::ptr;

/// Resolve `path` to its canonical absolute form.
///
/// Returns NULL on failure. When `errno_out` is not NULL it receives `0` on
/// success and the platform error code on failure.
///
/// # Safety
/// `path` must be NULL or a valid NUL-terminated string. `errno_out` must be
/// NULL or valid for a write of one `int`.
#[no_mangle]
pub unsafe extern "C" fn path_resolve_realpath(
    path: *const c_char,
    errno_out: *mut c_int,
) -> *mut c_char {
    if path.is_null() {
        report(errno_out, libc::EINVAL);
        return ptr::null_mut();
    }

    let path = OsStr::from_bytes(CStr::from_ptr(path).to_bytes());
    match resolve(path) {
        Ok(resolved) => match CString::new(resolved.into_os_string().into_vec()) {
            Ok(resolved) => {
                report(errno_out, 0);
                resolved.into_raw()
            }
            Err(_) => {
                report(errno_out, libc::EINVAL);
                ptr::null_mut()
            }
        },
        Err(err) => {
            report(errno_out, err.code().unwrap_or(libc::EIO));
            ptr::null_mut()
        }
    }
}

/// Release a string returned by [`path_resolve_realpath`]. NULL is ignored.
///
/// # Safety
/// `resolved` must be NULL or a pointer obtained from `path_resolve_realpath`
/// that has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn path_resolve_free(resolved: *mut c_char) {
    if !resolved.is_null() {
        drop(CString::from_raw(resolved));
    }
}

unsafe fn report(errno_out: *mut c_int, code: c_int) {
    if !errno_out.is_null() {
        *errno_out = code;
    }
}
