// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Marshalling helpers for the C boundary.
//!
//! Three conversions repeat across every subsystem wrapper and are
//! centralized here:
//!
//! - Rust `&str` to a NUL-terminated UTF-8 `CString` before a call
//! - native `const char *` to an owned `String` after a call, with a
//!   null pointer mapping to `None`
//! - native `(pointer, count)` arrays copied into a `Vec`, releasing the
//!   native buffer through `SDL_free` exactly once and never when the
//!   pointer is null

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_void};

use crate::Result;

/// Encodes a Rust string for a `const char *` parameter.
///
/// The only validation is the embedded-NUL check `CString` performs;
/// SDL expects plain UTF-8 and does no normalization, so neither do we.
pub(crate) fn to_c_string(s: &str) -> Result<CString> {
    Ok(CString::new(s)?)
}

/// Decodes a native UTF-8 string pointer into an owned `String`.
///
/// A null pointer becomes `None`. The bytes are copied, never freed:
/// every `const char *` SDL returns stays owned by the library.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
pub(crate) unsafe fn c_str_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}

/// Like [`c_str_to_string`], but maps null to an empty string for calls
/// where SDL documents "never null, possibly empty" semantics
/// (`SDL_GetError` in particular).
pub(crate) unsafe fn c_str_to_string_lossy(ptr: *const c_char) -> String {
    unsafe { c_str_to_string(ptr) }.unwrap_or_default()
}

/// Copies a native `(ptr, count)` array into a `Vec`, then releases the
/// native buffer through `free`.
///
/// A null `ptr` yields an empty `Vec` and `free` is not invoked; a
/// non-null `ptr` is freed exactly once, including when `count` is zero.
///
/// # Safety
///
/// `ptr` must be null or point to `count` consecutive initialized `T`s
/// allocated by the matching native allocator.
pub(crate) unsafe fn consume_native_array<T, F>(ptr: *mut T, count: c_int, free: F) -> Vec<T>
where
    T: Copy,
    F: FnOnce(*mut c_void),
{
    if ptr.is_null() {
        return Vec::new();
    }
    let out = unsafe { std::slice::from_raw_parts(ptr, count.max(0) as usize) }.to_vec();
    free(ptr as *mut c_void);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_string_round_trips_unchanged() {
        let original = "renderer/software";
        let c = to_c_string(original).unwrap();
        let back = unsafe { c_str_to_string(c.as_ptr()) };
        assert_eq!(back.as_deref(), Some(original));
    }

    #[test]
    fn multi_byte_utf8_round_trips_unchanged() {
        let original = "Bildschirm äöü — 画面 🖱";
        let c = to_c_string(original).unwrap();
        let back = unsafe { c_str_to_string(c.as_ptr()) };
        assert_eq!(back.as_deref(), Some(original));
    }

    #[test]
    fn embedded_nul_is_rejected() {
        assert!(to_c_string("bad\0string").is_err());
    }

    #[test]
    fn null_string_pointer_becomes_none() {
        assert_eq!(unsafe { c_str_to_string(std::ptr::null()) }, None);
        assert_eq!(unsafe { c_str_to_string_lossy(std::ptr::null()) }, "");
    }

    #[test]
    fn null_array_is_empty_and_not_freed() {
        let mut freed = false;
        let out: Vec<u32> =
            unsafe { consume_native_array(std::ptr::null_mut(), 0, |_| freed = true) };
        assert!(out.is_empty());
        assert!(!freed);
    }

    #[test]
    fn non_null_array_is_copied_and_freed_once() {
        let mut values = [3u32, 1, 4];
        let mut frees = 0;
        let out = unsafe {
            consume_native_array(values.as_mut_ptr(), values.len() as c_int, |_| frees += 1)
        };
        assert_eq!(out, vec![3, 1, 4]);
        assert_eq!(frees, 1);
    }

    #[test]
    fn zero_count_still_frees_the_non_null_buffer() {
        let mut value = [0u8; 1];
        let mut frees = 0;
        let out: Vec<u8> =
            unsafe { consume_native_array(value.as_mut_ptr(), 0, |_| frees += 1) };
        assert!(out.is_empty());
        assert_eq!(frees, 1);
    }
}
