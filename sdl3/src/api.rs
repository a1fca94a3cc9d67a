// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Loading the SDL3 shared library.

use std::sync::Arc;

use crate::Result;

/// Shared handle to a loaded SDL3 library.
///
/// Cloning the handle is cheap; the library stays mapped until the last
/// clone is dropped. Every wrapper object in this crate holds one of
/// these, so the symbol table outlives all of them.
pub type SdlApiHandle = Arc<sdl3_sys::Sdl3Api>;

/// Loads the SDL3 shared library and resolves all bound entry points.
///
/// `path` can be a bare library name (resolved through the platform's
/// normal search path) or an absolute path. See
/// [`crate::config::sdl3_library_name`] for the platform default.
///
/// # Errors
///
/// Returns [`crate::Error::LibLoading`] if the library cannot be opened
/// or any bound symbol is missing (e.g. an SDL2 library was supplied).
///
/// # Examples
///
/// ```no_run
/// use sdl3::{config::sdl3_library_name, load_api};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(sdl3_library_name())?;
/// # Ok(())
/// # }
/// ```
pub fn load_api<P: AsRef<std::ffi::OsStr>>(path: P) -> Result<SdlApiHandle> {
    let api = unsafe { sdl3_sys::Sdl3Api::load(path)? };
    Ok(Arc::new(api))
}
