// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Locating the SDL3 shared library.
//!
//! This crate never links SDL3 at build time; callers pass a library
//! path or name to [`crate::load_api`]. The helpers here resolve the
//! conventional name for the current platform, with an environment
//! override for unusual installations.

/// Environment variable that overrides the library location for examples
/// and tests.
pub const SDL3_LIBRARY_PATH_ENV: &str = "SDL3_LIBRARY_PATH";

/// Returns the conventional SDL3 shared library name for this platform.
///
/// The name is resolved through the platform's normal dynamic linker
/// search path when passed to [`crate::load_api`].
pub fn sdl3_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "SDL3.dll"
    } else if cfg!(target_os = "macos") {
        "libSDL3.dylib"
    } else {
        "libSDL3.so.0"
    }
}

/// Returns the library path to load: the `SDL3_LIBRARY_PATH` environment
/// variable if set, the platform default otherwise.
///
/// This is what the examples and native-dependent tests use to locate
/// the library at runtime.
///
/// # Examples
///
/// ```no_run
/// use sdl3::{config::sdl3_library_path, load_api};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(sdl3_library_path())?;
/// # Ok(())
/// # }
/// ```
pub fn sdl3_library_path() -> std::path::PathBuf {
    std::env::var_os(SDL3_LIBRARY_PATH_ENV)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| sdl3_library_name().into())
}
