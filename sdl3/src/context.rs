// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! SDL initialization and the core context type.
//!
//! This module provides [`Sdl`], the main entry point of the crate. An
//! `Sdl` value represents an initialized SDL library (`SDL_Init` has
//! succeeded) and provides methods to create windows, open devices, poll
//! events and query global state. `SDL_Quit` runs when the last clone is
//! dropped.

use std::sync::Arc;

use crate::{Error, Result, SdlApiHandle, marshal};

/// Internal shared context for an initialized SDL library.
///
/// This struct stores the shared API handle, separated from [`Sdl`] so
/// that resource wrappers (windows, cursors, audio devices, ...) can hold
/// a reference and keep the library initialized for as long as they live.
///
/// `SDL_Quit` runs when the last reference is dropped.
pub(crate) struct SdlContext {
    pub(crate) api: SdlApiHandle,
}

impl SdlContext {
    /// Maps a native `bool` result to `Result`, capturing the last-error
    /// string on failure.
    pub(crate) fn check(&self, ok: bool) -> Result<()> {
        if ok { Ok(()) } else { Err(self.error()) }
    }

    /// Builds an [`Error::Sdl`] from the thread-local last-error string.
    ///
    /// Used after a sentinel return (null pointer, zero ID) where SDL has
    /// already recorded the failure reason.
    pub(crate) fn error(&self) -> Error {
        Error::Sdl(self.last_error())
    }

    /// Returns the thread-local last-error string (possibly empty).
    pub(crate) fn last_error(&self) -> String {
        unsafe { marshal::c_str_to_string_lossy(self.api.get_error()) }
    }
}

impl Drop for SdlContext {
    /// Shuts down all SDL subsystems when the last reference is dropped.
    fn drop(&mut self) {
        unsafe { self.api.quit() };
    }
}

/// Main entry point for the SDL3 bindings.
///
/// Initializes the requested subsystems on creation and shuts SDL down
/// when the last clone (and every resource created from it) is dropped.
/// The value is cheaply cloneable and `Send + Sync`; resource wrappers
/// created from it (windows, readers of native state, ...) follow SDL's
/// own threading rules and are generally main-thread objects.
///
/// # Examples
///
/// ```no_run
/// use sdl3::{Sdl, config::sdl3_library_path, load_api, sys};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(sdl3_library_path())?;
/// let sdl = Sdl::init(api, sys::SDL_INIT_VIDEO | sys::SDL_INIT_EVENTS)?;
///
/// let window = sdl.create_window("demo", 1280, 720, 0)?;
/// while let Some(event) = sdl.poll_event() {
///     // ...
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Sdl {
    pub(crate) context: Arc<SdlContext>,
}

impl Sdl {
    /// Initializes SDL with the given subsystem flags.
    ///
    /// # Arguments
    ///
    /// * `api` - Shared handle to the loaded SDL3 library (from
    ///   [`crate::load_api`])
    /// * `flags` - Subsystem flags (`SDL_INIT_VIDEO | SDL_INIT_AUDIO | ...`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Sdl`] if the native `SDL_Init` call fails, e.g.
    /// when no video driver is available.
    pub fn init(api: SdlApiHandle, flags: sdl3_sys::InitFlags) -> Result<Self> {
        let ok = unsafe { api.init(flags) };
        if !ok {
            let message = unsafe { marshal::c_str_to_string_lossy(api.get_error()) };
            return Err(Error::Sdl(message));
        }
        Ok(Self {
            context: Arc::new(SdlContext { api }),
        })
    }

    /// Initializes additional subsystems after [`Sdl::init`].
    pub fn init_sub_system(&self, flags: sdl3_sys::InitFlags) -> Result<()> {
        let ok = unsafe { self.context.api.init_sub_system(flags) };
        self.context.check(ok)
    }

    /// Shuts down specific subsystems previously initialized with
    /// [`Sdl::init`] or [`Sdl::init_sub_system`].
    pub fn quit_sub_system(&self, flags: sdl3_sys::InitFlags) {
        unsafe { self.context.api.quit_sub_system(flags) };
    }

    /// Returns the subset of `flags` that is currently initialized, or,
    /// with `flags == 0`, every initialized subsystem.
    pub fn was_init(&self, flags: sdl3_sys::InitFlags) -> sdl3_sys::InitFlags {
        unsafe { self.context.api.was_init(flags) }
    }

    /// Returns the version of the loaded native library, packed as
    /// `major * 1000000 + minor * 1000 + patch` (use the
    /// `sdl3_sys::version_num_*` helpers to unpack).
    pub fn version(&self) -> i32 {
        unsafe { self.context.api.get_version() }
    }

    /// Returns the revision string of the loaded native library.
    ///
    /// This is an arbitrary, human-readable build identifier, not meant
    /// for comparison.
    pub fn revision(&self) -> String {
        unsafe { marshal::c_str_to_string_lossy(self.context.api.get_revision()) }
    }

    /// Returns the thread-local last-error string (possibly empty).
    ///
    /// The wrappers in this crate already capture the error text into
    /// [`Error::Sdl`]; this accessor exists for callers mixing in their
    /// own raw `sdl3_sys` calls.
    pub fn last_error(&self) -> String {
        self.context.last_error()
    }

    /// Clears the thread-local last-error string.
    pub fn clear_error(&self) {
        unsafe { self.context.api.clear_error() };
    }

    /// Forces immediate shutdown, consuming `self`.
    ///
    /// Normally SDL shuts down automatically when the last clone and all
    /// resources are dropped; this method is useful for explicit cleanup
    /// in tests.
    ///
    /// # Errors
    ///
    /// Returns an error if clones or resource wrappers are still alive.
    pub fn destroy(self) -> Result<()> {
        let context = Arc::into_inner(self.context)
            .ok_or_else(|| Error::Other("SDL context is still in use.".to_string()))?;
        drop(context);
        Ok(())
    }
}
