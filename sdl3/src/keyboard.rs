// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Keyboard device queries and key/scancode translation.

use std::os::raw::c_int;

use crate::{Result, Sdl, marshal};

/// Numeric ID of a keyboard device, as carried by keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyboardId(pub sdl3_sys::KeyboardID);

impl KeyboardId {
    /// 0 is SDL's "unknown or virtual keyboard" sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<KeyboardId> for u32 {
    fn from(id: KeyboardId) -> u32 {
        id.0
    }
}

impl From<u32> for KeyboardId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl Sdl {
    /// Whether a keyboard is currently connected.
    pub fn has_keyboard(&self) -> bool {
        unsafe { self.context.api.has_keyboard() }
    }

    /// Returns the IDs of every connected keyboard.
    ///
    /// The native buffer is copied and released through `SDL_free`.
    pub fn keyboards(&self) -> Result<Vec<KeyboardId>> {
        let mut count: c_int = 0;
        let ptr = unsafe { self.context.api.get_keyboards(&mut count) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        let ids = unsafe {
            marshal::consume_native_array(ptr, count, |mem| self.context.api.free(mem))
        };
        Ok(ids.into_iter().map(KeyboardId).collect())
    }

    /// Returns the name of a keyboard; empty for a generic device the
    /// platform can't name.
    pub fn keyboard_name(&self, keyboard: KeyboardId) -> Result<String> {
        let ptr = unsafe { self.context.api.get_keyboard_name_for_id(keyboard.0) };
        unsafe { marshal::c_str_to_string(ptr) }.ok_or_else(|| self.context.error())
    }

    /// Returns the ID of the window that currently has keyboard focus,
    /// if any.
    pub fn keyboard_focus(&self) -> Option<crate::WindowId> {
        let window = unsafe { self.context.api.get_keyboard_focus() };
        if window.is_null() {
            return None;
        }
        let id = unsafe { self.context.api.get_window_id(window) };
        (id != 0).then_some(crate::WindowId(id))
    }

    /// Returns a snapshot view of the keyboard, indexed by scancode.
    ///
    /// The slice points at state owned by the native library; it is
    /// updated by [`Sdl::pump_events`] and stays valid for the whole
    /// lifetime of the library, so the borrow on `self` is a safe
    /// over-approximation.
    pub fn keyboard_state(&self) -> &[bool] {
        let mut numkeys: c_int = 0;
        let ptr = unsafe { self.context.api.get_keyboard_state(&mut numkeys) };
        if ptr.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(ptr, numkeys.max(0) as usize) }
    }

    /// Clears held-key state, generating key-up events for held keys.
    pub fn reset_keyboard(&self) {
        unsafe { self.context.api.reset_keyboard() };
    }

    /// Returns the current modifier-key state.
    pub fn mod_state(&self) -> sdl3_sys::Keymod {
        unsafe { self.context.api.get_mod_state() }
    }

    /// Overrides the modifier-key state.
    pub fn set_mod_state(&self, modstate: sdl3_sys::Keymod) {
        unsafe { self.context.api.set_mod_state(modstate) };
    }

    /// Translates a physical scancode to the layout-dependent keycode.
    ///
    /// `key_event` selects the translation SDL would use when building a
    /// key event (respecting e.g. numlock) rather than the plain layout
    /// mapping.
    pub fn key_from_scancode(
        &self,
        scancode: sdl3_sys::Scancode,
        modstate: sdl3_sys::Keymod,
        key_event: bool,
    ) -> sdl3_sys::Keycode {
        unsafe {
            self.context
                .api
                .get_key_from_scancode(scancode, modstate, key_event)
        }
    }

    /// Translates a keycode back to the physical scancode generating it,
    /// along with the modifiers required.
    pub fn scancode_from_key(
        &self,
        key: sdl3_sys::Keycode,
    ) -> (sdl3_sys::Scancode, sdl3_sys::Keymod) {
        let mut modstate: sdl3_sys::Keymod = sdl3_sys::SDL_KMOD_NONE;
        let scancode = unsafe { self.context.api.get_scancode_from_key(key, &mut modstate) };
        (scancode, modstate)
    }

    /// Returns the human-readable name of a scancode (may be empty).
    pub fn scancode_name(&self, scancode: sdl3_sys::Scancode) -> String {
        let ptr = unsafe { self.context.api.get_scancode_name(scancode) };
        unsafe { marshal::c_str_to_string_lossy(ptr) }
    }

    /// Looks a scancode up by name.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized name.
    pub fn scancode_from_name(&self, name: &str) -> Result<sdl3_sys::Scancode> {
        let name = marshal::to_c_string(name)?;
        let scancode = unsafe { self.context.api.get_scancode_from_name(name.as_ptr()) };
        if scancode == sdl3_sys::SDL_SCANCODE_UNKNOWN {
            return Err(self.context.error());
        }
        Ok(scancode)
    }

    /// Returns the human-readable name of a keycode (may be empty).
    pub fn key_name(&self, key: sdl3_sys::Keycode) -> String {
        let ptr = unsafe { self.context.api.get_key_name(key) };
        unsafe { marshal::c_str_to_string_lossy(ptr) }
    }

    /// Looks a keycode up by name.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized name.
    pub fn key_from_name(&self, name: &str) -> Result<sdl3_sys::Keycode> {
        let name = marshal::to_c_string(name)?;
        let key = unsafe { self.context.api.get_key_from_name(name.as_ptr()) };
        if key == sdl3_sys::SDLK_UNKNOWN {
            return Err(self.context.error());
        }
        Ok(key)
    }

    /// Whether the platform offers an on-screen keyboard.
    pub fn has_screen_keyboard_support(&self) -> bool {
        unsafe { self.context.api.has_screen_keyboard_support() }
    }
}
