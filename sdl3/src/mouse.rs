// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Mouse device queries and cursor management.

use std::os::raw::c_int;
use std::sync::Arc;

use crate::{Result, Sdl, context::SdlContext, marshal};

/// Numeric ID of a mouse device, as carried by mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseId(pub sdl3_sys::MouseID);

impl MouseId {
    /// 0 is SDL's "unknown mouse" sentinel; `SDL_TOUCH_MOUSEID` marks
    /// synthetic events from touch input.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Whether this event was synthesized from touch input.
    pub fn is_touch(self) -> bool {
        self.0 == sdl3_sys::SDL_TOUCH_MOUSEID
    }
}

impl From<MouseId> for u32 {
    fn from(id: MouseId) -> u32 {
        id.0
    }
}

impl From<u32> for MouseId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// One sample of mouse state: pressed-button mask plus a position.
///
/// Which coordinate space the position uses depends on the query:
/// focus-window coordinates for [`Sdl::mouse_state`], desktop
/// coordinates for [`Sdl::global_mouse_state`], and accumulated deltas
/// for [`Sdl::relative_mouse_state`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseState {
    pub buttons: sdl3_sys::MouseButtonFlags,
    pub x: f32,
    pub y: f32,
}

impl MouseState {
    /// Whether the given button (e.g. `sdl3_sys::SDL_BUTTON_LEFT`) is
    /// pressed.
    pub fn is_pressed(&self, button: c_int) -> bool {
        self.buttons & sdl3_sys::button_mask(button) != 0
    }
}

impl Sdl {
    /// Whether a mouse is currently connected.
    pub fn has_mouse(&self) -> bool {
        unsafe { self.context.api.has_mouse() }
    }

    /// Returns the IDs of every connected mouse.
    ///
    /// The native buffer is copied and released through `SDL_free`.
    pub fn mice(&self) -> Result<Vec<MouseId>> {
        let mut count: c_int = 0;
        let ptr = unsafe { self.context.api.get_mice(&mut count) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        let ids = unsafe {
            marshal::consume_native_array(ptr, count, |mem| self.context.api.free(mem))
        };
        Ok(ids.into_iter().map(MouseId).collect())
    }

    /// Returns the name of a mouse; empty for a generic device the
    /// platform can't name.
    pub fn mouse_name(&self, mouse: MouseId) -> Result<String> {
        let ptr = unsafe { self.context.api.get_mouse_name_for_id(mouse.0) };
        unsafe { marshal::c_str_to_string(ptr) }.ok_or_else(|| self.context.error())
    }

    /// Returns the ID of the window that currently has mouse focus, if
    /// any.
    pub fn mouse_focus(&self) -> Option<crate::WindowId> {
        let window = unsafe { self.context.api.get_mouse_focus() };
        if window.is_null() {
            return None;
        }
        let id = unsafe { self.context.api.get_window_id(window) };
        (id != 0).then_some(crate::WindowId(id))
    }

    /// Returns the button mask and position relative to the focus window,
    /// as of the last event pump.
    pub fn mouse_state(&self) -> MouseState {
        let (mut x, mut y) = (0.0f32, 0.0f32);
        let buttons = unsafe { self.context.api.get_mouse_state(&mut x, &mut y) };
        MouseState { buttons, x, y }
    }

    /// Returns the button mask and position in desktop coordinates,
    /// queried from the OS directly.
    pub fn global_mouse_state(&self) -> MouseState {
        let (mut x, mut y) = (0.0f32, 0.0f32);
        let buttons = unsafe { self.context.api.get_global_mouse_state(&mut x, &mut y) };
        MouseState { buttons, x, y }
    }

    /// Returns the button mask and the motion accumulated since the last
    /// call to this function.
    pub fn relative_mouse_state(&self) -> MouseState {
        let (mut x, mut y) = (0.0f32, 0.0f32);
        let buttons = unsafe { self.context.api.get_relative_mouse_state(&mut x, &mut y) };
        MouseState { buttons, x, y }
    }

    /// Moves the mouse cursor to a position in desktop coordinates.
    pub fn warp_mouse_global(&self, x: f32, y: f32) -> Result<()> {
        let ok = unsafe { self.context.api.warp_mouse_global(x, y) };
        self.context.check(ok)
    }

    /// Captures (or releases) the mouse so drags keep reporting outside
    /// the window.
    pub fn capture_mouse(&self, enabled: bool) -> Result<()> {
        let ok = unsafe { self.context.api.capture_mouse(enabled) };
        self.context.check(ok)
    }

    /// Creates one of the standard system cursors.
    pub fn create_system_cursor(&self, which: sdl3_sys::SystemCursor) -> Result<Cursor> {
        let cursor = unsafe { self.context.api.create_system_cursor(which) };
        if cursor.is_null() {
            return Err(self.context.error());
        }
        Ok(Cursor {
            context: self.context.clone(),
            cursor,
        })
    }

    /// Makes a cursor the active cursor.
    pub fn set_cursor(&self, cursor: &Cursor) -> Result<()> {
        let ok = unsafe { self.context.api.set_cursor(cursor.cursor) };
        self.context.check(ok)
    }

    /// Shows the cursor.
    pub fn show_cursor(&self) -> Result<()> {
        let ok = unsafe { self.context.api.show_cursor() };
        self.context.check(ok)
    }

    /// Hides the cursor.
    pub fn hide_cursor(&self) -> Result<()> {
        let ok = unsafe { self.context.api.hide_cursor() };
        self.context.check(ok)
    }

    /// Whether the cursor is currently visible.
    pub fn cursor_visible(&self) -> bool {
        unsafe { self.context.api.cursor_visible() }
    }
}

/// RAII handle to a native cursor.
///
/// The cursor must outlive any [`Sdl::set_cursor`] call that activates
/// it; dropping it while active reverts to the default cursor on the
/// native side.
pub struct Cursor {
    context: Arc<SdlContext>,
    pub(crate) cursor: sdl3_sys::Cursor,
}

// Safety: cursors are main-thread objects per SDL's rules; the handle
// itself can be moved.
unsafe impl Send for Cursor {}

impl Cursor {
    /// Explicitly destroys the cursor, consuming `self`.
    pub fn destroy(mut self) {
        self.destroy_inner();
    }

    fn destroy_inner(&mut self) {
        if !self.cursor.is_null() {
            let mut cursor = std::ptr::null_mut();
            std::mem::swap(&mut self.cursor, &mut cursor);
            unsafe { self.context.api.destroy_cursor(cursor) };
        }
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        self.destroy_inner();
    }
}
