// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Window and display management.
//!
//! Provides the RAII [`Window`] and [`GlContext`] wrappers plus the
//! display enumeration queries on [`Sdl`]. All real windowing work
//! happens inside the native library; this module only shuttles
//! arguments and results across the boundary.

use std::os::raw::c_int;
use std::sync::Arc;

use crate::{Result, Sdl, context::SdlContext, marshal};

/// Numeric ID of a window, as carried by window events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub sdl3_sys::WindowID);

impl WindowId {
    /// 0 is SDL's "no such window" sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<WindowId> for u32 {
    fn from(id: WindowId) -> u32 {
        id.0
    }
}

impl From<u32> for WindowId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Numeric ID of a display, as returned by [`Sdl::displays`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayId(pub sdl3_sys::DisplayID);

impl DisplayId {
    /// 0 is SDL's "no such display" sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<DisplayId> for u32 {
    fn from(id: DisplayId) -> u32 {
        id.0
    }
}

impl From<u32> for DisplayId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl Sdl {
    /// Creates a window with the specified title, size and flags.
    ///
    /// # Arguments
    ///
    /// * `title` - UTF-8 window title
    /// * `w`, `h` - Size in logical pixels
    /// * `flags` - `sdl3_sys::SDL_WINDOW_*` flags, ORed together
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Sdl`] if the native window cannot be
    /// created (e.g. the video subsystem is not initialized).
    pub fn create_window(
        &self,
        title: &str,
        w: i32,
        h: i32,
        flags: sdl3_sys::WindowFlags,
    ) -> Result<Window> {
        let title = marshal::to_c_string(title)?;
        let window = unsafe {
            self.context
                .api
                .create_window(title.as_ptr(), w, h, flags)
        };
        if window.is_null() {
            return Err(self.context.error());
        }
        Ok(Window::new(self.context.clone(), window))
    }

    /// Returns the IDs of every connected display, in no particular order.
    pub fn displays(&self) -> Result<Vec<DisplayId>> {
        let mut count: c_int = 0;
        let ptr = unsafe { self.context.api.get_displays(&mut count) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        let ids = unsafe {
            marshal::consume_native_array(ptr, count, |mem| self.context.api.free(mem))
        };
        Ok(ids.into_iter().map(DisplayId).collect())
    }

    /// Returns the primary display.
    pub fn primary_display(&self) -> Result<DisplayId> {
        let id = unsafe { self.context.api.get_primary_display() };
        if id == 0 {
            return Err(self.context.error());
        }
        Ok(DisplayId(id))
    }

    /// Returns the name of a display.
    pub fn display_name(&self, display: DisplayId) -> Result<String> {
        let ptr = unsafe { self.context.api.get_display_name(display.0) };
        unsafe { marshal::c_str_to_string(ptr) }.ok_or_else(|| self.context.error())
    }

    /// Returns the desktop area covered by a display.
    pub fn display_bounds(&self, display: DisplayId) -> Result<sdl3_sys::Rect> {
        let mut rect = sdl3_sys::Rect::default();
        let ok = unsafe { self.context.api.get_display_bounds(display.0, &mut rect) };
        self.context.check(ok)?;
        Ok(rect)
    }

    /// Returns the display mode of the desktop, ignoring any fullscreen
    /// window's mode change.
    pub fn desktop_display_mode(&self, display: DisplayId) -> Result<sdl3_sys::DisplayMode> {
        let ptr = unsafe { self.context.api.get_desktop_display_mode(display.0) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        Ok(unsafe { *ptr })
    }

    /// Returns the display mode currently in use.
    pub fn current_display_mode(&self, display: DisplayId) -> Result<sdl3_sys::DisplayMode> {
        let ptr = unsafe { self.context.api.get_current_display_mode(display.0) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        Ok(unsafe { *ptr })
    }

    /// Returns every fullscreen mode a display supports.
    ///
    /// The native call hands back an array of pointers in one allocation;
    /// the modes are copied out and the allocation released through
    /// `SDL_free` exactly once.
    pub fn fullscreen_display_modes(
        &self,
        display: DisplayId,
    ) -> Result<Vec<sdl3_sys::DisplayMode>> {
        let mut count: c_int = 0;
        let ptr = unsafe {
            self.context
                .api
                .get_fullscreen_display_modes(display.0, &mut count)
        };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        // The pointed-to mode records live inside the same allocation as
        // the pointer array, so they must be copied before the free.
        let modes = unsafe {
            std::slice::from_raw_parts(ptr, count.max(0) as usize)
                .iter()
                .filter(|mode| !mode.is_null())
                .map(|&mode| *mode)
                .collect()
        };
        unsafe { self.context.api.free(ptr as *mut std::os::raw::c_void) };
        Ok(modes)
    }
}

/// RAII handle to a native window.
///
/// The native window is destroyed when this value is dropped (or
/// explicitly via [`Window::destroy`]).
///
/// Windows are main-thread objects per SDL's threading rules: the wrapper
/// is `Send` so it can be moved, but not `Sync`.
pub struct Window {
    context: Arc<SdlContext>,
    window: sdl3_sys::Window,
}

// Safety: the handle can be transferred between threads; SDL requires the
// caller to only operate on it from the main thread.
unsafe impl Send for Window {}

impl Window {
    pub(crate) fn new(context: Arc<SdlContext>, window: sdl3_sys::Window) -> Self {
        Self { context, window }
    }

    /// Returns the numeric ID carried by this window's events.
    pub fn id(&self) -> Result<WindowId> {
        let id = unsafe { self.context.api.get_window_id(self.window) };
        if id == 0 {
            return Err(self.context.error());
        }
        Ok(WindowId(id))
    }

    /// Returns the window title (empty if none was set).
    pub fn title(&self) -> String {
        let ptr = unsafe { self.context.api.get_window_title(self.window) };
        unsafe { marshal::c_str_to_string_lossy(ptr) }
    }

    /// Sets the window title.
    pub fn set_title(&self, title: &str) -> Result<()> {
        let title = marshal::to_c_string(title)?;
        let ok = unsafe { self.context.api.set_window_title(self.window, title.as_ptr()) };
        self.context.check(ok)
    }

    /// Returns the window size in logical pixels.
    pub fn size(&self) -> Result<(i32, i32)> {
        let (mut w, mut h): (c_int, c_int) = (0, 0);
        let ok = unsafe { self.context.api.get_window_size(self.window, &mut w, &mut h) };
        self.context.check(ok)?;
        Ok((w, h))
    }

    /// Requests a new window size in logical pixels.
    ///
    /// The request is asynchronous on some window managers; watch for
    /// `SDL_EVENT_WINDOW_RESIZED` to learn the size actually applied.
    pub fn set_size(&self, w: i32, h: i32) -> Result<()> {
        let ok = unsafe { self.context.api.set_window_size(self.window, w, h) };
        self.context.check(ok)
    }

    /// Returns the window position in screen coordinates.
    pub fn position(&self) -> Result<(i32, i32)> {
        let (mut x, mut y): (c_int, c_int) = (0, 0);
        let ok = unsafe {
            self.context
                .api
                .get_window_position(self.window, &mut x, &mut y)
        };
        self.context.check(ok)?;
        Ok((x, y))
    }

    /// Moves the window. `sdl3_sys::SDL_WINDOWPOS_CENTERED` (as `i32`) is
    /// accepted for either coordinate.
    pub fn set_position(&self, x: i32, y: i32) -> Result<()> {
        let ok = unsafe { self.context.api.set_window_position(self.window, x, y) };
        self.context.check(ok)
    }

    /// Shows the window.
    pub fn show(&self) -> Result<()> {
        let ok = unsafe { self.context.api.show_window(self.window) };
        self.context.check(ok)
    }

    /// Hides the window.
    pub fn hide(&self) -> Result<()> {
        let ok = unsafe { self.context.api.hide_window(self.window) };
        self.context.check(ok)
    }

    /// Raises the window above other windows and requests input focus.
    pub fn raise(&self) -> Result<()> {
        let ok = unsafe { self.context.api.raise_window(self.window) };
        self.context.check(ok)
    }

    /// Returns the current `SDL_WINDOW_*` flag bits.
    pub fn flags(&self) -> sdl3_sys::WindowFlags {
        unsafe { self.context.api.get_window_flags(self.window) }
    }

    /// Enters or leaves fullscreen mode.
    pub fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
        let ok = unsafe {
            self.context
                .api
                .set_window_fullscreen(self.window, fullscreen)
        };
        self.context.check(ok)
    }

    /// Returns the pixel format of the window surface.
    pub fn pixel_format(&self) -> Result<sdl3_sys::PixelFormat> {
        let format = unsafe { self.context.api.get_window_pixel_format(self.window) };
        if format == sdl3_sys::SDL_PIXELFORMAT_UNKNOWN {
            return Err(self.context.error());
        }
        Ok(format)
    }

    /// Returns the display the window is currently on.
    pub fn display(&self) -> Result<DisplayId> {
        let id = unsafe { self.context.api.get_display_for_window(self.window) };
        if id == 0 {
            return Err(self.context.error());
        }
        Ok(DisplayId(id))
    }

    /// Creates an OpenGL context for this window and makes it current.
    ///
    /// The window must have been created with
    /// `sdl3_sys::SDL_WINDOW_OPENGL`.
    pub fn gl_create_context(&self) -> Result<GlContext> {
        let gl = unsafe { self.context.api.gl_create_context(self.window) };
        if gl.is_null() {
            return Err(self.context.error());
        }
        Ok(GlContext {
            context: self.context.clone(),
            gl,
        })
    }

    /// Swaps the OpenGL buffers for this window.
    pub fn gl_swap(&self) -> Result<()> {
        let ok = unsafe { self.context.api.gl_swap_window(self.window) };
        self.context.check(ok)
    }

    /// Starts accepting Unicode text input events for this window.
    pub fn start_text_input(&self) -> Result<()> {
        let ok = unsafe { self.context.api.start_text_input(self.window) };
        self.context.check(ok)
    }

    /// Stops receiving text input events for this window.
    pub fn stop_text_input(&self) -> Result<()> {
        let ok = unsafe { self.context.api.stop_text_input(self.window) };
        self.context.check(ok)
    }

    /// Whether text input events are currently enabled for this window.
    pub fn text_input_active(&self) -> bool {
        unsafe { self.context.api.text_input_active(self.window) }
    }

    /// Moves the mouse cursor to the given position within this window.
    pub fn warp_mouse(&self, x: f32, y: f32) {
        unsafe { self.context.api.warp_mouse_in_window(self.window, x, y) };
    }

    /// Enables or disables relative mouse mode while this window has
    /// focus.
    pub fn set_relative_mouse_mode(&self, enabled: bool) -> Result<()> {
        let ok = unsafe {
            self.context
                .api
                .set_window_relative_mouse_mode(self.window, enabled)
        };
        self.context.check(ok)
    }

    /// Whether relative mouse mode is enabled for this window.
    pub fn relative_mouse_mode(&self) -> bool {
        unsafe { self.context.api.get_window_relative_mouse_mode(self.window) }
    }

    /// Explicitly destroys the native window, consuming `self`.
    ///
    /// Normally destruction happens automatically on drop.
    pub fn destroy(mut self) {
        self.destroy_inner();
    }

    fn destroy_inner(&mut self) {
        if !self.window.is_null() {
            let mut window = std::ptr::null_mut();
            std::mem::swap(&mut self.window, &mut window);
            unsafe { self.context.api.destroy_window(window) };
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.destroy_inner();
    }
}

/// RAII handle to an OpenGL context created from a [`Window`].
pub struct GlContext {
    context: Arc<SdlContext>,
    gl: sdl3_sys::GLContext,
}

// Safety: like Window, the handle may be moved between threads; GL
// current-context rules still apply per SDL's documentation.
unsafe impl Send for GlContext {}

impl GlContext {
    /// Makes this context current for the given window.
    pub fn make_current(&self, window: &Window) -> Result<()> {
        let ok = unsafe { self.context.api.gl_make_current(window.window, self.gl) };
        self.context.check(ok)
    }

    /// Explicitly destroys the context, consuming `self`.
    pub fn destroy(mut self) -> Result<()> {
        self.destroy_inner()
    }

    fn destroy_inner(&mut self) -> Result<()> {
        if self.gl.is_null() {
            return Ok(());
        }
        let mut gl = std::ptr::null_mut();
        std::mem::swap(&mut self.gl, &mut gl);
        let ok = unsafe { self.context.api.gl_destroy_context(gl) };
        self.context.check(ok)
    }
}

impl Drop for GlContext {
    fn drop(&mut self) {
        if let Err(err) = self.destroy_inner() {
            tracing::error!("Failed to destroy OpenGL context: {:?}", err);
        }
    }
}

impl Sdl {
    /// Sets an OpenGL configuration attribute.
    ///
    /// Must be called before creating the context it should affect.
    pub fn gl_set_attribute(&self, attr: sdl3_sys::GLAttr, value: i32) -> Result<()> {
        let ok = unsafe { self.context.api.gl_set_attribute(attr, value) };
        self.context.check(ok)
    }

    /// Reads back the actual value of an OpenGL attribute.
    pub fn gl_get_attribute(&self, attr: sdl3_sys::GLAttr) -> Result<i32> {
        let mut value: c_int = 0;
        let ok = unsafe { self.context.api.gl_get_attribute(attr, &mut value) };
        self.context.check(ok)?;
        Ok(value)
    }
}
