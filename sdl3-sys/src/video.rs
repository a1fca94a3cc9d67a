// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Window and display types from `SDL_video.h`.

use std::os::raw::c_int;

use crate::pixels::PixelFormat;
use crate::stdinc::{Uint32, Uint64};

/// Opaque window state owned by the video driver (`SDL_Window *`).
#[repr(C)]
pub struct WindowHandle {
    _opaque: [u8; 0],
}

/// Nullable handle to a window.
pub type Window = *mut WindowHandle;

/// Opaque driver data hanging off a [`DisplayMode`].
#[repr(C)]
pub struct DisplayModeData {
    _opaque: [u8; 0],
}

/// Opaque OpenGL context handle (`SDL_GLContext`).
#[repr(C)]
pub struct GLContextState {
    _opaque: [u8; 0],
}

pub type GLContext = *mut GLContextState;

/// Numeric ID of a window; 0 is the invalid sentinel.
pub type WindowID = Uint32;

/// Numeric ID of a display; 0 is the invalid sentinel.
pub type DisplayID = Uint32;

/// The structure that defines a display mode.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DisplayMode {
    /// the display this mode is associated with
    pub displayID: DisplayID,
    /// pixel format
    pub format: PixelFormat,
    /// width
    pub w: c_int,
    /// height
    pub h: c_int,
    /// scale converting size to pixels (e.g. a 1920x1080 mode with 2.0 scale would have 3840x2160 pixels)
    pub pixel_density: f32,
    /// refresh rate (or 0.0f for unspecified)
    pub refresh_rate: f32,
    /// precise refresh rate numerator (or 0 for unspecified)
    pub refresh_rate_numerator: c_int,
    /// precise refresh rate denominator
    pub refresh_rate_denominator: c_int,
    /// Private
    pub internal: *mut DisplayModeData,
}

/// Bit flags describing window state, combined with bitwise OR.
pub type WindowFlags = Uint64;

/// window is in fullscreen mode
pub const SDL_WINDOW_FULLSCREEN: WindowFlags = 0x0000000000000001;
/// window usable with OpenGL context
pub const SDL_WINDOW_OPENGL: WindowFlags = 0x0000000000000002;
/// window is occluded
pub const SDL_WINDOW_OCCLUDED: WindowFlags = 0x0000000000000004;
/// window is neither mapped onto the desktop nor shown in the taskbar/dock/window list; SDL_ShowWindow() is required for it to become visible
pub const SDL_WINDOW_HIDDEN: WindowFlags = 0x0000000000000008;
/// no window decoration
pub const SDL_WINDOW_BORDERLESS: WindowFlags = 0x0000000000000010;
/// window can be resized
pub const SDL_WINDOW_RESIZABLE: WindowFlags = 0x0000000000000020;
/// window is minimized
pub const SDL_WINDOW_MINIMIZED: WindowFlags = 0x0000000000000040;
/// window is maximized
pub const SDL_WINDOW_MAXIMIZED: WindowFlags = 0x0000000000000080;
/// window has grabbed mouse input
pub const SDL_WINDOW_MOUSE_GRABBED: WindowFlags = 0x0000000000000100;
/// window has input focus
pub const SDL_WINDOW_INPUT_FOCUS: WindowFlags = 0x0000000000000200;
/// window has mouse focus
pub const SDL_WINDOW_MOUSE_FOCUS: WindowFlags = 0x0000000000000400;
/// window not created by SDL
pub const SDL_WINDOW_EXTERNAL: WindowFlags = 0x0000000000000800;
/// window is modal
pub const SDL_WINDOW_MODAL: WindowFlags = 0x0000000000001000;
/// window uses high pixel density back buffer if possible
pub const SDL_WINDOW_HIGH_PIXEL_DENSITY: WindowFlags = 0x0000000000002000;
/// window has mouse captured (unrelated to MOUSE_GRABBED)
pub const SDL_WINDOW_MOUSE_CAPTURE: WindowFlags = 0x0000000000004000;
/// window has relative mode enabled
pub const SDL_WINDOW_MOUSE_RELATIVE_MODE: WindowFlags = 0x0000000000008000;
/// window should always be above others
pub const SDL_WINDOW_ALWAYS_ON_TOP: WindowFlags = 0x0000000000010000;
/// window should be treated as a utility window, not showing in the task bar and window list
pub const SDL_WINDOW_UTILITY: WindowFlags = 0x0000000000020000;
/// window should be treated as a tooltip and does not get mouse or keyboard focus, requires a parent window
pub const SDL_WINDOW_TOOLTIP: WindowFlags = 0x0000000000040000;
/// window should be treated as a popup menu, requires a parent window
pub const SDL_WINDOW_POPUP_MENU: WindowFlags = 0x0000000000080000;
/// window has grabbed keyboard input
pub const SDL_WINDOW_KEYBOARD_GRABBED: WindowFlags = 0x0000000000100000;
/// window usable for Vulkan surface
pub const SDL_WINDOW_VULKAN: WindowFlags = 0x0000000010000000;
/// window usable for Metal view
pub const SDL_WINDOW_METAL: WindowFlags = 0x0000000020000000;
/// window with transparent buffer
pub const SDL_WINDOW_TRANSPARENT: WindowFlags = 0x0000000040000000;
/// window should not be focusable
pub const SDL_WINDOW_NOT_FOCUSABLE: WindowFlags = 0x0000000080000000;

pub const SDL_WINDOWPOS_UNDEFINED_MASK: Uint32 = 0x1FFF0000;
pub const SDL_WINDOWPOS_UNDEFINED: Uint32 = SDL_WINDOWPOS_UNDEFINED_MASK;
pub const SDL_WINDOWPOS_CENTERED_MASK: Uint32 = 0x2FFF0000;
pub const SDL_WINDOWPOS_CENTERED: Uint32 = SDL_WINDOWPOS_CENTERED_MASK;

/// OpenGL configuration attribute key (`SDL_GLAttr`).
pub type GLAttr = c_int;

pub const SDL_GL_RED_SIZE: GLAttr = 0;
pub const SDL_GL_GREEN_SIZE: GLAttr = 1;
pub const SDL_GL_BLUE_SIZE: GLAttr = 2;
pub const SDL_GL_ALPHA_SIZE: GLAttr = 3;
pub const SDL_GL_BUFFER_SIZE: GLAttr = 4;
pub const SDL_GL_DOUBLEBUFFER: GLAttr = 5;
pub const SDL_GL_DEPTH_SIZE: GLAttr = 6;
pub const SDL_GL_STENCIL_SIZE: GLAttr = 7;
pub const SDL_GL_ACCUM_RED_SIZE: GLAttr = 8;
pub const SDL_GL_ACCUM_GREEN_SIZE: GLAttr = 9;
pub const SDL_GL_ACCUM_BLUE_SIZE: GLAttr = 10;
pub const SDL_GL_ACCUM_ALPHA_SIZE: GLAttr = 11;
pub const SDL_GL_STEREO: GLAttr = 12;
pub const SDL_GL_MULTISAMPLEBUFFERS: GLAttr = 13;
pub const SDL_GL_MULTISAMPLESAMPLES: GLAttr = 14;
pub const SDL_GL_ACCELERATED_VISUAL: GLAttr = 15;
pub const SDL_GL_RETAINED_BACKING: GLAttr = 16;
pub const SDL_GL_CONTEXT_MAJOR_VERSION: GLAttr = 17;
pub const SDL_GL_CONTEXT_MINOR_VERSION: GLAttr = 18;
pub const SDL_GL_CONTEXT_FLAGS: GLAttr = 19;
pub const SDL_GL_CONTEXT_PROFILE_MASK: GLAttr = 20;
