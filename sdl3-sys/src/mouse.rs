// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Mouse and cursor types from `SDL_mouse.h`.

use std::os::raw::c_int;

use crate::stdinc::Uint32;

/// Numeric ID of a mouse device; 0 is the invalid sentinel.
pub type MouseID = Uint32;

/// Opaque cursor state owned by the video driver (`SDL_Cursor *`).
#[repr(C)]
pub struct CursorHandle {
    _opaque: [u8; 0],
}

pub type Cursor = *mut CursorHandle;

/// Cursor types for `SDL_CreateSystemCursor`.
pub type SystemCursor = c_int;

/// Default cursor. Usually an arrow.
pub const SDL_SYSTEM_CURSOR_DEFAULT: SystemCursor = 0;
/// Text selection. Usually an I-beam.
pub const SDL_SYSTEM_CURSOR_TEXT: SystemCursor = 1;
/// Wait. Usually an hourglass or watch or spinning ball.
pub const SDL_SYSTEM_CURSOR_WAIT: SystemCursor = 2;
/// Crosshair.
pub const SDL_SYSTEM_CURSOR_CROSSHAIR: SystemCursor = 3;
/// Program is busy but still interactive. Usually it's WAIT with an arrow.
pub const SDL_SYSTEM_CURSOR_PROGRESS: SystemCursor = 4;
/// Double arrow pointing northwest and southeast.
pub const SDL_SYSTEM_CURSOR_NWSE_RESIZE: SystemCursor = 5;
/// Double arrow pointing northeast and southwest.
pub const SDL_SYSTEM_CURSOR_NESW_RESIZE: SystemCursor = 6;
/// Double arrow pointing west and east.
pub const SDL_SYSTEM_CURSOR_EW_RESIZE: SystemCursor = 7;
/// Double arrow pointing north and south.
pub const SDL_SYSTEM_CURSOR_NS_RESIZE: SystemCursor = 8;
/// Four pointed arrow pointing north, south, east, and west.
pub const SDL_SYSTEM_CURSOR_MOVE: SystemCursor = 9;
/// Not permitted. Usually a slashed circle or crossbones.
pub const SDL_SYSTEM_CURSOR_NOT_ALLOWED: SystemCursor = 10;
/// Pointer that indicates a link. Usually a pointing hand.
pub const SDL_SYSTEM_CURSOR_POINTER: SystemCursor = 11;
/// Window resize top-left.
pub const SDL_SYSTEM_CURSOR_NW_RESIZE: SystemCursor = 12;
/// Window resize top.
pub const SDL_SYSTEM_CURSOR_N_RESIZE: SystemCursor = 13;
/// Window resize top-right.
pub const SDL_SYSTEM_CURSOR_NE_RESIZE: SystemCursor = 14;
/// Window resize right.
pub const SDL_SYSTEM_CURSOR_E_RESIZE: SystemCursor = 15;
/// Window resize bottom-right.
pub const SDL_SYSTEM_CURSOR_SE_RESIZE: SystemCursor = 16;
/// Window resize bottom.
pub const SDL_SYSTEM_CURSOR_S_RESIZE: SystemCursor = 17;
/// Window resize bottom-left.
pub const SDL_SYSTEM_CURSOR_SW_RESIZE: SystemCursor = 18;
/// Window resize left.
pub const SDL_SYSTEM_CURSOR_W_RESIZE: SystemCursor = 19;
pub const SDL_SYSTEM_CURSOR_COUNT: SystemCursor = 20;

/// Scroll direction types for the Scroll event.
pub type MouseWheelDirection = c_int;

/// The scroll direction is normal
pub const SDL_MOUSEWHEEL_NORMAL: MouseWheelDirection = 0;
/// The scroll direction is flipped / natural
pub const SDL_MOUSEWHEEL_FLIPPED: MouseWheelDirection = 1;

/// Bit mask of pressed mouse buttons, as reported by `SDL_GetMouseState`.
///
/// Button 1 is the left button, 2 the middle and 3 the right; the mask for
/// button N is `1 << (N - 1)`.
pub type MouseButtonFlags = Uint32;

pub const SDL_BUTTON_LEFT: c_int = 1;
pub const SDL_BUTTON_MIDDLE: c_int = 2;
pub const SDL_BUTTON_RIGHT: c_int = 3;
pub const SDL_BUTTON_X1: c_int = 4;
pub const SDL_BUTTON_X2: c_int = 5;

/// `SDL_BUTTON_MASK`
pub const fn button_mask(button: c_int) -> MouseButtonFlags {
    1u32 << (button - 1)
}

pub const SDL_BUTTON_LMASK: MouseButtonFlags = button_mask(SDL_BUTTON_LEFT);
pub const SDL_BUTTON_MMASK: MouseButtonFlags = button_mask(SDL_BUTTON_MIDDLE);
pub const SDL_BUTTON_RMASK: MouseButtonFlags = button_mask(SDL_BUTTON_RIGHT);
pub const SDL_BUTTON_X1MASK: MouseButtonFlags = button_mask(SDL_BUTTON_X1);
pub const SDL_BUTTON_X2MASK: MouseButtonFlags = button_mask(SDL_BUTTON_X2);
