// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Keyboard types from `SDL_keyboard.h`.

use crate::stdinc::{Uint16, Uint32};

/// Numeric ID of a keyboard device; 0 is the invalid sentinel.
pub type KeyboardID = Uint32;

/// Bit flags describing the state of the modifier keys, combined with
/// bitwise OR.
pub type Keymod = Uint16;

/// no modifier is applicable
pub const SDL_KMOD_NONE: Keymod = 0x0000;
/// the left Shift key is down
pub const SDL_KMOD_LSHIFT: Keymod = 0x0001;
/// the right Shift key is down
pub const SDL_KMOD_RSHIFT: Keymod = 0x0002;
/// the Level 5 Shift key is down
pub const SDL_KMOD_LEVEL5: Keymod = 0x0004;
/// the left Ctrl (Control) key is down
pub const SDL_KMOD_LCTRL: Keymod = 0x0040;
/// the right Ctrl (Control) key is down
pub const SDL_KMOD_RCTRL: Keymod = 0x0080;
/// the left Alt key is down
pub const SDL_KMOD_LALT: Keymod = 0x0100;
/// the right Alt key is down
pub const SDL_KMOD_RALT: Keymod = 0x0200;
/// the left GUI key (often the Windows key) is down
pub const SDL_KMOD_LGUI: Keymod = 0x0400;
/// the right GUI key (often the Windows key) is down
pub const SDL_KMOD_RGUI: Keymod = 0x0800;
/// the Num Lock key (may be located on an extended keypad) is on
pub const SDL_KMOD_NUM: Keymod = 0x1000;
/// the Caps Lock key is on
pub const SDL_KMOD_CAPS: Keymod = 0x2000;
/// the !AltGr key is down
pub const SDL_KMOD_MODE: Keymod = 0x4000;
/// the Scroll Lock key is on
pub const SDL_KMOD_SCROLL: Keymod = 0x8000;

/// Any Ctrl key is down.
pub const SDL_KMOD_CTRL: Keymod = SDL_KMOD_LCTRL | SDL_KMOD_RCTRL;
/// Any Shift key is down.
pub const SDL_KMOD_SHIFT: Keymod = SDL_KMOD_LSHIFT | SDL_KMOD_RSHIFT;
/// Any Alt key is down.
pub const SDL_KMOD_ALT: Keymod = SDL_KMOD_LALT | SDL_KMOD_RALT;
/// Any GUI key is down.
pub const SDL_KMOD_GUI: Keymod = SDL_KMOD_LGUI | SDL_KMOD_RGUI;
