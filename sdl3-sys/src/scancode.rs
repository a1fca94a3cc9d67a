// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Physical key codes from `SDL_scancode.h`.
//!
//! Scancodes identify the physical key position (USB HID usage page 0x07),
//! independent of the active keyboard layout.

use std::os::raw::c_uint;

pub type Scancode = c_uint;

pub const SDL_SCANCODE_UNKNOWN: Scancode = 0;

pub const SDL_SCANCODE_A: Scancode = 4;
pub const SDL_SCANCODE_B: Scancode = 5;
pub const SDL_SCANCODE_C: Scancode = 6;
pub const SDL_SCANCODE_D: Scancode = 7;
pub const SDL_SCANCODE_E: Scancode = 8;
pub const SDL_SCANCODE_F: Scancode = 9;
pub const SDL_SCANCODE_G: Scancode = 10;
pub const SDL_SCANCODE_H: Scancode = 11;
pub const SDL_SCANCODE_I: Scancode = 12;
pub const SDL_SCANCODE_J: Scancode = 13;
pub const SDL_SCANCODE_K: Scancode = 14;
pub const SDL_SCANCODE_L: Scancode = 15;
pub const SDL_SCANCODE_M: Scancode = 16;
pub const SDL_SCANCODE_N: Scancode = 17;
pub const SDL_SCANCODE_O: Scancode = 18;
pub const SDL_SCANCODE_P: Scancode = 19;
pub const SDL_SCANCODE_Q: Scancode = 20;
pub const SDL_SCANCODE_R: Scancode = 21;
pub const SDL_SCANCODE_S: Scancode = 22;
pub const SDL_SCANCODE_T: Scancode = 23;
pub const SDL_SCANCODE_U: Scancode = 24;
pub const SDL_SCANCODE_V: Scancode = 25;
pub const SDL_SCANCODE_W: Scancode = 26;
pub const SDL_SCANCODE_X: Scancode = 27;
pub const SDL_SCANCODE_Y: Scancode = 28;
pub const SDL_SCANCODE_Z: Scancode = 29;

pub const SDL_SCANCODE_1: Scancode = 30;
pub const SDL_SCANCODE_2: Scancode = 31;
pub const SDL_SCANCODE_3: Scancode = 32;
pub const SDL_SCANCODE_4: Scancode = 33;
pub const SDL_SCANCODE_5: Scancode = 34;
pub const SDL_SCANCODE_6: Scancode = 35;
pub const SDL_SCANCODE_7: Scancode = 36;
pub const SDL_SCANCODE_8: Scancode = 37;
pub const SDL_SCANCODE_9: Scancode = 38;
pub const SDL_SCANCODE_0: Scancode = 39;

pub const SDL_SCANCODE_RETURN: Scancode = 40;
pub const SDL_SCANCODE_ESCAPE: Scancode = 41;
pub const SDL_SCANCODE_BACKSPACE: Scancode = 42;
pub const SDL_SCANCODE_TAB: Scancode = 43;
pub const SDL_SCANCODE_SPACE: Scancode = 44;

pub const SDL_SCANCODE_MINUS: Scancode = 45;
pub const SDL_SCANCODE_EQUALS: Scancode = 46;
pub const SDL_SCANCODE_LEFTBRACKET: Scancode = 47;
pub const SDL_SCANCODE_RIGHTBRACKET: Scancode = 48;
pub const SDL_SCANCODE_BACKSLASH: Scancode = 49;
pub const SDL_SCANCODE_NONUSHASH: Scancode = 50;
pub const SDL_SCANCODE_SEMICOLON: Scancode = 51;
pub const SDL_SCANCODE_APOSTROPHE: Scancode = 52;
pub const SDL_SCANCODE_GRAVE: Scancode = 53;
pub const SDL_SCANCODE_COMMA: Scancode = 54;
pub const SDL_SCANCODE_PERIOD: Scancode = 55;
pub const SDL_SCANCODE_SLASH: Scancode = 56;

pub const SDL_SCANCODE_CAPSLOCK: Scancode = 57;

pub const SDL_SCANCODE_F1: Scancode = 58;
pub const SDL_SCANCODE_F2: Scancode = 59;
pub const SDL_SCANCODE_F3: Scancode = 60;
pub const SDL_SCANCODE_F4: Scancode = 61;
pub const SDL_SCANCODE_F5: Scancode = 62;
pub const SDL_SCANCODE_F6: Scancode = 63;
pub const SDL_SCANCODE_F7: Scancode = 64;
pub const SDL_SCANCODE_F8: Scancode = 65;
pub const SDL_SCANCODE_F9: Scancode = 66;
pub const SDL_SCANCODE_F10: Scancode = 67;
pub const SDL_SCANCODE_F11: Scancode = 68;
pub const SDL_SCANCODE_F12: Scancode = 69;

pub const SDL_SCANCODE_PRINTSCREEN: Scancode = 70;
pub const SDL_SCANCODE_SCROLLLOCK: Scancode = 71;
pub const SDL_SCANCODE_PAUSE: Scancode = 72;
/// insert on PC, help on some Mac keyboards
pub const SDL_SCANCODE_INSERT: Scancode = 73;
pub const SDL_SCANCODE_HOME: Scancode = 74;
pub const SDL_SCANCODE_PAGEUP: Scancode = 75;
pub const SDL_SCANCODE_DELETE: Scancode = 76;
pub const SDL_SCANCODE_END: Scancode = 77;
pub const SDL_SCANCODE_PAGEDOWN: Scancode = 78;
pub const SDL_SCANCODE_RIGHT: Scancode = 79;
pub const SDL_SCANCODE_LEFT: Scancode = 80;
pub const SDL_SCANCODE_DOWN: Scancode = 81;
pub const SDL_SCANCODE_UP: Scancode = 82;

/// num lock on PC, clear on Mac keyboards
pub const SDL_SCANCODE_NUMLOCKCLEAR: Scancode = 83;
pub const SDL_SCANCODE_KP_DIVIDE: Scancode = 84;
pub const SDL_SCANCODE_KP_MULTIPLY: Scancode = 85;
pub const SDL_SCANCODE_KP_MINUS: Scancode = 86;
pub const SDL_SCANCODE_KP_PLUS: Scancode = 87;
pub const SDL_SCANCODE_KP_ENTER: Scancode = 88;
pub const SDL_SCANCODE_KP_1: Scancode = 89;
pub const SDL_SCANCODE_KP_2: Scancode = 90;
pub const SDL_SCANCODE_KP_3: Scancode = 91;
pub const SDL_SCANCODE_KP_4: Scancode = 92;
pub const SDL_SCANCODE_KP_5: Scancode = 93;
pub const SDL_SCANCODE_KP_6: Scancode = 94;
pub const SDL_SCANCODE_KP_7: Scancode = 95;
pub const SDL_SCANCODE_KP_8: Scancode = 96;
pub const SDL_SCANCODE_KP_9: Scancode = 97;
pub const SDL_SCANCODE_KP_0: Scancode = 98;
pub const SDL_SCANCODE_KP_PERIOD: Scancode = 99;

pub const SDL_SCANCODE_LCTRL: Scancode = 224;
pub const SDL_SCANCODE_LSHIFT: Scancode = 225;
/// alt, option
pub const SDL_SCANCODE_LALT: Scancode = 226;
/// windows, command (apple), meta
pub const SDL_SCANCODE_LGUI: Scancode = 227;
pub const SDL_SCANCODE_RCTRL: Scancode = 228;
pub const SDL_SCANCODE_RSHIFT: Scancode = 229;
/// alt gr, option
pub const SDL_SCANCODE_RALT: Scancode = 230;
/// windows, command (apple), meta
pub const SDL_SCANCODE_RGUI: Scancode = 231;

/// Not a key, just marks the number of scancodes for array bounds.
pub const SDL_SCANCODE_COUNT: usize = 512;
