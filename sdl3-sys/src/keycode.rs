// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Virtual key codes from `SDL_keycode.h`.
//!
//! Keycodes are layout-dependent: pressing the key in the top-left letter
//! row reports `SDLK_Q` on a QWERTY layout and `SDLK_A` on AZERTY.
//! Printable keys use their Unicode value; the rest are the scancode ORed
//! with [`SDLK_SCANCODE_MASK`].

use crate::scancode::{self, Scancode};
use crate::stdinc::Uint32;

pub type Keycode = Uint32;

pub const SDLK_SCANCODE_MASK: Keycode = 1 << 30;

/// `SDL_SCANCODE_TO_KEYCODE`
pub const fn scancode_to_keycode(scancode: Scancode) -> Keycode {
    scancode | SDLK_SCANCODE_MASK
}

pub const SDLK_UNKNOWN: Keycode = 0x00000000;
pub const SDLK_RETURN: Keycode = 0x0000000D;
pub const SDLK_ESCAPE: Keycode = 0x0000001B;
pub const SDLK_BACKSPACE: Keycode = 0x00000008;
pub const SDLK_TAB: Keycode = 0x00000009;
pub const SDLK_SPACE: Keycode = 0x00000020;
pub const SDLK_EXCLAIM: Keycode = 0x00000021;
pub const SDLK_HASH: Keycode = 0x00000023;
pub const SDLK_PERCENT: Keycode = 0x00000025;
pub const SDLK_AMPERSAND: Keycode = 0x00000026;
pub const SDLK_APOSTROPHE: Keycode = 0x00000027;
pub const SDLK_ASTERISK: Keycode = 0x0000002A;
pub const SDLK_PLUS: Keycode = 0x0000002B;
pub const SDLK_COMMA: Keycode = 0x0000002C;
pub const SDLK_MINUS: Keycode = 0x0000002D;
pub const SDLK_PERIOD: Keycode = 0x0000002E;
pub const SDLK_SLASH: Keycode = 0x0000002F;
pub const SDLK_0: Keycode = 0x00000030;
pub const SDLK_1: Keycode = 0x00000031;
pub const SDLK_2: Keycode = 0x00000032;
pub const SDLK_3: Keycode = 0x00000033;
pub const SDLK_4: Keycode = 0x00000034;
pub const SDLK_5: Keycode = 0x00000035;
pub const SDLK_6: Keycode = 0x00000036;
pub const SDLK_7: Keycode = 0x00000037;
pub const SDLK_8: Keycode = 0x00000038;
pub const SDLK_9: Keycode = 0x00000039;
pub const SDLK_SEMICOLON: Keycode = 0x0000003B;
pub const SDLK_EQUALS: Keycode = 0x0000003D;
pub const SDLK_LEFTBRACKET: Keycode = 0x0000005B;
pub const SDLK_BACKSLASH: Keycode = 0x0000005C;
pub const SDLK_RIGHTBRACKET: Keycode = 0x0000005D;
pub const SDLK_GRAVE: Keycode = 0x00000060;
pub const SDLK_A: Keycode = 0x00000061;
pub const SDLK_B: Keycode = 0x00000062;
pub const SDLK_C: Keycode = 0x00000063;
pub const SDLK_D: Keycode = 0x00000064;
pub const SDLK_E: Keycode = 0x00000065;
pub const SDLK_F: Keycode = 0x00000066;
pub const SDLK_G: Keycode = 0x00000067;
pub const SDLK_H: Keycode = 0x00000068;
pub const SDLK_I: Keycode = 0x00000069;
pub const SDLK_J: Keycode = 0x0000006A;
pub const SDLK_K: Keycode = 0x0000006B;
pub const SDLK_L: Keycode = 0x0000006C;
pub const SDLK_M: Keycode = 0x0000006D;
pub const SDLK_N: Keycode = 0x0000006E;
pub const SDLK_O: Keycode = 0x0000006F;
pub const SDLK_P: Keycode = 0x00000070;
pub const SDLK_Q: Keycode = 0x00000071;
pub const SDLK_R: Keycode = 0x00000072;
pub const SDLK_S: Keycode = 0x00000073;
pub const SDLK_T: Keycode = 0x00000074;
pub const SDLK_U: Keycode = 0x00000075;
pub const SDLK_V: Keycode = 0x00000076;
pub const SDLK_W: Keycode = 0x00000077;
pub const SDLK_X: Keycode = 0x00000078;
pub const SDLK_Y: Keycode = 0x00000079;
pub const SDLK_Z: Keycode = 0x0000007A;
pub const SDLK_DELETE: Keycode = 0x0000007F;

pub const SDLK_CAPSLOCK: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_CAPSLOCK);
pub const SDLK_F1: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F1);
pub const SDLK_F2: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F2);
pub const SDLK_F3: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F3);
pub const SDLK_F4: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F4);
pub const SDLK_F5: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F5);
pub const SDLK_F6: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F6);
pub const SDLK_F7: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F7);
pub const SDLK_F8: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F8);
pub const SDLK_F9: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F9);
pub const SDLK_F10: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F10);
pub const SDLK_F11: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F11);
pub const SDLK_F12: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_F12);
pub const SDLK_PRINTSCREEN: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_PRINTSCREEN);
pub const SDLK_SCROLLLOCK: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_SCROLLLOCK);
pub const SDLK_PAUSE: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_PAUSE);
pub const SDLK_INSERT: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_INSERT);
pub const SDLK_HOME: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_HOME);
pub const SDLK_PAGEUP: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_PAGEUP);
pub const SDLK_END: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_END);
pub const SDLK_PAGEDOWN: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_PAGEDOWN);
pub const SDLK_RIGHT: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_RIGHT);
pub const SDLK_LEFT: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_LEFT);
pub const SDLK_DOWN: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_DOWN);
pub const SDLK_UP: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_UP);
pub const SDLK_LCTRL: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_LCTRL);
pub const SDLK_LSHIFT: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_LSHIFT);
pub const SDLK_LALT: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_LALT);
pub const SDLK_LGUI: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_LGUI);
pub const SDLK_RCTRL: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_RCTRL);
pub const SDLK_RSHIFT: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_RSHIFT);
pub const SDLK_RALT: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_RALT);
pub const SDLK_RGUI: Keycode = scancode_to_keycode(scancode::SDL_SCANCODE_RGUI);
