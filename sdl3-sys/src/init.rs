// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Subsystem init flags from `SDL_init.h`.

use crate::stdinc::Uint32;

/// Bit flags accepted by `SDL_Init` / `SDL_InitSubSystem`, combined with
/// bitwise OR.
pub type InitFlags = Uint32;

/// `SDL_INIT_AUDIO` implies `SDL_INIT_EVENTS`
pub const SDL_INIT_AUDIO: InitFlags = 0x00000010;
/// `SDL_INIT_VIDEO` implies `SDL_INIT_EVENTS`, should be initialized on the main thread
pub const SDL_INIT_VIDEO: InitFlags = 0x00000020;
/// `SDL_INIT_JOYSTICK` implies `SDL_INIT_EVENTS`
pub const SDL_INIT_JOYSTICK: InitFlags = 0x00000200;
pub const SDL_INIT_HAPTIC: InitFlags = 0x00001000;
/// `SDL_INIT_GAMEPAD` implies `SDL_INIT_JOYSTICK`
pub const SDL_INIT_GAMEPAD: InitFlags = 0x00002000;
pub const SDL_INIT_EVENTS: InitFlags = 0x00004000;
/// `SDL_INIT_SENSOR` implies `SDL_INIT_EVENTS`
pub const SDL_INIT_SENSOR: InitFlags = 0x00008000;
/// `SDL_INIT_CAMERA` implies `SDL_INIT_EVENTS`
pub const SDL_INIT_CAMERA: InitFlags = 0x00010000;

/// Packs a version triple the way `SDL_VERSIONNUM` does.
pub const fn version_num(major: u32, minor: u32, patch: u32) -> i32 {
    (major * 1_000_000 + minor * 1_000 + patch) as i32
}

/// Extracts the major component from an `SDL_GetVersion` value.
pub const fn version_num_major(version: i32) -> i32 {
    version / 1_000_000
}

/// Extracts the minor component from an `SDL_GetVersion` value.
pub const fn version_num_minor(version: i32) -> i32 {
    (version / 1_000) % 1_000
}

/// Extracts the patch component from an `SDL_GetVersion` value.
pub const fn version_num_micro(version: i32) -> i32 {
    version % 1_000
}
