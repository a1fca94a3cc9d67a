// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Basic integer aliases from `SDL_stdinc.h`.
//!
//! SDL3 spells its sized integers `Uint32`, `Sint64` etc. throughout the
//! headers; the aliases are kept so struct declarations read like the C
//! originals. SDL3's `bool` is C99 `bool` (one byte) and maps directly to
//! Rust `bool`.

pub type Uint8 = u8;
pub type Sint8 = i8;
pub type Uint16 = u16;
pub type Sint16 = i16;
pub type Uint32 = u32;
pub type Sint32 = i32;
pub type Uint64 = u64;
pub type Sint64 = i64;
