// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! # sdl3-sys: Raw FFI bindings to the SDL3 C library
//!
//! This crate provides low-level, unsafe Rust bindings to the SDL3 shared
//! library. The native entry points are resolved at runtime with
//! `libloading`, one symbol per bound `SDL_*` function.
//!
//! ## Overview
//!
//! `sdl3-sys` exposes:
//! - Raw C types mirroring the SDL3 headers bit-for-bit (`Rect`,
//!   `AudioSpec`, the `Event` union, opaque handles such as `Window`)
//! - Constants for init flags, event types, pixel formats, scancodes, etc.,
//!   with the exact values from the SDL3 headers
//! - [`Sdl3Api`], a dynamic-loading table with one thin unsafe method per
//!   native function (`SDL_Init` becomes `api.init(..)`)
//!
//! ## Usage
//!
//! **Most users should NOT use this crate directly.** Use the safe [`sdl3`]
//! wrapper crate instead, which provides:
//! - RAII resource management (windows, cursors, audio devices, ...)
//! - Rust-idiomatic error handling with `Result` and `SDL_GetError`
//! - String and buffer marshalling across the C boundary
//!
//! This crate is only needed for:
//! - Implementing custom SDL3 wrappers
//! - Calling SDL3 functions not yet wrapped by the `sdl3` crate
//!
//! ## Safety
//!
//! All functions in this crate are `unsafe` and require the caller to uphold
//! SDL3's invariants:
//! - `SDL_Init` must succeed before most subsystem calls
//! - Handles must not be used after the matching destroy/close call
//! - Buffers returned by list queries must be released with `SDL_free`
//!   exactly once, and never when the returned pointer is null
//! - Null checks are the caller's responsibility
//!
//! [`sdl3`]: https://docs.rs/sdl3

// Suppress expected warnings from header-shaped code.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(missing_docs)]
#![allow(rustdoc::broken_intra_doc_links)]
#![allow(rustdoc::invalid_html_tags)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

extern crate libloading;

mod api;
mod audio;
mod events;
mod init;
mod keyboard;
mod keycode;
mod mouse;
mod pixels;
mod properties;
mod rect;
mod scancode;
mod sensor;
mod stdinc;
mod timer;
mod touch;
mod video;

pub use api::Sdl3Api;
pub use audio::*;
pub use events::*;
pub use init::*;
pub use keyboard::*;
pub use keycode::*;
pub use mouse::*;
pub use pixels::*;
pub use properties::*;
pub use rect::*;
pub use scancode::*;
pub use sensor::*;
pub use stdinc::*;
pub use timer::*;
pub use touch::*;
pub use video::*;
