// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! # sdl3 - Safe Rust bindings for the SDL3 library
//!
//! Safe, idiomatic Rust bindings for the SDL3 C library, covering
//! windowing, the event queue, keyboard/mouse/touch input, sensors,
//! timers, audio devices and streams, pixel formats and properties.
//!
//! ## Overview
//!
//! All multimedia work (event collection, audio mixing, window
//! management, input polling) happens inside the native SDL3 shared
//! library. This crate wraps the raw C FFI ([`sdl3_sys`]) with RAII
//! resource management, `Result`-based error handling and string/buffer
//! marshalling; it adds no queueing, caching or threading of its own.
//!
//! ### Key Concepts
//!
//! - **API handle**: a loaded SDL3 shared library ([`load_api`])
//! - **Context**: an initialized library ([`Sdl`]); `SDL_Quit` runs when
//!   the last clone and every resource created from it are dropped
//! - **Resources**: RAII wrappers ([`Window`], [`Cursor`], [`Sensor`],
//!   [`AudioDevice`], [`AudioStream`], [`Palette`], [`Properties`],
//!   [`Timer`], [`GlContext`]) that call the matching native destroy
//!   function exactly once
//! - **Events**: inert unions read from the native queue, exposed
//!   through [`Event`]'s discriminant-checked accessors
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐
//! │    Sdl    │  (initialized library)
//! └─────┬─────┘
//!       ├─► Window ──► GlContext
//!       ├─► AudioDevice ──► AudioStream (bound)
//!       ├─► Cursor / Sensor / Palette / Properties / Timer
//!       └─► poll_event() ──► Event (tagged union view)
//! ```
//!
//! ## Examples
//!
//! ### Opening a window and draining the event queue
//!
//! ```no_run
//! use sdl3::{Sdl, config::sdl3_library_path, load_api, sys};
//!
//! # fn main() -> Result<(), sdl3::Error> {
//! let api = load_api(sdl3_library_path())?;
//! let sdl = Sdl::init(api, sys::SDL_INIT_VIDEO)?;
//!
//! let window = sdl.create_window("demo", 1280, 720, sys::SDL_WINDOW_RESIZABLE)?;
//! 'running: loop {
//!     while let Some(event) = sdl.poll_event() {
//!         if event.is_quit() {
//!             break 'running;
//!         }
//!         if let Some(key) = event.key() {
//!             println!("scancode {} down={}", key.scancode, key.down);
//!         }
//!     }
//!     sdl.delay(std::time::Duration::from_millis(16));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Converting audio through a stream
//!
//! ```no_run
//! use sdl3::{Sdl, config::sdl3_library_path, load_api, sys};
//!
//! # fn main() -> Result<(), sdl3::Error> {
//! let api = load_api(sdl3_library_path())?;
//! let sdl = Sdl::init(api, sys::SDL_INIT_AUDIO)?;
//!
//! let src = sys::AudioSpec { format: sys::SDL_AUDIO_S16LE, channels: 2, freq: 44_100 };
//! let dst = sys::AudioSpec { format: sys::SDL_AUDIO_F32LE, channels: 2, freq: 48_000 };
//! let stream = sdl.create_audio_stream(&src, &dst)?;
//!
//! stream.put_data(&[0u8; 4096])?;
//! stream.flush()?;
//! let mut out = vec![0u8; stream.available()?];
//! let n = stream.get_data(&mut out)?;
//! println!("converted {} bytes", n);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! SDL3 reports failure through sentinel returns plus a thread-local
//! last-error string. The wrappers convert that convention to
//! [`Result`]: a failed call becomes [`Error::Sdl`] carrying the text
//! `SDL_GetError` returned. Nothing is retried or interpreted.
//!
//! ## Thread Safety
//!
//! [`Sdl`] is `Send + Sync` and cheap to clone. Resource wrappers are
//! `Send` but not `Sync`; windowing and event calls must additionally
//! stay on the main thread, as the native library requires.

mod api;
mod audio;
mod context;
mod error;
mod events;
mod keyboard;
mod marshal;
mod mouse;
mod pixels;
mod properties;
mod rect;
mod sensor;
mod timer;
mod touch;
mod video;

pub mod config;

/// Raw FFI types and constants, re-exported for callers that need to go
/// below the safe wrappers.
pub use sdl3_sys as sys;

pub use api::{SdlApiHandle, load_api};
pub use audio::{AudioDevice, AudioDeviceId, AudioStream};
pub use context::Sdl;
pub use error::{Error, Result};
pub use events::Event;
pub use keyboard::KeyboardId;
pub use mouse::{Cursor, MouseId, MouseState};
pub use pixels::{Palette, PixelMasks};
pub use properties::{Properties, PropertiesId, PropertiesLock};
pub use sensor::{Sensor, SensorId};
pub use timer::{Timer, TimerId};
pub use touch::{FingerId, TouchId};
pub use video::{DisplayId, GlContext, Window, WindowId};
