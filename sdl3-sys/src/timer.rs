// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Timer types from `SDL_timer.h`.

use std::os::raw::c_void;

use crate::stdinc::{Uint32, Uint64};

/// Numeric ID of an active timer; 0 is the invalid sentinel.
pub type TimerID = Uint32;

/// Callback invoked by `SDL_AddTimer` on the timer thread.
///
/// Returning the next timer interval reschedules the timer; returning 0
/// cancels it.
pub type TimerCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, timer_id: TimerID, interval: Uint32) -> Uint32>;

/// Nanosecond variant of [`TimerCallback`], used by `SDL_AddTimerNS`.
pub type NSTimerCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, timer_id: TimerID, interval: Uint64) -> Uint64>;

pub const SDL_MS_PER_SECOND: Uint64 = 1_000;
pub const SDL_US_PER_SECOND: Uint64 = 1_000_000;
pub const SDL_NS_PER_SECOND: Uint64 = 1_000_000_000;
pub const SDL_NS_PER_MS: Uint64 = 1_000_000;
pub const SDL_NS_PER_US: Uint64 = 1_000;
