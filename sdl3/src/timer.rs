// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Time queries, delays and native timers.
//!
//! Timer callbacks run on a thread owned by the native library and are
//! passed through as raw `extern "C"` function pointers plus a userdata
//! pointer, exactly as `SDL_AddTimer` defines them; no closure
//! trampolines are provided at this layer.

use std::os::raw::c_void;
use std::sync::Arc;
use std::time::Duration;

use crate::{Result, Sdl, context::SdlContext};

/// Numeric ID of an active timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub sdl3_sys::TimerID);

impl TimerId {
    /// 0 is SDL's "no such timer" sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<TimerId> for u32 {
    fn from(id: TimerId) -> u32 {
        id.0
    }
}

impl From<u32> for TimerId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl Sdl {
    /// Milliseconds elapsed since library initialization.
    pub fn ticks(&self) -> Duration {
        Duration::from_millis(unsafe { self.context.api.get_ticks() })
    }

    /// Nanoseconds elapsed since library initialization.
    pub fn ticks_ns(&self) -> Duration {
        Duration::from_nanos(unsafe { self.context.api.get_ticks_ns() })
    }

    /// Current value of the high-resolution counter.
    ///
    /// Only meaningful relative to another counter reading, scaled by
    /// [`Sdl::performance_frequency`].
    pub fn performance_counter(&self) -> u64 {
        unsafe { self.context.api.get_performance_counter() }
    }

    /// Counts per second of the high-resolution counter.
    pub fn performance_frequency(&self) -> u64 {
        unsafe { self.context.api.get_performance_frequency() }
    }

    /// Blocks the calling thread for at least the given duration, with
    /// scheduler granularity.
    pub fn delay(&self, duration: Duration) {
        unsafe { self.context.api.delay_ns(duration.as_nanos() as u64) };
    }

    /// Blocks the calling thread for the given duration, trading CPU for
    /// precision near the deadline.
    pub fn delay_precise(&self, duration: Duration) {
        unsafe { self.context.api.delay_precise(duration.as_nanos() as u64) };
    }

    /// Schedules `callback` to run on the native timer thread after
    /// `interval` (millisecond granularity).
    ///
    /// The callback's return value reschedules or cancels the timer, per
    /// the native contract. `userdata` is passed through untouched; the
    /// caller is responsible for its validity for the timer's lifetime.
    ///
    /// The returned [`Timer`] cancels the timer when dropped.
    pub fn add_timer(
        &self,
        interval: Duration,
        callback: sdl3_sys::TimerCallback,
        userdata: *mut c_void,
    ) -> Result<Timer> {
        let id = unsafe {
            self.context
                .api
                .add_timer(interval.as_millis() as u32, callback, userdata)
        };
        if id == 0 {
            return Err(self.context.error());
        }
        Ok(Timer {
            context: self.context.clone(),
            id,
        })
    }

    /// Nanosecond-granularity variant of [`Sdl::add_timer`].
    pub fn add_timer_ns(
        &self,
        interval: Duration,
        callback: sdl3_sys::NSTimerCallback,
        userdata: *mut c_void,
    ) -> Result<Timer> {
        let id = unsafe {
            self.context
                .api
                .add_timer_ns(interval.as_nanos() as u64, callback, userdata)
        };
        if id == 0 {
            return Err(self.context.error());
        }
        Ok(Timer {
            context: self.context.clone(),
            id,
        })
    }
}

/// RAII handle to a native timer; the timer is removed on drop.
pub struct Timer {
    context: Arc<SdlContext>,
    id: sdl3_sys::TimerID,
}

impl Timer {
    /// Returns the timer's ID.
    pub fn id(&self) -> TimerId {
        TimerId(self.id)
    }

    /// Explicitly cancels the timer, consuming `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timer no longer exists (e.g. its callback
    /// already returned 0 to cancel it).
    pub fn remove(mut self) -> Result<()> {
        self.remove_inner()
    }

    fn remove_inner(&mut self) -> Result<()> {
        if self.id == 0 {
            return Ok(());
        }
        let id = std::mem::take(&mut self.id);
        let ok = unsafe { self.context.api.remove_timer(id) };
        self.context.check(ok)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        // A timer that cancelled itself from its callback is not an
        // error worth surfacing on the drop path.
        if self.id != 0 && self.remove_inner().is_err() {
            tracing::debug!("Timer was already removed.");
        }
    }
}
