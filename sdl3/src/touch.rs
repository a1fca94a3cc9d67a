// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Touch device queries.

use std::os::raw::c_int;

use crate::{Result, Sdl, marshal};

/// Numeric ID of a touch device.
///
/// IDs stay valid for the whole session even if the device is
/// disconnected and reconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub sdl3_sys::TouchID);

impl TouchId {
    /// 0 is SDL's "no such device" sentinel; `SDL_MOUSE_TOUCHID` marks
    /// synthetic events from mouse input.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Whether this event was synthesized from mouse input.
    pub fn is_mouse(self) -> bool {
        self.0 == sdl3_sys::SDL_MOUSE_TOUCHID
    }
}

impl From<TouchId> for u64 {
    fn from(id: TouchId) -> u64 {
        id.0
    }
}

impl From<u64> for TouchId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Numeric ID of a finger tracked by a touch device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FingerId(pub sdl3_sys::FingerID);

impl FingerId {
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<FingerId> for u64 {
    fn from(id: FingerId) -> u64 {
        id.0
    }
}

impl From<u64> for FingerId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl Sdl {
    /// Returns the IDs of every registered touch device.
    ///
    /// The native buffer is copied and released through `SDL_free`.
    pub fn touch_devices(&self) -> Result<Vec<TouchId>> {
        let mut count: c_int = 0;
        let ptr = unsafe { self.context.api.get_touch_devices(&mut count) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        let ids = unsafe {
            marshal::consume_native_array(ptr, count, |mem| self.context.api.free(mem))
        };
        Ok(ids.into_iter().map(TouchId).collect())
    }

    /// Returns the name of a touch device.
    pub fn touch_device_name(&self, touch: TouchId) -> Result<String> {
        let ptr = unsafe { self.context.api.get_touch_device_name(touch.0) };
        unsafe { marshal::c_str_to_string(ptr) }.ok_or_else(|| self.context.error())
    }

    /// Returns the type of a touch device.
    pub fn touch_device_type(&self, touch: TouchId) -> sdl3_sys::TouchDeviceType {
        unsafe { self.context.api.get_touch_device_type(touch.0) }
    }

    /// Returns the state of every active finger on a touch device.
    ///
    /// The native call returns one allocation holding an array of
    /// pointers into itself; the finger records are copied out and the
    /// allocation released through `SDL_free` exactly once.
    pub fn touch_fingers(&self, touch: TouchId) -> Result<Vec<sdl3_sys::Finger>> {
        let mut count: c_int = 0;
        let ptr = unsafe { self.context.api.get_touch_fingers(touch.0, &mut count) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        // The pointed-to finger records live inside the same allocation as
        // the pointer array, so they must be copied before the free.
        let fingers = unsafe {
            std::slice::from_raw_parts(ptr, count.max(0) as usize)
                .iter()
                .filter(|finger| !finger.is_null())
                .map(|&finger| *finger)
                .collect()
        };
        unsafe { self.context.api.free(ptr as *mut std::os::raw::c_void) };
        Ok(fingers)
    }
}
