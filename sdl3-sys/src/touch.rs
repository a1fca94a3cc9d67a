// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Touch device types from `SDL_touch.h`.

use std::os::raw::c_int;

use crate::stdinc::Uint64;

/// Numeric ID of a touch device; 0 is the invalid sentinel.
pub type TouchID = Uint64;

/// Numeric ID of a finger tracked by a touch device; 0 is the invalid
/// sentinel.
pub type FingerID = Uint64;

/// An enum that describes the type of a touch device.
pub type TouchDeviceType = c_int;

pub const SDL_TOUCH_DEVICE_INVALID: TouchDeviceType = -1;
/// touch screen with window-relative coordinates
pub const SDL_TOUCH_DEVICE_DIRECT: TouchDeviceType = 0;
/// trackpad with absolute device coordinates
pub const SDL_TOUCH_DEVICE_INDIRECT_ABSOLUTE: TouchDeviceType = 1;
/// trackpad with screen cursor-relative coordinates
pub const SDL_TOUCH_DEVICE_INDIRECT_RELATIVE: TouchDeviceType = 2;

/// Data about a single finger in a multitouch event.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct Finger {
    /// the finger ID
    pub id: FingerID,
    /// the x-axis location of the touch event, normalized (0...1)
    pub x: f32,
    /// the y-axis location of the touch event, normalized (0...1)
    pub y: f32,
    /// the quantity of pressure applied, normalized (0...1)
    pub pressure: f32,
}

/// The `SDL_MouseID` for mouse events simulated with touch input.
pub const SDL_TOUCH_MOUSEID: u32 = u32::MAX;

/// The `SDL_TouchID` for touch events simulated with mouse input.
pub const SDL_MOUSE_TOUCHID: TouchID = u64::MAX;
