// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Sensor types from `SDL_sensor.h`.

use std::os::raw::c_int;

use crate::stdinc::Uint32;

/// Opaque sensor state owned by the sensor driver (`SDL_Sensor *`).
#[repr(C)]
pub struct SensorHandle {
    _opaque: [u8; 0],
}

pub type Sensor = *mut SensorHandle;

/// Numeric ID of an attached sensor; 0 is the invalid sentinel.
pub type SensorID = Uint32;

/// Accelerometer sensor units: m/s².
pub const SDL_STANDARD_GRAVITY: f32 = 9.80665;

/// The different sensors defined by SDL.
pub type SensorType = c_int;

/// Returned for an invalid sensor
pub const SDL_SENSOR_INVALID: SensorType = -1;
/// Unknown sensor type
pub const SDL_SENSOR_UNKNOWN: SensorType = 0;
/// Accelerometer
pub const SDL_SENSOR_ACCEL: SensorType = 1;
/// Gyroscope
pub const SDL_SENSOR_GYRO: SensorType = 2;
/// Accelerometer for left Joy-Con controller and Wii nunchuk
pub const SDL_SENSOR_ACCEL_L: SensorType = 3;
/// Gyroscope for left Joy-Con controller
pub const SDL_SENSOR_GYRO_L: SensorType = 4;
/// Accelerometer for right Joy-Con controller
pub const SDL_SENSOR_ACCEL_R: SensorType = 5;
/// Gyroscope for right Joy-Con controller
pub const SDL_SENSOR_GYRO_R: SensorType = 6;
