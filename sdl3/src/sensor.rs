// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Sensor enumeration and access.

use std::os::raw::c_int;
use std::sync::Arc;

use crate::{Result, Sdl, context::SdlContext, marshal, properties::PropertiesId};

/// Numeric ID of an attached sensor, as carried by sensor events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorId(pub sdl3_sys::SensorID);

impl SensorId {
    /// 0 is SDL's "no such sensor" sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<SensorId> for u32 {
    fn from(id: SensorId) -> u32 {
        id.0
    }
}

impl From<u32> for SensorId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl Sdl {
    /// Returns the IDs of every attached sensor.
    ///
    /// The native buffer is copied and released through `SDL_free`.
    pub fn sensors(&self) -> Result<Vec<SensorId>> {
        let mut count: c_int = 0;
        let ptr = unsafe { self.context.api.get_sensors(&mut count) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        let ids = unsafe {
            marshal::consume_native_array(ptr, count, |mem| self.context.api.free(mem))
        };
        Ok(ids.into_iter().map(SensorId).collect())
    }

    /// Returns the name of a sensor without opening it.
    pub fn sensor_name(&self, sensor: SensorId) -> Result<String> {
        let ptr = unsafe { self.context.api.get_sensor_name_for_id(sensor.0) };
        unsafe { marshal::c_str_to_string(ptr) }.ok_or_else(|| self.context.error())
    }

    /// Returns the type of a sensor without opening it
    /// (`SDL_SENSOR_INVALID` for an unknown ID).
    pub fn sensor_type(&self, sensor: SensorId) -> sdl3_sys::SensorType {
        unsafe { self.context.api.get_sensor_type_for_id(sensor.0) }
    }

    /// Returns the platform-specific type of a sensor without opening it
    /// (-1 for an unknown ID).
    pub fn sensor_non_portable_type(&self, sensor: SensorId) -> i32 {
        unsafe { self.context.api.get_sensor_non_portable_type_for_id(sensor.0) }
    }

    /// Opens a sensor for reading.
    pub fn open_sensor(&self, sensor: SensorId) -> Result<Sensor> {
        let handle = unsafe { self.context.api.open_sensor(sensor.0) };
        if handle.is_null() {
            return Err(self.context.error());
        }
        Ok(Sensor {
            context: self.context.clone(),
            sensor: handle,
        })
    }

    /// Refreshes the current state of every open sensor.
    ///
    /// Called implicitly by the event pump when the sensor subsystem is
    /// initialized.
    pub fn update_sensors(&self) {
        unsafe { self.context.api.update_sensors() };
    }
}

/// RAII handle to an opened sensor; closed on drop.
pub struct Sensor {
    context: Arc<SdlContext>,
    sensor: sdl3_sys::Sensor,
}

// Safety: the handle can be moved between threads; reads follow SDL's
// threading rules for sensors.
unsafe impl Send for Sensor {}

impl Sensor {
    /// Returns the name of the opened sensor.
    pub fn name(&self) -> Result<String> {
        let ptr = unsafe { self.context.api.get_sensor_name(self.sensor) };
        unsafe { marshal::c_str_to_string(ptr) }.ok_or_else(|| self.context.error())
    }

    /// Returns the sensor type.
    pub fn sensor_type(&self) -> sdl3_sys::SensorType {
        unsafe { self.context.api.get_sensor_type(self.sensor) }
    }

    /// Returns the platform-specific sensor type.
    pub fn non_portable_type(&self) -> i32 {
        unsafe { self.context.api.get_sensor_non_portable_type(self.sensor) }
    }

    /// Returns the instance ID of the opened sensor.
    pub fn id(&self) -> Result<SensorId> {
        let id = unsafe { self.context.api.get_sensor_id(self.sensor) };
        if id == 0 {
            return Err(self.context.error());
        }
        Ok(SensorId(id))
    }

    /// Returns the properties attached to the sensor.
    pub fn properties_id(&self) -> Result<PropertiesId> {
        let props = unsafe { self.context.api.get_sensor_properties(self.sensor) };
        if props == 0 {
            return Err(self.context.error());
        }
        Ok(PropertiesId(props))
    }

    /// Fills `data` with the current sensor reading.
    ///
    /// The number of values and their meaning depend on the sensor type
    /// (accelerometers and gyroscopes report 3; the `data` array of
    /// sensor events carries up to 6).
    pub fn data(&self, data: &mut [f32]) -> Result<()> {
        let ok = unsafe {
            self.context
                .api
                .get_sensor_data(self.sensor, data.as_mut_ptr(), data.len() as c_int)
        };
        self.context.check(ok)
    }

    /// Explicitly closes the sensor, consuming `self`.
    pub fn close(mut self) {
        self.close_inner();
    }

    fn close_inner(&mut self) {
        if !self.sensor.is_null() {
            let mut sensor = std::ptr::null_mut();
            std::mem::swap(&mut self.sensor, &mut sensor);
            unsafe { self.context.api.close_sensor(sensor) };
        }
    }
}

impl Drop for Sensor {
    fn drop(&mut self) {
        self.close_inner();
    }
}
