// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Property group access.
//!
//! SDL3 attaches string-keyed property bags to many of its objects and
//! offers a global bag. A group is addressed by a numeric ID; only
//! groups created through [`Sdl::create_properties`] are destroyed by
//! this wrapper, borrowed groups (the global one, or one read from
//! another SDL object) are left alone.

use std::sync::Arc;

use crate::{Result, Sdl, context::SdlContext, marshal};

/// Numeric ID of a property group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertiesId(pub sdl3_sys::PropertiesID);

impl PropertiesId {
    /// 0 is SDL's "no such property group" sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<PropertiesId> for u32 {
    fn from(id: PropertiesId) -> u32 {
        id.0
    }
}

impl From<u32> for PropertiesId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl Sdl {
    /// Creates a new, empty property group owned by the returned wrapper.
    pub fn create_properties(&self) -> Result<Properties> {
        let props = unsafe { self.context.api.create_properties() };
        if props == 0 {
            return Err(self.context.error());
        }
        Ok(Properties {
            context: self.context.clone(),
            props,
            owned: true,
        })
    }

    /// Borrows the process-global property group.
    pub fn global_properties(&self) -> Result<Properties> {
        let props = unsafe { self.context.api.get_global_properties() };
        if props == 0 {
            return Err(self.context.error());
        }
        Ok(Properties {
            context: self.context.clone(),
            props,
            owned: false,
        })
    }
}

/// Handle to a property group.
///
/// Owned groups (from [`Sdl::create_properties`]) are destroyed on drop;
/// borrowed groups are not.
pub struct Properties {
    context: Arc<SdlContext>,
    props: sdl3_sys::PropertiesID,
    owned: bool,
}

impl Properties {
    /// Returns the numeric ID of this group.
    pub fn id(&self) -> PropertiesId {
        PropertiesId(self.props)
    }

    /// Whether the group contains a property with this name.
    pub fn has(&self, name: &str) -> Result<bool> {
        let name = marshal::to_c_string(name)?;
        Ok(unsafe { self.context.api.has_property(self.props, name.as_ptr()) })
    }

    /// Returns the type of a property, `SDL_PROPERTY_TYPE_INVALID` if it
    /// doesn't exist.
    pub fn property_type(&self, name: &str) -> Result<sdl3_sys::PropertyType> {
        let name = marshal::to_c_string(name)?;
        Ok(unsafe { self.context.api.get_property_type(self.props, name.as_ptr()) })
    }

    /// Sets a string property.
    pub fn set_string(&self, name: &str, value: &str) -> Result<()> {
        let name = marshal::to_c_string(name)?;
        let value = marshal::to_c_string(value)?;
        let ok = unsafe {
            self.context
                .api
                .set_string_property(self.props, name.as_ptr(), value.as_ptr())
        };
        self.context.check(ok)
    }

    /// Reads a string property, or `default` if missing or of a
    /// different type.
    ///
    /// The returned pointer is owned by SDL and copied here; callers in
    /// other threads mutating the same property concurrently must use
    /// [`Properties::lock`].
    pub fn get_string(&self, name: &str, default: &str) -> Result<String> {
        let name = marshal::to_c_string(name)?;
        let default = marshal::to_c_string(default)?;
        let ptr = unsafe {
            self.context
                .api
                .get_string_property(self.props, name.as_ptr(), default.as_ptr())
        };
        Ok(unsafe { marshal::c_str_to_string_lossy(ptr) })
    }

    /// Sets a signed 64-bit integer property.
    pub fn set_number(&self, name: &str, value: i64) -> Result<()> {
        let name = marshal::to_c_string(name)?;
        let ok = unsafe {
            self.context
                .api
                .set_number_property(self.props, name.as_ptr(), value)
        };
        self.context.check(ok)
    }

    /// Reads an integer property, or `default` if missing or of a
    /// different type.
    pub fn get_number(&self, name: &str, default: i64) -> Result<i64> {
        let name = marshal::to_c_string(name)?;
        Ok(unsafe {
            self.context
                .api
                .get_number_property(self.props, name.as_ptr(), default)
        })
    }

    /// Sets a float property.
    pub fn set_float(&self, name: &str, value: f32) -> Result<()> {
        let name = marshal::to_c_string(name)?;
        let ok = unsafe {
            self.context
                .api
                .set_float_property(self.props, name.as_ptr(), value)
        };
        self.context.check(ok)
    }

    /// Reads a float property, or `default` if missing or of a different
    /// type.
    pub fn get_float(&self, name: &str, default: f32) -> Result<f32> {
        let name = marshal::to_c_string(name)?;
        Ok(unsafe {
            self.context
                .api
                .get_float_property(self.props, name.as_ptr(), default)
        })
    }

    /// Sets a boolean property.
    pub fn set_boolean(&self, name: &str, value: bool) -> Result<()> {
        let name = marshal::to_c_string(name)?;
        let ok = unsafe {
            self.context
                .api
                .set_boolean_property(self.props, name.as_ptr(), value)
        };
        self.context.check(ok)
    }

    /// Reads a boolean property, or `default` if missing or of a
    /// different type.
    pub fn get_boolean(&self, name: &str, default: bool) -> Result<bool> {
        let name = marshal::to_c_string(name)?;
        Ok(unsafe {
            self.context
                .api
                .get_boolean_property(self.props, name.as_ptr(), default)
        })
    }

    /// Removes a property from the group.
    pub fn clear(&self, name: &str) -> Result<()> {
        let name = marshal::to_c_string(name)?;
        let ok = unsafe { self.context.api.clear_property(self.props, name.as_ptr()) };
        self.context.check(ok)
    }

    /// Locks the group for multi-property read-modify-write sequences.
    ///
    /// The lock is re-entrant on the owning thread and released by the
    /// returned guard's drop.
    pub fn lock(&self) -> Result<PropertiesLock<'_>> {
        let ok = unsafe { self.context.api.lock_properties(self.props) };
        self.context.check(ok)?;
        Ok(PropertiesLock { properties: self })
    }

    /// Explicitly destroys an owned group, consuming `self`.
    ///
    /// A no-op for borrowed groups.
    pub fn destroy(mut self) {
        self.destroy_inner();
    }

    fn destroy_inner(&mut self) {
        if self.owned && self.props != 0 {
            let props = std::mem::take(&mut self.props);
            unsafe { self.context.api.destroy_properties(props) };
        }
    }
}

impl Drop for Properties {
    fn drop(&mut self) {
        self.destroy_inner();
    }
}

/// Guard returned by [`Properties::lock`]; unlocks on drop.
pub struct PropertiesLock<'a> {
    properties: &'a Properties,
}

impl Drop for PropertiesLock<'_> {
    fn drop(&mut self) {
        unsafe {
            self.properties
                .context
                .api
                .unlock_properties(self.properties.props)
        };
    }
}
