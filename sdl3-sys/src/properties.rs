// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Property group types from `SDL_properties.h`.

use std::os::raw::c_int;

use crate::stdinc::Uint32;

/// Numeric ID of a property group; 0 is the invalid sentinel.
pub type PropertiesID = Uint32;

/// Discriminant returned by `SDL_GetPropertyType`.
pub type PropertyType = c_int;

pub const SDL_PROPERTY_TYPE_INVALID: PropertyType = 0;
pub const SDL_PROPERTY_TYPE_POINTER: PropertyType = 1;
pub const SDL_PROPERTY_TYPE_STRING: PropertyType = 2;
pub const SDL_PROPERTY_TYPE_NUMBER: PropertyType = 3;
pub const SDL_PROPERTY_TYPE_FLOAT: PropertyType = 4;
pub const SDL_PROPERTY_TYPE_BOOLEAN: PropertyType = 5;
