// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Pixel format types and constants from `SDL_pixels.h`.

use std::os::raw::c_int;

use crate::stdinc::{Uint8, Uint32};

/// Pixel format identifier, packed the way `SDL_DEFINE_PIXELFORMAT` packs it.
pub type PixelFormat = Uint32;

pub const SDL_PIXELTYPE_UNKNOWN: Uint32 = 0;
pub const SDL_PIXELTYPE_INDEX1: Uint32 = 1;
pub const SDL_PIXELTYPE_INDEX4: Uint32 = 2;
pub const SDL_PIXELTYPE_INDEX8: Uint32 = 3;
pub const SDL_PIXELTYPE_PACKED8: Uint32 = 4;
pub const SDL_PIXELTYPE_PACKED16: Uint32 = 5;
pub const SDL_PIXELTYPE_PACKED32: Uint32 = 6;
pub const SDL_PIXELTYPE_ARRAYU8: Uint32 = 7;
pub const SDL_PIXELTYPE_ARRAYU16: Uint32 = 8;
pub const SDL_PIXELTYPE_ARRAYU32: Uint32 = 9;
pub const SDL_PIXELTYPE_ARRAYF16: Uint32 = 10;
pub const SDL_PIXELTYPE_ARRAYF32: Uint32 = 11;

pub const SDL_PACKEDORDER_NONE: Uint32 = 0;
pub const SDL_PACKEDORDER_XRGB: Uint32 = 1;
pub const SDL_PACKEDORDER_RGBX: Uint32 = 2;
pub const SDL_PACKEDORDER_ARGB: Uint32 = 3;
pub const SDL_PACKEDORDER_RGBA: Uint32 = 4;
pub const SDL_PACKEDORDER_XBGR: Uint32 = 5;
pub const SDL_PACKEDORDER_BGRX: Uint32 = 6;
pub const SDL_PACKEDORDER_ABGR: Uint32 = 7;
pub const SDL_PACKEDORDER_BGRA: Uint32 = 8;

pub const SDL_ARRAYORDER_NONE: Uint32 = 0;
pub const SDL_ARRAYORDER_RGB: Uint32 = 1;
pub const SDL_ARRAYORDER_RGBA: Uint32 = 2;
pub const SDL_ARRAYORDER_ARGB: Uint32 = 3;
pub const SDL_ARRAYORDER_BGR: Uint32 = 4;
pub const SDL_ARRAYORDER_BGRA: Uint32 = 5;
pub const SDL_ARRAYORDER_ABGR: Uint32 = 6;

pub const SDL_PACKEDLAYOUT_NONE: Uint32 = 0;
pub const SDL_PACKEDLAYOUT_332: Uint32 = 1;
pub const SDL_PACKEDLAYOUT_4444: Uint32 = 2;
pub const SDL_PACKEDLAYOUT_1555: Uint32 = 3;
pub const SDL_PACKEDLAYOUT_5551: Uint32 = 4;
pub const SDL_PACKEDLAYOUT_565: Uint32 = 5;
pub const SDL_PACKEDLAYOUT_8888: Uint32 = 6;
pub const SDL_PACKEDLAYOUT_2101010: Uint32 = 7;
pub const SDL_PACKEDLAYOUT_1010102: Uint32 = 8;

/// `SDL_DEFINE_PIXELFORMAT` (a header macro, transcribed as a const fn).
pub const fn define_pixelformat(
    pixel_type: Uint32,
    order: Uint32,
    layout: Uint32,
    bits: Uint32,
    bytes: Uint32,
) -> PixelFormat {
    (1 << 28) | (pixel_type << 24) | (order << 20) | (layout << 16) | (bits << 8) | bytes
}

pub const SDL_PIXELFORMAT_UNKNOWN: PixelFormat = 0;
pub const SDL_PIXELFORMAT_INDEX8: PixelFormat =
    define_pixelformat(SDL_PIXELTYPE_INDEX8, 0, 0, 8, 1);
pub const SDL_PIXELFORMAT_RGB565: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_PACKED16,
    SDL_PACKEDORDER_XRGB,
    SDL_PACKEDLAYOUT_565,
    16,
    2,
);
pub const SDL_PIXELFORMAT_RGB24: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_ARRAYU8,
    SDL_ARRAYORDER_RGB,
    SDL_PACKEDLAYOUT_NONE,
    24,
    3,
);
pub const SDL_PIXELFORMAT_BGR24: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_ARRAYU8,
    SDL_ARRAYORDER_BGR,
    SDL_PACKEDLAYOUT_NONE,
    24,
    3,
);
pub const SDL_PIXELFORMAT_XRGB8888: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_PACKED32,
    SDL_PACKEDORDER_XRGB,
    SDL_PACKEDLAYOUT_8888,
    32,
    4,
);
pub const SDL_PIXELFORMAT_XBGR8888: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_PACKED32,
    SDL_PACKEDORDER_XBGR,
    SDL_PACKEDLAYOUT_8888,
    32,
    4,
);
pub const SDL_PIXELFORMAT_ARGB8888: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_PACKED32,
    SDL_PACKEDORDER_ARGB,
    SDL_PACKEDLAYOUT_8888,
    32,
    4,
);
pub const SDL_PIXELFORMAT_RGBA8888: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_PACKED32,
    SDL_PACKEDORDER_RGBA,
    SDL_PACKEDLAYOUT_8888,
    32,
    4,
);
pub const SDL_PIXELFORMAT_ABGR8888: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_PACKED32,
    SDL_PACKEDORDER_ABGR,
    SDL_PACKEDLAYOUT_8888,
    32,
    4,
);
pub const SDL_PIXELFORMAT_BGRA8888: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_PACKED32,
    SDL_PACKEDORDER_BGRA,
    SDL_PACKEDLAYOUT_8888,
    32,
    4,
);
pub const SDL_PIXELFORMAT_ARGB2101010: PixelFormat = define_pixelformat(
    SDL_PIXELTYPE_PACKED32,
    SDL_PACKEDORDER_ARGB,
    SDL_PACKEDLAYOUT_2101010,
    32,
    4,
);

// Aliases for the native 32-bit byte order (little-endian targets).
pub const SDL_PIXELFORMAT_RGBA32: PixelFormat = SDL_PIXELFORMAT_ABGR8888;
pub const SDL_PIXELFORMAT_ARGB32: PixelFormat = SDL_PIXELFORMAT_BGRA8888;
pub const SDL_PIXELFORMAT_BGRA32: PixelFormat = SDL_PIXELFORMAT_ARGB8888;
pub const SDL_PIXELFORMAT_ABGR32: PixelFormat = SDL_PIXELFORMAT_RGBA8888;

/// A structure that represents a color as RGBA components.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: Uint8,
    pub g: Uint8,
    pub b: Uint8,
    pub a: Uint8,
}

/// The bits of this structure can be directly reinterpreted as a
/// float-packed color.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A set of indexed colors representing a palette.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// number of elements in `colors`
    pub ncolors: c_int,
    /// an array of colors, `ncolors` long
    pub colors: *mut Color,
    /// internal use only, do not touch
    pub version: Uint32,
    /// internal use only, do not touch
    pub refcount: c_int,
}

/// Details about the format of a pixel.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct PixelFormatDetails {
    pub format: PixelFormat,
    pub bits_per_pixel: Uint8,
    pub bytes_per_pixel: Uint8,
    pub padding: [Uint8; 2],
    pub Rmask: Uint32,
    pub Gmask: Uint32,
    pub Bmask: Uint32,
    pub Amask: Uint32,
    pub Rbits: Uint8,
    pub Gbits: Uint8,
    pub Bbits: Uint8,
    pub Abits: Uint8,
    pub Rshift: Uint8,
    pub Gshift: Uint8,
    pub Bshift: Uint8,
    pub Ashift: Uint8,
}

/// `SDL_BITSPERPIXEL`
pub const fn bits_per_pixel(format: PixelFormat) -> Uint32 {
    (format >> 8) & 0xFF
}

/// `SDL_BYTESPERPIXEL`
pub const fn bytes_per_pixel(format: PixelFormat) -> Uint32 {
    format & 0xFF
}
