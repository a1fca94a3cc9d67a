// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Pixel format queries and palette management.

use std::os::raw::c_int;
use std::sync::Arc;

use crate::{Result, Sdl, context::SdlContext, marshal};

/// Channel masks describing a packed pixel format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PixelMasks {
    pub bpp: i32,
    pub rmask: u32,
    pub gmask: u32,
    pub bmask: u32,
    pub amask: u32,
}

impl Sdl {
    /// Returns the canonical name of a pixel format, e.g.
    /// `"SDL_PIXELFORMAT_RGBA8888"`.
    pub fn pixel_format_name(&self, format: sdl3_sys::PixelFormat) -> String {
        let ptr = unsafe { self.context.api.get_pixel_format_name(format) };
        unsafe { marshal::c_str_to_string_lossy(ptr) }
    }

    /// Converts a packed format to bits-per-pixel and channel masks.
    pub fn masks_for_pixel_format(&self, format: sdl3_sys::PixelFormat) -> Result<PixelMasks> {
        let mut masks = PixelMasks::default();
        let mut bpp: c_int = 0;
        let ok = unsafe {
            self.context.api.get_masks_for_pixel_format(
                format,
                &mut bpp,
                &mut masks.rmask,
                &mut masks.gmask,
                &mut masks.bmask,
                &mut masks.amask,
            )
        };
        self.context.check(ok)?;
        masks.bpp = bpp;
        Ok(masks)
    }

    /// Converts bits-per-pixel and channel masks back to a packed format.
    ///
    /// # Errors
    ///
    /// Returns an error if the masks don't correspond to any known
    /// format.
    pub fn pixel_format_for_masks(&self, masks: &PixelMasks) -> Result<sdl3_sys::PixelFormat> {
        let format = unsafe {
            self.context.api.get_pixel_format_for_masks(
                masks.bpp,
                masks.rmask,
                masks.gmask,
                masks.bmask,
                masks.amask,
            )
        };
        if format == sdl3_sys::SDL_PIXELFORMAT_UNKNOWN {
            return Err(self.context.error());
        }
        Ok(format)
    }

    /// Returns the full channel layout details for a format.
    ///
    /// The native details struct is owned by SDL and copied out here.
    pub fn pixel_format_details(
        &self,
        format: sdl3_sys::PixelFormat,
    ) -> Result<sdl3_sys::PixelFormatDetails> {
        let ptr = unsafe { self.context.api.get_pixel_format_details(format) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        Ok(unsafe { *ptr })
    }

    /// Creates a palette with `ncolors` entries, initialized to white.
    pub fn create_palette(&self, ncolors: i32) -> Result<Palette> {
        let palette = unsafe { self.context.api.create_palette(ncolors) };
        if palette.is_null() {
            return Err(self.context.error());
        }
        Ok(Palette {
            context: self.context.clone(),
            palette,
        })
    }

    /// Maps an RGB triple to an opaque pixel value for a format.
    pub fn map_rgb(
        &self,
        details: &sdl3_sys::PixelFormatDetails,
        palette: Option<&Palette>,
        r: u8,
        g: u8,
        b: u8,
    ) -> u32 {
        let palette = palette.map_or(std::ptr::null(), |p| p.palette as *const _);
        unsafe { self.context.api.map_rgb(details, palette, r, g, b) }
    }

    /// Maps an RGBA quadruple to a pixel value for a format.
    pub fn map_rgba(
        &self,
        details: &sdl3_sys::PixelFormatDetails,
        palette: Option<&Palette>,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    ) -> u32 {
        let palette = palette.map_or(std::ptr::null(), |p| p.palette as *const _);
        unsafe { self.context.api.map_rgba(details, palette, r, g, b, a) }
    }

    /// Extracts the RGB components from a pixel value.
    pub fn get_rgb(
        &self,
        pixel: u32,
        details: &sdl3_sys::PixelFormatDetails,
        palette: Option<&Palette>,
    ) -> (u8, u8, u8) {
        let palette = palette.map_or(std::ptr::null(), |p| p.palette as *const _);
        let (mut r, mut g, mut b) = (0u8, 0u8, 0u8);
        unsafe {
            self.context
                .api
                .get_rgb(pixel, details, palette, &mut r, &mut g, &mut b)
        };
        (r, g, b)
    }

    /// Extracts the RGBA components from a pixel value.
    pub fn get_rgba(
        &self,
        pixel: u32,
        details: &sdl3_sys::PixelFormatDetails,
        palette: Option<&Palette>,
    ) -> (u8, u8, u8, u8) {
        let palette = palette.map_or(std::ptr::null(), |p| p.palette as *const _);
        let (mut r, mut g, mut b, mut a) = (0u8, 0u8, 0u8, 0u8);
        unsafe {
            self.context
                .api
                .get_rgba(pixel, details, palette, &mut r, &mut g, &mut b, &mut a)
        };
        (r, g, b, a)
    }
}

/// RAII handle to a native palette.
pub struct Palette {
    context: Arc<SdlContext>,
    pub(crate) palette: *mut sdl3_sys::Palette,
}

// Safety: the handle can be moved; palette mutation follows SDL's
// single-writer rules.
unsafe impl Send for Palette {}

impl Palette {
    /// Replaces a range of palette entries starting at `first`.
    pub fn set_colors(&self, colors: &[sdl3_sys::Color], first: i32) -> Result<()> {
        let ok = unsafe {
            self.context.api.set_palette_colors(
                self.palette,
                colors.as_ptr(),
                first,
                colors.len() as c_int,
            )
        };
        self.context.check(ok)
    }

    /// Number of entries in the palette.
    pub fn len(&self) -> usize {
        unsafe { (*self.palette).ncolors.max(0) as usize }
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Explicitly destroys the palette, consuming `self`.
    pub fn destroy(mut self) {
        self.destroy_inner();
    }

    fn destroy_inner(&mut self) {
        if !self.palette.is_null() {
            let mut palette = std::ptr::null_mut();
            std::mem::swap(&mut self.palette, &mut palette);
            unsafe { self.context.api.destroy_palette(palette) };
        }
    }
}

impl Drop for Palette {
    fn drop(&mut self) {
        self.destroy_inner();
    }
}
