// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Audio device and stream access.
//!
//! All mixing, resampling and device IO happens inside the native audio
//! engine. This module wraps the handle lifecycles ([`AudioDevice`] is
//! closed on drop, [`AudioStream`] destroyed on drop) and the byte-buffer
//! marshalling for stream reads and writes.

use std::os::raw::{c_int, c_void};
use std::sync::Arc;

use crate::{Result, Sdl, context::SdlContext, marshal};

/// Numeric ID of an audio device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioDeviceId(pub sdl3_sys::AudioDeviceID);

impl AudioDeviceId {
    /// Requests the system default playback device on open.
    pub const DEFAULT_PLAYBACK: AudioDeviceId =
        AudioDeviceId(sdl3_sys::SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK);
    /// Requests the system default recording device on open.
    pub const DEFAULT_RECORDING: AudioDeviceId =
        AudioDeviceId(sdl3_sys::SDL_AUDIO_DEVICE_DEFAULT_RECORDING);

    /// 0 is SDL's "no such device" sentinel.
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl From<AudioDeviceId> for u32 {
    fn from(id: AudioDeviceId) -> u32 {
        id.0
    }
}

impl From<u32> for AudioDeviceId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl Sdl {
    /// Number of audio drivers compiled into the native library.
    pub fn num_audio_drivers(&self) -> i32 {
        unsafe { self.context.api.get_num_audio_drivers() }
    }

    /// Name of the audio driver at `index` (e.g. "pulseaudio", "wasapi").
    pub fn audio_driver(&self, index: i32) -> Result<String> {
        let ptr = unsafe { self.context.api.get_audio_driver(index) };
        unsafe { marshal::c_str_to_string(ptr) }.ok_or_else(|| self.context.error())
    }

    /// Name of the audio driver currently in use, `None` before the
    /// audio subsystem is initialized.
    pub fn current_audio_driver(&self) -> Option<String> {
        let ptr = unsafe { self.context.api.get_current_audio_driver() };
        unsafe { marshal::c_str_to_string(ptr) }
    }

    /// Returns the IDs of every playback (output) device.
    ///
    /// The native buffer is copied and released through `SDL_free`.
    pub fn audio_playback_devices(&self) -> Result<Vec<AudioDeviceId>> {
        let mut count: c_int = 0;
        let ptr = unsafe { self.context.api.get_audio_playback_devices(&mut count) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        let ids = unsafe {
            marshal::consume_native_array(ptr, count, |mem| self.context.api.free(mem))
        };
        Ok(ids.into_iter().map(AudioDeviceId).collect())
    }

    /// Returns the IDs of every recording (capture) device.
    pub fn audio_recording_devices(&self) -> Result<Vec<AudioDeviceId>> {
        let mut count: c_int = 0;
        let ptr = unsafe { self.context.api.get_audio_recording_devices(&mut count) };
        if ptr.is_null() {
            return Err(self.context.error());
        }
        let ids = unsafe {
            marshal::consume_native_array(ptr, count, |mem| self.context.api.free(mem))
        };
        Ok(ids.into_iter().map(AudioDeviceId).collect())
    }

    /// Returns the name of an audio device.
    pub fn audio_device_name(&self, device: AudioDeviceId) -> Result<String> {
        let ptr = unsafe { self.context.api.get_audio_device_name(device.0) };
        unsafe { marshal::c_str_to_string(ptr) }.ok_or_else(|| self.context.error())
    }

    /// Returns the current format of an audio device (or of the default
    /// device's hardware for the `DEFAULT_*` sentinels), along with the
    /// device buffer size in sample frames.
    pub fn audio_device_format(
        &self,
        device: AudioDeviceId,
    ) -> Result<(sdl3_sys::AudioSpec, i32)> {
        let mut spec = sdl3_sys::AudioSpec::default();
        let mut sample_frames: c_int = 0;
        let ok = unsafe {
            self.context
                .api
                .get_audio_device_format(device.0, &mut spec, &mut sample_frames)
        };
        self.context.check(ok)?;
        Ok((spec, sample_frames))
    }

    /// Returns the channel map of an audio device; empty when the device
    /// uses the default channel order.
    pub fn audio_device_channel_map(&self, device: AudioDeviceId) -> Vec<i32> {
        let mut count: c_int = 0;
        let ptr = unsafe {
            self.context
                .api
                .get_audio_device_channel_map(device.0, &mut count)
        };
        // Null means "default order" here, not an error.
        unsafe { marshal::consume_native_array(ptr, count, |mem| self.context.api.free(mem)) }
    }

    /// Opens an audio device (or one of the `DEFAULT_*` sentinels).
    ///
    /// `spec` is the format the caller wants; `None` lets the device
    /// pick. Either way SDL converts between the stream formats bound to
    /// the device and the hardware format internally.
    pub fn open_audio_device(
        &self,
        device: AudioDeviceId,
        spec: Option<&sdl3_sys::AudioSpec>,
    ) -> Result<AudioDevice> {
        let spec = spec.map_or(std::ptr::null(), |s| s as *const sdl3_sys::AudioSpec);
        let devid = unsafe { self.context.api.open_audio_device(device.0, spec) };
        if devid == 0 {
            return Err(self.context.error());
        }
        Ok(AudioDevice {
            context: self.context.clone(),
            devid,
        })
    }

    /// Creates a conversion stream between two audio formats.
    ///
    /// Data put in with [`AudioStream::put_data`] comes out of
    /// [`AudioStream::get_data`] converted from `src` to `dst`.
    pub fn create_audio_stream(
        &self,
        src: &sdl3_sys::AudioSpec,
        dst: &sdl3_sys::AudioSpec,
    ) -> Result<AudioStream> {
        let stream = unsafe { self.context.api.create_audio_stream(src, dst) };
        if stream.is_null() {
            return Err(self.context.error());
        }
        Ok(AudioStream {
            context: self.context.clone(),
            stream,
        })
    }
}

/// RAII handle to an opened audio device; closed on drop.
///
/// A logical device opened through [`Sdl::open_audio_device`]; audio
/// flows once streams are bound to it.
pub struct AudioDevice {
    context: Arc<SdlContext>,
    devid: sdl3_sys::AudioDeviceID,
}

// Safety: the handle can be moved; the native audio engine does its own
// locking around device state.
unsafe impl Send for AudioDevice {}

impl AudioDevice {
    /// Returns the ID of the opened logical device.
    pub fn id(&self) -> AudioDeviceId {
        AudioDeviceId(self.devid)
    }

    /// Pauses playback/recording on the device.
    pub fn pause(&self) -> Result<()> {
        let ok = unsafe { self.context.api.pause_audio_device(self.devid) };
        self.context.check(ok)
    }

    /// Resumes a paused device.
    pub fn resume(&self) -> Result<()> {
        let ok = unsafe { self.context.api.resume_audio_device(self.devid) };
        self.context.check(ok)
    }

    /// Whether the device is currently paused.
    pub fn paused(&self) -> bool {
        unsafe { self.context.api.audio_device_paused(self.devid) }
    }

    /// Returns the device gain (1.0 is no change, negative on error).
    pub fn gain(&self) -> f32 {
        unsafe { self.context.api.get_audio_device_gain(self.devid) }
    }

    /// Sets the device gain applied to all bound streams.
    pub fn set_gain(&self, gain: f32) -> Result<()> {
        let ok = unsafe { self.context.api.set_audio_device_gain(self.devid, gain) };
        self.context.check(ok)
    }

    /// Binds a stream to this device so the engine starts consuming (or
    /// filling) it.
    pub fn bind_stream(&self, stream: &AudioStream) -> Result<()> {
        let ok = unsafe { self.context.api.bind_audio_stream(self.devid, stream.stream) };
        self.context.check(ok)
    }

    /// Explicitly closes the device, consuming `self`.
    pub fn close(mut self) {
        self.close_inner();
    }

    fn close_inner(&mut self) {
        if self.devid != 0 {
            let devid = std::mem::take(&mut self.devid);
            unsafe { self.context.api.close_audio_device(devid) };
        }
    }
}

impl Drop for AudioDevice {
    fn drop(&mut self) {
        self.close_inner();
    }
}

/// RAII handle to a native audio stream; destroyed on drop.
///
/// A stream converts between its source and destination formats and
/// buffers data in between. Destroying a stream that is bound to a
/// device unbinds it first, on the native side.
pub struct AudioStream {
    context: Arc<SdlContext>,
    pub(crate) stream: sdl3_sys::AudioStream,
}

// Safety: the handle can be moved; the native audio engine locks the
// stream around each operation.
unsafe impl Send for AudioStream {}

impl AudioStream {
    /// Returns the current source and destination formats.
    pub fn format(&self) -> Result<(sdl3_sys::AudioSpec, sdl3_sys::AudioSpec)> {
        let mut src = sdl3_sys::AudioSpec::default();
        let mut dst = sdl3_sys::AudioSpec::default();
        let ok = unsafe {
            self.context
                .api
                .get_audio_stream_format(self.stream, &mut src, &mut dst)
        };
        self.context.check(ok)?;
        Ok((src, dst))
    }

    /// Changes the source and/or destination format.
    ///
    /// Data already buffered still converts under the formats it was put
    /// in with.
    pub fn set_format(
        &self,
        src: Option<&sdl3_sys::AudioSpec>,
        dst: Option<&sdl3_sys::AudioSpec>,
    ) -> Result<()> {
        let src = src.map_or(std::ptr::null(), |s| s as *const sdl3_sys::AudioSpec);
        let dst = dst.map_or(std::ptr::null(), |s| s as *const sdl3_sys::AudioSpec);
        let ok = unsafe { self.context.api.set_audio_stream_format(self.stream, src, dst) };
        self.context.check(ok)
    }

    /// Queues bytes in the stream's source format.
    pub fn put_data(&self, data: &[u8]) -> Result<()> {
        let ok = unsafe {
            self.context.api.put_audio_stream_data(
                self.stream,
                data.as_ptr() as *const c_void,
                data.len() as c_int,
            )
        };
        self.context.check(ok)
    }

    /// Reads converted bytes into `data`, returning how many were
    /// written (possibly fewer than requested).
    pub fn get_data(&self, data: &mut [u8]) -> Result<usize> {
        let read = unsafe {
            self.context.api.get_audio_stream_data(
                self.stream,
                data.as_mut_ptr() as *mut c_void,
                data.len() as c_int,
            )
        };
        if read < 0 {
            return Err(self.context.error());
        }
        Ok(read as usize)
    }

    /// Number of converted bytes available to read right now.
    pub fn available(&self) -> Result<usize> {
        let available = unsafe { self.context.api.get_audio_stream_available(self.stream) };
        if available < 0 {
            return Err(self.context.error());
        }
        Ok(available as usize)
    }

    /// Number of source-format bytes queued and not yet converted out.
    pub fn queued(&self) -> Result<usize> {
        let queued = unsafe { self.context.api.get_audio_stream_queued(self.stream) };
        if queued < 0 {
            return Err(self.context.error());
        }
        Ok(queued as usize)
    }

    /// Marks queued data as complete so trailing partial frames convert
    /// out.
    pub fn flush(&self) -> Result<()> {
        let ok = unsafe { self.context.api.flush_audio_stream(self.stream) };
        self.context.check(ok)
    }

    /// Drops all data buffered in the stream.
    pub fn clear(&self) -> Result<()> {
        let ok = unsafe { self.context.api.clear_audio_stream(self.stream) };
        self.context.check(ok)
    }

    /// Unbinds the stream from its device, if bound.
    pub fn unbind(&self) {
        unsafe { self.context.api.unbind_audio_stream(self.stream) };
    }

    /// Returns the device the stream is bound to, if any.
    pub fn device(&self) -> Option<AudioDeviceId> {
        let devid = unsafe { self.context.api.get_audio_stream_device(self.stream) };
        (devid != 0).then_some(AudioDeviceId(devid))
    }

    /// Explicitly destroys the stream, consuming `self`.
    pub fn destroy(mut self) {
        self.destroy_inner();
    }

    fn destroy_inner(&mut self) {
        if !self.stream.is_null() {
            let mut stream = std::ptr::null_mut();
            std::mem::swap(&mut self.stream, &mut stream);
            unsafe { self.context.api.destroy_audio_stream(stream) };
        }
    }
}

impl Drop for AudioStream {
    fn drop(&mut self) {
        self.destroy_inner();
    }
}
