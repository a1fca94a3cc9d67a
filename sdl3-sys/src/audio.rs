// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Audio types from `SDL_audio.h`.

use std::os::raw::c_int;

use crate::stdinc::{Uint16, Uint32};

/// Numeric ID of an audio device.
///
/// 0 is the invalid sentinel; the all-ones values below request the default
/// device.
pub type AudioDeviceID = Uint32;

/// A value used to request a default playback audio device.
pub const SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK: AudioDeviceID = 0xFFFFFFFF;
/// A value used to request a default recording audio device.
pub const SDL_AUDIO_DEVICE_DEFAULT_RECORDING: AudioDeviceID = 0xFFFFFFFE;

/// Audio format, packed the way `SDL_DEFINE_AUDIO_FORMAT` packs it:
/// bit 15 = signed, bit 12 = big-endian, bit 8 = float, low byte = bit size.
pub type AudioFormat = Uint16;

pub const SDL_AUDIO_MASK_BITSIZE: AudioFormat = 0xFF;
pub const SDL_AUDIO_MASK_FLOAT: AudioFormat = 1 << 8;
pub const SDL_AUDIO_MASK_BIG_ENDIAN: AudioFormat = 1 << 12;
pub const SDL_AUDIO_MASK_SIGNED: AudioFormat = 1 << 15;

/// Unsigned 8-bit samples
pub const SDL_AUDIO_U8: AudioFormat = 0x0008;
/// Signed 8-bit samples
pub const SDL_AUDIO_S8: AudioFormat = 0x8008;
/// Signed 16-bit samples, little-endian
pub const SDL_AUDIO_S16LE: AudioFormat = 0x8010;
/// Signed 16-bit samples, big-endian
pub const SDL_AUDIO_S16BE: AudioFormat = 0x9010;
/// 32-bit integer samples, little-endian
pub const SDL_AUDIO_S32LE: AudioFormat = 0x8020;
/// 32-bit integer samples, big-endian
pub const SDL_AUDIO_S32BE: AudioFormat = 0x9020;
/// 32-bit floating point samples, little-endian
pub const SDL_AUDIO_F32LE: AudioFormat = 0x8120;
/// 32-bit floating point samples, big-endian
pub const SDL_AUDIO_F32BE: AudioFormat = 0x9120;

/// `SDL_AUDIO_BITSIZE`
pub const fn audio_bit_size(format: AudioFormat) -> AudioFormat {
    format & SDL_AUDIO_MASK_BITSIZE
}

/// `SDL_AUDIO_BYTESIZE`
pub const fn audio_byte_size(format: AudioFormat) -> AudioFormat {
    audio_bit_size(format) / 8
}

/// `SDL_AUDIO_ISFLOAT`
pub const fn audio_is_float(format: AudioFormat) -> bool {
    format & SDL_AUDIO_MASK_FLOAT != 0
}

/// `SDL_AUDIO_ISSIGNED`
pub const fn audio_is_signed(format: AudioFormat) -> bool {
    format & SDL_AUDIO_MASK_SIGNED != 0
}

/// Format specifier for audio data.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    /// Audio data format
    pub format: AudioFormat,
    /// Number of channels: 1 mono, 2 stereo, etc
    pub channels: c_int,
    /// sample rate: sample frames per second
    pub freq: c_int,
}

/// `SDL_AUDIO_FRAMESIZE`: size of one sample frame, in bytes.
pub const fn audio_frame_size(spec: &AudioSpec) -> c_int {
    audio_byte_size(spec.format) as c_int * spec.channels
}

/// Opaque audio stream state owned by the audio engine
/// (`SDL_AudioStream *`).
#[repr(C)]
pub struct AudioStreamHandle {
    _opaque: [u8; 0],
}

pub type AudioStream = *mut AudioStreamHandle;
