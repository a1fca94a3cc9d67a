// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Sentinel and conversion tests for the typed ID wrappers.
//!
//! Each ID type wraps a native unsigned integer whose designated
//! sentinel means "invalid"; the conversions must round-trip raw values
//! unchanged, sentinels included.

use sdl3::{
    AudioDeviceId, DisplayId, FingerId, KeyboardId, MouseId, PropertiesId, SensorId, TimerId,
    TouchId, WindowId, sys,
};

#[test]
fn zero_is_the_invalid_sentinel_for_u32_ids() {
    assert!(!WindowId(0).is_valid());
    assert!(!DisplayId(0).is_valid());
    assert!(!KeyboardId(0).is_valid());
    assert!(!MouseId(0).is_valid());
    assert!(!SensorId(0).is_valid());
    assert!(!TimerId(0).is_valid());
    assert!(!PropertiesId(0).is_valid());
    assert!(!AudioDeviceId(0).is_valid());

    assert!(WindowId(1).is_valid());
    assert!(SensorId(42).is_valid());
}

#[test]
fn u32_ids_round_trip_through_conversions() {
    for raw in [0u32, 1, 7, u32::MAX] {
        assert_eq!(u32::from(WindowId::from(raw)), raw);
        assert_eq!(u32::from(MouseId::from(raw)), raw);
        assert_eq!(u32::from(AudioDeviceId::from(raw)), raw);
        assert_eq!(u32::from(TimerId::from(raw)), raw);
    }
}

#[test]
fn u64_ids_round_trip_through_conversions() {
    for raw in [0u64, 1, u64::MAX] {
        assert_eq!(u64::from(TouchId::from(raw)), raw);
        assert_eq!(u64::from(FingerId::from(raw)), raw);
    }
    assert!(!TouchId(0).is_valid());
    assert!(TouchId(3).is_valid());
}

#[test]
fn default_audio_device_sentinels_are_all_ones() {
    assert_eq!(
        u32::from(AudioDeviceId::DEFAULT_PLAYBACK),
        sys::SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK
    );
    assert_eq!(
        u32::from(AudioDeviceId::DEFAULT_RECORDING),
        sys::SDL_AUDIO_DEVICE_DEFAULT_RECORDING
    );
    assert_eq!(sys::SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK, u32::MAX);
    assert_eq!(sys::SDL_AUDIO_DEVICE_DEFAULT_RECORDING, u32::MAX - 1);
    // The default-device sentinels are requests, not open devices, but
    // they are distinct from the invalid sentinel.
    assert!(AudioDeviceId::DEFAULT_PLAYBACK.is_valid());
}

#[test]
fn touch_and_mouse_crosstalk_sentinels() {
    assert!(TouchId(sys::SDL_MOUSE_TOUCHID).is_mouse());
    assert!(!TouchId(5).is_mouse());
    assert!(MouseId(sys::SDL_TOUCH_MOUSEID).is_touch());
    assert!(!MouseId(5).is_touch());
}
