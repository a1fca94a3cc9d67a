// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! ABI smoke tests for the raw SDL3 types.
//!
//! These tests don't need a loaded SDL3 library; they check that the
//! mirrored structs have the size, alignment and overlay behavior the C
//! headers commit to on 64-bit targets. A mismatch here would silently
//! corrupt every value crossing the FFI boundary.

use std::mem::{align_of, offset_of, size_of};

#[test]
fn value_struct_sizes_match_the_c_abi() {
    assert_eq!(size_of::<sdl3_sys::Point>(), 8);
    assert_eq!(size_of::<sdl3_sys::FPoint>(), 8);
    assert_eq!(size_of::<sdl3_sys::Rect>(), 16);
    assert_eq!(size_of::<sdl3_sys::FRect>(), 16);
    assert_eq!(size_of::<sdl3_sys::Color>(), 4);
    assert_eq!(size_of::<sdl3_sys::FColor>(), 16);
    assert_eq!(size_of::<sdl3_sys::AudioSpec>(), 12);
    assert_eq!(size_of::<sdl3_sys::PixelFormatDetails>(), 32);
    assert_eq!(size_of::<sdl3_sys::Palette>(), 24);
    assert_eq!(size_of::<sdl3_sys::DisplayMode>(), 40);
    assert_eq!(size_of::<sdl3_sys::Finger>(), 24);
}

#[test]
fn event_union_is_128_bytes() {
    // SDL_events.h pads the union to a fixed 128 bytes so the ABI stays
    // stable as payload variants grow.
    assert_eq!(size_of::<sdl3_sys::Event>(), 128);
    assert_eq!(align_of::<sdl3_sys::Event>(), 8);
    assert!(size_of::<sdl3_sys::KeyboardEvent>() <= 128);
    assert!(size_of::<sdl3_sys::MouseWheelEvent>() <= 128);
    assert!(size_of::<sdl3_sys::SensorEvent>() <= 128);
    assert!(size_of::<sdl3_sys::DropEvent>() <= 128);
}

#[test]
fn event_payloads_share_the_common_header() {
    // Every payload starts with type/reserved/timestamp at the same
    // offsets, which is what makes reading `common` always valid.
    assert_eq!(offset_of!(sdl3_sys::CommonEvent, r#type), 0);
    assert_eq!(offset_of!(sdl3_sys::CommonEvent, timestamp), 8);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, r#type), 0);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, timestamp), 8);
    assert_eq!(offset_of!(sdl3_sys::MouseMotionEvent, timestamp), 8);
    assert_eq!(offset_of!(sdl3_sys::TouchFingerEvent, timestamp), 8);
}

#[test]
fn keyboard_event_field_offsets() {
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, windowID), 16);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, which), 20);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, scancode), 24);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, key), 28);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, r#mod), 32);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, down), 36);
    assert_eq!(offset_of!(sdl3_sys::KeyboardEvent, repeat), 37);
}

#[test]
fn union_discriminant_overlays_every_variant() {
    // Writing one variant and reading the discriminant must observe the
    // most recent write; the variants provide no isolation.
    let event = sdl3_sys::Event {
        key: sdl3_sys::KeyboardEvent {
            r#type: sdl3_sys::SDL_EVENT_KEY_DOWN,
            reserved: 0,
            timestamp: 42,
            windowID: 7,
            which: 1,
            scancode: sdl3_sys::SDL_SCANCODE_RETURN,
            key: sdl3_sys::SDLK_RETURN,
            r#mod: sdl3_sys::SDL_KMOD_NONE,
            raw: 0,
            down: true,
            repeat: false,
        },
    };
    unsafe {
        assert_eq!(event.r#type, sdl3_sys::SDL_EVENT_KEY_DOWN);
        assert_eq!(event.common.timestamp, 42);
        // Reading a different variant sees the overlapping raw bytes.
        assert_eq!(event.window.windowID, 7);
    }
}

#[test]
fn packed_format_constants_match_header_values() {
    // Spot-check the const-fn transcriptions of the header packing macros
    // against values published in the SDL3 headers.
    assert_eq!(sdl3_sys::SDL_PIXELFORMAT_RGBA8888, 0x16462004);
    assert_eq!(sdl3_sys::SDL_PIXELFORMAT_ARGB8888, 0x16362004);
    assert_eq!(sdl3_sys::SDL_PIXELFORMAT_RGB24, 0x17101803);
    assert_eq!(sdl3_sys::SDL_PIXELFORMAT_XRGB8888, 0x16161804);
    assert_eq!(sdl3_sys::bytes_per_pixel(sdl3_sys::SDL_PIXELFORMAT_RGBA8888), 4);
    assert_eq!(sdl3_sys::bits_per_pixel(sdl3_sys::SDL_PIXELFORMAT_RGB24), 24);

    assert_eq!(sdl3_sys::SDL_AUDIO_S16LE, 0x8010);
    assert_eq!(sdl3_sys::SDL_AUDIO_F32LE, 0x8120);
    assert!(sdl3_sys::audio_is_float(sdl3_sys::SDL_AUDIO_F32BE));
    assert!(!sdl3_sys::audio_is_signed(sdl3_sys::SDL_AUDIO_U8));
    assert_eq!(sdl3_sys::audio_byte_size(sdl3_sys::SDL_AUDIO_S32LE), 4);

    assert_eq!(
        sdl3_sys::scancode_to_keycode(sdl3_sys::SDL_SCANCODE_UP),
        sdl3_sys::SDLK_UP
    );
    assert_eq!(sdl3_sys::version_num(3, 2, 1), 3_002_001);
    assert_eq!(sdl3_sys::version_num_major(3_002_001), 3);
    assert_eq!(sdl3_sys::version_num_minor(3_002_001), 2);
    assert_eq!(sdl3_sys::version_num_micro(3_002_001), 1);
}

#[test]
fn audio_frame_size_accounts_for_format_and_channels() {
    let spec = sdl3_sys::AudioSpec {
        format: sdl3_sys::SDL_AUDIO_F32LE,
        channels: 2,
        freq: 48_000,
    };
    assert_eq!(sdl3_sys::audio_frame_size(&spec), 8);
}
