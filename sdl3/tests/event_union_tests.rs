// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the tagged-union event view.
//!
//! These exercise the discriminant-gated accessors of [`sdl3::Event`]
//! without a native library: events are built in memory the same way the
//! native queue writes them.

use sdl3::{Event, sys};

fn key_down_event() -> Event {
    let mut raw = sys::Event::default();
    raw.key = sys::KeyboardEvent {
        r#type: sys::SDL_EVENT_KEY_DOWN,
        reserved: 0,
        timestamp: 1_000_000,
        windowID: 3,
        which: 1,
        scancode: sys::SDL_SCANCODE_SPACE,
        key: sys::SDLK_SPACE,
        r#mod: sys::SDL_KMOD_LSHIFT,
        raw: 0x39,
        down: true,
        repeat: false,
    };
    Event::from_raw(raw)
}

#[test]
fn matching_variant_accessor_returns_the_payload() {
    let event = key_down_event();
    assert_eq!(event.event_type(), sys::SDL_EVENT_KEY_DOWN);

    let key = event.key().expect("key accessor must match SDL_EVENT_KEY_DOWN");
    assert_eq!(key.scancode, sys::SDL_SCANCODE_SPACE);
    assert_eq!(key.key, sys::SDLK_SPACE);
    assert_eq!(key.r#mod, sys::SDL_KMOD_LSHIFT);
    assert!(key.down);
    assert!(!key.repeat);
}

#[test]
fn mismatched_variant_accessors_return_none() {
    let event = key_down_event();
    assert!(event.mouse_motion().is_none());
    assert!(event.mouse_button().is_none());
    assert!(event.window().is_none());
    assert!(event.text_input().is_none());
    assert!(event.sensor().is_none());
    assert!(event.user().is_none());
    assert!(!event.is_quit());
}

#[test]
fn discriminant_reflects_the_most_recent_write() {
    let mut raw = sys::Event::default();
    raw.motion = sys::MouseMotionEvent {
        r#type: sys::SDL_EVENT_MOUSE_MOTION,
        reserved: 0,
        timestamp: 7,
        windowID: 2,
        which: 1,
        state: sys::SDL_BUTTON_LMASK,
        x: 100.0,
        y: 50.0,
        xrel: 1.0,
        yrel: -1.0,
    };
    let event = Event::from_raw(raw);
    assert_eq!(event.event_type(), sys::SDL_EVENT_MOUSE_MOTION);
    let motion = event.mouse_motion().unwrap();
    assert_eq!(motion.state, sys::SDL_BUTTON_LMASK);

    // Overwriting with another variant replaces the discriminant too.
    raw.quit = sys::QuitEvent {
        r#type: sys::SDL_EVENT_QUIT,
        reserved: 0,
        timestamp: 8,
    };
    let event = Event::from_raw(raw);
    assert!(event.is_quit());
    assert!(event.mouse_motion().is_none());
}

#[test]
fn variants_share_bytes_without_isolation() {
    // The union provides no isolation between variants: the common
    // header read through another payload observes the overlapping raw
    // bytes. This is a property of the layout, not business logic.
    let event = key_down_event();
    let raw = event.raw();
    unsafe {
        assert_eq!(raw.common.timestamp, 1_000_000);
        assert_eq!(raw.window.windowID, 3);
        assert_eq!(raw.motion.windowID, 3);
    }
}

#[test]
fn window_accessor_covers_the_full_type_range() {
    for event_type in [
        sys::SDL_EVENT_WINDOW_SHOWN,
        sys::SDL_EVENT_WINDOW_RESIZED,
        sys::SDL_EVENT_WINDOW_CLOSE_REQUESTED,
        sys::SDL_EVENT_WINDOW_HDR_STATE_CHANGED,
    ] {
        let mut raw = sys::Event::default();
        raw.window = sys::WindowEvent {
            r#type: event_type,
            reserved: 0,
            timestamp: 0,
            windowID: 9,
            data1: 640,
            data2: 480,
        };
        let event = Event::from_raw(raw);
        let window = event.window().expect("window accessor must match");
        assert_eq!(window.windowID, 9);
        assert_eq!((window.data1, window.data2), (640, 480));
    }
}

#[test]
fn text_input_text_decodes_the_native_pointer() {
    let text = std::ffi::CString::new("héllo 世界").unwrap();
    let mut raw = sys::Event::default();
    raw.text = sys::TextInputEvent {
        r#type: sys::SDL_EVENT_TEXT_INPUT,
        reserved: 0,
        timestamp: 0,
        windowID: 1,
        text: text.as_ptr(),
    };
    let event = Event::from_raw(raw);
    assert_eq!(event.text_input_text().as_deref(), Some("héllo 世界"));
}

#[test]
fn user_events_round_trip_their_code() {
    let event = Event::new_user(sys::SDL_EVENT_USER, -7);
    assert_eq!(event.event_type(), sys::SDL_EVENT_USER);
    let user = event.user().expect("user accessor must match");
    assert_eq!(user.code, -7);
    assert!(user.data1.is_null());
}
