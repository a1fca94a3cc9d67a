// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Event queue access.
//!
//! The native library owns the event queue; this module only moves inert
//! event structs across the boundary. [`Event`] wraps the C union and
//! gates each payload accessor on the discriminant, so reading a variant
//! that doesn't match the event's `type` is impossible without dropping
//! to the raw union.

use std::time::Duration;

use crate::{Result, Sdl, marshal};

/// A single event read from (or written to) the native event queue.
///
/// The wrapped memory is the C `SDL_Event` union: all payloads overlap,
/// and only the one matching [`Event::event_type`] holds meaningful data.
/// The typed accessors check the discriminant and return `None` on a
/// mismatch.
#[derive(Clone, Copy)]
pub struct Event {
    raw: sdl3_sys::Event,
}

impl Event {
    /// Wraps a raw event, trusting its discriminant.
    pub fn from_raw(raw: sdl3_sys::Event) -> Self {
        Self { raw }
    }

    /// Builds a user event suitable for [`Sdl::push_event`].
    ///
    /// `event_type` should come from [`Sdl::register_events`].
    pub fn new_user(event_type: sdl3_sys::EventType, code: i32) -> Self {
        let mut raw = sdl3_sys::Event::default();
        raw.user = sdl3_sys::UserEvent {
            r#type: event_type,
            reserved: 0,
            timestamp: 0,
            windowID: 0,
            code,
            data1: std::ptr::null_mut(),
            data2: std::ptr::null_mut(),
        };
        Self { raw }
    }

    /// Returns the raw union for callers that need a payload this crate
    /// doesn't expose.
    pub fn raw(&self) -> &sdl3_sys::Event {
        &self.raw
    }

    pub(crate) fn raw_mut(&mut self) -> &mut sdl3_sys::Event {
        &mut self.raw
    }

    /// Returns the event discriminant.
    ///
    /// The `type` field overlays the start of every payload, so this
    /// read is valid regardless of which variant was written.
    pub fn event_type(&self) -> sdl3_sys::EventType {
        unsafe { self.raw.r#type }
    }

    /// Returns the event timestamp in nanoseconds since library init.
    pub fn timestamp(&self) -> Duration {
        Duration::from_nanos(unsafe { self.raw.common.timestamp })
    }

    /// Whether this is an `SDL_EVENT_QUIT` event.
    pub fn is_quit(&self) -> bool {
        self.event_type() == sdl3_sys::SDL_EVENT_QUIT
    }

    /// Display payload, for `SDL_EVENT_DISPLAY_*` events.
    pub fn display(&self) -> Option<&sdl3_sys::DisplayEvent> {
        let t = self.event_type();
        (sdl3_sys::SDL_EVENT_DISPLAY_FIRST..=sdl3_sys::SDL_EVENT_DISPLAY_LAST)
            .contains(&t)
            .then(|| unsafe { &self.raw.display })
    }

    /// Window payload, for `SDL_EVENT_WINDOW_*` events.
    pub fn window(&self) -> Option<&sdl3_sys::WindowEvent> {
        let t = self.event_type();
        (sdl3_sys::SDL_EVENT_WINDOW_FIRST..=sdl3_sys::SDL_EVENT_WINDOW_LAST)
            .contains(&t)
            .then(|| unsafe { &self.raw.window })
    }

    /// Keyboard payload, for key down/up events.
    pub fn key(&self) -> Option<&sdl3_sys::KeyboardEvent> {
        let t = self.event_type();
        (t == sdl3_sys::SDL_EVENT_KEY_DOWN || t == sdl3_sys::SDL_EVENT_KEY_UP)
            .then(|| unsafe { &self.raw.key })
    }

    /// Keyboard device payload, for keyboard added/removed events.
    pub fn keyboard_device(&self) -> Option<&sdl3_sys::KeyboardDeviceEvent> {
        let t = self.event_type();
        (t == sdl3_sys::SDL_EVENT_KEYBOARD_ADDED || t == sdl3_sys::SDL_EVENT_KEYBOARD_REMOVED)
            .then(|| unsafe { &self.raw.kdevice })
    }

    /// Text editing payload, for `SDL_EVENT_TEXT_EDITING`.
    pub fn text_editing(&self) -> Option<&sdl3_sys::TextEditingEvent> {
        (self.event_type() == sdl3_sys::SDL_EVENT_TEXT_EDITING)
            .then(|| unsafe { &self.raw.edit })
    }

    /// Text input payload, for `SDL_EVENT_TEXT_INPUT`.
    pub fn text_input(&self) -> Option<&sdl3_sys::TextInputEvent> {
        (self.event_type() == sdl3_sys::SDL_EVENT_TEXT_INPUT)
            .then(|| unsafe { &self.raw.text })
    }

    /// The text of an `SDL_EVENT_TEXT_INPUT` event, decoded from the
    /// native UTF-8 pointer.
    pub fn text_input_text(&self) -> Option<String> {
        self.text_input()
            .and_then(|text| unsafe { marshal::c_str_to_string(text.text) })
    }

    /// Mouse device payload, for mouse added/removed events.
    pub fn mouse_device(&self) -> Option<&sdl3_sys::MouseDeviceEvent> {
        let t = self.event_type();
        (t == sdl3_sys::SDL_EVENT_MOUSE_ADDED || t == sdl3_sys::SDL_EVENT_MOUSE_REMOVED)
            .then(|| unsafe { &self.raw.mdevice })
    }

    /// Mouse motion payload, for `SDL_EVENT_MOUSE_MOTION`.
    pub fn mouse_motion(&self) -> Option<&sdl3_sys::MouseMotionEvent> {
        (self.event_type() == sdl3_sys::SDL_EVENT_MOUSE_MOTION)
            .then(|| unsafe { &self.raw.motion })
    }

    /// Mouse button payload, for button down/up events.
    pub fn mouse_button(&self) -> Option<&sdl3_sys::MouseButtonEvent> {
        let t = self.event_type();
        (t == sdl3_sys::SDL_EVENT_MOUSE_BUTTON_DOWN || t == sdl3_sys::SDL_EVENT_MOUSE_BUTTON_UP)
            .then(|| unsafe { &self.raw.button })
    }

    /// Mouse wheel payload, for `SDL_EVENT_MOUSE_WHEEL`.
    pub fn mouse_wheel(&self) -> Option<&sdl3_sys::MouseWheelEvent> {
        (self.event_type() == sdl3_sys::SDL_EVENT_MOUSE_WHEEL)
            .then(|| unsafe { &self.raw.wheel })
    }

    /// Audio device payload, for audio device added/removed/changed
    /// events.
    pub fn audio_device(&self) -> Option<&sdl3_sys::AudioDeviceEvent> {
        let t = self.event_type();
        (t >= sdl3_sys::SDL_EVENT_AUDIO_DEVICE_ADDED
            && t <= sdl3_sys::SDL_EVENT_AUDIO_DEVICE_FORMAT_CHANGED)
            .then(|| unsafe { &self.raw.adevice })
    }

    /// Sensor payload, for `SDL_EVENT_SENSOR_UPDATE`.
    pub fn sensor(&self) -> Option<&sdl3_sys::SensorEvent> {
        (self.event_type() == sdl3_sys::SDL_EVENT_SENSOR_UPDATE)
            .then(|| unsafe { &self.raw.sensor })
    }

    /// Touch finger payload, for `SDL_EVENT_FINGER_*` events.
    pub fn touch_finger(&self) -> Option<&sdl3_sys::TouchFingerEvent> {
        let t = self.event_type();
        (t >= sdl3_sys::SDL_EVENT_FINGER_DOWN && t <= sdl3_sys::SDL_EVENT_FINGER_CANCELED)
            .then(|| unsafe { &self.raw.tfinger })
    }

    /// Drop payload, for `SDL_EVENT_DROP_*` events.
    pub fn drop_event(&self) -> Option<&sdl3_sys::DropEvent> {
        let t = self.event_type();
        (t >= sdl3_sys::SDL_EVENT_DROP_FILE && t <= sdl3_sys::SDL_EVENT_DROP_POSITION)
            .then(|| unsafe { &self.raw.drop })
    }

    /// The dropped file name / text of a drop event, decoded from the
    /// native UTF-8 pointer (None for begin/complete markers).
    pub fn drop_data(&self) -> Option<String> {
        self.drop_event()
            .and_then(|drop| unsafe { marshal::c_str_to_string(drop.data) })
    }

    /// User payload, for types allocated with [`Sdl::register_events`].
    pub fn user(&self) -> Option<&sdl3_sys::UserEvent> {
        let t = self.event_type();
        (t >= sdl3_sys::SDL_EVENT_USER && t <= sdl3_sys::SDL_EVENT_LAST)
            .then(|| unsafe { &self.raw.user })
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("type", &self.event_type())
            .finish_non_exhaustive()
    }
}

impl Sdl {
    /// Polls for a pending event, returning immediately.
    ///
    /// Returns `None` when the queue is empty. Must be called on the
    /// thread that initialized the video subsystem, per SDL's rules.
    pub fn poll_event(&self) -> Option<Event> {
        let mut raw = sdl3_sys::Event::default();
        let pending = unsafe { self.context.api.poll_event(&mut raw) };
        pending.then_some(Event { raw })
    }

    /// Blocks indefinitely until the next event arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the native wait fails (e.g. the events
    /// subsystem shut down while waiting).
    pub fn wait_event(&self) -> Result<Event> {
        let mut raw = sdl3_sys::Event::default();
        let ok = unsafe { self.context.api.wait_event(&mut raw) };
        self.context.check(ok)?;
        Ok(Event { raw })
    }

    /// Blocks until the next event arrives or `timeout` expires.
    ///
    /// Returns `None` on timeout. The timeout is not exact; it may
    /// overshoot by the scheduler granularity.
    pub fn wait_event_timeout(&self, timeout: Duration) -> Option<Event> {
        let mut raw = sdl3_sys::Event::default();
        let timeout_ms = timeout.as_millis().min(i32::MAX as u128) as i32;
        let got_one = unsafe { self.context.api.wait_event_timeout(&mut raw, timeout_ms) };
        got_one.then_some(Event { raw })
    }

    /// Pushes an event onto the queue.
    ///
    /// The native library copies the event; on return the queue holds
    /// its own copy. SDL reports `false` both for real failures and for
    /// events suppressed by an event filter.
    pub fn push_event(&self, event: &mut Event) -> Result<()> {
        let ok = unsafe { self.context.api.push_event(event.raw_mut()) };
        self.context.check(ok)
    }

    /// Pumps the event loop, gathering events from the input devices.
    ///
    /// [`Sdl::poll_event`] and [`Sdl::wait_event`] already do this
    /// implicitly.
    pub fn pump_events(&self) {
        unsafe { self.context.api.pump_events() };
    }

    /// Whether any queued event has the given type.
    pub fn has_event(&self, event_type: sdl3_sys::EventType) -> bool {
        unsafe { self.context.api.has_event(event_type) }
    }

    /// Whether any queued event falls in the inclusive type range.
    pub fn has_events(
        &self,
        min_type: sdl3_sys::EventType,
        max_type: sdl3_sys::EventType,
    ) -> bool {
        unsafe { self.context.api.has_events(min_type, max_type) }
    }

    /// Drops every queued event of the given type.
    pub fn flush_event(&self, event_type: sdl3_sys::EventType) {
        unsafe { self.context.api.flush_event(event_type) };
    }

    /// Drops every queued event in the inclusive type range.
    pub fn flush_events(
        &self,
        min_type: sdl3_sys::EventType,
        max_type: sdl3_sys::EventType,
    ) {
        unsafe { self.context.api.flush_events(min_type, max_type) };
    }

    /// Enables or disables processing of an event type.
    pub fn set_event_enabled(&self, event_type: sdl3_sys::EventType, enabled: bool) {
        unsafe { self.context.api.set_event_enabled(event_type, enabled) };
    }

    /// Whether an event type is currently processed.
    pub fn event_enabled(&self, event_type: sdl3_sys::EventType) -> bool {
        unsafe { self.context.api.event_enabled(event_type) }
    }

    /// Allocates a contiguous range of user event type values.
    ///
    /// # Errors
    ///
    /// Returns an error when the user event number space is exhausted.
    pub fn register_events(&self, count: i32) -> Result<sdl3_sys::EventType> {
        let first = unsafe { self.context.api.register_events(count) };
        if first == 0 {
            return Err(crate::Error::Other(
                "No user event numbers available.".to_string(),
            ));
        }
        Ok(first)
    }
}
