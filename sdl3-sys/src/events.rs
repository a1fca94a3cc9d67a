// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Event structures and type constants from `SDL_events.h`.
//!
//! [`Event`] mirrors the C `SDL_Event` union: every payload struct starts
//! with the same `type`/`reserved`/`timestamp` header, all payloads are
//! overlaid at offset zero, and a 128-byte padding member fixes the union
//! size regardless of which payloads this crate declares. Only the member
//! named by the leading `type` value holds meaningful data.

use std::os::raw::{c_char, c_void};

use crate::audio::AudioDeviceID;
use crate::keyboard::{KeyboardID, Keymod};
use crate::keycode::Keycode;
use crate::mouse::{MouseButtonFlags, MouseID, MouseWheelDirection};
use crate::scancode::Scancode;
use crate::sensor::SensorID;
use crate::stdinc::{Sint32, Uint8, Uint16, Uint32, Uint64};
use crate::touch::{FingerID, TouchID};
use crate::video::{DisplayID, WindowID};

/// Discriminant stored in the leading `type` field of every event.
pub type EventType = Uint32;

/// Unused (do not remove)
pub const SDL_EVENT_FIRST: EventType = 0;
/// User-requested quit
pub const SDL_EVENT_QUIT: EventType = 0x100;
/// The application is being terminated by the OS
pub const SDL_EVENT_TERMINATING: EventType = 0x101;
/// The application is low on memory, free memory if possible
pub const SDL_EVENT_LOW_MEMORY: EventType = 0x102;
/// The application is about to enter the background
pub const SDL_EVENT_WILL_ENTER_BACKGROUND: EventType = 0x103;
/// The application did enter the background and may not get CPU for some time
pub const SDL_EVENT_DID_ENTER_BACKGROUND: EventType = 0x104;
/// The application is about to enter the foreground
pub const SDL_EVENT_WILL_ENTER_FOREGROUND: EventType = 0x105;
/// The application is now interactive
pub const SDL_EVENT_DID_ENTER_FOREGROUND: EventType = 0x106;
/// The user's locale preferences have changed
pub const SDL_EVENT_LOCALE_CHANGED: EventType = 0x107;
/// The system theme changed
pub const SDL_EVENT_SYSTEM_THEME_CHANGED: EventType = 0x108;

/// Display orientation has changed to data1
pub const SDL_EVENT_DISPLAY_ORIENTATION: EventType = 0x151;
/// Display has been added to the system
pub const SDL_EVENT_DISPLAY_ADDED: EventType = 0x152;
/// Display has been removed from the system
pub const SDL_EVENT_DISPLAY_REMOVED: EventType = 0x153;
/// Display has changed position
pub const SDL_EVENT_DISPLAY_MOVED: EventType = 0x154;
/// Display has changed desktop mode
pub const SDL_EVENT_DISPLAY_DESKTOP_MODE_CHANGED: EventType = 0x155;
/// Display has changed current mode
pub const SDL_EVENT_DISPLAY_CURRENT_MODE_CHANGED: EventType = 0x156;
/// Display has changed content scale
pub const SDL_EVENT_DISPLAY_CONTENT_SCALE_CHANGED: EventType = 0x157;
pub const SDL_EVENT_DISPLAY_FIRST: EventType = SDL_EVENT_DISPLAY_ORIENTATION;
pub const SDL_EVENT_DISPLAY_LAST: EventType = SDL_EVENT_DISPLAY_CONTENT_SCALE_CHANGED;

/// Window has been shown
pub const SDL_EVENT_WINDOW_SHOWN: EventType = 0x202;
/// Window has been hidden
pub const SDL_EVENT_WINDOW_HIDDEN: EventType = 0x203;
/// Window has been exposed and should be redrawn
pub const SDL_EVENT_WINDOW_EXPOSED: EventType = 0x204;
/// Window has been moved to data1, data2
pub const SDL_EVENT_WINDOW_MOVED: EventType = 0x205;
/// Window has been resized to data1xdata2
pub const SDL_EVENT_WINDOW_RESIZED: EventType = 0x206;
/// The pixel size of the window has changed to data1xdata2
pub const SDL_EVENT_WINDOW_PIXEL_SIZE_CHANGED: EventType = 0x207;
/// The pixel size of a Metal view associated with the window has changed
pub const SDL_EVENT_WINDOW_METAL_VIEW_RESIZED: EventType = 0x208;
/// Window has been minimized
pub const SDL_EVENT_WINDOW_MINIMIZED: EventType = 0x209;
/// Window has been maximized
pub const SDL_EVENT_WINDOW_MAXIMIZED: EventType = 0x20A;
/// Window has been restored to normal size and position
pub const SDL_EVENT_WINDOW_RESTORED: EventType = 0x20B;
/// Window has gained mouse focus
pub const SDL_EVENT_WINDOW_MOUSE_ENTER: EventType = 0x20C;
/// Window has lost mouse focus
pub const SDL_EVENT_WINDOW_MOUSE_LEAVE: EventType = 0x20D;
/// Window has gained keyboard focus
pub const SDL_EVENT_WINDOW_FOCUS_GAINED: EventType = 0x20E;
/// Window has lost keyboard focus
pub const SDL_EVENT_WINDOW_FOCUS_LOST: EventType = 0x20F;
/// The window manager requests that the window be closed
pub const SDL_EVENT_WINDOW_CLOSE_REQUESTED: EventType = 0x210;
/// Window had a hit test that wasn't SDL_HITTEST_NORMAL
pub const SDL_EVENT_WINDOW_HIT_TEST: EventType = 0x211;
/// The ICC profile of the window's display has changed
pub const SDL_EVENT_WINDOW_ICCPROF_CHANGED: EventType = 0x212;
/// Window has been moved to display data1
pub const SDL_EVENT_WINDOW_DISPLAY_CHANGED: EventType = 0x213;
/// Window display scale has been changed
pub const SDL_EVENT_WINDOW_DISPLAY_SCALE_CHANGED: EventType = 0x214;
/// The window safe area has been changed
pub const SDL_EVENT_WINDOW_SAFE_AREA_CHANGED: EventType = 0x215;
/// The window has been occluded
pub const SDL_EVENT_WINDOW_OCCLUDED: EventType = 0x216;
/// The window has entered fullscreen mode
pub const SDL_EVENT_WINDOW_ENTER_FULLSCREEN: EventType = 0x217;
/// The window has left fullscreen mode
pub const SDL_EVENT_WINDOW_LEAVE_FULLSCREEN: EventType = 0x218;
/// The window with the associated ID is being or has been destroyed
pub const SDL_EVENT_WINDOW_DESTROYED: EventType = 0x219;
/// Window HDR properties have changed
pub const SDL_EVENT_WINDOW_HDR_STATE_CHANGED: EventType = 0x21A;
pub const SDL_EVENT_WINDOW_FIRST: EventType = SDL_EVENT_WINDOW_SHOWN;
pub const SDL_EVENT_WINDOW_LAST: EventType = SDL_EVENT_WINDOW_HDR_STATE_CHANGED;

/// Key pressed
pub const SDL_EVENT_KEY_DOWN: EventType = 0x300;
/// Key released
pub const SDL_EVENT_KEY_UP: EventType = 0x301;
/// Keyboard text editing (composition)
pub const SDL_EVENT_TEXT_EDITING: EventType = 0x302;
/// Keyboard text input
pub const SDL_EVENT_TEXT_INPUT: EventType = 0x303;
/// Keymap changed due to a system event such as an input language or keyboard layout change
pub const SDL_EVENT_KEYMAP_CHANGED: EventType = 0x304;
/// A new keyboard has been inserted into the system
pub const SDL_EVENT_KEYBOARD_ADDED: EventType = 0x305;
/// A keyboard has been removed
pub const SDL_EVENT_KEYBOARD_REMOVED: EventType = 0x306;
/// Keyboard text editing candidates
pub const SDL_EVENT_TEXT_EDITING_CANDIDATES: EventType = 0x307;

/// Mouse moved
pub const SDL_EVENT_MOUSE_MOTION: EventType = 0x400;
/// Mouse button pressed
pub const SDL_EVENT_MOUSE_BUTTON_DOWN: EventType = 0x401;
/// Mouse button released
pub const SDL_EVENT_MOUSE_BUTTON_UP: EventType = 0x402;
/// Mouse wheel motion
pub const SDL_EVENT_MOUSE_WHEEL: EventType = 0x403;
/// A new mouse has been inserted into the system
pub const SDL_EVENT_MOUSE_ADDED: EventType = 0x404;
/// A mouse has been removed
pub const SDL_EVENT_MOUSE_REMOVED: EventType = 0x405;

/// Joystick axis motion
pub const SDL_EVENT_JOYSTICK_AXIS_MOTION: EventType = 0x600;
/// Joystick trackball motion
pub const SDL_EVENT_JOYSTICK_BALL_MOTION: EventType = 0x601;
/// Joystick hat position change
pub const SDL_EVENT_JOYSTICK_HAT_MOTION: EventType = 0x602;
/// Joystick button pressed
pub const SDL_EVENT_JOYSTICK_BUTTON_DOWN: EventType = 0x603;
/// Joystick button released
pub const SDL_EVENT_JOYSTICK_BUTTON_UP: EventType = 0x604;
/// A new joystick has been inserted into the system
pub const SDL_EVENT_JOYSTICK_ADDED: EventType = 0x605;
/// An opened joystick has been removed
pub const SDL_EVENT_JOYSTICK_REMOVED: EventType = 0x606;
/// Joystick battery level change
pub const SDL_EVENT_JOYSTICK_BATTERY_UPDATED: EventType = 0x607;
/// Joystick update is complete
pub const SDL_EVENT_JOYSTICK_UPDATE_COMPLETE: EventType = 0x608;

/// Gamepad axis motion
pub const SDL_EVENT_GAMEPAD_AXIS_MOTION: EventType = 0x650;
/// Gamepad button pressed
pub const SDL_EVENT_GAMEPAD_BUTTON_DOWN: EventType = 0x651;
/// Gamepad button released
pub const SDL_EVENT_GAMEPAD_BUTTON_UP: EventType = 0x652;
/// A new gamepad has been inserted into the system
pub const SDL_EVENT_GAMEPAD_ADDED: EventType = 0x653;
/// A gamepad has been removed
pub const SDL_EVENT_GAMEPAD_REMOVED: EventType = 0x654;

pub const SDL_EVENT_FINGER_DOWN: EventType = 0x700;
pub const SDL_EVENT_FINGER_UP: EventType = 0x701;
pub const SDL_EVENT_FINGER_MOTION: EventType = 0x702;
pub const SDL_EVENT_FINGER_CANCELED: EventType = 0x703;

/// The clipboard or primary selection changed
pub const SDL_EVENT_CLIPBOARD_UPDATE: EventType = 0x900;

/// The system requests a file open
pub const SDL_EVENT_DROP_FILE: EventType = 0x1000;
/// text/plain drag-and-drop event
pub const SDL_EVENT_DROP_TEXT: EventType = 0x1001;
/// A new set of drops is beginning (NULL filename)
pub const SDL_EVENT_DROP_BEGIN: EventType = 0x1002;
/// Current set of drops is now complete (NULL filename)
pub const SDL_EVENT_DROP_COMPLETE: EventType = 0x1003;
/// Position while moving over the window
pub const SDL_EVENT_DROP_POSITION: EventType = 0x1004;

/// A new audio device is available
pub const SDL_EVENT_AUDIO_DEVICE_ADDED: EventType = 0x1100;
/// An audio device has been removed
pub const SDL_EVENT_AUDIO_DEVICE_REMOVED: EventType = 0x1101;
/// An audio device's format has been changed by the system
pub const SDL_EVENT_AUDIO_DEVICE_FORMAT_CHANGED: EventType = 0x1102;

/// A sensor was updated
pub const SDL_EVENT_SENSOR_UPDATE: EventType = 0x1200;

/// The render targets have been reset and their contents need to be updated
pub const SDL_EVENT_RENDER_TARGETS_RESET: EventType = 0x2000;
/// The device has been reset and all textures need to be recreated
pub const SDL_EVENT_RENDER_DEVICE_RESET: EventType = 0x2001;
/// The device has been lost and can't be recovered
pub const SDL_EVENT_RENDER_DEVICE_LOST: EventType = 0x2002;

/// Signals the end of an event poll cycle
pub const SDL_EVENT_POLL_SENTINEL: EventType = 0x7F00;
/// Events SDL_EVENT_USER through SDL_EVENT_LAST are for your use, and
/// should be allocated with SDL_RegisterEvents()
pub const SDL_EVENT_USER: EventType = 0x8000;
/// This last event is only for bounding internal arrays
pub const SDL_EVENT_LAST: EventType = 0xFFFF;

/// Fields shared by every event.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    /// In nanoseconds, populated using SDL_GetTicksNS()
    pub timestamp: Uint64,
}

/// Display state change event data (`event.display.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct DisplayEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The associated display
    pub displayID: DisplayID,
    /// event dependent data
    pub data1: Sint32,
    /// event dependent data
    pub data2: Sint32,
}

/// Window state change event data (`event.window.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The associated window
    pub windowID: WindowID,
    /// event dependent data
    pub data1: Sint32,
    /// event dependent data
    pub data2: Sint32,
}

/// Keyboard device event data (`event.kdevice.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardDeviceEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The keyboard instance id
    pub which: KeyboardID,
}

/// Keyboard button event data (`event.key.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The window with keyboard focus, if any
    pub windowID: WindowID,
    /// The keyboard instance id, or 0 if unknown or virtual
    pub which: KeyboardID,
    /// SDL physical key code
    pub scancode: Scancode,
    /// SDL virtual key code
    pub key: Keycode,
    /// current key modifiers
    pub r#mod: Keymod,
    /// The platform dependent scancode for this event
    pub raw: Uint16,
    /// true if the key is pressed
    pub down: bool,
    /// true if this is a key repeat
    pub repeat: bool,
}

/// Keyboard text editing event data (`event.edit.*`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TextEditingEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The window with keyboard focus, if any
    pub windowID: WindowID,
    /// The editing text
    pub text: *const c_char,
    /// The start cursor of selected editing text, or -1 if not set
    pub start: Sint32,
    /// The length of selected editing text, or -1 if not set
    pub length: Sint32,
}

/// Keyboard text input event data (`event.text.*`).
///
/// `text` is owned by SDL and valid until the next event poll.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TextInputEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The window with keyboard focus, if any
    pub windowID: WindowID,
    /// The input text, UTF-8 encoded
    pub text: *const c_char,
}

/// Mouse device event data (`event.mdevice.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseDeviceEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The mouse instance id
    pub which: MouseID,
}

/// Mouse motion event data (`event.motion.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseMotionEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The window with mouse focus, if any
    pub windowID: WindowID,
    /// The mouse instance id in relative mode, SDL_TOUCH_MOUSEID for
    /// touch events, or 0
    pub which: MouseID,
    /// The current button state
    pub state: MouseButtonFlags,
    /// X coordinate, relative to window
    pub x: f32,
    /// Y coordinate, relative to window
    pub y: f32,
    /// The relative motion in the X direction
    pub xrel: f32,
    /// The relative motion in the Y direction
    pub yrel: f32,
}

/// Mouse button event data (`event.button.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseButtonEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The window with mouse focus, if any
    pub windowID: WindowID,
    /// The mouse instance id in relative mode, SDL_TOUCH_MOUSEID for
    /// touch events, or 0
    pub which: MouseID,
    /// The mouse button index
    pub button: Uint8,
    /// true if the button is pressed
    pub down: bool,
    /// 1 for single-click, 2 for double-click, etc.
    pub clicks: Uint8,
    pub padding: Uint8,
    /// X coordinate, relative to window
    pub x: f32,
    /// Y coordinate, relative to window
    pub y: f32,
}

/// Mouse wheel event data (`event.wheel.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseWheelEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The window with mouse focus, if any
    pub windowID: WindowID,
    /// The mouse instance id in relative mode or 0
    pub which: MouseID,
    /// The amount scrolled horizontally, positive to the right and negative to the left
    pub x: f32,
    /// The amount scrolled vertically, positive away from the user and negative toward the user
    pub y: f32,
    /// When FLIPPED the values in X and Y will be opposite. Multiply by -1 to change them back
    pub direction: MouseWheelDirection,
    /// X coordinate, relative to window
    pub mouse_x: f32,
    /// Y coordinate, relative to window
    pub mouse_y: f32,
    /// The amount scrolled horizontally, accumulated to whole scroll "ticks"
    pub integer_x: Sint32,
    /// The amount scrolled vertically, accumulated to whole scroll "ticks"
    pub integer_y: Sint32,
}

/// Audio device event data (`event.adevice.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct AudioDeviceEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// SDL_AudioDeviceID for the device being added or removed or changing
    pub which: AudioDeviceID,
    /// false if a playback device, true if a recording device
    pub recording: bool,
    pub padding1: Uint8,
    pub padding2: Uint8,
    pub padding3: Uint8,
}

/// Sensor event data (`event.sensor.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SensorEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The instance ID of the sensor
    pub which: SensorID,
    /// Up to 6 values from the sensor
    pub data: [f32; 6],
    /// The timestamp of the sensor reading in nanoseconds, not necessarily synchronized with the system clock
    pub sensor_timestamp: Uint64,
}

/// Touch finger event data (`event.tfinger.*`).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct TouchFingerEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The touch device id
    pub touchID: TouchID,
    pub fingerID: FingerID,
    /// Normalized in the range 0...1
    pub x: f32,
    /// Normalized in the range 0...1
    pub y: f32,
    /// Normalized in the range -1...1
    pub dx: f32,
    /// Normalized in the range -1...1
    pub dy: f32,
    /// Normalized in the range 0...1
    pub pressure: f32,
    /// The window underneath the finger, if any
    pub windowID: WindowID,
}

/// Drag and drop event data (`event.drop.*`).
///
/// `source` and `data` are owned by SDL and valid until the next event poll.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DropEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The window that was dropped on, if any
    pub windowID: WindowID,
    /// X coordinate, relative to window (not on begin)
    pub x: f32,
    /// Y coordinate, relative to window (not on begin)
    pub y: f32,
    /// The source app that sent this drop event, or NULL if that isn't available
    pub source: *const c_char,
    /// The text for SDL_EVENT_DROP_TEXT and the file name for SDL_EVENT_DROP_FILE, NULL for other events
    pub data: *const c_char,
}

/// The "quit requested" event.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct QuitEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
}

/// A user-defined event type (`event.user.*`), pushed with
/// `SDL_PushEvent` after allocating the type with `SDL_RegisterEvents`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct UserEvent {
    pub r#type: EventType,
    pub reserved: Uint32,
    pub timestamp: Uint64,
    /// The associated window, if any
    pub windowID: WindowID,
    /// User defined event code
    pub code: Sint32,
    /// User defined data pointer
    pub data1: *mut c_void,
    /// User defined data pointer
    pub data2: *mut c_void,
}

/// The structure for all events in SDL, mirroring the C union.
///
/// Only the member matching the leading `type` value is valid to read;
/// the rest observe whatever bytes happen to overlap.
#[repr(C)]
#[derive(Clone, Copy)]
pub union Event {
    /// Event type, shared with all events
    pub r#type: EventType,
    /// Common event data
    pub common: CommonEvent,
    /// Display event data
    pub display: DisplayEvent,
    /// Window event data
    pub window: WindowEvent,
    /// Keyboard device change event data
    pub kdevice: KeyboardDeviceEvent,
    /// Keyboard event data
    pub key: KeyboardEvent,
    /// Text editing event data
    pub edit: TextEditingEvent,
    /// Text input event data
    pub text: TextInputEvent,
    /// Mouse device change event data
    pub mdevice: MouseDeviceEvent,
    /// Mouse motion event data
    pub motion: MouseMotionEvent,
    /// Mouse button event data
    pub button: MouseButtonEvent,
    /// Mouse wheel event data
    pub wheel: MouseWheelEvent,
    /// Audio device event data
    pub adevice: AudioDeviceEvent,
    /// Sensor event data
    pub sensor: SensorEvent,
    /// Touch finger event data
    pub tfinger: TouchFingerEvent,
    /// Drag and drop event data
    pub drop: DropEvent,
    /// Quit request event data
    pub quit: QuitEvent,
    /// Custom event data
    pub user: UserEvent,
    /// Forces the union to the size the C headers commit to, so that
    /// bindings without every payload struct still match the ABI.
    pub padding: [Uint8; 128],
}

impl Default for Event {
    fn default() -> Self {
        Event { padding: [0; 128] }
    }
}
