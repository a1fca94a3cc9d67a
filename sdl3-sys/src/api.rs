// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Dynamic-loading table for the SDL3 shared library.
//!
//! [`Sdl3Api`] resolves every bound `SDL_*` entry point once, when the
//! library is opened, and keeps the `libloading::Library` alive for as
//! long as the table exists so the function pointers stay valid. Each
//! native function is exposed as a thin unsafe method with the C
//! signature unchanged; all marshalling lives in the safe `sdl3` crate.

use std::os::raw::{c_char, c_int, c_void};

use crate::audio::{AudioDeviceID, AudioSpec, AudioStream};
use crate::events::{Event, EventType};
use crate::init::InitFlags;
use crate::keyboard::{KeyboardID, Keymod};
use crate::keycode::Keycode;
use crate::mouse::{Cursor, MouseButtonFlags, MouseID, SystemCursor};
use crate::pixels::{Color, Palette, PixelFormat, PixelFormatDetails};
use crate::properties::{PropertiesID, PropertyType};
use crate::rect::{FPoint, FRect, Point, Rect};
use crate::scancode::Scancode;
use crate::sensor::{Sensor, SensorID, SensorType};
use crate::stdinc::{Sint32, Sint64, Uint8, Uint32, Uint64};
use crate::timer::{NSTimerCallback, TimerCallback, TimerID};
use crate::touch::{Finger, TouchDeviceType, TouchID};
use crate::video::{DisplayID, DisplayMode, GLAttr, GLContext, Window, WindowFlags, WindowID};

/// Declares the symbol table: one struct field, one load statement and one
/// forwarding method per native function, from a single signature line.
macro_rules! sdl3_api {
    (
        $(
            $(#[$attr:meta])*
            fn $method:ident = $symbol:literal
                as fn($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
        )*
    ) => {
        /// Resolved entry points of one loaded SDL3 shared library.
        ///
        /// All methods are `unsafe`: they forward straight to the native
        /// library and inherit every precondition the corresponding
        /// `SDL_*` function documents.
        pub struct Sdl3Api {
            // Keeps the shared library mapped; the fields below point into it.
            _library: ::libloading::Library,
            $( $method: unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?, )*
        }

        impl Sdl3Api {
            /// Opens the shared library at `path` and resolves every bound
            /// symbol, failing on the first one that is missing.
            pub unsafe fn load<P: AsRef<::std::ffi::OsStr>>(
                path: P,
            ) -> Result<Self, ::libloading::Error> {
                let library = ::libloading::Library::new(path)?;
                $(
                    let $method = *library
                        .get::<unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?>($symbol)?;
                )*
                Ok(Self {
                    _library: library,
                    $($method,)*
                })
            }

            $(
                $(#[$attr])*
                #[inline]
                pub unsafe fn $method(&self, $($arg: $ty),*) $(-> $ret)? {
                    (self.$method)($($arg),*)
                }
            )*
        }
    };
}

sdl3_api! {
    // SDL_init.h
    fn init = b"SDL_Init\0" as fn(flags: InitFlags) -> bool;
    fn init_sub_system = b"SDL_InitSubSystem\0" as fn(flags: InitFlags) -> bool;
    fn quit_sub_system = b"SDL_QuitSubSystem\0" as fn(flags: InitFlags);
    fn was_init = b"SDL_WasInit\0" as fn(flags: InitFlags) -> InitFlags;
    fn quit = b"SDL_Quit\0" as fn();

    // SDL_version.h
    fn get_version = b"SDL_GetVersion\0" as fn() -> c_int;
    fn get_revision = b"SDL_GetRevision\0" as fn() -> *const c_char;

    // SDL_error.h
    fn get_error = b"SDL_GetError\0" as fn() -> *const c_char;
    fn clear_error = b"SDL_ClearError\0" as fn() -> bool;

    // SDL_stdinc.h
    fn malloc = b"SDL_malloc\0" as fn(size: usize) -> *mut c_void;
    /// The deallocator for every native buffer SDL hands over to the
    /// caller (device lists, display lists, finger lists, ...).
    fn free = b"SDL_free\0" as fn(mem: *mut c_void);

    // SDL_video.h
    fn create_window = b"SDL_CreateWindow\0"
        as fn(title: *const c_char, w: c_int, h: c_int, flags: WindowFlags) -> Window;
    fn destroy_window = b"SDL_DestroyWindow\0" as fn(window: Window);
    fn get_window_id = b"SDL_GetWindowID\0" as fn(window: Window) -> WindowID;
    fn get_window_from_id = b"SDL_GetWindowFromID\0" as fn(id: WindowID) -> Window;
    fn get_window_flags = b"SDL_GetWindowFlags\0" as fn(window: Window) -> WindowFlags;
    fn get_window_title = b"SDL_GetWindowTitle\0" as fn(window: Window) -> *const c_char;
    fn set_window_title = b"SDL_SetWindowTitle\0"
        as fn(window: Window, title: *const c_char) -> bool;
    fn get_window_size = b"SDL_GetWindowSize\0"
        as fn(window: Window, w: *mut c_int, h: *mut c_int) -> bool;
    fn set_window_size = b"SDL_SetWindowSize\0"
        as fn(window: Window, w: c_int, h: c_int) -> bool;
    fn get_window_position = b"SDL_GetWindowPosition\0"
        as fn(window: Window, x: *mut c_int, y: *mut c_int) -> bool;
    fn set_window_position = b"SDL_SetWindowPosition\0"
        as fn(window: Window, x: c_int, y: c_int) -> bool;
    fn show_window = b"SDL_ShowWindow\0" as fn(window: Window) -> bool;
    fn hide_window = b"SDL_HideWindow\0" as fn(window: Window) -> bool;
    fn raise_window = b"SDL_RaiseWindow\0" as fn(window: Window) -> bool;
    fn set_window_fullscreen = b"SDL_SetWindowFullscreen\0"
        as fn(window: Window, fullscreen: bool) -> bool;
    fn get_window_pixel_format = b"SDL_GetWindowPixelFormat\0"
        as fn(window: Window) -> PixelFormat;
    fn get_display_for_window = b"SDL_GetDisplayForWindow\0"
        as fn(window: Window) -> DisplayID;
    fn get_displays = b"SDL_GetDisplays\0" as fn(count: *mut c_int) -> *mut DisplayID;
    fn get_primary_display = b"SDL_GetPrimaryDisplay\0" as fn() -> DisplayID;
    fn get_display_name = b"SDL_GetDisplayName\0"
        as fn(display_id: DisplayID) -> *const c_char;
    fn get_display_bounds = b"SDL_GetDisplayBounds\0"
        as fn(display_id: DisplayID, rect: *mut Rect) -> bool;
    fn get_desktop_display_mode = b"SDL_GetDesktopDisplayMode\0"
        as fn(display_id: DisplayID) -> *const DisplayMode;
    fn get_current_display_mode = b"SDL_GetCurrentDisplayMode\0"
        as fn(display_id: DisplayID) -> *const DisplayMode;
    fn get_fullscreen_display_modes = b"SDL_GetFullscreenDisplayModes\0"
        as fn(display_id: DisplayID, count: *mut c_int) -> *mut *mut DisplayMode;
    fn gl_create_context = b"SDL_GL_CreateContext\0" as fn(window: Window) -> GLContext;
    fn gl_destroy_context = b"SDL_GL_DestroyContext\0" as fn(context: GLContext) -> bool;
    fn gl_make_current = b"SDL_GL_MakeCurrent\0"
        as fn(window: Window, context: GLContext) -> bool;
    fn gl_swap_window = b"SDL_GL_SwapWindow\0" as fn(window: Window) -> bool;
    fn gl_set_attribute = b"SDL_GL_SetAttribute\0" as fn(attr: GLAttr, value: c_int) -> bool;
    fn gl_get_attribute = b"SDL_GL_GetAttribute\0"
        as fn(attr: GLAttr, value: *mut c_int) -> bool;

    // SDL_events.h
    fn poll_event = b"SDL_PollEvent\0" as fn(event: *mut Event) -> bool;
    fn wait_event = b"SDL_WaitEvent\0" as fn(event: *mut Event) -> bool;
    fn wait_event_timeout = b"SDL_WaitEventTimeout\0"
        as fn(event: *mut Event, timeout_ms: Sint32) -> bool;
    fn push_event = b"SDL_PushEvent\0" as fn(event: *mut Event) -> bool;
    fn pump_events = b"SDL_PumpEvents\0" as fn();
    fn has_event = b"SDL_HasEvent\0" as fn(event_type: EventType) -> bool;
    fn has_events = b"SDL_HasEvents\0"
        as fn(min_type: EventType, max_type: EventType) -> bool;
    fn flush_event = b"SDL_FlushEvent\0" as fn(event_type: EventType);
    fn flush_events = b"SDL_FlushEvents\0" as fn(min_type: EventType, max_type: EventType);
    fn set_event_enabled = b"SDL_SetEventEnabled\0"
        as fn(event_type: EventType, enabled: bool);
    fn event_enabled = b"SDL_EventEnabled\0" as fn(event_type: EventType) -> bool;
    fn register_events = b"SDL_RegisterEvents\0" as fn(numevents: c_int) -> Uint32;

    // SDL_keyboard.h
    fn has_keyboard = b"SDL_HasKeyboard\0" as fn() -> bool;
    fn get_keyboards = b"SDL_GetKeyboards\0" as fn(count: *mut c_int) -> *mut KeyboardID;
    fn get_keyboard_name_for_id = b"SDL_GetKeyboardNameForID\0"
        as fn(instance_id: KeyboardID) -> *const c_char;
    fn get_keyboard_focus = b"SDL_GetKeyboardFocus\0" as fn() -> Window;
    fn get_keyboard_state = b"SDL_GetKeyboardState\0"
        as fn(numkeys: *mut c_int) -> *const bool;
    fn reset_keyboard = b"SDL_ResetKeyboard\0" as fn();
    fn get_mod_state = b"SDL_GetModState\0" as fn() -> Keymod;
    fn set_mod_state = b"SDL_SetModState\0" as fn(modstate: Keymod);
    fn get_key_from_scancode = b"SDL_GetKeyFromScancode\0"
        as fn(scancode: Scancode, modstate: Keymod, key_event: bool) -> Keycode;
    fn get_scancode_from_key = b"SDL_GetScancodeFromKey\0"
        as fn(key: Keycode, modstate: *mut Keymod) -> Scancode;
    fn get_scancode_name = b"SDL_GetScancodeName\0"
        as fn(scancode: Scancode) -> *const c_char;
    fn get_scancode_from_name = b"SDL_GetScancodeFromName\0"
        as fn(name: *const c_char) -> Scancode;
    fn get_key_name = b"SDL_GetKeyName\0" as fn(key: Keycode) -> *const c_char;
    fn get_key_from_name = b"SDL_GetKeyFromName\0" as fn(name: *const c_char) -> Keycode;
    fn start_text_input = b"SDL_StartTextInput\0" as fn(window: Window) -> bool;
    fn stop_text_input = b"SDL_StopTextInput\0" as fn(window: Window) -> bool;
    fn text_input_active = b"SDL_TextInputActive\0" as fn(window: Window) -> bool;
    fn has_screen_keyboard_support = b"SDL_HasScreenKeyboardSupport\0" as fn() -> bool;

    // SDL_mouse.h
    fn has_mouse = b"SDL_HasMouse\0" as fn() -> bool;
    fn get_mice = b"SDL_GetMice\0" as fn(count: *mut c_int) -> *mut MouseID;
    fn get_mouse_name_for_id = b"SDL_GetMouseNameForID\0"
        as fn(instance_id: MouseID) -> *const c_char;
    fn get_mouse_focus = b"SDL_GetMouseFocus\0" as fn() -> Window;
    fn get_mouse_state = b"SDL_GetMouseState\0"
        as fn(x: *mut f32, y: *mut f32) -> MouseButtonFlags;
    fn get_global_mouse_state = b"SDL_GetGlobalMouseState\0"
        as fn(x: *mut f32, y: *mut f32) -> MouseButtonFlags;
    fn get_relative_mouse_state = b"SDL_GetRelativeMouseState\0"
        as fn(x: *mut f32, y: *mut f32) -> MouseButtonFlags;
    fn warp_mouse_in_window = b"SDL_WarpMouseInWindow\0"
        as fn(window: Window, x: f32, y: f32);
    fn warp_mouse_global = b"SDL_WarpMouseGlobal\0" as fn(x: f32, y: f32) -> bool;
    fn set_window_relative_mouse_mode = b"SDL_SetWindowRelativeMouseMode\0"
        as fn(window: Window, enabled: bool) -> bool;
    fn get_window_relative_mouse_mode = b"SDL_GetWindowRelativeMouseMode\0"
        as fn(window: Window) -> bool;
    fn capture_mouse = b"SDL_CaptureMouse\0" as fn(enabled: bool) -> bool;
    fn create_system_cursor = b"SDL_CreateSystemCursor\0" as fn(id: SystemCursor) -> Cursor;
    fn set_cursor = b"SDL_SetCursor\0" as fn(cursor: Cursor) -> bool;
    fn get_cursor = b"SDL_GetCursor\0" as fn() -> Cursor;
    fn get_default_cursor = b"SDL_GetDefaultCursor\0" as fn() -> Cursor;
    fn destroy_cursor = b"SDL_DestroyCursor\0" as fn(cursor: Cursor);
    fn show_cursor = b"SDL_ShowCursor\0" as fn() -> bool;
    fn hide_cursor = b"SDL_HideCursor\0" as fn() -> bool;
    fn cursor_visible = b"SDL_CursorVisible\0" as fn() -> bool;

    // SDL_pixels.h
    fn get_pixel_format_name = b"SDL_GetPixelFormatName\0"
        as fn(format: PixelFormat) -> *const c_char;
    fn get_masks_for_pixel_format = b"SDL_GetMasksForPixelFormat\0"
        as fn(format: PixelFormat, bpp: *mut c_int, rmask: *mut Uint32, gmask: *mut Uint32,
              bmask: *mut Uint32, amask: *mut Uint32) -> bool;
    fn get_pixel_format_for_masks = b"SDL_GetPixelFormatForMasks\0"
        as fn(bpp: c_int, rmask: Uint32, gmask: Uint32, bmask: Uint32, amask: Uint32)
            -> PixelFormat;
    fn get_pixel_format_details = b"SDL_GetPixelFormatDetails\0"
        as fn(format: PixelFormat) -> *const PixelFormatDetails;
    fn create_palette = b"SDL_CreatePalette\0" as fn(ncolors: c_int) -> *mut Palette;
    fn set_palette_colors = b"SDL_SetPaletteColors\0"
        as fn(palette: *mut Palette, colors: *const Color, firstcolor: c_int,
              ncolors: c_int) -> bool;
    fn destroy_palette = b"SDL_DestroyPalette\0" as fn(palette: *mut Palette);
    fn map_rgb = b"SDL_MapRGB\0"
        as fn(format: *const PixelFormatDetails, palette: *const Palette, r: Uint8,
              g: Uint8, b: Uint8) -> Uint32;
    fn map_rgba = b"SDL_MapRGBA\0"
        as fn(format: *const PixelFormatDetails, palette: *const Palette, r: Uint8,
              g: Uint8, b: Uint8, a: Uint8) -> Uint32;
    fn get_rgb = b"SDL_GetRGB\0"
        as fn(pixel: Uint32, format: *const PixelFormatDetails, palette: *const Palette,
              r: *mut Uint8, g: *mut Uint8, b: *mut Uint8);
    fn get_rgba = b"SDL_GetRGBA\0"
        as fn(pixel: Uint32, format: *const PixelFormatDetails, palette: *const Palette,
              r: *mut Uint8, g: *mut Uint8, b: *mut Uint8, a: *mut Uint8);

    // SDL_properties.h
    fn get_global_properties = b"SDL_GetGlobalProperties\0" as fn() -> PropertiesID;
    fn create_properties = b"SDL_CreateProperties\0" as fn() -> PropertiesID;
    fn destroy_properties = b"SDL_DestroyProperties\0" as fn(props: PropertiesID);
    fn has_property = b"SDL_HasProperty\0"
        as fn(props: PropertiesID, name: *const c_char) -> bool;
    fn get_property_type = b"SDL_GetPropertyType\0"
        as fn(props: PropertiesID, name: *const c_char) -> PropertyType;
    fn set_string_property = b"SDL_SetStringProperty\0"
        as fn(props: PropertiesID, name: *const c_char, value: *const c_char) -> bool;
    fn get_string_property = b"SDL_GetStringProperty\0"
        as fn(props: PropertiesID, name: *const c_char, default_value: *const c_char)
            -> *const c_char;
    fn set_number_property = b"SDL_SetNumberProperty\0"
        as fn(props: PropertiesID, name: *const c_char, value: Sint64) -> bool;
    fn get_number_property = b"SDL_GetNumberProperty\0"
        as fn(props: PropertiesID, name: *const c_char, default_value: Sint64) -> Sint64;
    fn set_float_property = b"SDL_SetFloatProperty\0"
        as fn(props: PropertiesID, name: *const c_char, value: f32) -> bool;
    fn get_float_property = b"SDL_GetFloatProperty\0"
        as fn(props: PropertiesID, name: *const c_char, default_value: f32) -> f32;
    fn set_boolean_property = b"SDL_SetBooleanProperty\0"
        as fn(props: PropertiesID, name: *const c_char, value: bool) -> bool;
    fn get_boolean_property = b"SDL_GetBooleanProperty\0"
        as fn(props: PropertiesID, name: *const c_char, default_value: bool) -> bool;
    fn clear_property = b"SDL_ClearProperty\0"
        as fn(props: PropertiesID, name: *const c_char) -> bool;
    fn lock_properties = b"SDL_LockProperties\0" as fn(props: PropertiesID) -> bool;
    fn unlock_properties = b"SDL_UnlockProperties\0" as fn(props: PropertiesID);

    // SDL_rect.h
    fn has_rect_intersection = b"SDL_HasRectIntersection\0"
        as fn(a: *const Rect, b: *const Rect) -> bool;
    fn get_rect_intersection = b"SDL_GetRectIntersection\0"
        as fn(a: *const Rect, b: *const Rect, result: *mut Rect) -> bool;
    fn get_rect_union = b"SDL_GetRectUnion\0"
        as fn(a: *const Rect, b: *const Rect, result: *mut Rect) -> bool;
    fn get_rect_enclosing_points = b"SDL_GetRectEnclosingPoints\0"
        as fn(points: *const Point, count: c_int, clip: *const Rect, result: *mut Rect)
            -> bool;
    fn get_rect_and_line_intersection = b"SDL_GetRectAndLineIntersection\0"
        as fn(rect: *const Rect, x1: *mut c_int, y1: *mut c_int, x2: *mut c_int,
              y2: *mut c_int) -> bool;
    fn has_rect_intersection_float = b"SDL_HasRectIntersectionFloat\0"
        as fn(a: *const FRect, b: *const FRect) -> bool;
    fn get_rect_intersection_float = b"SDL_GetRectIntersectionFloat\0"
        as fn(a: *const FRect, b: *const FRect, result: *mut FRect) -> bool;
    fn get_rect_union_float = b"SDL_GetRectUnionFloat\0"
        as fn(a: *const FRect, b: *const FRect, result: *mut FRect) -> bool;
    fn get_rect_enclosing_points_float = b"SDL_GetRectEnclosingPointsFloat\0"
        as fn(points: *const FPoint, count: c_int, clip: *const FRect,
              result: *mut FRect) -> bool;
    fn get_rect_and_line_intersection_float = b"SDL_GetRectAndLineIntersectionFloat\0"
        as fn(rect: *const FRect, x1: *mut f32, y1: *mut f32, x2: *mut f32,
              y2: *mut f32) -> bool;

    // SDL_sensor.h
    fn get_sensors = b"SDL_GetSensors\0" as fn(count: *mut c_int) -> *mut SensorID;
    fn get_sensor_name_for_id = b"SDL_GetSensorNameForID\0"
        as fn(instance_id: SensorID) -> *const c_char;
    fn get_sensor_type_for_id = b"SDL_GetSensorTypeForID\0"
        as fn(instance_id: SensorID) -> SensorType;
    fn get_sensor_non_portable_type_for_id = b"SDL_GetSensorNonPortableTypeForID\0"
        as fn(instance_id: SensorID) -> c_int;
    fn open_sensor = b"SDL_OpenSensor\0" as fn(instance_id: SensorID) -> Sensor;
    fn get_sensor_from_id = b"SDL_GetSensorFromID\0" as fn(instance_id: SensorID) -> Sensor;
    fn get_sensor_properties = b"SDL_GetSensorProperties\0"
        as fn(sensor: Sensor) -> PropertiesID;
    fn get_sensor_name = b"SDL_GetSensorName\0" as fn(sensor: Sensor) -> *const c_char;
    fn get_sensor_type = b"SDL_GetSensorType\0" as fn(sensor: Sensor) -> SensorType;
    fn get_sensor_non_portable_type = b"SDL_GetSensorNonPortableType\0"
        as fn(sensor: Sensor) -> c_int;
    fn get_sensor_id = b"SDL_GetSensorID\0" as fn(sensor: Sensor) -> SensorID;
    fn get_sensor_data = b"SDL_GetSensorData\0"
        as fn(sensor: Sensor, data: *mut f32, num_values: c_int) -> bool;
    fn close_sensor = b"SDL_CloseSensor\0" as fn(sensor: Sensor);
    fn update_sensors = b"SDL_UpdateSensors\0" as fn();

    // SDL_timer.h
    fn get_ticks = b"SDL_GetTicks\0" as fn() -> Uint64;
    fn get_ticks_ns = b"SDL_GetTicksNS\0" as fn() -> Uint64;
    fn get_performance_counter = b"SDL_GetPerformanceCounter\0" as fn() -> Uint64;
    fn get_performance_frequency = b"SDL_GetPerformanceFrequency\0" as fn() -> Uint64;
    fn delay = b"SDL_Delay\0" as fn(ms: Uint32);
    fn delay_ns = b"SDL_DelayNS\0" as fn(ns: Uint64);
    fn delay_precise = b"SDL_DelayPrecise\0" as fn(ns: Uint64);
    fn add_timer = b"SDL_AddTimer\0"
        as fn(interval: Uint32, callback: TimerCallback, userdata: *mut c_void) -> TimerID;
    fn add_timer_ns = b"SDL_AddTimerNS\0"
        as fn(interval: Uint64, callback: NSTimerCallback, userdata: *mut c_void)
            -> TimerID;
    fn remove_timer = b"SDL_RemoveTimer\0" as fn(id: TimerID) -> bool;

    // SDL_touch.h
    fn get_touch_devices = b"SDL_GetTouchDevices\0"
        as fn(count: *mut c_int) -> *mut TouchID;
    fn get_touch_device_name = b"SDL_GetTouchDeviceName\0"
        as fn(touch_id: TouchID) -> *const c_char;
    fn get_touch_device_type = b"SDL_GetTouchDeviceType\0"
        as fn(touch_id: TouchID) -> TouchDeviceType;
    fn get_touch_fingers = b"SDL_GetTouchFingers\0"
        as fn(touch_id: TouchID, count: *mut c_int) -> *mut *mut Finger;

    // SDL_audio.h
    fn get_num_audio_drivers = b"SDL_GetNumAudioDrivers\0" as fn() -> c_int;
    fn get_audio_driver = b"SDL_GetAudioDriver\0" as fn(index: c_int) -> *const c_char;
    fn get_current_audio_driver = b"SDL_GetCurrentAudioDriver\0" as fn() -> *const c_char;
    fn get_audio_playback_devices = b"SDL_GetAudioPlaybackDevices\0"
        as fn(count: *mut c_int) -> *mut AudioDeviceID;
    fn get_audio_recording_devices = b"SDL_GetAudioRecordingDevices\0"
        as fn(count: *mut c_int) -> *mut AudioDeviceID;
    fn get_audio_device_name = b"SDL_GetAudioDeviceName\0"
        as fn(devid: AudioDeviceID) -> *const c_char;
    fn get_audio_device_format = b"SDL_GetAudioDeviceFormat\0"
        as fn(devid: AudioDeviceID, spec: *mut AudioSpec, sample_frames: *mut c_int)
            -> bool;
    fn get_audio_device_channel_map = b"SDL_GetAudioDeviceChannelMap\0"
        as fn(devid: AudioDeviceID, count: *mut c_int) -> *mut c_int;
    fn open_audio_device = b"SDL_OpenAudioDevice\0"
        as fn(devid: AudioDeviceID, spec: *const AudioSpec) -> AudioDeviceID;
    fn close_audio_device = b"SDL_CloseAudioDevice\0" as fn(devid: AudioDeviceID);
    fn pause_audio_device = b"SDL_PauseAudioDevice\0" as fn(devid: AudioDeviceID) -> bool;
    fn resume_audio_device = b"SDL_ResumeAudioDevice\0" as fn(devid: AudioDeviceID) -> bool;
    fn audio_device_paused = b"SDL_AudioDevicePaused\0" as fn(devid: AudioDeviceID) -> bool;
    fn get_audio_device_gain = b"SDL_GetAudioDeviceGain\0"
        as fn(devid: AudioDeviceID) -> f32;
    fn set_audio_device_gain = b"SDL_SetAudioDeviceGain\0"
        as fn(devid: AudioDeviceID, gain: f32) -> bool;
    fn is_audio_device_physical = b"SDL_IsAudioDevicePhysical\0"
        as fn(devid: AudioDeviceID) -> bool;
    fn is_audio_device_playback = b"SDL_IsAudioDevicePlayback\0"
        as fn(devid: AudioDeviceID) -> bool;
    fn create_audio_stream = b"SDL_CreateAudioStream\0"
        as fn(src_spec: *const AudioSpec, dst_spec: *const AudioSpec) -> AudioStream;
    fn destroy_audio_stream = b"SDL_DestroyAudioStream\0" as fn(stream: AudioStream);
    fn get_audio_stream_format = b"SDL_GetAudioStreamFormat\0"
        as fn(stream: AudioStream, src_spec: *mut AudioSpec, dst_spec: *mut AudioSpec)
            -> bool;
    fn set_audio_stream_format = b"SDL_SetAudioStreamFormat\0"
        as fn(stream: AudioStream, src_spec: *const AudioSpec,
              dst_spec: *const AudioSpec) -> bool;
    fn put_audio_stream_data = b"SDL_PutAudioStreamData\0"
        as fn(stream: AudioStream, buf: *const c_void, len: c_int) -> bool;
    fn get_audio_stream_data = b"SDL_GetAudioStreamData\0"
        as fn(stream: AudioStream, buf: *mut c_void, len: c_int) -> c_int;
    fn get_audio_stream_available = b"SDL_GetAudioStreamAvailable\0"
        as fn(stream: AudioStream) -> c_int;
    fn get_audio_stream_queued = b"SDL_GetAudioStreamQueued\0"
        as fn(stream: AudioStream) -> c_int;
    fn flush_audio_stream = b"SDL_FlushAudioStream\0" as fn(stream: AudioStream) -> bool;
    fn clear_audio_stream = b"SDL_ClearAudioStream\0" as fn(stream: AudioStream) -> bool;
    fn bind_audio_stream = b"SDL_BindAudioStream\0"
        as fn(devid: AudioDeviceID, stream: AudioStream) -> bool;
    fn unbind_audio_stream = b"SDL_UnbindAudioStream\0" as fn(stream: AudioStream);
    fn get_audio_stream_device = b"SDL_GetAudioStreamDevice\0"
        as fn(stream: AudioStream) -> AudioDeviceID;
}

// The table is `Send + Sync` by construction (an immutable symbol table);
// individual SDL3 functions still document their own threading rules, which
// the caller must follow.
