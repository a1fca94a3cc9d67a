// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Opens a window and logs events until quit.
//!
//! Requires a real SDL3 shared library; pass `--library` or set
//! `SDL3_LIBRARY_PATH` if it is not on the default search path.

mod common;

use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(about = "Open a window and log SDL events until quit")]
struct Args {
    /// Path or name of the SDL3 shared library.
    #[arg(long)]
    library: Option<std::path::PathBuf>,

    /// Window title.
    #[arg(long, default_value = "sdl3-rs event demo")]
    title: String,

    /// Window width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: i32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 720)]
    height: i32,
}

fn main() -> Result<(), sdl3::Error> {
    common::setup_logging();
    let args = Args::parse();

    let library = args
        .library
        .unwrap_or_else(sdl3::config::sdl3_library_path);
    let api = sdl3::load_api(library)?;
    let sdl = sdl3::Sdl::init(api, sdl3::sys::SDL_INIT_VIDEO)?;
    info!(
        "SDL version {} ({})",
        sdl.version(),
        sdl.revision()
    );

    let window = sdl.create_window(
        &args.title,
        args.width,
        args.height,
        sdl3::sys::SDL_WINDOW_RESIZABLE,
    )?;
    info!("window {:?} opened", window.id()?);

    'running: loop {
        while let Some(event) = sdl.poll_event() {
            if event.is_quit() {
                info!("quit requested");
                break 'running;
            }
            if let Some(key) = event.key() {
                info!(
                    "key {} ({}) down={} repeat={}",
                    sdl.key_name(key.key),
                    key.scancode,
                    key.down,
                    key.repeat
                );
            } else if let Some(button) = event.mouse_button() {
                info!(
                    "mouse button {} down={} at ({}, {})",
                    button.button, button.down, button.x, button.y
                );
            } else if let Some(window_event) = event.window() {
                info!(
                    "window event {:#x} ({}, {})",
                    window_event.r#type, window_event.data1, window_event.data2
                );
            } else if let Some(text) = event.text_input_text() {
                info!("text input: {text}");
            }
        }
        sdl.delay(std::time::Duration::from_millis(16));
    }

    drop(window);
    Ok(())
}
