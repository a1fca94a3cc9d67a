// SPDX-FileCopyrightText: 2026 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for SDL3 operations.
//!
//! SDL3 signals failure through sentinel return values (a `false` bool, a
//! null pointer, a zero ID) plus a thread-local last-error string queried
//! with `SDL_GetError`. This module transports that convention into a
//! `Result`-based API without adding any interpretation of its own.

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when using the SDL3 API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A native call reported failure; the payload is the text from
    /// `SDL_GetError` at the time of the failure (possibly empty, SDL
    /// does not guarantee an error string for every failure).
    #[error("SDL error: {0}")]
    Sdl(String),

    /// A generic error for Rust-level failures not reported by SDL itself
    /// (e.g. an unexpected null from a call that should have set an
    /// error).
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to convert a Rust string to a C-compatible null-terminated
    /// string.
    #[error("Null string: {0}")]
    NulString(#[from] std::ffi::NulError),

    /// Failed to load or interact with the SDL3 dynamic library.
    #[error("Loading library: {0}")]
    LibLoading(#[from] libloading::Error),
}
