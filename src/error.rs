// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! [`Error`] covers every fallible collaborator (filesystem, codec, config).
//! [`ViewportError`] is the viewer's own taxonomy: each variant describes a
//! request the viewport absorbed as a no-op rather than a failure.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Decode Error: {0}")]
    Decode(String),
    #[error("Encode Error: {0}")]
    Encode(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Viewport Error: {0}")]
    Viewport(#[from] ViewportError),
}

/// Requests the viewport controller declined without changing any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewportError {
    /// `load_image` received an empty or inconsistent pixel buffer.
    #[error("image buffer is empty or malformed")]
    InvalidImage,

    /// A selection ended with zero width or height.
    #[error("selection has no area")]
    DegenerateSelection,

    /// A gesture, zoom or rotation arrived while nothing is displayed.
    #[error("no image is displayed")]
    NoImageLoaded,
}

impl ViewportError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ViewportError::InvalidImage => "error-viewport-invalid-image",
            ViewportError::DegenerateSelection => "error-viewport-degenerate-selection",
            ViewportError::NoImageLoaded => "error-viewport-no-image",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            image_rs::ImageError::Encoding(e) => Error::Encode(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Config(format!("invalid name filter: {err}"))
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Io(format!("background task failed: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
