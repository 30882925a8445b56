// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Zoom**: per-notch wheel zoom factor and its bounds
//! - **Browser**: name filters offered by the image list
//! - **Window**: initial window geometry

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default scale multiplier applied per Shift+wheel notch.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.01;

/// Smallest accepted per-notch factor. Anything lower would not zoom visibly.
pub const MIN_ZOOM_FACTOR: f32 = 1.001;

/// Largest accepted per-notch factor.
pub const MAX_ZOOM_FACTOR: f32 = 2.0;

// ==========================================================================
// Browser Defaults
// ==========================================================================

/// Name filters offered by the image list, in picker order.
pub const DEFAULT_NAME_FILTERS: [&str; 3] = ["*.png", "*.jpg", "*.jpeg"];

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Width of the folder tree and image list panes.
pub const BROWSER_PANE_WIDTH: f32 = 260.0;
