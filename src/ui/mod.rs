// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, handles its own messages and reports effects upward.
//!
//! # Panes
//!
//! - [`browser`] - Folder tree and filtered image list
//! - [`viewer`] - Zoomable, rotatable canvas with rectangle selection
//! - [`menu_bar`] - File menu acting on the displayed image
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Viewport math (transform, zoom, rotation, selection)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod browser;
pub mod design_tokens;
pub mod menu_bar;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
