// SPDX-License-Identifier: MPL-2.0
//! `tree_lens` is a dual-pane image browser built with the Iced GUI framework.
//!
//! A folder tree and a filtered image list sit next to a viewer that zooms
//! with the mouse wheel, frames a dragged rectangle, rotates in quarter turns
//! and saves what is currently visible. Text is localized with Fluent and
//! preferences persist in a TOML file.

#![doc(html_root_url = "https://docs.rs/tree_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
