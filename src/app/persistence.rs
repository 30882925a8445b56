// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The browser writes back one preference: the folder last selected in the
//! tree, so the next launch reopens it when no start directory is pinned.

use crate::config::{self, Config};
use std::path::Path;

/// Records `directory` as `browser.last_directory` in the settings file.
///
/// Guarded during tests to keep isolation: unit tests exercise
/// [`remember_directory`] directly.
pub fn persist_last_directory(directory: &Path) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, warning) = config::load();
    if warning.is_some() {
        // Do not overwrite a file the user may want to fix by hand
        log::warn!("Not saving last directory, the settings file is unreadable");
        return;
    }
    if !remember_directory(&mut cfg, directory) {
        return;
    }

    if let Err(error) = config::save(&cfg) {
        log::warn!("Failed to save config: {error}");
    }
}

/// Updates the config in memory; returns false when nothing changed.
pub fn remember_directory(cfg: &mut Config, directory: &Path) -> bool {
    if cfg.browser.last_directory.as_deref() == Some(directory) {
        return false;
    }
    cfg.browser.last_directory = Some(directory.to_path_buf());
    true
}
