// SPDX-License-Identifier: MPL-2.0
//! Status bar content.

use crate::i18n::fluent::I18n;
use crate::ui::state::zoom::format_number;
use iced::Point;
use std::path::PathBuf;

/// What the status bar currently shows. Each new event replaces the previous
/// line.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    /// World position under the pointer.
    Pointer(Point),
    Saved(PathBuf),
    SaveFailed(String),
    LoadFailed { path: PathBuf, error: String },
    FolderFailed { path: PathBuf, error: String },
    /// i18n key of a warning raised while loading the settings.
    ConfigWarning(String),
}

impl Status {
    /// Localized status line.
    pub fn text(&self, i18n: &I18n) -> String {
        match self {
            Status::Idle => String::new(),
            Status::Pointer(position) => {
                let (x, y) = (format_number(position.x), format_number(position.y));
                i18n.tr_with_args(
                    "status-mouse-position",
                    &[("x", x.as_str()), ("y", y.as_str())],
                )
            }
            Status::Saved(path) => {
                let path = path.display().to_string();
                i18n.tr_with_args("status-saved", &[("path", path.as_str())])
            }
            Status::SaveFailed(error) => {
                i18n.tr_with_args("status-save-error", &[("error", error.as_str())])
            }
            Status::LoadFailed { path, error } => {
                let path = path.display().to_string();
                i18n.tr_with_args(
                    "status-load-error",
                    &[("path", path.as_str()), ("error", error.as_str())],
                )
            }
            Status::FolderFailed { path, error } => {
                let path = path.display().to_string();
                i18n.tr_with_args(
                    "status-folder-error",
                    &[("path", path.as_str()), ("error", error.as_str())],
                )
            }
            Status::ConfigWarning(key) => i18n.tr(key),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Status::SaveFailed(_)
                | Status::LoadFailed { .. }
                | Status::FolderFailed { .. }
                | Status::ConfigWarning(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn pointer_status_reads_mouse_position() {
        let text = Status::Pointer(Point::new(12.0, 7.5)).text(&english());
        assert_eq!(text, "Mouse position: (12, 7.5)");
    }

    #[test]
    fn idle_status_is_blank() {
        assert_eq!(Status::Idle.text(&english()), "");
        assert!(!Status::Idle.is_error());
    }

    #[test]
    fn failures_are_flagged_as_errors() {
        let status = Status::SaveFailed("disk full".into());
        assert!(status.is_error());
        assert!(status.text(&english()).contains("disk full"));
        assert!(!Status::Saved(PathBuf::from("/tmp/v.png")).is_error());
    }

    #[test]
    fn config_warning_is_translated() {
        let status = Status::ConfigWarning("status-config-load-error".into());
        assert_eq!(
            status.text(&english()),
            "Settings could not be loaded, defaults are used"
        );
    }
}
