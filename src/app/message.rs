// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{ExportFormat, ImageData};
use crate::ui::browser::{folder_tree, image_list};
use crate::ui::menu_bar;
use crate::ui::viewer;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    FolderTree(folder_tree::Message),
    ImageList(image_list::Message),
    Viewer(viewer::Message),
    Menu(menu_bar::Message),
    /// Decoding finished for the image picked in the list.
    ImageLoaded {
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    SaveDialogResult(Option<PathBuf>),
    ViewSaved {
        path: PathBuf,
        result: Result<ExportFormat, Error>,
    },
    /// A mouse button went down somewhere in `window`.
    WindowActivated(window::Id),
    EscapePressed,
    ExitFullScreen,
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Folder to browse, or an image to open in its folder.
    pub path: Option<PathBuf>,
}
