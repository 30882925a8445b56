// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler forwards to the owning component, then turns the component's
//! effect into application-level side effects: scanning, decoding, dialogs,
//! persistence and window mode.

use super::{persistence, Message, Screen, Status};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{self, ExportFormat, ImageData};
use crate::ui::browser::{folder_tree, image_list};
use crate::ui::menu_bar;
use crate::ui::viewer::{self, Controller, ViewSnapshot};
use iced::{window, Task};
use std::path::{Path, PathBuf};

/// Mutable view of the application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub folder_tree: &'a mut folder_tree::State,
    pub image_list: &'a mut image_list::State,
    pub controller: &'a mut Controller,
    /// Image whose decode is in flight; results for any other path are stale.
    pub pending_image: &'a mut Option<PathBuf>,
    pub current_image: &'a mut Option<PathBuf>,
    /// View captured when Save was chosen, waiting for the dialog.
    pub pending_export: &'a mut Option<ViewSnapshot>,
    pub menu_open: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub status: &'a mut Status,
}

pub fn handle_folder_tree_message(
    ctx: &mut UpdateContext<'_>,
    message: folder_tree::Message,
) -> Task<Message> {
    let (effect, task) = ctx.folder_tree.handle_message(message);
    let task = task.map(Message::FolderTree);

    match effect {
        folder_tree::Effect::None => task,
        folder_tree::Effect::FolderSelected(path) => {
            persistence::persist_last_directory(&path);
            let scan = ctx.image_list.set_directory(path).map(Message::ImageList);
            Task::batch([task, scan])
        }
        folder_tree::Effect::ListingFailed { path, error } => {
            *ctx.status = Status::FolderFailed { path, error };
            task
        }
    }
}

pub fn handle_image_list_message(
    ctx: &mut UpdateContext<'_>,
    message: image_list::Message,
) -> Task<Message> {
    let (effect, task) = ctx.image_list.handle_message(message);
    let task = task.map(Message::ImageList);

    match effect {
        image_list::Effect::None => task,
        image_list::Effect::LoadImage(path) => Task::batch([task, request_image(ctx, path)]),
        image_list::Effect::ScanFailed { path, error } => {
            *ctx.status = Status::FolderFailed { path, error };
            task
        }
    }
}

/// Starts decoding `path`, superseding any decode still in flight.
pub fn request_image(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    *ctx.pending_image = Some(path.clone());
    let decoded = path.clone();

    Task::perform(
        async move { tokio::task::spawn_blocking(move || media::load_image(&decoded)).await? },
        move |result| Message::ImageLoaded { path, result },
    )
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ImageData>,
) -> Task<Message> {
    if ctx.pending_image.as_ref() != Some(&path) {
        log::debug!("Dropping stale decode of {}", path.display());
        return Task::none();
    }
    *ctx.pending_image = None;

    let outcome = result.and_then(|data| ctx.controller.load_image(data).map_err(Error::from));
    match outcome {
        Ok(()) => {
            log::info!("Displaying {}", path.display());
            *ctx.current_image = Some(path);
        }
        Err(error) => {
            log::warn!("Failed to open {}: {error}", path.display());
            let error = match error {
                Error::Viewport(viewport_error) => ctx.i18n.tr(viewport_error.i18n_key()),
                other => other.to_string(),
            };
            *ctx.status = Status::LoadFailed { path, error };
        }
    }
    Task::none()
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    match viewer::update(ctx.controller, message) {
        viewer::Event::PointerMoved(position) => *ctx.status = Status::Pointer(position),
        viewer::Event::None => {}
    }
    Task::none()
}

pub fn handle_menu_message(
    ctx: &mut UpdateContext<'_>,
    message: menu_bar::Message,
) -> Task<Message> {
    match menu_bar::update(message, ctx.menu_open) {
        menu_bar::Event::None => Task::none(),
        menu_bar::Event::Rotate(direction) => {
            if let Err(error) = ctx.controller.rotate(direction) {
                log::debug!("Rotation ignored: {error}");
            }
            Task::none()
        }
        menu_bar::Event::FullScreen => {
            if !ctx.controller.has_image() {
                return Task::none();
            }
            update_fullscreen_mode(ctx.screen, ctx.window_id.as_ref(), Screen::FullScreen)
        }
        menu_bar::Event::Save => match ctx.controller.export_view() {
            Ok(snapshot) => {
                *ctx.pending_export = Some(snapshot);
                open_save_dialog(ctx.i18n, ctx.image_list.directory().map(Path::to_path_buf))
            }
            Err(error) => {
                log::debug!("Save ignored: {error}");
                Task::none()
            }
        },
    }
}

fn open_save_dialog(i18n: &I18n, directory: Option<PathBuf>) -> Task<Message> {
    let filter_name = i18n.tr("save-dialog-filter");

    Task::perform(
        async move {
            let mut dialog =
                rfd::AsyncFileDialog::new().add_filter(filter_name, &media::SAVE_EXTENSIONS);
            if let Some(dir) = directory.filter(|dir| dir.is_dir()) {
                dialog = dialog.set_directory(dir);
            }
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SaveDialogResult,
    )
}

pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let snapshot = ctx.pending_export.take();
    let (Some(path), Some(snapshot)) = (path, snapshot) else {
        return Task::none();
    };
    let path = media::with_default_extension(path);
    let target = path.clone();

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::save_view(&snapshot, &target)).await?
        },
        move |result| Message::ViewSaved { path, result },
    )
}

pub fn handle_view_saved(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<ExportFormat>,
) -> Task<Message> {
    *ctx.status = match result {
        Ok(_) => Status::Saved(path),
        Err(error) => {
            log::warn!("Failed to save view to {}: {error}", path.display());
            Status::SaveFailed(error.to_string())
        }
    };
    Task::none()
}

pub fn handle_exit_full_screen(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    update_fullscreen_mode(ctx.screen, ctx.window_id.as_ref(), Screen::Browser)
}

/// Switches screens and the window mode that goes with them.
///
/// Without a known window the screen still switches; only the window keeps
/// its current mode.
fn update_fullscreen_mode(
    screen: &mut Screen,
    window_id: Option<&window::Id>,
    desired: Screen,
) -> Task<Message> {
    if *screen == desired {
        return Task::none();
    }
    *screen = desired;

    let Some(window_id) = window_id else {
        log::warn!("No window known yet, staying in the current window mode");
        return Task::none();
    };

    let mode = match desired {
        Screen::FullScreen => window::Mode::Fullscreen,
        Screen::Browser => window::Mode::Windowed,
    };
    window::set_mode(*window_id, mode)
}
