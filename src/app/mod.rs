// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the browser panes, the
//! viewer and the File menu.
//!
//! The `App` struct wires the components together and translates their
//! effects into side effects such as directory scans, image decoding, the
//! save dialog or config persistence.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod status;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use status::Status;

use crate::config::{self, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::directory_scanner::display_name;
use crate::i18n::fluent::I18n;
use crate::media::NameFilters;
use crate::ui::browser::{folder_tree, image_list};
use crate::ui::theming::AppTheme;
use crate::ui::viewer::{Controller, ViewSnapshot};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    screen: Screen,
    folder_tree: folder_tree::State,
    image_list: image_list::State,
    controller: Controller,
    pending_image: Option<PathBuf>,
    current_image: Option<PathBuf>,
    pending_export: Option<ViewSnapshot>,
    /// Whether the File dropdown is open.
    menu_open: bool,
    window_id: Option<window::Id>,
    status: Status,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("current_image", &self.current_image)
            .field("has_image", &self.controller.has_image())
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 500.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first
    // call and any later call starts from defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Where the browser starts: the tree root, the folder to list and the image
/// to open.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StartLocation {
    root: PathBuf,
    folder: Option<PathBuf>,
    image: Option<PathBuf>,
}

impl StartLocation {
    /// A directory argument becomes the root and is listed right away; an
    /// image argument opens inside its parent folder. Anything else falls
    /// back to the configured root.
    fn resolve(cli_path: Option<&Path>, configured_root: PathBuf) -> Self {
        match cli_path {
            Some(path) if path.is_dir() => Self {
                root: path.to_path_buf(),
                folder: Some(path.to_path_buf()),
                image: None,
            },
            Some(path) if path.is_file() => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => Self {
                    root: parent.to_path_buf(),
                    folder: Some(parent.to_path_buf()),
                    image: Some(path.to_path_buf()),
                },
                _ => Self {
                    root: configured_root,
                    folder: None,
                    image: Some(path.to_path_buf()),
                },
            },
            Some(path) => {
                log::warn!("Ignoring missing path {}", path.display());
                Self::configured(configured_root)
            }
            None => Self::configured(configured_root),
        }
    }

    fn configured(root: PathBuf) -> Self {
        Self {
            root,
            folder: None,
            image: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the first directory
    /// listing, plus the scan and decode asked for on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::with_config(flags, config::load())
    }

    /// Builds the app from settings already loaded, with the load warning if
    /// any.
    fn with_config(
        flags: Flags,
        (config, config_warning): (config::Config, Option<String>),
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);

        let filters = NameFilters::new(config.browser.effective_name_filters())
            .or_else(|error| {
                log::warn!("Invalid name filters, using defaults: {error}");
                NameFilters::new(config::DEFAULT_NAME_FILTERS)
            })
            .unwrap_or_default();

        let start = StartLocation::resolve(flags.path.as_deref(), config.browser.root_directory());
        let (folder_tree, tree_task) = folder_tree::State::new(start.root.clone());

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            screen: Screen::default(),
            folder_tree,
            image_list: image_list::State::new(filters),
            controller: Controller::new(config.viewer.zoom_factor()),
            pending_image: None,
            current_image: None,
            pending_export: None,
            menu_open: false,
            window_id: None,
            status: config_warning.map(Status::ConfigWarning).unwrap_or_default(),
        };

        let mut tasks = vec![tree_task.map(Message::FolderTree)];
        if let Some(folder) = start.folder {
            let (_, select_task) = app
                .folder_tree
                .handle_message(folder_tree::Message::Select(folder.clone()));
            tasks.push(select_task.map(Message::FolderTree));
            tasks.push(app.image_list.set_directory(folder).map(Message::ImageList));
        }
        if let Some(image) = start.image {
            app.image_list.mark_selected(image.clone());
            let mut ctx = app.update_context();
            tasks.push(update::request_image(&mut ctx, image));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.current_image {
            Some(path) => format!("{} - {app_name}", display_name(path)),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            folder_tree: &mut self.folder_tree,
            image_list: &mut self.image_list,
            controller: &mut self.controller,
            pending_image: &mut self.pending_image,
            current_image: &mut self.current_image,
            pending_export: &mut self.pending_export,
            menu_open: &mut self.menu_open,
            window_id: &mut self.window_id,
            status: &mut self.status,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::FolderTree(tree_message) => {
                update::handle_folder_tree_message(&mut ctx, tree_message)
            }
            Message::ImageList(list_message) => {
                update::handle_image_list_message(&mut ctx, list_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Menu(menu_message) => update::handle_menu_message(&mut ctx, menu_message),
            Message::ImageLoaded { path, result } => {
                update::handle_image_loaded(&mut ctx, path, result)
            }
            Message::SaveDialogResult(path) => update::handle_save_dialog_result(&mut ctx, path),
            Message::ViewSaved { path, result } => {
                update::handle_view_saved(&mut ctx, path, result)
            }
            Message::WindowActivated(id) => {
                *ctx.window_id = Some(id);
                Task::none()
            }
            Message::EscapePressed => {
                *ctx.menu_open = false;
                Task::none()
            }
            Message::ExitFullScreen => update::handle_exit_full_screen(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            screen: self.screen,
            folder_tree: &self.folder_tree,
            image_list: &self.image_list,
            controller: &self.controller,
            menu_open: self.menu_open,
            status: &self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use crate::ui::menu_bar;
    use crate::ui::viewer::{self, ViewportEvent};
    use iced::{Point, Size};
    use std::fs;
    use tempfile::tempdir;

    fn english() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            path: None,
        }
    }

    /// App booted from `settings.toml` in `config_dir`, defaults if absent.
    fn app_with_config_dir(config_dir: &Path) -> App {
        let loaded = config::load_with_override(Some(config_dir.to_path_buf()));
        let (app, _task) = App::with_config(english(), loaded);
        app
    }

    fn app() -> App {
        let temp_dir = tempdir().expect("failed to create temp dir");
        app_with_config_dir(temp_dir.path())
    }

    fn red_square(side: u32) -> ImageData {
        let pixels = [255, 0, 0, 255].repeat((side * side) as usize);
        ImageData::from_rgba(side, side, pixels).expect("valid image")
    }

    fn loaded_app(path: &str) -> App {
        let mut app = app();
        let _ = app.update(Message::Viewer(viewer::Message::Resized(Size::new(
            200.0, 100.0,
        ))));
        app.pending_image = Some(PathBuf::from(path));
        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from(path),
            result: Ok(red_square(10)),
        });
        app
    }

    #[test]
    fn new_starts_in_browser_without_image() {
        let app = app();
        assert_eq!(app.screen, Screen::Browser);
        assert!(!app.controller.has_image());
        assert!(!app.menu_open);
        assert_eq!(app.title(), "TreeLens");
    }

    #[test]
    fn settings_file_drives_zoom_factor() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join("settings.toml"),
            "[viewer]\nzoom_factor = 1.5\n",
        )
        .unwrap();

        let app = app_with_config_dir(temp_dir.path());
        assert_eq!(app.controller.zoom_factor().value(), 1.5);
        assert_eq!(app.status, Status::Idle);
    }

    #[test]
    fn unreadable_settings_fall_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "viewer = [broken").unwrap();

        let app = app_with_config_dir(temp_dir.path());
        assert_eq!(
            app.controller.zoom_factor(),
            config::Config::default().viewer.zoom_factor()
        );
        assert_eq!(
            app.status,
            Status::ConfigWarning("status-config-load-error".to_string())
        );
        assert_eq!(
            app.status.text(&app.i18n),
            "Settings could not be loaded, defaults are used"
        );
    }

    #[test]
    fn image_loaded_displays_and_titles_window() {
        let app = loaded_app("/photos/cat.png");
        assert!(app.controller.has_image());
        assert_eq!(app.current_image, Some(PathBuf::from("/photos/cat.png")));
        assert_eq!(app.pending_image, None);
        assert_eq!(app.title(), "cat.png - TreeLens");
    }

    #[test]
    fn stale_image_result_is_dropped() {
        let mut app = loaded_app("/photos/cat.png");
        app.pending_image = Some(PathBuf::from("/photos/dog.png"));

        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("/photos/old.png"),
            result: Ok(red_square(4)),
        });
        assert_eq!(app.current_image, Some(PathBuf::from("/photos/cat.png")));
        assert_eq!(app.pending_image, Some(PathBuf::from("/photos/dog.png")));
    }

    #[test]
    fn failed_decode_keeps_current_view() {
        let mut app = loaded_app("/photos/cat.png");
        let before = app.controller.transform();
        app.pending_image = Some(PathBuf::from("/photos/broken.png"));

        let _ = app.update(Message::ImageLoaded {
            path: PathBuf::from("/photos/broken.png"),
            result: Err(crate::error::Error::Decode("bad header".into())),
        });
        assert_eq!(app.current_image, Some(PathBuf::from("/photos/cat.png")));
        assert_eq!(app.controller.transform(), before);
        assert!(matches!(app.status, Status::LoadFailed { .. }));
    }

    #[test]
    fn pointer_move_updates_status() {
        let mut app = loaded_app("/photos/cat.png");
        let _ = app.update(Message::Viewer(viewer::Message::Viewport(
            ViewportEvent::PointerMove {
                position: Point::new(100.0, 50.0),
            },
        )));
        assert_eq!(app.status, Status::Pointer(Point::new(5.0, 5.0)));
        assert_eq!(app.status.text(&app.i18n), "Mouse position: (5, 5)");
    }

    #[test]
    fn rotate_from_menu_turns_image() {
        let mut app = loaded_app("/photos/cat.png");
        let _ = app.update(Message::Menu(menu_bar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Menu(menu_bar::Message::RotateRight));
        assert!(!app.menu_open);
        assert_eq!(
            app.controller.rotation().map(|angle| angle.degrees()),
            Some(90)
        );
    }

    #[test]
    fn full_screen_round_trip() {
        let mut app = loaded_app("/photos/cat.png");
        let _ = app.update(Message::Menu(menu_bar::Message::FullScreen));
        assert_eq!(app.screen, Screen::FullScreen);

        let _ = app.update(Message::ExitFullScreen);
        assert_eq!(app.screen, Screen::Browser);
    }

    #[test]
    fn full_screen_needs_an_image() {
        let mut app = app();
        let _ = app.update(Message::Menu(menu_bar::Message::FullScreen));
        assert_eq!(app.screen, Screen::Browser);
    }

    #[test]
    fn save_captures_view_until_dialog_answers() {
        let mut app = loaded_app("/photos/cat.png");
        let _ = app.update(Message::Menu(menu_bar::Message::Save));
        assert!(app.pending_export.is_some());

        let _ = app.update(Message::SaveDialogResult(None));
        assert!(app.pending_export.is_none());
    }

    #[test]
    fn save_without_image_does_nothing() {
        let mut app = app();
        let _ = app.update(Message::Menu(menu_bar::Message::Save));
        assert!(app.pending_export.is_none());
    }

    #[test]
    fn view_saved_reports_in_status_bar() {
        let mut app = app();
        let _ = app.update(Message::ViewSaved {
            path: PathBuf::from("/tmp/view.png"),
            result: Ok(crate::media::ExportFormat::Png),
        });
        assert_eq!(app.status, Status::Saved(PathBuf::from("/tmp/view.png")));

        let _ = app.update(Message::ViewSaved {
            path: PathBuf::from("/tmp/view.png"),
            result: Err(crate::error::Error::Io("read-only".into())),
        });
        assert!(app.status.is_error());
    }

    #[test]
    fn escape_closes_menu() {
        let mut app = loaded_app("/photos/cat.png");
        let _ = app.update(Message::Menu(menu_bar::Message::ToggleMenu));
        let _ = app.update(Message::EscapePressed);
        assert!(!app.menu_open);
    }

    #[test]
    fn selecting_folder_roots_image_list() {
        let mut app = app();
        let _ = app.update(Message::FolderTree(folder_tree::Message::Select(
            PathBuf::from("/photos"),
        )));
        assert_eq!(app.image_list.directory(), Some(Path::new("/photos")));
    }

    #[test]
    fn start_location_from_directory_argument() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let start = StartLocation::resolve(Some(temp_dir.path()), PathBuf::from("/"));
        assert_eq!(start.root, temp_dir.path());
        assert_eq!(start.folder.as_deref(), Some(temp_dir.path()));
        assert_eq!(start.image, None);
    }

    #[test]
    fn start_location_from_image_argument() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image = temp_dir.path().join("cat.png");
        fs::write(&image, b"not really a png").unwrap();

        let start = StartLocation::resolve(Some(&image), PathBuf::from("/"));
        assert_eq!(start.root, temp_dir.path());
        assert_eq!(start.image, Some(image));
    }

    #[test]
    fn start_location_ignores_missing_path() {
        let start = StartLocation::resolve(Some(Path::new("/no/such/place")), PathBuf::from("/"));
        assert_eq!(start, StartLocation::configured(PathBuf::from("/")));
    }

    #[test]
    fn views_render_on_both_screens() {
        let mut app = loaded_app("/photos/cat.png");
        {
            let _element = app.view();
        }
        app.screen = Screen::FullScreen;
        let _element = app.view();
    }
}
