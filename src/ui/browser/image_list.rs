// SPDX-License-Identifier: MPL-2.0
//! Image list of the selected folder, with its name filter picker.

use crate::directory_scanner::{self, display_name};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::{FilterChoice, NameFilters};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, scrollable, Column, Text};
use iced::{Element, Length, Task};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Message {
    FilterChanged(FilterChoice),
    Select(PathBuf),
    Scanned {
        directory: PathBuf,
        choice: FilterChoice,
        result: Result<Vec<PathBuf>>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    LoadImage(PathBuf),
    ScanFailed { path: PathBuf, error: String },
}

#[derive(Debug, Clone, Default)]
pub struct State {
    filters: NameFilters,
    choice: FilterChoice,
    directory: Option<PathBuf>,
    images: Vec<PathBuf>,
    selected: Option<PathBuf>,
}

impl State {
    #[must_use]
    pub fn new(filters: NameFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    #[must_use]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    #[must_use]
    pub fn choice(&self) -> &FilterChoice {
        &self.choice
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Roots the list at `directory` and starts scanning it.
    pub fn set_directory(&mut self, directory: PathBuf) -> Task<Message> {
        self.directory = Some(directory);
        self.images.clear();
        self.selected = None;
        self.rescan()
    }

    /// Marks `path` as the highlighted entry without loading it.
    pub fn mark_selected(&mut self, path: PathBuf) {
        self.selected = Some(path);
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::FilterChanged(choice) => {
                if choice == self.choice {
                    return (Effect::None, Task::none());
                }
                self.choice = choice;
                (Effect::None, self.rescan())
            }
            Message::Select(path) => {
                self.selected = Some(path.clone());
                (Effect::LoadImage(path), Task::none())
            }
            Message::Scanned {
                directory,
                choice,
                result,
            } => {
                // A newer scan was requested meanwhile
                if self.directory.as_ref() != Some(&directory) || self.choice != choice {
                    return (Effect::None, Task::none());
                }
                match result {
                    Ok(images) => {
                        self.images = images;
                        (Effect::None, Task::none())
                    }
                    Err(error) => {
                        log::warn!("Failed to scan {}: {error}", directory.display());
                        self.images.clear();
                        let effect = Effect::ScanFailed {
                            path: directory,
                            error: error.to_string(),
                        };
                        (effect, Task::none())
                    }
                }
            }
        }
    }

    fn rescan(&self) -> Task<Message> {
        let Some(directory) = self.directory.clone() else {
            return Task::none();
        };
        let filters = self.filters.clone();
        let choice = self.choice.clone();
        let (scanned, scanned_choice) = (directory.clone(), choice.clone());

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    directory_scanner::scan_images(&scanned, &filters, &scanned_choice)
                })
                .await?
            },
            move |result| Message::Scanned {
                directory,
                choice,
                result,
            },
        )
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let options = self.filter_options(i18n);
        let selected_option = options
            .iter()
            .find(|option| option.choice == self.choice)
            .cloned();
        let picker = pick_list(options, selected_option, |option| {
            Message::FilterChanged(option.choice)
        })
        .text_size(typography::BODY_SM)
        .padding(spacing::XXS)
        .width(Length::Fill);

        let body: Element<'a, Message> = if self.directory.is_none() {
            placeholder(i18n.tr("image-list-no-folder"))
        } else if self.images.is_empty() {
            placeholder(i18n.tr("image-list-empty"))
        } else {
            let rows = self.images.iter().map(|path| self.row(path));
            scrollable(Column::with_children(rows).spacing(1))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        };

        Column::new()
            .spacing(spacing::XS)
            .padding(spacing::XXS)
            .push(picker)
            .push(body)
            .into()
    }

    fn row<'a>(&'a self, path: &'a Path) -> Element<'a, Message> {
        let is_selected = self.selected.as_deref() == Some(path);
        button(Text::new(display_name(path)).size(typography::BODY_SM))
            .on_press(Message::Select(path.to_path_buf()))
            .padding([2.0, spacing::XXS])
            .width(Length::Fill)
            .style(if is_selected {
                styles::button::selected
            } else {
                styles::button::row
            })
            .into()
    }

    fn filter_options(&self, i18n: &I18n) -> Vec<FilterOption> {
        self.filters
            .choices()
            .into_iter()
            .map(|choice| {
                let label = match &choice {
                    FilterChoice::All => i18n.tr("filter-all"),
                    FilterChoice::Pattern(pattern) => pattern.clone(),
                };
                FilterOption { choice, label }
            })
            .collect()
    }
}

fn placeholder<'a>(text: String) -> Element<'a, Message> {
    Text::new(text).size(typography::CAPTION).into()
}

/// Filter picker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterOption {
    choice: FilterChoice,
    label: String,
}

impl std::fmt::Display for FilterOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
