// SPDX-License-Identifier: MPL-2.0
//! Lazily expanded folder tree.
//!
//! Only the root's children are listed up front. A node's children are read
//! the first time it is expanded; collapsing keeps them so re-expanding is
//! instant.

use crate::directory_scanner::{self, display_name};
use crate::error::Result;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Task};
use std::path::{Path, PathBuf};

/// A listed subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub path: PathBuf,
    pub has_children: bool,
}

#[derive(Debug, Clone)]
pub struct FolderNode {
    pub path: PathBuf,
    pub name: String,
    pub expanded: bool,
    /// `None` until the node has been listed.
    pub children: Option<Vec<FolderNode>>,
    pub has_children: bool,
}

impl FolderNode {
    fn new(path: PathBuf, has_children: bool) -> Self {
        Self {
            name: display_name(&path),
            path,
            expanded: false,
            children: None,
            has_children,
        }
    }

    fn find_mut(&mut self, path: &Path) -> Option<&mut FolderNode> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(&self.path) {
            return None;
        }
        self.children
            .as_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(path))
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle(PathBuf),
    Select(PathBuf),
    ChildrenLoaded {
        path: PathBuf,
        result: Result<Vec<FolderEntry>>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FolderSelected(PathBuf),
    /// Listing a folder failed; the node is shown as empty.
    ListingFailed { path: PathBuf, error: String },
}

#[derive(Debug, Clone)]
pub struct State {
    root: FolderNode,
    selected: Option<PathBuf>,
}

impl State {
    /// Creates a tree rooted at `root`, expanded, and the task listing it.
    pub fn new(root: PathBuf) -> (Self, Task<Message>) {
        let mut node = FolderNode::new(root.clone(), true);
        node.expanded = true;
        let state = Self {
            root: node,
            selected: None,
        };
        (state, load_children(root))
    }

    #[must_use]
    pub fn root(&self) -> &FolderNode {
        &self.root
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Toggle(path) => {
                let Some(node) = self.root.find_mut(&path) else {
                    return (Effect::None, Task::none());
                };
                node.expanded = !node.expanded;
                if node.expanded && node.children.is_none() {
                    (Effect::None, load_children(path))
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::Select(path) => {
                self.selected = Some(path.clone());
                (Effect::FolderSelected(path), Task::none())
            }
            Message::ChildrenLoaded { path, result } => {
                let Some(node) = self.root.find_mut(&path) else {
                    return (Effect::None, Task::none());
                };
                match result {
                    Ok(entries) => {
                        node.has_children = !entries.is_empty();
                        node.children = Some(
                            entries
                                .into_iter()
                                .map(|entry| FolderNode::new(entry.path, entry.has_children))
                                .collect(),
                        );
                        (Effect::None, Task::none())
                    }
                    Err(error) => {
                        log::warn!("Failed to list {}: {error}", path.display());
                        node.children = Some(Vec::new());
                        node.has_children = false;
                        let effect = Effect::ListingFailed {
                            path,
                            error: error.to_string(),
                        };
                        (effect, Task::none())
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut rows = Vec::new();
        self.push_rows(&self.root, 0, &mut rows);

        scrollable(Column::with_children(rows).spacing(1).padding(spacing::XXS))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_rows<'a>(
        &'a self,
        node: &'a FolderNode,
        depth: u16,
        rows: &mut Vec<Element<'a, Message>>,
    ) {
        rows.push(self.row(node, depth));
        if !node.expanded {
            return;
        }
        for child in node.children.iter().flatten() {
            self.push_rows(child, depth + 1, rows);
        }
    }

    fn row<'a>(&'a self, node: &'a FolderNode, depth: u16) -> Element<'a, Message> {
        let toggle: Element<'a, Message> = if node.has_children {
            let glyph = if node.expanded { "▾" } else { "▸" };
            button(Text::new(glyph).size(typography::CAPTION))
                .on_press(Message::Toggle(node.path.clone()))
                .padding(0)
                .width(Length::Fixed(sizing::TREE_TOGGLE_WIDTH))
                .style(styles::button::row)
                .into()
        } else {
            Space::new()
                .width(Length::Fixed(sizing::TREE_TOGGLE_WIDTH))
                .into()
        };

        let is_selected = self.selected.as_deref() == Some(node.path.as_path());
        let label = button(Text::new(node.name.as_str()).size(typography::BODY_SM))
            .on_press(Message::Select(node.path.clone()))
            .padding([2.0, spacing::XXS])
            .width(Length::Fill)
            .style(if is_selected {
                styles::button::selected
            } else {
                styles::button::row
            });

        Row::new()
            .push(Space::new().width(Length::Fixed(f32::from(depth) * sizing::TREE_INDENT)))
            .push(toggle)
            .push(label)
            .align_y(Vertical::Center)
            .into()
    }
}

/// Lists `path` on the blocking pool.
fn load_children(path: PathBuf) -> Task<Message> {
    let listed = path.clone();
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || list_entries(&listed)).await?
        },
        move |result| Message::ChildrenLoaded { path, result },
    )
}

fn list_entries(path: &Path) -> Result<Vec<FolderEntry>> {
    let folders = directory_scanner::list_subdirectories(path)?;
    Ok(folders
        .into_iter()
        .map(|path| FolderEntry {
            has_children: directory_scanner::has_subdirectories(&path),
            path,
        })
        .collect())
}
