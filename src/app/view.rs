// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The browser screen stacks the menu bar, the three panes and the status
//! bar; the full-screen screen shows the displayed image alone.

use super::{Message, Screen, Status};
use crate::i18n::fluent::I18n;
use crate::ui::browser::{self, folder_tree, image_list};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::menu_bar::{self, ViewContext as MenuViewContext};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use crate::ui::viewer::{self, Controller};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{stack, Column, Container, Row, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub screen: Screen,
    pub folder_tree: &'a folder_tree::State,
    pub image_list: &'a image_list::State,
    pub controller: &'a Controller,
    pub menu_open: bool,
    pub status: &'a Status,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Screen::Browser => view_browser(ctx),
        Screen::FullScreen => view_full_screen(ctx),
    }
}

fn view_browser(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu = menu_bar::view(MenuViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        has_image: ctx.controller.has_image(),
    })
    .map(Message::Menu);

    let folders = browser::pane(
        ctx.i18n.tr("pane-folders"),
        ctx.theme.colors.text_primary,
        ctx.folder_tree.view().map(Message::FolderTree),
    );
    let images = browser::pane(
        ctx.i18n.tr("pane-images"),
        ctx.theme.colors.text_primary,
        ctx.image_list.view(ctx.i18n).map(Message::ImageList),
    );
    let viewer = Container::new(viewer::view(ctx.controller, ctx.i18n).map(Message::Viewer))
        .width(Length::Fill)
        .height(Length::Fill);

    let panes = Row::new()
        .push(folders)
        .push(images)
        .push(viewer)
        .height(Length::Fill);

    Column::new()
        .push(menu)
        .push(panes)
        .push(status_bar(ctx.status, ctx.i18n, ctx.theme))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_bar<'a>(status: &Status, i18n: &I18n, theme: &AppTheme) -> Element<'a, Message> {
    let color = match status {
        Status::Saved(_) => theme.colors.success,
        _ if status.is_error() => theme.colors.error,
        _ => theme.colors.text_secondary,
    };
    let text = Text::new(status.text(i18n))
        .size(typography::CAPTION)
        .color(color);

    Container::new(text)
        .padding([0.0, spacing::XS])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}

fn view_full_screen(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let hint = Container::new(
        Text::new(ctx.i18n.tr("viewer-full-screen-hint")).size(typography::CAPTION),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom);

    let content: Element<'_, Message> = match viewer::full_screen(ctx.controller) {
        Some(image) => stack![image, hint].into(),
        None => hint.into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::full_screen)
        .into()
}
