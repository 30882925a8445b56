// SPDX-License-Identifier: MPL-2.0
//! Menu bar with the File dropdown.
//!
//! Every File entry acts on the displayed image, so the whole menu stays
//! disabled until one is loaded.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::RotationDirection;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the menu bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
    pub has_image: bool,
}

/// Messages emitted by the menu bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    RotateLeft,
    RotateRight,
    FullScreen,
    Save,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Rotate(RotationDirection),
    FullScreen,
    Save,
}

/// Process a menu message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::RotateLeft => {
            *menu_open = false;
            Event::Rotate(RotationDirection::Left)
        }
        Message::RotateRight => {
            *menu_open = false;
            Event::Rotate(RotationDirection::Right)
        }
        Message::FullScreen => {
            *menu_open = false;
            Event::FullScreen
        }
        Message::Save => {
            *menu_open = false;
            Event::Save
        }
    }
}

/// Render the menu bar, and the dropdown below it when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open && ctx.has_image {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("menu-file")).size(typography::BODY);
    let file_button = if ctx.has_image {
        button(label)
            .on_press(Message::ToggleMenu)
            .style(styles::button::menu_item)
    } else {
        button(label).style(styles::button::disabled())
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::XS])
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(file_button.padding([spacing::XXS, spacing::XS]));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = [
        ("menu-rotate-left", Message::RotateLeft),
        ("menu-rotate-right", Message::RotateRight),
        ("menu-full-screen", Message::FullScreen),
        ("menu-save", Message::Save),
    ];

    let menu_column = items.into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, (key, message)| column.push(build_menu_item(ctx.i18n.tr(key), message)),
    );

    Container::new(menu_column)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .style(styles::container::dropdown)
        .into()
}

fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::menu_item)
        .into()
}
