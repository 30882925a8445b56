// SPDX-License-Identifier: MPL-2.0
//! Browser panes: the folder tree and the image list of the selected folder.

pub mod folder_tree;
pub mod image_list;

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Color, Element, Length};

/// Wraps a pane body under its heading.
pub fn pane<'a, M: 'a>(title: String, color: Color, body: Element<'a, M>) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::BODY).color(color))
        .push(body);

    Container::new(content)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::BROWSER_PANE_WIDTH))
        .height(Length::Fill)
        .style(styles::container::pane)
        .into()
}
