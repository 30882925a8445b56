// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of the folder tree and image list panes.
///
/// Derived from the active `Theme` background so both light and dark modes
/// stay readable without hard-coded colors.
pub fn pane(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Menu bar and status bar strip.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// The open File dropdown.
pub fn dropdown(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Black backdrop behind the full-screen image.
pub fn full_screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_screen_backdrop_is_black() {
        let style = full_screen(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::BLACK)));
    }

    #[test]
    fn pane_is_nearly_opaque() {
        let style = pane(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert!((color.a - opacity::SURFACE).abs() < 1e-6),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
