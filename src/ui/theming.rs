// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Text colors for a theme.
///
/// Surfaces come from the iced palette; these cover the text drawn on top of
/// them.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub text_primary: Color,
    pub text_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
        }
    }
}

/// Theme preference stored in `[general] theme_mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors fall back to dark
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Theme resolved once at start-up.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Built-in iced theme matching the resolved mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_dark_text() {
        let scheme = ColorScheme::light();
        assert!(scheme.text_primary.r < 0.2);
    }

    #[test]
    fn dark_theme_has_light_text() {
        let scheme = ColorScheme::dark();
        assert!(scheme.text_primary.r > 0.9);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the desktop running the tests
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_pick_matching_iced_theme() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), Theme::Dark);
        assert!(AppTheme::new(ThemeMode::Dark).is_dark());
    }
}
