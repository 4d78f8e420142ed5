//! Light and dark palettes plus the shared accent colors

use ratatui::style::Color;

/// Accent colors, identical in both themes
pub mod accent {
    use ratatui::style::Color;

    pub const GREEN: Color = Color::Rgb(34, 197, 94);
    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const BLUE: Color = Color::Rgb(59, 130, 246);
    pub const PURPLE: Color = Color::Rgb(168, 85, 247);
    pub const YELLOW: Color = Color::Rgb(234, 179, 8);
    pub const CYAN: Color = Color::Rgb(6, 182, 212);
    /// Trend line stroke
    pub const EMERALD: Color = Color::Rgb(16, 185, 129);
}

/// Active color scheme; flipped by the header toggle, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Resolved colors for the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page fill behind everything
    pub background: Color,
    /// Card and panel fill
    pub surface: Color,
    pub text: Color,
    pub subtle: Color,
    pub border: Color,
    /// Unfilled portion of the progress gauges
    pub track: Color,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Icon on the toggle button: the moon invites dark mode, the sun light
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        }
    }

    /// Name of the mode a press switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark",
            Theme::Dark => "Light",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(243, 244, 246),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(31, 41, 55),
                subtle: Color::Rgb(107, 114, 128),
                border: Color::Rgb(209, 213, 219),
                track: Color::Rgb(229, 231, 235),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(17, 24, 39),
                surface: Color::Rgb(31, 41, 55),
                text: Color::Rgb(243, 244, 246),
                subtle: Color::Rgb(156, 163, 175),
                border: Color::Rgb(55, 65, 81),
                track: Color::Rgb(55, 65, 81),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_returns_to_start() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn test_palettes_differ_between_themes() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();

        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
    }

    #[test]
    fn test_toggle_button_advertises_the_other_mode() {
        assert_eq!(Theme::Light.toggle_label(), "Dark");
        assert_eq!(Theme::Dark.toggle_label(), "Light");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
        assert_eq!(Theme::Dark.toggle_icon(), "☀");
    }
}
