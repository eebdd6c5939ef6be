//! Light and dark palettes.
//!
//! Primary colours follow the Material defaults the web version used
//! (`#1976d2` light, `#90caf9` dark).

use ratatui::style::{Color, Modifier, Style};

use crate::app::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub error: Color,
    pub selected_bg: Color,
}

pub const LIGHT: Palette = Palette {
    primary: Color::Rgb(25, 118, 210),
    background: Color::Rgb(255, 255, 255),
    surface: Color::Rgb(245, 245, 245),
    text: Color::Rgb(33, 33, 33),
    dim: Color::Rgb(117, 117, 117),
    border: Color::Rgb(224, 224, 224),
    error: Color::Rgb(211, 47, 47),
    selected_bg: Color::Rgb(227, 242, 253),
};

pub const DARK: Palette = Palette {
    primary: Color::Rgb(144, 202, 249),
    background: Color::Rgb(18, 18, 18),
    surface: Color::Rgb(30, 30, 30),
    text: Color::Rgb(255, 255, 255),
    dim: Color::Rgb(158, 158, 158),
    border: Color::Rgb(66, 66, 66),
    error: Color::Rgb(244, 67, 54),
    selected_bg: Color::Rgb(21, 101, 192),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(Palette::for_mode(ThemeMode::Light).primary, Color::Rgb(0x19, 0x76, 0xd2));
        assert_eq!(Palette::for_mode(ThemeMode::Dark).primary, Color::Rgb(0x90, 0xca, 0xf9));
    }
}
