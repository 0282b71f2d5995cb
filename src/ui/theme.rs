use crate::engine::{ThemeConfig, ThemeMode};
use ratatui::style::Color;

const DEFAULT_ANCHOR: Color = Color::Rgb(247, 118, 142); // #F7768E Coral Red

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    /// Dark theme
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            anchor: DEFAULT_ANCHOR,
            dimmed: Color::Rgb(100, 110, 150), // #646E96 Dimmed Blue
        }
    }

    /// Light theme
    pub fn daylight() -> Self {
        Self {
            background: Color::Rgb(245, 245, 240), // #F5F5F0 Paper
            surface: Color::Rgb(225, 226, 231),    // #E1E2E7
            text: Color::Rgb(52, 59, 88),          // #343B58 Ink
            anchor: Color::Rgb(214, 48, 49),       // #D63031 Red
            dimmed: Color::Rgb(150, 153, 163),     // #9699A3
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::midnight(),
            ThemeMode::Light => Self::daylight(),
        }
    }

    /// Palette for `mode` with the configured anchor color, if it parses.
    pub fn from_config(mode: ThemeMode, config: &ThemeConfig) -> Self {
        let mut theme = Self::for_mode(mode);
        if let Some(anchor) = parse_hex_color(&config.anchor_color) {
            theme.anchor = anchor;
        }
        theme
    }
}

/// Parses `#RRGGBB` (the `#` is optional).
pub fn parse_hex_color(input: &str) -> Option<Color> {
    let hex = input.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
