// Configuration for the quickread engine and UI components

use std::ops::RangeInclusive;

/// Pacing configuration for the playback engine
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Words per minute reading speed (default 300)
    pub wpm: u32,

    /// Minimum and maximum allowed WPM
    pub wpm_range: RangeInclusive<u32>,

    /// WPM change per rate-up/rate-down keypress
    pub wpm_step: u32,

    /// Delay multiplier after a word ending in `.`, `!` or `?` (default 2.5x)
    pub sentence_multiplier: f64,

    /// Delay multiplier after a word ending in `,` or `;` (default 1.5x)
    pub clause_multiplier: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            wpm_range: 100..=1000,
            wpm_step: 25,
            sentence_multiplier: 2.5,
            clause_multiplier: 1.5,
        }
    }
}

impl TimingConfig {
    /// Clamps `wpm` into the configured range. The result is never zero.
    pub fn clamp_wpm(&self, wpm: u32) -> u32 {
        wpm.clamp(*self.wpm_range.start(), *self.wpm_range.end())
            .max(1)
    }
}

/// Reader-level limits that sit in front of the engine
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Texts with more words than this are refused before loading (default 5000)
    pub max_words: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { max_words: 5000 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub mode: ThemeMode,

    /// Anchor highlight color as `#RRGGBB` (default #F7768E - Coral Red)
    pub anchor_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
            anchor_color: "#F7768E".to_string(),
        }
    }
}

/// Master configuration combining all quickread settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub timing: TimingConfig,
    pub reader: ReaderConfig,
    pub theme: ThemeConfig,
}
