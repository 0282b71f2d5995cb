//! Command-line arguments.

use crate::engine::{Config, ThemeMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quickread")]
#[command(version)]
#[command(about = "Read text one word at a time in the terminal")]
pub struct Cli {
    /// Text file to read
    #[arg(conflicts_with_all = ["text", "clipboard"])]
    pub file: Option<PathBuf>,

    /// Read this text instead of a file
    #[arg(long, conflicts_with = "clipboard")]
    pub text: Option<String>,

    /// Read the clipboard contents
    #[arg(long)]
    pub clipboard: bool,

    /// Words per minute (clamped to 100-1000)
    #[arg(long, env = "QUICKREAD_WPM", value_parser = clap::value_parser!(u32).range(1..))]
    pub wpm: Option<u32>,

    /// Refuse texts longer than this many words
    #[arg(long, default_value_t = 5000)]
    pub max_words: usize,

    /// Anchor highlight color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub highlight: Option<String>,

    /// Start with the light theme
    #[arg(long)]
    pub light: bool,

    /// Start playing right away
    #[arg(long)]
    pub autoplay: bool,

    /// Write logs to this file (filter with QUICKREAD_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Where the first document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialSource {
    File(PathBuf),
    Text(String),
    Clipboard,
    Default,
}

impl Cli {
    pub fn config(&self) -> Config {
        let mut config = Config::default();

        if let Some(wpm) = self.wpm {
            config.timing.wpm = config.timing.clamp_wpm(wpm);
        }
        config.reader.max_words = self.max_words;
        if let Some(color) = &self.highlight {
            config.theme.anchor_color = color.clone();
        }
        if self.light {
            config.theme.mode = ThemeMode::Light;
        }

        config
    }

    pub fn initial_source(&self) -> InitialSource {
        if let Some(path) = &self.file {
            InitialSource::File(path.clone())
        } else if let Some(text) = &self.text {
            InitialSource::Text(text.clone())
        } else if self.clipboard {
            InitialSource::Clipboard
        } else {
            InitialSource::Default
        }
    }
}
