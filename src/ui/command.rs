//! Command parsing for the TUI command line
//!
//! Parses what the user types after pressing `:` or `@`:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:wpm 450` → Set reading rate
//! - `:theme` → Toggle dark/light theme
//! - `:color #RRGGBB` → Change the anchor highlight color
//! - `@notes.txt` → Load file command
//! - `@@` → Load clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command line input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    SetWpm(u32),
    ToggleTheme,
    SetHighlight(String),
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command line input into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, _) => Command::Quit,
            (Some("h" | "help"), None, _) => Command::Help,
            (Some("theme"), None, _) => Command::ToggleTheme,
            (Some("color" | "colour"), Some(value), None) => {
                Command::SetHighlight(value.to_string())
            }
            (Some("wpm"), Some(value), None) => match value.parse::<u32>() {
                Ok(wpm) if wpm > 0 => Command::SetWpm(wpm),
                _ => Command::Unknown(input.to_string()),
            },
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::SetWpm(wpm) => AppEvent::SetWpm(wpm),
        Command::ToggleTheme => AppEvent::ToggleTheme,
        Command::SetHighlight(color) => AppEvent::SetHighlight(color),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
