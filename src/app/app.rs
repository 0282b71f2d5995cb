use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{Config, PlaybackEngine, PlaybackStatus, ThemeMode};
use crate::input::{self, LoadError, LoadedDocument};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::theme::parse_hex_color;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tracing::{info, warn};

pub struct App {
    mode: AppMode,
    engine: PlaybackEngine<RenderState>,
    config: Config,
    theme_mode: ThemeMode,
    command_input: String,
    status: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let engine = PlaybackEngine::new(config.timing.clone(), RenderState::default());
        Self {
            mode: AppMode::Reading,
            engine,
            theme_mode: config.theme.mode,
            config,
            command_input: String::new(),
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn engine(&self) -> &PlaybackEngine<RenderState> {
        &self.engine
    }

    pub fn render_state(&self) -> &RenderState {
        self.engine.sink()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn command_input(&self) -> &str {
        &self.command_input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn playback_status(&self) -> PlaybackStatus {
        self.engine.status()
    }

    pub fn get_wpm(&self) -> u32 {
        self.engine.wpm()
    }

    /// Hands a load result to the engine, or reports why it was refused.
    pub fn load_document(&mut self, result: Result<LoadedDocument, LoadError>) {
        match result {
            Ok(doc) => {
                info!(source = %doc.source, words = doc.words.len(), "document loaded");
                self.status = Some(format!("{} words from {}", doc.words.len(), doc.source));
                self.engine.load(doc.words);
            }
            Err(err) => {
                warn!(error = %err, "load refused");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Fires the pending word advance if it is due.
    pub fn tick(&mut self) -> bool {
        self.engine.poll()
    }

    /// How long the UI loop may block waiting for input.
    pub fn poll_timeout(&self, max: Duration) -> Duration {
        self.engine
            .time_until_next()
            .map_or(max, |until| until.min(max))
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        let max_words = self.config.reader.max_words;
        match event {
            AppEvent::LoadFile(path) => self.load_document(input::file::load(&path, max_words)),
            AppEvent::LoadClipboard => self.load_document(input::clipboard::load(max_words)),
            AppEvent::LoadText(text) => self.load_document(input::load_text(&text, max_words)),
            AppEvent::TogglePlayback => self.engine.toggle(),
            AppEvent::Restart => self.engine.restart(),
            AppEvent::Stop => self.engine.stop(),
            AppEvent::SetWpm(wpm) => self.engine.set_wpm(wpm),
            AppEvent::AdjustWpm(delta) => self.engine.adjust_wpm(delta),
            AppEvent::ToggleTheme => self.theme_mode = self.theme_mode.toggled(),
            AppEvent::SetHighlight(color) => self.set_highlight(&color),
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.mode = AppMode::Help,
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {input}"));
            }
            AppEvent::None => {}
        }
    }

    /// Changes the anchor color for this session. Invalid colors are
    /// reported and leave the current one in place.
    fn set_highlight(&mut self, color: &str) {
        if parse_hex_color(color).is_none() {
            warn!(color, "invalid highlight color");
            self.status = Some(format!("Invalid color: {color} (expected #RRGGBB)"));
            return;
        }

        let hex = format!("#{}", color.trim().trim_start_matches('#').to_ascii_uppercase());
        self.status = Some(format!("Highlight {hex}"));
        self.config.theme.anchor_color = hex;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.handle_event(AppEvent::Quit);
            return;
        }

        let event = match self.mode {
            AppMode::Reading => self.reading_key(key.code),
            AppMode::Command => self.command_key(key.code),
            AppMode::Help => {
                self.mode = AppMode::Reading;
                AppEvent::None
            }
            AppMode::Quit => AppEvent::None,
        };
        self.handle_event(event);
    }

    fn reading_key(&mut self, code: KeyCode) -> AppEvent {
        let step = self.config.timing.wpm_step as i32;
        match code {
            KeyCode::Char(' ') | KeyCode::Enter => AppEvent::TogglePlayback,
            KeyCode::Char('r') => AppEvent::Restart,
            KeyCode::Char('s') => AppEvent::Stop,
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Right => {
                AppEvent::AdjustWpm(step)
            }
            KeyCode::Char('-') | KeyCode::Down | KeyCode::Left => AppEvent::AdjustWpm(-step),
            KeyCode::Char('t') => AppEvent::ToggleTheme,
            KeyCode::Char('?') | KeyCode::Char('h') => AppEvent::Help,
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char(c @ (':' | '@')) => {
                self.engine.pause();
                self.command_input.clear();
                self.command_input.push(c);
                self.mode = AppMode::Command;
                AppEvent::None
            }
            _ => AppEvent::None,
        }
    }

    fn command_key(&mut self, code: KeyCode) -> AppEvent {
        match code {
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.command_input);
                self.mode = AppMode::Reading;
                command_to_app_event(parse_command(&input))
            }
            KeyCode::Esc => {
                self.command_input.clear();
                self.mode = AppMode::Reading;
                AppEvent::None
            }
            KeyCode::Backspace => {
                self.command_input.pop();
                if self.command_input.is_empty() {
                    self.mode = AppMode::Reading;
                }
                AppEvent::None
            }
            KeyCode::Char(c) => {
                self.command_input.push(c);
                AppEvent::None
            }
            _ => AppEvent::None,
        }
    }
}
