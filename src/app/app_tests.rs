use crate::app::mode::AppMode;
use crate::app::{App, AppEvent};
use crate::engine::{Config, PlaybackStatus, ReaderConfig, ThemeMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn app_with_text(text: &str) -> App {
    let mut app = App::new(Config::default());
    app.handle_event(AppEvent::LoadText(text.to_string()));
    app
}

#[test]
fn test_app_starts_in_reading_mode() {
    let app = App::new(Config::default());
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.get_wpm(), 300);
    assert!(app.render_state().frame.is_blank());
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = App::new(Config::default());
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_app_handle_event_help_then_any_key_returns() {
    let mut app = App::new(Config::default());
    app.handle_event(AppEvent::Help);
    assert_eq!(app.mode(), AppMode::Help);
    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.mode(), AppMode::Reading);
}

#[test]
fn test_load_text_renders_first_word() {
    let app = app_with_text("Hello, world.");
    assert_eq!(app.render_state().frame.word(), "Hello,");
    assert_eq!(app.render_state().progress, 0.0);
    assert_eq!(app.status(), Some("2 words from text"));
}

#[test]
fn test_space_toggles_playback() {
    let mut app = app_with_text("one two three");
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(app.playback_status(), PlaybackStatus::Running);
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(app.playback_status(), PlaybackStatus::Paused);
}

#[test]
fn test_stop_and_restart_keys() {
    let mut app = app_with_text("one two three");
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Char('s')));
    assert_eq!(app.playback_status(), PlaybackStatus::Idle);
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.playback_status(), PlaybackStatus::Idle);
    assert_eq!(app.engine().cursor(), 0);
}

#[test]
fn test_rate_keys_step_wpm() {
    let mut app = App::new(Config::default());
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.get_wpm(), 325);
    app.handle_key(key(KeyCode::Char('-')));
    app.handle_key(key(KeyCode::Char('-')));
    assert_eq!(app.get_wpm(), 275);
}

#[test]
fn test_theme_toggle_key() {
    let mut app = App::new(Config::default());
    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    app.handle_key(key(KeyCode::Char('t')));
    assert_eq!(app.theme_mode(), ThemeMode::Light);
}

#[test]
fn test_command_line_sets_wpm() {
    let mut app = app_with_text("one two");
    type_str(&mut app, ":wpm 480");
    assert_eq!(app.mode(), AppMode::Command);
    assert_eq!(app.command_input(), ":wpm 480");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.get_wpm(), 480);
    assert_eq!(app.command_input(), "");
}

#[test]
fn test_command_line_pauses_playback() {
    let mut app = app_with_text("one two");
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Char(':')));
    assert_eq!(app.playback_status(), PlaybackStatus::Paused);
}

#[test]
fn test_command_line_escape_cancels() {
    let mut app = App::new(Config::default());
    type_str(&mut app, ":q");
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.command_input(), "");
}

#[test]
fn test_command_line_backspace_to_empty_leaves() {
    let mut app = App::new(Config::default());
    type_str(&mut app, ":");
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.mode(), AppMode::Reading);
}

#[test]
fn test_command_line_quit() {
    let mut app = App::new(Config::default());
    type_str(&mut app, ":q");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_unknown_command_reports_status() {
    let mut app = App::new(Config::default());
    type_str(&mut app, ":bogus");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.status(), Some("Unknown command: :bogus"));
}

#[test]
fn test_color_command_sets_highlight() {
    let mut app = App::new(Config::default());
    type_str(&mut app, ":color #00ff7f");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.config().theme.anchor_color, "#00FF7F");
    assert_eq!(app.status(), Some("Highlight #00FF7F"));
    assert_eq!(app.mode(), AppMode::Reading);
}

#[test]
fn test_invalid_color_keeps_highlight_and_reports() {
    let mut app = App::new(Config::default());
    let before = app.config().theme.anchor_color.clone();
    app.handle_event(AppEvent::SetHighlight("#12345".to_string()));
    assert_eq!(app.config().theme.anchor_color, before);
    assert_eq!(
        app.status(),
        Some("Invalid color: #12345 (expected #RRGGBB)")
    );

    app.handle_event(AppEvent::SetHighlight("tomato".to_string()));
    assert_eq!(app.config().theme.anchor_color, before);
    assert_eq!(
        app.status(),
        Some("Invalid color: tomato (expected #RRGGBB)")
    );
}

#[test]
fn test_missing_file_reports_status_and_keeps_words() {
    let mut app = app_with_text("keep these words");
    app.handle_event(AppEvent::LoadFile("definitely_missing_file.txt".to_string()));
    assert!(app.status().unwrap().starts_with("File not found"));
    assert_eq!(app.engine().words().len(), 3);
}

#[test]
fn test_word_limit_refuses_load() {
    let config = Config {
        reader: ReaderConfig { max_words: 2 },
        ..Config::default()
    };
    let mut app = App::new(config);
    app.handle_event(AppEvent::LoadText("one two three".to_string()));
    assert_eq!(app.status(), Some("Word limit exceeded: 3 / 2 words"));
    assert!(app.engine().words().is_empty());
}

#[test]
fn test_ctrl_c_quits_from_command_mode() {
    let mut app = App::new(Config::default());
    type_str(&mut app, ":");
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_poll_timeout_without_pending_advance() {
    let app = App::new(Config::default());
    let max = Duration::from_millis(16);
    assert_eq!(app.poll_timeout(max), max);
}

#[test]
fn test_poll_timeout_capped_by_max() {
    let mut app = app_with_text("one two");
    app.handle_event(AppEvent::TogglePlayback);
    let max = Duration::from_millis(16);
    assert!(app.poll_timeout(max) <= max);
}
