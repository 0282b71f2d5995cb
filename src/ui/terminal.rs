use crate::app::{App, AppMode};
use crate::error::AppError;
use crate::ui::reader::view::{
    guide_line, render_command_deck, render_help, render_progress_bar, render_status_line,
    render_word_display,
};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Clear, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

const RENDER_TICK: Duration = Duration::from_millis(1000 / 60);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, AppError> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Runs until the app asks to quit.
    ///
    /// Input is polled with a timeout no longer than the wait for the next
    /// word, so advances fire on time without a busy loop.
    pub fn run_event_loop(&mut self, app: &mut App) -> Result<(), AppError> {
        loop {
            if app.mode() == AppMode::Quit {
                debug!("leaving event loop");
                return Ok(());
            }

            self.render_frame(app)?;

            let timeout = app.poll_timeout(RENDER_TICK);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                    _ => {}
                }
            }

            app.tick();
        }
    }

    pub fn render_frame(&mut self, app: &App) -> Result<(), AppError> {
        self.terminal.draw(|frame| draw(frame, app))?;
        Ok(())
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::from_config(app.theme_mode(), &app.config().theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    let render_state = app.render_state();
    let anchor_col = area.width / 2;

    frame.render_widget(Paragraph::new(guide_line(anchor_col, "▼", &theme)), rows[1]);
    frame.render_widget(
        render_word_display(&render_state.frame, anchor_col, &theme),
        rows[2],
    );
    frame.render_widget(Paragraph::new(guide_line(anchor_col, "▲", &theme)), rows[3]);

    let bar_area = centered(rows[5], area.width.saturating_sub(8).min(60));
    frame.render_widget(
        Paragraph::new(render_progress_bar(render_state.progress, bar_area.width, &theme)),
        bar_area,
    );

    frame.render_widget(
        render_status_line(
            &render_state.frame,
            app.get_wpm(),
            app.playback_status(),
            &theme,
        ),
        rows[6],
    );

    frame.render_widget(
        render_command_deck(app.mode(), app.command_input(), app.status(), &theme),
        rows[7],
    );

    if app.mode() == AppMode::Help {
        let popup = centered_rect(area, 48, 14);
        frame.render_widget(Clear, popup);
        frame.render_widget(render_help(&theme), popup);
    }
}

fn centered(row: Rect, width: u16) -> Rect {
    let width = width.min(row.width);
    Rect {
        x: row.x + (row.width - width) / 2,
        width,
        ..row
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
