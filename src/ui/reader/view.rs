use crate::app::AppMode;
use crate::engine::{PlaybackStatus, RenderFrame};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Columns of padding that put the anchor character on `anchor_col`.
pub fn anchor_padding(left: &str, anchor_col: u16) -> u16 {
    let left_width = u16::try_from(left.width()).unwrap_or(u16::MAX);
    anchor_col.saturating_sub(left_width)
}

pub fn word_line(frame: &RenderFrame, anchor_col: u16, theme: &Theme) -> Line<'static> {
    if frame.is_blank() {
        return Line::default();
    }

    let text_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let anchor_style = Style::default()
        .fg(theme.anchor)
        .add_modifier(Modifier::BOLD);

    let padding = anchor_padding(&frame.left, anchor_col) as usize;
    Line::from(vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(frame.left.clone(), text_style),
        Span::styled(frame.anchor.clone(), anchor_style),
        Span::styled(frame.right.clone(), text_style),
    ])
}

pub fn render_word_display(frame: &RenderFrame, anchor_col: u16, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(word_line(frame, anchor_col, theme))
        .alignment(Alignment::Left)
        .style(Style::default().bg(theme.background))
}

/// Tick mark above or below the anchor column.
pub fn guide_line(anchor_col: u16, glyph: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(anchor_col as usize)),
        Span::styled(glyph, Style::default().fg(theme.anchor)),
    ])
}

pub fn render_progress_bar(progress: f64, width: u16, theme: &Theme) -> Line<'static> {
    let width = width as usize;
    let filled_len = ((progress.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    let empty_len = width - filled_len;

    Line::from(vec![
        Span::styled("━".repeat(filled_len), Style::default().fg(theme.anchor)),
        Span::styled("─".repeat(empty_len), Style::default().fg(theme.dimmed)),
    ])
}

pub fn status_text(frame: &RenderFrame, wpm: u32, status: PlaybackStatus) -> String {
    let state = match status {
        PlaybackStatus::Idle => "READY",
        PlaybackStatus::Running => "READING",
        PlaybackStatus::Paused => "PAUSED",
    };
    format!(
        "{} / {} words  {} wpm  {}",
        frame.position, frame.total, wpm, state
    )
}

pub fn render_status_line(
    frame: &RenderFrame,
    wpm: u32,
    status: PlaybackStatus,
    theme: &Theme,
) -> Paragraph<'static> {
    Paragraph::new(status_text(frame, wpm, status))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

const KEY_HINT: &str = "space play/pause  r restart  s stop  +/- speed  : command  ? help";

/// The bottom line: the command being typed, or the last status message.
pub fn command_deck_line(
    mode: AppMode,
    input: &str,
    message: Option<&str>,
    theme: &Theme,
) -> Line<'static> {
    match mode {
        AppMode::Command => Line::from(vec![
            Span::styled("▌", Style::default().fg(theme.anchor)),
            Span::styled(format!("{input}█"), Style::default().fg(theme.text)),
        ]),
        _ => Line::from(Span::styled(
            message.unwrap_or(KEY_HINT).to_string(),
            Style::default().fg(theme.dimmed),
        )),
    }
}

pub fn render_command_deck(
    mode: AppMode,
    input: &str,
    message: Option<&str>,
    theme: &Theme,
) -> Paragraph<'static> {
    Paragraph::new(command_deck_line(mode, input, message, theme))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().bg(theme.surface))
}

pub fn render_help(theme: &Theme) -> Paragraph<'static> {
    let text = "\
space / enter   play or pause
r               restart from the first word
s               stop
+ / - / arrows  change speed
t               toggle light/dark theme
@path           load a text file
@@              load from clipboard
:wpm N          set speed
:color #RRGGBB  set highlight color
:q              quit

press any key to return";

    Paragraph::new(text)
        .block(
            Block::default()
                .title(" help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(theme.text).bg(theme.surface))
}
