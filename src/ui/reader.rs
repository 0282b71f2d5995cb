// Reader screen - fixed-position word display with ratatui

pub mod view;
