/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    LoadText(String),
    TogglePlayback,
    Restart,
    Stop,
    SetWpm(u32),
    AdjustWpm(i32),
    ToggleTheme,
    SetHighlight(String),
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
