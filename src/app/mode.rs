/// What the keyboard is driving right now.
///
/// Playback state (running, paused) lives in the engine; this only tracks
/// which screen owns input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Reading,
    Command,
    Help,
    Quit,
}
