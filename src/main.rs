use clap::Parser;
use quickread::app::{App, AppEvent};
use quickread::cli::{Cli, InitialSource};
use quickread::input;
use quickread::logging;
use quickread::ui::TuiManager;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.log_file.as_deref())?;

    let config = cli.config();
    info!(wpm = config.timing.wpm, max_words = config.reader.max_words, "starting");

    let mut app = App::new(config);
    match cli.initial_source() {
        InitialSource::File(path) => {
            app.handle_event(AppEvent::LoadFile(path.to_string_lossy().into_owned()));
        }
        InitialSource::Text(text) => app.handle_event(AppEvent::LoadText(text)),
        InitialSource::Clipboard => app.handle_event(AppEvent::LoadClipboard),
        InitialSource::Default => app.handle_event(AppEvent::LoadText(input::DEFAULT_TEXT.to_string())),
    }

    if cli.autoplay {
        app.handle_event(AppEvent::TogglePlayback);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
