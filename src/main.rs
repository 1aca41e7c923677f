use std::error::Error;
use std::fs::File;
use std::time::Instant;

use text_reader::app::{App, AppEvent};
use text_reader::engine::{Config, RngIndexSource};
use text_reader::speech::{CommandSpeaker, SilentSpeaker, SpeechBoundary};
use text_reader::ui::TuiManager;

const LOG_ENV: &str = "TEXT_READER_LOG";
const LOG_FILE: &str = "text-reader.log";

/// Logs go to a file; the terminal belongs to the TUI.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE)?;
    env_logger::Builder::from_env(env_logger::Env::default().filter(LOG_ENV))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let mut silent = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--silent" => silent = true,
            "-h" | "--help" => {
                println!("usage: text-reader [--silent] [FILE]");
                return Ok(());
            }
            _ => path = Some(arg),
        }
    }

    let config = Config::default();
    let boundary: Box<dyn SpeechBoundary> = if silent {
        Box::new(SilentSpeaker::new())
    } else {
        Box::new(CommandSpeaker::new(config.speech.clone()))
    };
    let mut app = App::new(boundary, RngIndexSource::from_entropy(), config.playback);

    if let Some(path) = path {
        app.handle_event(AppEvent::LoadFile(path), Instant::now());
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
