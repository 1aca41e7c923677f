//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:lang <code>` → Switch language (`vi-VN`, `zh-CN`, `en-US`)
//! - `:speed <x>` → Set speed multiplier (clamped to 0.5–2.0)
//! - `:random`, `:random on|off` → Toggle or set random order
//! - `:play`, `:stop`, `:clear` → Playback and text control
//! - `@filename.txt` → Load file command
//! - `@@` → Load clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Language(String),
    Speed(f64),
    Random(Option<bool>),
    Play,
    Stop,
    Clear,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    // Check for empty input first
    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    // Handle system commands starting with ':'
    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or("");
        let argument = parts.next();
        if parts.next().is_some() {
            return Command::Unknown(input.to_string());
        }

        match (name, argument) {
            ("q" | "quit", None) => Command::Quit,
            ("h" | "help", None) => Command::Help,
            ("play", None) => Command::Play,
            ("stop", None) => Command::Stop,
            ("clear", None) => Command::Clear,
            ("lang" | "language", Some(code)) => Command::Language(code.to_string()),
            ("speed", Some(value)) => match value.trim_end_matches('x').parse::<f64>() {
                Ok(speed) => Command::Speed(speed),
                Err(_) => Command::Unknown(input.to_string()),
            },
            ("random", None) => Command::Random(None),
            ("random", Some("on")) => Command::Random(Some(true)),
            ("random", Some("off")) => Command::Random(Some(false)),
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
        // Unknown command pattern
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Language(code) => AppEvent::SetLanguage(code),
        Command::Speed(speed) => AppEvent::SetSpeed(speed),
        Command::Random(random_mode) => AppEvent::SetRandom(random_mode),
        Command::Play => AppEvent::Play,
        Command::Stop => AppEvent::Stop,
        Command::Clear => AppEvent::ClearText,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
