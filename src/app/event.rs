/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    SetLanguage(String),
    SetSpeed(f64),
    /// `None` flips the current setting
    SetRandom(Option<bool>),
    Play,
    Stop,
    ClearText,
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),
    None,
}

/// Terminal-independent key presses
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Esc,
}
