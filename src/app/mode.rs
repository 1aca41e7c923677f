/// Which input surface currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Playback keys (space, +/-, r, l, ...)
    #[default]
    Reader,
    /// Typing into the raw text
    Editing,
    /// Typing into the command deck
    Command,
    Quit,
}
