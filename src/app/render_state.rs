use crate::app::mode::AppMode;
use crate::engine::PlaybackStatus;
use crate::reading::LanguageTag;

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub status: PlaybackStatus,
    pub tokens: Vec<String>,
    /// Only set when it points inside `tokens`
    pub current_index: Option<usize>,
    pub language: LanguageTag,
    pub speed: f64,
    pub random_mode: bool,
    /// Shown instead of tokens when there is no text
    pub placeholder: Option<&'static str>,
    pub command_input: String,
    pub message: Option<String>,
    pub show_help: bool,
    pub progress: (usize, usize),
}

impl RenderState {
    pub fn current_word(&self) -> Option<&str> {
        self.current_index
            .and_then(|index| self.tokens.get(index))
            .map(String::as_str)
    }
}
