use ratatui::style::Color;

/// Colors of the reader screen
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    /// Token being spoken and the mode badge
    pub highlight: Color,
    /// Borders, placeholder text and the unread part of the progress bar
    pub dimmed: Color,
}

impl Theme {
    pub fn reader() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),
            surface: Color::Rgb(36, 40, 59),
            text: Color::Rgb(169, 177, 214),
            highlight: Color::Rgb(247, 118, 142),
            dimmed: Color::Rgb(100, 110, 150),
        }
    }
}

pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::reader().background
    }
    pub fn surface() -> Color {
        Theme::reader().surface
    }
    pub fn text() -> Color {
        Theme::reader().text
    }
    pub fn highlight() -> Color {
        Theme::reader().highlight
    }
    pub fn dimmed() -> Color {
        Theme::reader().dimmed
    }
}
