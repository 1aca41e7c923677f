use crate::app::{AppMode, RenderState};
use crate::engine::PlaybackStatus;
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap of tokens into rows of token indices.
///
/// Tokens are separated by one column; a token wider than `width` gets a
/// row of its own.
pub fn wrap_token_rows(tokens: &[String], width: u16) -> Vec<Vec<usize>> {
    let width = width.max(1) as usize;
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut row: Vec<usize> = Vec::new();
    let mut used = 0;

    for (index, token) in tokens.iter().enumerate() {
        let token_width = token.width();
        let needed = if row.is_empty() {
            token_width
        } else {
            used + 1 + token_width
        };
        if !row.is_empty() && needed > width {
            rows.push(std::mem::take(&mut row));
            used = token_width;
        } else {
            used = needed;
        }
        row.push(index);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// First row to show so the current token sits in the visible window.
pub fn scroll_offset(rows: &[Vec<usize>], current: Option<usize>, height: u16) -> u16 {
    let Some(current) = current else {
        return 0;
    };
    let Some(row) = rows.iter().position(|row| row.contains(&current)) else {
        return 0;
    };
    let height = height.max(1) as usize;
    row.saturating_sub(height / 2) as u16
}

/// The token strip: every token, the current one highlighted.
pub fn render_tokens(state: &RenderState, width: u16, height: u16) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::dimmed()))
        .title(" Text ");

    if let Some(placeholder) = state.placeholder {
        return Paragraph::new(placeholder)
            .block(block)
            .style(Style::default().fg(colors::dimmed()).bg(colors::background()));
    }

    // Borders take one column/row on each side
    let inner_width = width.saturating_sub(2);
    let inner_height = height.saturating_sub(2);
    let rows = wrap_token_rows(&state.tokens, inner_width);

    let lines: Vec<Line<'static>> = rows
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (position, &index) in row.iter().enumerate() {
                if position > 0 {
                    spans.push(Span::raw(" "));
                }
                let style = if Some(index) == state.current_index {
                    Style::default()
                        .fg(colors::background())
                        .bg(colors::highlight())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::text())
                };
                spans.push(Span::styled(state.tokens[index].clone(), style));
            }
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset(&rows, state.current_index, inner_height), 0))
        .style(Style::default().bg(colors::background()))
}

/// Large centered view of the token being spoken.
pub fn render_word_display(word: Option<&str>) -> Paragraph<'static> {
    let style = Style::default()
        .fg(colors::highlight())
        .add_modifier(Modifier::BOLD);
    Paragraph::new(Line::from(Span::styled(word.unwrap_or("").to_string(), style)))
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

/// `1.0` -> "1.0", `1.25` -> "1.25"
fn format_speed(speed: f64) -> String {
    let text = format!("{:.2}", speed);
    let trimmed = text.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}

pub fn status_text(state: &RenderState) -> String {
    let status = match state.status {
        PlaybackStatus::Playing => "▶ Playing",
        PlaybackStatus::Idle => "■ Idle",
    };
    let order = if state.random_mode {
        "random"
    } else {
        "sequential"
    };
    let (position, total) = state.progress;
    format!(
        " {} │ {}x │ {} │ {} │ {}/{} ",
        state.language.display_name(),
        format_speed(state.speed),
        order,
        status,
        position,
        total
    )
}

pub fn render_status_line(state: &RenderState) -> Paragraph<'static> {
    Paragraph::new(status_text(state))
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
}

pub fn render_progress_bar(progress: (usize, usize)) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current.min(total) * 20) / total
    };
    let empty_len = 20 - filled_len;

    let spans = vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(colors::highlight())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ];

    Line::from(spans).alignment(Alignment::Center)
}

pub fn render_command_deck(state: &RenderState) -> Paragraph<'static> {
    let mode_indicator = match state.mode {
        AppMode::Reader => " READER ",
        AppMode::Editing => " EDIT ",
        AppMode::Command => " COMMAND ",
        AppMode::Quit => " QUIT ",
    };

    let body = match (state.mode, &state.message) {
        (AppMode::Command, _) => format!("{}▏", state.command_input),
        (AppMode::Editing, _) => "Type to edit text · Esc to finish".to_string(),
        (_, Some(message)) => message.clone(),
        _ => "space play/stop · +/- speed · r random · l language · e edit · ? help".to_string(),
    };

    let spans = vec![
        Span::styled(
            mode_indicator,
            Style::default()
                .fg(colors::background())
                .bg(colors::highlight())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", body), Style::default().fg(colors::text())),
    ];

    Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::surface()))
}

pub fn render_help() -> Paragraph<'static> {
    let text = "\
space      start / stop reading
+ / -      speed up / slow down (0.5x – 2.0x)
r          toggle random order
l          next language (vi-VN, zh-CN, en-US)
e          edit text (Esc to finish)
@file      load a text file
@@         load from clipboard
:lang xx   set language      :speed x   set speed
:random    toggle random     :clear     clear text
q / :q     quit";
    Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(colors::highlight())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::LanguageTag;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn state_with(tokens: Vec<String>, current_index: Option<usize>) -> RenderState {
        RenderState {
            mode: AppMode::Reader,
            status: PlaybackStatus::Playing,
            progress: (current_index.map_or(0, |i| i + 1), tokens.len()),
            tokens,
            current_index,
            language: LanguageTag::English,
            speed: 1.5,
            random_mode: false,
            placeholder: None,
            command_input: String::new(),
            message: None,
            show_help: false,
        }
    }

    #[test]
    fn test_wrap_token_rows_by_width() {
        let rows = wrap_token_rows(&words("aa bb cc dd"), 5);
        assert_eq!(rows, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_wrap_counts_wide_characters() {
        // Each CJK character is two columns wide
        let rows = wrap_token_rows(&words("你 好 世 界"), 5);
        assert_eq!(rows, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_wrap_overlong_token_gets_own_row() {
        let rows = wrap_token_rows(&words("a extraordinarily b"), 6);
        assert_eq!(rows, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_token_rows(&[], 10).is_empty());
    }

    #[test]
    fn test_scroll_offset_centers_current_row() {
        let rows: Vec<Vec<usize>> = (0..10).map(|i| vec![i]).collect();
        assert_eq!(scroll_offset(&rows, None, 4), 0);
        assert_eq!(scroll_offset(&rows, Some(1), 4), 0);
        assert_eq!(scroll_offset(&rows, Some(7), 4), 5);
        assert_eq!(scroll_offset(&rows, Some(42), 4), 0);
    }

    #[test]
    fn test_status_text() {
        let state = state_with(words("a b c"), Some(1));
        assert_eq!(
            status_text(&state),
            " English │ 1.5x │ sequential │ ▶ Playing │ 2/3 "
        );
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(1.0), "1.0");
        assert_eq!(format_speed(1.5), "1.5");
        assert_eq!(format_speed(1.25), "1.25");
        assert_eq!(format_speed(2.0), "2.0");
    }

    #[test]
    fn test_render_functions_build_widgets() {
        let state = state_with(words("hello world"), Some(0));
        let _ = render_tokens(&state, 40, 10);
        let _ = render_word_display(state.current_word());
        let _ = render_command_deck(&state);
        let _ = render_help();
        let _ = render_progress_bar((0, 0));
        let _ = render_progress_bar((5, 3));
    }
}
