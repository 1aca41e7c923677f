use crate::app::{App, AppEvent, AppMode, Key};
use crate::engine::IndexSource;
use crate::speech::SpeechBoundary;
use crate::ui::reader::view::{
    render_command_deck, render_help, render_progress_bar, render_status_line, render_tokens,
    render_word_display,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Clear,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Runs until the app enters Quit mode.
    ///
    /// Keyboard polling doubles as the playback clock: the poll timeout is
    /// the time left until the next tick, capped at the render interval.
    pub fn run_event_loop<B: SpeechBoundary, R: IndexSource>(
        &mut self,
        app: &mut App<B, R>,
    ) -> io::Result<()> {
        let render_tick = Duration::from_millis(1000 / 60);

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            let poll_timeout = app
                .time_until_next_tick(Instant::now())
                .map_or(render_tick, |until_tick| until_tick.min(render_tick));

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    dispatch_key(app, key);
                }
            }

            app.poll(Instant::now());
        }
    }

    pub fn render_frame<B: SpeechBoundary, R: IndexSource>(
        &mut self,
        app: &App<B, R>,
    ) -> io::Result<()> {
        let render_state = app.get_render_state();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);

            frame.render_widget(render_word_display(render_state.current_word()), chunks[0]);

            let text_area = chunks[1];
            frame.render_widget(
                render_tokens(&render_state, text_area.width, text_area.height),
                text_area,
            );

            frame.render_widget(render_progress_bar(render_state.progress), chunks[2]);
            frame.render_widget(render_status_line(&render_state), chunks[3]);
            frame.render_widget(render_command_deck(&render_state), chunks[4]);

            if render_state.show_help {
                let help_area = centered(area, 60, 14);
                frame.render_widget(Clear, help_area);
                frame.render_widget(render_help(), help_area);
            }
        })?;

        Ok(())
    }
}

fn dispatch_key<B: SpeechBoundary, R: IndexSource>(app: &mut App<B, R>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    let now = Instant::now();
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.handle_event(AppEvent::Quit, now);
        return;
    }
    if let Some(key) = map_key(key.code) {
        app.handle_key(key, now);
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Esc => Some(Key::Esc),
        _ => None,
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
