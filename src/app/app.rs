use super::event::{AppEvent, Key};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{IndexSource, PlaybackConfig, PlaybackScheduler, TickOutcome};
use crate::input::{self, LoadError, LoadedText};
use crate::reading::{segment, LanguageTag};
use crate::speech::{SpeechBoundary, SpeechDispatcher};
use crate::ui::command::{command_to_app_event, parse_command};
use log::{info, warn};
use std::time::{Duration, Instant};
use unicode_segmentation::UnicodeSegmentation;

/// Presentation state around the playback scheduler.
///
/// Owns the raw text and re-segments it on every text or language edit;
/// everything about playback is delegated to [`PlaybackScheduler`].
pub struct App<B: SpeechBoundary, R: IndexSource> {
    mode: AppMode,
    raw_text: String,
    scheduler: PlaybackScheduler<B, R>,
    command_input: String,
    message: Option<String>,
    show_help: bool,
}

impl<B: SpeechBoundary, R: IndexSource> App<B, R> {
    pub fn new(boundary: B, index_source: R, config: PlaybackConfig) -> Self {
        Self {
            mode: AppMode::Reader,
            raw_text: String::new(),
            scheduler: PlaybackScheduler::new(SpeechDispatcher::new(boundary), index_source, config),
            command_input: String::new(),
            message: None,
            show_help: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn scheduler(&self) -> &PlaybackScheduler<B, R> {
        &self.scheduler
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_text(&mut self, text: &str, now: Instant) {
        self.raw_text = text.to_string();
        self.resegment(now);
    }

    pub fn set_language(&mut self, language: LanguageTag, now: Instant) {
        self.scheduler.set_language(language, now);
        self.resegment(now);
    }

    fn resegment(&mut self, now: Instant) {
        let tokens = segment(&self.raw_text, self.scheduler.config().language);
        self.scheduler.replace_tokens(tokens, now);
    }

    /// Fires a due playback tick, if any.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        self.scheduler.poll(now)
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next_tick(now)
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::LoadFile(path) => {
                let result = input::load_file_safe(&path);
                self.apply_loaded(result, now);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.apply_loaded(result, now);
            }
            AppEvent::SetLanguage(code) => {
                let language = match code.parse::<LanguageTag>() {
                    Ok(language) => language,
                    Err(err) => {
                        warn!("{}", err);
                        let fallback = LanguageTag::from_code_or_default(&code);
                        self.message = Some(format!("{}, using {}", err, fallback.display_name()));
                        fallback
                    }
                };
                self.set_language(language, now);
            }
            AppEvent::SetSpeed(speed) => self.scheduler.set_speed(speed, now),
            AppEvent::SetRandom(random_mode) => {
                let random_mode = random_mode.unwrap_or(!self.scheduler.config().random_mode);
                self.scheduler.set_random_mode(random_mode, now);
            }
            AppEvent::Play => {
                self.scheduler.start(now);
                if !self.scheduler.is_playing() {
                    self.message = Some("Nothing to read".to_string());
                }
            }
            AppEvent::Stop => self.scheduler.stop(),
            AppEvent::ClearText => self.set_text("", now),
            AppEvent::Quit => {
                self.scheduler.stop();
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => self.show_help = true,
            AppEvent::Warning(message) => self.message = Some(message),
            AppEvent::InvalidCommand(input) => {
                warn!("Unknown command: {:?}", input);
                self.message = Some(format!("Unknown command: {}", input));
            }
            AppEvent::None => {}
        }
    }

    fn apply_loaded(&mut self, result: Result<LoadedText, LoadError>, now: Instant) {
        match result {
            Ok(loaded) => {
                info!("Loaded text from {}", loaded.source);
                self.message = Some(format!("Loaded {}", loaded.source));
                self.set_text(&loaded.text, now);
            }
            Err(err) => {
                warn!("{}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn handle_key(&mut self, key: Key, now: Instant) {
        match self.mode {
            AppMode::Reader => self.handle_reader_key(key, now),
            AppMode::Editing => self.handle_editing_key(key, now),
            AppMode::Command => self.handle_command_key(key, now),
            AppMode::Quit => {}
        }
    }

    fn handle_reader_key(&mut self, key: Key, now: Instant) {
        self.message = None;
        match key {
            Key::Char(' ') => {
                self.scheduler.toggle(now);
                if !self.scheduler.is_playing() && self.scheduler.tokens().is_empty() {
                    self.message = Some("Nothing to read".to_string());
                }
            }
            Key::Char('+') | Key::Char('=') => self.scheduler.adjust_speed(1, now),
            Key::Char('-') => self.scheduler.adjust_speed(-1, now),
            Key::Char('r') => self.handle_event(AppEvent::SetRandom(None), now),
            Key::Char('l') => {
                let next = self.scheduler.config().language.next();
                self.set_language(next, now);
            }
            Key::Char('e') => {
                self.show_help = false;
                self.mode = AppMode::Editing;
            }
            Key::Char(prefix @ (':' | '@')) => {
                self.show_help = false;
                self.command_input = prefix.to_string();
                self.mode = AppMode::Command;
            }
            Key::Char('q') => self.handle_event(AppEvent::Quit, now),
            Key::Char('?') => self.show_help = !self.show_help,
            Key::Esc => self.show_help = false,
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: Key, now: Instant) {
        match key {
            Key::Char(c) => self.raw_text.push(c),
            Key::Enter => self.raw_text.push('\n'),
            Key::Backspace => {
                let Some((offset, _)) = self.raw_text.grapheme_indices(true).next_back() else {
                    return;
                };
                self.raw_text.truncate(offset);
            }
            Key::Esc => {
                self.mode = AppMode::Reader;
                return;
            }
        }
        self.resegment(now);
    }

    fn handle_command_key(&mut self, key: Key, now: Instant) {
        match key {
            Key::Char(c) => self.command_input.push(c),
            Key::Backspace => {
                self.command_input.pop();
                if self.command_input.is_empty() {
                    self.mode = AppMode::Reader;
                }
            }
            Key::Esc => {
                self.command_input.clear();
                self.mode = AppMode::Reader;
            }
            Key::Enter => {
                let input = std::mem::take(&mut self.command_input);
                self.mode = AppMode::Reader;
                self.message = None;
                let event = command_to_app_event(parse_command(&input));
                self.handle_event(event, now);
            }
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let tokens: Vec<String> = self
            .scheduler
            .tokens()
            .iter()
            .map(|token| token.text.clone())
            .collect();
        let current_index = self
            .scheduler
            .current_index()
            .filter(|&index| index < tokens.len());
        let config = self.scheduler.config();
        let placeholder = if self.raw_text.trim().is_empty() {
            Some(config.language.placeholder())
        } else {
            None
        };

        RenderState {
            mode: self.mode,
            status: self.scheduler.status(),
            progress: (current_index.map_or(0, |index| index + 1), tokens.len()),
            tokens,
            current_index,
            language: config.language,
            speed: config.speed(),
            random_mode: config.random_mode,
            placeholder,
            command_input: self.command_input.clone(),
            message: self.message.clone(),
            show_help: self.show_help,
        }
    }
}
