// Configuration for the reader engine and speech backend
// Defaults follow the original reader page: Vietnamese, 1.0x, sequential

use crate::reading::LanguageTag;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Allowed playback speed multipliers.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.5..=2.0;

/// Granularity of speed adjustments.
pub const SPEED_STEP: f64 = 0.1;

pub const DEFAULT_SPEED: f64 = 1.0;

/// Settings read by both the segmenter (language only) and the scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    pub language: LanguageTag,

    /// Speed multiplier, always inside [`SPEED_RANGE`]
    speed: f64,

    /// Pick tokens uniformly at random instead of in order
    pub random_mode: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            language: LanguageTag::default(),
            speed: DEFAULT_SPEED,
            random_mode: false,
        }
    }
}

impl PlaybackConfig {
    pub fn new(language: LanguageTag, speed: f64, random_mode: bool) -> Self {
        let mut config = Self {
            language,
            speed: DEFAULT_SPEED,
            random_mode,
        };
        config.set_speed(speed);
        config
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Clamps into [`SPEED_RANGE`]; non-finite input resets to the default.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = clamp_speed(speed);
    }

    /// Moves by whole [`SPEED_STEP`]s and lands on the step grid.
    pub fn adjust_speed(&mut self, steps: i32) {
        let per_unit = (1.0 / SPEED_STEP).round();
        let stepped = self.speed + steps as f64 * SPEED_STEP;
        // Round so repeated steps don't drift
        self.set_speed((stepped * per_unit).round() / per_unit);
    }

    /// One tick every `1000 / speed` milliseconds.
    pub fn tick_period(&self) -> Duration {
        speed_to_period(self.speed)
    }
}

pub fn clamp_speed(speed: f64) -> f64 {
    if !speed.is_finite() {
        return DEFAULT_SPEED;
    }
    speed.clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end())
}

pub fn speed_to_period(speed: f64) -> Duration {
    Duration::from_secs_f64(1.0 / clamp_speed(speed))
}

/// External synthesizer settings
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechConfig {
    /// Synthesizer executable (default `espeak-ng`, env `ESPEAK_BIN`)
    pub program: String,

    /// Words per minute that speed 1.0 maps to
    pub words_per_minute: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            program: std::env::var("ESPEAK_BIN").unwrap_or_else(|_| "espeak-ng".to_string()),
            words_per_minute: 175,
        }
    }
}

/// Master configuration combining all reader settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub speech: SpeechConfig,
}
