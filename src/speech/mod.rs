//! Speech synthesis boundary
//!
//! The reader never waits on synthesis. Each token is handed to a
//! [`SpeechBoundary`] through the [`SpeechDispatcher`], which cancels the
//! previous utterance first so at most one is audible at a time.
//!
//! ## Backends
//!
//! - **command.rs**: spawns a local `espeak-ng` process per utterance
//! - **silent.rs**: logs utterances without producing audio

pub mod command;
pub mod dispatcher;
pub mod silent;

use crate::reading::LanguageTag;
use std::io;
use thiserror::Error;

pub use command::CommandSpeaker;
pub use dispatcher::SpeechDispatcher;
pub use silent::SilentSpeaker;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Failed to start synthesizer: {0}")]
    Spawn(#[from] io::Error),

    #[error("Synthesis rejected: {0}")]
    Rejected(String),
}

/// One request to vocalize a token.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Speed multiplier in the playback speed range
    pub rate: f64,
    pub language: LanguageTag,
}

/// External speech synthesizer.
///
/// Calls are fire-and-forget: `speak` returns as soon as synthesis has been
/// requested, and `cancel_current` is best-effort.
pub trait SpeechBoundary {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;

    fn cancel_current(&mut self);
}

impl<B: SpeechBoundary + ?Sized> SpeechBoundary for Box<B> {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        (**self).speak(utterance)
    }

    fn cancel_current(&mut self) {
        (**self).cancel_current()
    }
}
