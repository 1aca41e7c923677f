use super::{SpeechBoundary, SpeechError, Utterance};
use log::info;

/// Logs utterances instead of producing audio.
#[derive(Debug, Default)]
pub struct SilentSpeaker {
    spoken: usize,
}

impl SilentSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> usize {
        self.spoken
    }
}

impl SpeechBoundary for SilentSpeaker {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.spoken += 1;
        info!("[{}] {}", utterance.language, utterance.text);
        Ok(())
    }

    fn cancel_current(&mut self) {}
}
