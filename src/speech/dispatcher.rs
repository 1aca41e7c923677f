use super::{SpeechBoundary, Utterance};
use crate::reading::LanguageTag;
use log::{debug, warn};

/// Wraps a [`SpeechBoundary`] and enforces cancel-before-speak.
pub struct SpeechDispatcher<B: SpeechBoundary> {
    boundary: B,
    utterances_issued: u64,
}

impl<B: SpeechBoundary> SpeechDispatcher<B> {
    pub fn new(boundary: B) -> Self {
        Self {
            boundary,
            utterances_issued: 0,
        }
    }

    /// Cancels whatever is in flight, then requests the new utterance.
    ///
    /// Synthesis failures are logged and dropped; playback keeps its pace.
    pub fn speak(&mut self, text: &str, rate: f64, language: LanguageTag) {
        self.boundary.cancel_current();

        let utterance = Utterance {
            text: text.to_string(),
            rate,
            language,
        };
        debug!("speak {:?} rate={} lang={}", utterance.text, rate, language);

        self.utterances_issued += 1;
        if let Err(err) = self.boundary.speak(&utterance) {
            warn!("Dropping utterance {:?}: {}", utterance.text, err);
        }
    }

    pub fn utterances_issued(&self) -> u64 {
        self.utterances_issued
    }

    pub fn boundary(&self) -> &B {
        &self.boundary
    }
}
