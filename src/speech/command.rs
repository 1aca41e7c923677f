use super::{SpeechBoundary, SpeechError, Utterance};
use crate::engine::config::SpeechConfig;
use crate::reading::LanguageTag;
use log::{debug, info, warn};
use std::io;
use std::process::{Child, Command, Stdio};

/// Speaks through a local `espeak-ng` compatible executable.
///
/// Each utterance is its own child process; cancelling kills it. When the
/// executable cannot be found the speaker degrades to logging the text.
pub struct CommandSpeaker {
    config: SpeechConfig,
    child: Option<Child>,
    available: bool,
}

impl CommandSpeaker {
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            child: None,
            available: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    fn build_command(&self, utterance: &Utterance) -> Command {
        let mut command = Command::new(&self.config.program);
        command
            .arg("-s")
            .arg(words_per_minute(self.config.words_per_minute, utterance.rate).to_string())
            .arg("-v")
            .arg(voice_for(utterance.language))
            // Tokens such as "-w" must not be read as options
            .arg("--")
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl SpeechBoundary for CommandSpeaker {
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        if !self.available {
            debug!("(no synthesizer) {}", utterance.text);
            return Ok(());
        }

        match self.build_command(utterance).spawn() {
            Ok(child) => {
                self.child = Some(child);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "Synthesizer {:?} not found, continuing without audio",
                    self.config.program
                );
                self.available = false;
                Ok(())
            }
            Err(err) => Err(SpeechError::Spawn(err)),
        }
    }

    fn cancel_current(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };
        match child.try_wait() {
            Ok(Some(_)) => {}
            _ => {
                if let Err(err) = child.kill() {
                    warn!("Failed to stop synthesizer: {}", err);
                }
                let _ = child.wait();
            }
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel_current();
    }
}

/// espeak-ng voice names for each language
fn voice_for(language: LanguageTag) -> &'static str {
    match language {
        LanguageTag::Vietnamese => "vi",
        LanguageTag::Chinese => "cmn",
        LanguageTag::English => "en-us",
    }
}

fn words_per_minute(base: u32, rate: f64) -> u32 {
    (base as f64 * rate).round().max(1.0) as u32
}
