use crate::engine::config::PlaybackConfig;
use crate::engine::random::IndexSource;
use crate::engine::timing::RepeatingTimer;
use crate::reading::{LanguageTag, Token, TokenSequence};
use crate::speech::{SpeechBoundary, SpeechDispatcher};
use log::{debug, info};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Playing,
}

/// What a single timer firing did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved to this index and dispatched its token
    Spoke(usize),
    /// Ran off the end (or the sequence was empty); now Idle
    Finished,
    /// Tick arrived while Idle; nothing happened
    NotPlaying,
}

/// Drives sequential or random traversal of a token sequence.
///
/// Playing is exactly "a timer is armed": stopping drops the timer and the
/// current index together, so Idle never has a pending tick. Pacing is
/// purely clock driven; the scheduler never learns whether an utterance
/// finished.
pub struct PlaybackScheduler<B: SpeechBoundary, R: IndexSource> {
    tokens: TokenSequence,
    config: PlaybackConfig,
    current_index: Option<usize>,
    timer: Option<RepeatingTimer>,
    dispatcher: SpeechDispatcher<B>,
    index_source: R,
}

impl<B: SpeechBoundary, R: IndexSource> PlaybackScheduler<B, R> {
    pub fn new(dispatcher: SpeechDispatcher<B>, index_source: R, config: PlaybackConfig) -> Self {
        Self {
            tokens: TokenSequence::empty(),
            config,
            current_index: None,
            timer: None,
            dispatcher,
            index_source,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        if self.timer.is_some() {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// `None` while no token is selected.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.current_index.and_then(|index| self.tokens.get(index))
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &SpeechDispatcher<B> {
        &self.dispatcher
    }

    /// Arms the timer. The first token is spoken one full period later.
    ///
    /// No-op when already playing or when there is nothing to read.
    pub fn start(&mut self, now: Instant) {
        if self.is_playing() {
            return;
        }
        if self.tokens.is_empty() {
            debug!("start ignored: no tokens");
            return;
        }
        info!(
            "Playback started: {} tokens at {:.1}x{}",
            self.tokens.len(),
            self.config.speed(),
            if self.config.random_mode { " (random)" } else { "" }
        );
        self.timer = Some(RepeatingTimer::arm(self.config.tick_period(), now));
    }

    /// Disarms the timer and clears the selection.
    ///
    /// An utterance already handed to the synthesizer may still finish.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            info!("Playback stopped");
        }
        self.current_index = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_playing() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Handles one timer firing.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::NotPlaying;
        }

        let len = self.tokens.len();
        if len == 0 {
            self.finish();
            return TickOutcome::Finished;
        }

        let next = if self.config.random_mode {
            self.index_source.pick(len)
        } else {
            self.current_index.map_or(0, |index| index + 1)
        };

        let Some(token) = self.tokens.get(next) else {
            self.finish();
            return TickOutcome::Finished;
        };

        debug!("tick -> {} {:?}", next, token.text);
        self.current_index = Some(next);
        self.dispatcher
            .speak(&token.text, self.config.speed(), self.config.language);
        TickOutcome::Spoke(next)
    }

    /// Fires the timer if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        let timer = self.timer.as_mut()?;
        if !timer.is_due(now) {
            return None;
        }
        timer.fire(now);
        Some(self.tick())
    }

    /// How long the event loop may wait before the next tick is due.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.map(|timer| timer.time_until_due(now))
    }

    pub fn set_speed(&mut self, speed: f64, now: Instant) {
        self.config.set_speed(speed);
        self.rearm(now);
    }

    pub fn adjust_speed(&mut self, steps: i32, now: Instant) {
        self.config.adjust_speed(steps);
        self.rearm(now);
    }

    pub fn set_random_mode(&mut self, random_mode: bool, now: Instant) {
        self.config.random_mode = random_mode;
        self.rearm(now);
    }

    /// Callers re-segment and pass the result to [`Self::replace_tokens`].
    pub fn set_language(&mut self, language: LanguageTag, now: Instant) {
        self.config.language = language;
        self.rearm(now);
    }

    /// Swaps in a freshly segmented sequence.
    ///
    /// The current index is kept even if it is now out of range; the next
    /// tick resolves that.
    pub fn replace_tokens(&mut self, tokens: TokenSequence, now: Instant) {
        self.tokens = tokens;
        self.rearm(now);
    }

    fn rearm(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            *timer = RepeatingTimer::arm(self.config.tick_period(), now);
        }
    }

    fn finish(&mut self) {
        info!("Playback finished");
        self.timer = None;
        self.current_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::segment;
    use crate::speech::{SpeechError, Utterance};

    #[derive(Default)]
    struct Recorder {
        spoken: Vec<String>,
        cancels: usize,
    }

    impl SpeechBoundary for Recorder {
        fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
            self.spoken.push(utterance.text.clone());
            Ok(())
        }

        fn cancel_current(&mut self) {
            self.cancels += 1;
        }
    }

    /// Replays a fixed list of indices
    struct Scripted(Vec<usize>);

    impl IndexSource for Scripted {
        fn pick(&mut self, _len: usize) -> usize {
            self.0.remove(0)
        }
    }

    fn scheduler_with(text: &str) -> PlaybackScheduler<Recorder, Scripted> {
        let config = PlaybackConfig::new(LanguageTag::English, 1.0, false);
        let mut scheduler =
            PlaybackScheduler::new(SpeechDispatcher::new(Recorder::default()), Scripted(vec![]), config);
        scheduler.replace_tokens(segment(text, LanguageTag::English), Instant::now());
        scheduler
    }

    fn spoken(scheduler: &PlaybackScheduler<Recorder, Scripted>) -> &[String] {
        &scheduler.dispatcher().boundary().spoken
    }

    #[test]
    fn test_new_scheduler_is_idle() {
        let scheduler = scheduler_with("");
        assert_eq!(scheduler.status(), PlaybackStatus::Idle);
        assert_eq!(scheduler.current_index(), None);
        assert_eq!(scheduler.time_until_next_tick(Instant::now()), None);
    }

    #[test]
    fn test_start_on_empty_sequence_is_noop() {
        let mut scheduler = scheduler_with("   ");
        scheduler.start(Instant::now());
        assert_eq!(scheduler.status(), PlaybackStatus::Idle);
        assert!(spoken(&scheduler).is_empty());
    }

    #[test]
    fn test_start_does_not_speak_immediately() {
        let mut scheduler = scheduler_with("one two");
        let t0 = Instant::now();
        scheduler.start(t0);
        assert!(scheduler.is_playing());
        assert_eq!(scheduler.poll(t0), None);
        assert!(spoken(&scheduler).is_empty());
        assert_eq!(
            scheduler.time_until_next_tick(t0),
            Some(Duration::from_millis(1000))
        );
    }

    #[test]
    fn test_sequential_ticks_then_finish() {
        let mut scheduler = scheduler_with("one two");
        scheduler.start(Instant::now());
        assert_eq!(scheduler.tick(), TickOutcome::Spoke(0));
        assert_eq!(scheduler.tick(), TickOutcome::Spoke(1));
        assert_eq!(scheduler.tick(), TickOutcome::Finished);
        assert_eq!(scheduler.status(), PlaybackStatus::Idle);
        assert_eq!(scheduler.current_index(), None);
        assert_eq!(spoken(&scheduler), ["one", "two"]);
    }

    #[test]
    fn test_tick_while_idle() {
        let mut scheduler = scheduler_with("one");
        assert_eq!(scheduler.tick(), TickOutcome::NotPlaying);
        assert!(spoken(&scheduler).is_empty());
    }

    #[test]
    fn test_stop_resets_index() {
        let mut scheduler = scheduler_with("one two three");
        scheduler.start(Instant::now());
        scheduler.tick();
        scheduler.tick();
        scheduler.stop();
        assert_eq!(scheduler.status(), PlaybackStatus::Idle);
        assert_eq!(scheduler.current_index(), None);

        // Restarting reads from the beginning
        scheduler.start(Instant::now());
        assert_eq!(scheduler.tick(), TickOutcome::Spoke(0));
    }

    #[test]
    fn test_stop_leaves_utterance_in_flight() {
        let mut scheduler = scheduler_with("one two three");
        let t0 = Instant::now();
        scheduler.start(t0);
        assert_eq!(
            scheduler.poll(t0 + Duration::from_millis(1000)),
            Some(TickOutcome::Spoke(0))
        );
        assert_eq!(scheduler.dispatcher().boundary().cancels, 1);

        scheduler.stop();
        assert_eq!(scheduler.dispatcher().boundary().cancels, 1);
        assert_eq!(scheduler.poll(t0 + Duration::from_millis(5000)), None);
        assert_eq!(scheduler.dispatcher().boundary().cancels, 1);
        assert_eq!(spoken(&scheduler), ["one"]);
    }

    #[test]
    fn test_random_mode_uses_index_source() {
        let mut scheduler = scheduler_with("a b c");
        scheduler.index_source = Scripted(vec![2, 2, 0]);
        scheduler.set_random_mode(true, Instant::now());
        scheduler.start(Instant::now());
        assert_eq!(scheduler.tick(), TickOutcome::Spoke(2));
        assert_eq!(scheduler.tick(), TickOutcome::Spoke(2));
        assert_eq!(scheduler.tick(), TickOutcome::Spoke(0));
        assert!(scheduler.is_playing());
        assert_eq!(spoken(&scheduler), ["c", "c", "a"]);
    }

    #[test]
    fn test_out_of_range_random_pick_is_guarded() {
        let mut scheduler = scheduler_with("a b");
        scheduler.index_source = Scripted(vec![9]);
        scheduler.set_random_mode(true, Instant::now());
        scheduler.start(Instant::now());
        assert_eq!(scheduler.tick(), TickOutcome::Finished);
        assert!(spoken(&scheduler).is_empty());
    }

    #[test]
    fn test_speed_change_rearms_timer() {
        let mut scheduler = scheduler_with("a b c");
        let t0 = Instant::now();
        scheduler.start(t0);

        let t1 = t0 + Duration::from_millis(700);
        scheduler.set_speed(2.0, t1);
        assert_eq!(
            scheduler.time_until_next_tick(t1),
            Some(Duration::from_millis(500))
        );
        // Old deadline at 1000ms no longer fires
        assert_eq!(scheduler.poll(t0 + Duration::from_millis(1000)), None);
        assert_eq!(
            scheduler.poll(t1 + Duration::from_millis(500)),
            Some(TickOutcome::Spoke(0))
        );
    }

    #[test]
    fn test_reconfigure_while_idle_does_not_arm() {
        let mut scheduler = scheduler_with("a b");
        scheduler.set_speed(1.5, Instant::now());
        scheduler.set_random_mode(true, Instant::now());
        scheduler.set_language(LanguageTag::Chinese, Instant::now());
        assert_eq!(scheduler.status(), PlaybackStatus::Idle);
        assert_eq!(scheduler.config().speed(), 1.5);
    }

    #[test]
    fn test_reconfigure_keeps_index() {
        let mut scheduler = scheduler_with("a b c");
        scheduler.start(Instant::now());
        scheduler.tick();
        scheduler.set_random_mode(false, Instant::now());
        scheduler.set_language(LanguageTag::Vietnamese, Instant::now());
        assert_eq!(scheduler.current_index(), Some(0));
        assert_eq!(scheduler.tick(), TickOutcome::Spoke(1));
    }

    #[test]
    fn test_shrunk_sequence_finishes_on_next_tick() {
        let mut scheduler = scheduler_with("a b c d");
        scheduler.start(Instant::now());
        scheduler.tick();
        scheduler.tick();
        scheduler.tick();
        scheduler.replace_tokens(segment("x", LanguageTag::English), Instant::now());
        assert_eq!(scheduler.current_token(), None);
        assert_eq!(scheduler.tick(), TickOutcome::Finished);
        assert_eq!(spoken(&scheduler), ["a", "b", "c"]);
    }

    #[test]
    fn test_cleared_text_finishes_on_next_tick() {
        let mut scheduler = scheduler_with("a b");
        scheduler.start(Instant::now());
        scheduler.replace_tokens(TokenSequence::empty(), Instant::now());
        assert!(scheduler.is_playing());
        assert_eq!(scheduler.tick(), TickOutcome::Finished);
        assert_eq!(scheduler.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_every_speak_is_preceded_by_cancel() {
        let mut scheduler = scheduler_with("a b c");
        scheduler.start(Instant::now());
        while let TickOutcome::Spoke(_) = scheduler.tick() {}
        let boundary = scheduler.dispatcher().boundary();
        assert_eq!(boundary.spoken.len(), 3);
        assert_eq!(boundary.cancels, 3);
    }
}
