use log::{debug, info, warn};
use std::time::{Duration, Instant};

use crate::audio::{Cue, CuePlayer};
use crate::config::GameConfig;
use crate::countdown::Countdown;
use crate::ranking::{RankingEntry, RankingLog};
use crate::sequence::{Sequence, SequenceGenerator};
use crate::session::{Effect, Phase, SessionEvent, SessionState};

/// Owns one session at a time plus everything that outlives it.
///
/// The ranking survives restarts; the session and its countdown do not.
pub struct GameEngine<P: CuePlayer> {
    config: GameConfig,
    generator: SequenceGenerator,
    session: SessionState,
    countdown: Countdown,
    ranking: RankingLog,
    cues: P,
}

impl<P: CuePlayer> GameEngine<P> {
    pub fn new(config: GameConfig, cues: P) -> Self {
        let generator = match config.seed {
            Some(seed) => SequenceGenerator::seeded(config.sequence_length, seed),
            None => SequenceGenerator::new(config.sequence_length),
        };

        Self {
            session: SessionState::idle(config.time_limit_secs),
            countdown: Countdown::new(config.tick_interval),
            ranking: RankingLog::new(),
            generator,
            config,
            cues,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn ranking(&self) -> &RankingLog {
        &self.ranking
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn is_ticking(&self) -> bool {
        self.countdown.is_armed()
    }

    /// Generates a fresh sequence and arms the countdown.
    pub fn start(&mut self, now: Instant) {
        let sequence = self.generator.generate();
        self.start_with(sequence, now);
    }

    /// Starts a session on a known sequence.
    pub fn start_with(&mut self, sequence: Sequence, now: Instant) {
        self.countdown.cancel();
        debug!("starting session on {sequence}");
        self.session = SessionState::new(sequence, self.config.time_limit_secs);
        self.countdown.arm(now);
    }

    /// Discards the current session, whatever its phase, and starts a new one.
    pub fn restart(&mut self, now: Instant) {
        info!(
            "restart from {} with {} ranked wins",
            self.session.phase,
            self.ranking.len()
        );
        self.start(now);
    }

    /// Releases the countdown. The session is left as is for display.
    pub fn teardown(&mut self) {
        if self.countdown.is_armed() {
            debug!("teardown with countdown still armed");
        }
        self.countdown.cancel();
    }

    pub fn on_key(&mut self, key: char) {
        self.dispatch(SessionEvent::Key(key));
    }

    /// Delivers every tick due at `now`. Returns how many were applied.
    pub fn poll_countdown(&mut self, now: Instant) -> u32 {
        let mut applied = 0;
        // a tick that ends the session cancels the countdown, so the loop stops there
        while self.countdown.poll(now) {
            self.dispatch(SessionEvent::Tick);
            applied += 1;
        }
        applied
    }

    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.countdown.until_due(now)
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let effects = self.session.apply(event);
        if !effects.is_empty() {
            debug!(
                "{event:?} -> {effects:?} (index {}, {}s left)",
                self.session.current_index, self.session.time_left
            );
        }

        for effect in effects {
            match effect {
                Effect::PlayCue(cue) => self.play(cue),
                Effect::StopCountdown => {
                    self.countdown.cancel();
                    info!(
                        "session over: {} ({})",
                        self.session.phase, self.session.outcome_message
                    );
                }
                Effect::RecordWin { score } => {
                    self.ranking.record(RankingEntry::now(score));
                    info!("recorded win with score {score}");
                }
            }
        }
    }

    fn play(&mut self, cue: Cue) {
        if let Err(err) = self.cues.play(cue) {
            warn!("ignoring audio failure for {}: {err}", cue.asset());
        }
    }
}

impl<P: CuePlayer> Drop for GameEngine<P> {
    fn drop(&mut self) {
        self.teardown();
    }
}
