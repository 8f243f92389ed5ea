use crate::audio::Cue;
use crate::countdown::{self, TickOutcome};
use crate::matcher::{self, KeyMatch};
use crate::outcome::{self, LossReason, Outcome};
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    Idle,
    Active,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Key(char),
    Tick,
}

/// Work the engine performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PlayCue(Cue),
    StopCountdown,
    RecordWin { score: u32 },
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub sequence: Sequence,
    pub current_index: usize,
    pub time_left: u32,
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub outcome_message: String,
    pub score: u32,
    pub pressed_keys: Vec<char>,
    pub feedback: Feedback,
}

impl SessionState {
    pub fn new(sequence: Sequence, time_limit_secs: u32) -> Self {
        Self {
            sequence,
            current_index: 0,
            time_left: time_limit_secs,
            phase: Phase::Active,
            outcome: None,
            outcome_message: String::new(),
            score: 0,
            pressed_keys: Vec::new(),
            feedback: Feedback::None,
        }
    }

    /// A session with no sequence yet; ignores every event.
    pub fn idle(time_limit_secs: u32) -> Self {
        Self {
            phase: Phase::Idle,
            ..Self::new(Sequence::default(), time_limit_secs)
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    pub fn expected_char(&self) -> Option<char> {
        self.sequence.get(self.current_index)
    }

    /// Applies one event and returns the side effects it calls for.
    ///
    /// Deterministic and free of I/O. Events outside the Active phase are
    /// dropped, so a late tick or keystroke can never touch a finished session.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<Effect> {
        if !self.is_active() {
            return Vec::new();
        }

        match event {
            SessionEvent::Key(key) => self.on_key(key),
            SessionEvent::Tick => self.on_tick(),
        }
    }

    fn on_key(&mut self, key: char) -> Vec<Effect> {
        match matcher::match_key(&self.sequence, self.current_index, key) {
            KeyMatch::Advance(c) => {
                self.current_index += 1;
                self.pressed_keys.push(c);
                self.feedback = Feedback::Correct;

                let mut effects = vec![Effect::PlayCue(Cue::Correct)];
                if let Some(won) =
                    outcome::evaluate(self.current_index, self.sequence.len(), self.time_left)
                {
                    effects.extend(self.finish(won));
                }
                effects
            }
            KeyMatch::Mismatch { .. } => {
                self.feedback = Feedback::Wrong;

                let mut effects = vec![Effect::PlayCue(Cue::Wrong)];
                effects.extend(self.finish(Outcome::Lost(LossReason::WrongKey)));
                effects
            }
            KeyMatch::Ignored => Vec::new(),
        }
    }

    fn on_tick(&mut self) -> Vec<Effect> {
        match countdown::tick(self.time_left) {
            TickOutcome::Running(remaining) => {
                self.time_left = remaining;
                Vec::new()
            }
            TickOutcome::Expired => {
                self.time_left = 0;
                self.finish(Outcome::Lost(LossReason::TimeExpired))
            }
        }
    }

    fn finish(&mut self, result: Outcome) -> Vec<Effect> {
        self.phase = match result {
            Outcome::Won { .. } => Phase::Won,
            Outcome::Lost(_) => Phase::Lost,
        };
        self.outcome = Some(result);
        self.outcome_message = result.message().to_string();

        match result {
            Outcome::Won { score } => {
                self.score = score;
                vec![Effect::StopCountdown, Effect::RecordWin { score }]
            }
            Outcome::Lost(_) => vec![Effect::StopCountdown],
        }
    }
}
