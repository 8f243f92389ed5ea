pub const POINTS_PER_SECOND: u32 = 10;

pub const WIN_MESSAGE: &str = "Congratulations! You won!";
pub const WRONG_KEY_MESSAGE: &str = "Wrong key! You lost.";
pub const TIME_EXPIRED_MESSAGE: &str = "Time's up! You lost.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    WrongKey,
    TimeExpired,
}

/// Terminal result of a session. Won and Lost are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { score: u32 },
    Lost(LossReason),
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won { .. } => WIN_MESSAGE,
            Outcome::Lost(LossReason::WrongKey) => WRONG_KEY_MESSAGE,
            Outcome::Lost(LossReason::TimeExpired) => TIME_EXPIRED_MESSAGE,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Outcome::Won { score } => *score,
            Outcome::Lost(_) => 0,
        }
    }
}

pub fn score(time_left: u32) -> u32 {
    time_left * POINTS_PER_SECOND
}

/// Checks for a completed sequence after an advance.
///
/// An empty sequence never wins, so a session that has not generated its
/// letters yet cannot be declared over by accident.
pub fn evaluate(current_index: usize, sequence_len: usize, time_left: u32) -> Option<Outcome> {
    if sequence_len > 0 && current_index == sequence_len {
        Some(Outcome::Won {
            score: score(time_left),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_ten_points_per_second() {
        assert_eq!(score(17), 170);
        assert_eq!(score(0), 0);
        assert_eq!(score(30), 300);
    }

    #[test]
    fn test_evaluate_win_only_when_complete() {
        assert_eq!(evaluate(9, 10, 12), None);
        assert_eq!(evaluate(10, 10, 12), Some(Outcome::Won { score: 120 }));
    }

    #[test]
    fn test_evaluate_empty_sequence_never_wins() {
        assert_eq!(evaluate(0, 0, 30), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::Won { score: 10 }.message(), WIN_MESSAGE);
        assert_eq!(Outcome::Lost(LossReason::WrongKey).message(), WRONG_KEY_MESSAGE);
        assert_eq!(
            Outcome::Lost(LossReason::TimeExpired).message(),
            TIME_EXPIRED_MESSAGE
        );
    }

    #[test]
    fn test_loss_scores_zero() {
        assert_eq!(Outcome::Lost(LossReason::TimeExpired).score(), 0);
        assert_eq!(Outcome::Won { score: 250 }.score(), 250);
    }
}
