use std::io::{self, Write};
use thiserror::Error;

const BELL: &[u8] = b"\x07";

/// The two sounds a session can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Cue {
    Correct,
    Wrong,
}

impl Cue {
    pub fn asset(&self) -> &'static str {
        match self {
            Cue::Correct => "sounds/correct.mp3",
            Cue::Wrong => "sounds/wrong.mp3",
        }
    }
}

#[derive(Debug, Error)]
pub enum CueError {
    #[error("cue `{cue}` could not be played: {source}")]
    Output {
        cue: Cue,
        #[source]
        source: io::Error,
    },
    #[error("cue `{0}` is unavailable")]
    Unavailable(Cue),
}

/// Fire-and-forget audio output. Callers log failures and carry on.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue) -> Result<(), CueError>;
}

impl<P: CuePlayer + ?Sized> CuePlayer for Box<P> {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        (**self).play(cue)
    }
}

/// Plays cues as terminal bells: one for a correct key, two for a wrong one.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CuePlayer for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        let rings = match cue {
            Cue::Correct => 1,
            Cue::Wrong => 2,
        };

        (0..rings)
            .try_for_each(|_| self.out.write_all(BELL))
            .and_then(|_| self.out.flush())
            .map_err(|source| CueError::Output { cue, source })
    }
}

/// Used with `--mute`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) -> Result<(), CueError> {
        Ok(())
    }
}
