use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    /// The event source is gone; no further input can arrive.
    Closed,
}

/// What a key press means to the game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    Type(char),
    Ignore,
}

/// Maps a key event onto a game command. `is_over` decides whether
/// restart keys are live; while a session runs every character is typed.
pub fn command_for(key: &KeyEvent, is_over: bool) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::Ignore;
    }

    match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter if is_over => Command::Restart,
        KeyCode::Char(c) if !is_over => Command::Type(c),
        _ => Command::Ignore,
    }
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Production event source using crossterm.
///
/// The reader thread exits on its next event once the source is dropped.
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) => AppEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Channel-fed event source for headless tests
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event at a time
pub struct Runner<E: EventSource> {
    event_source: E,
    max_wait: Duration,
}

impl<E: EventSource> Runner<E> {
    /// `max_wait` bounds how long a step may block when nothing is scheduled.
    pub fn new(event_source: E, max_wait: Duration) -> Self {
        Self {
            event_source,
            max_wait,
        }
    }

    /// Blocks until the next event or until `due` (capped at `max_wait`),
    /// returning Tick when the wait runs out and Closed once the source hangs up.
    pub fn step(&self, due: Option<Duration>) -> AppEvent {
        let timeout = due.map_or(self.max_wait, |d| d.min(self.max_wait));
        match self.event_source.recv_timeout(timeout) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => AppEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => AppEvent::Closed,
        }
    }
}
