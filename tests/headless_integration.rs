use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use keyrush::audio::Silent;
use keyrush::config::GameConfig;
use keyrush::runtime::{command_for, AppEvent, Command, Runner, TestEventSource};
use keyrush::sequence::Sequence;
use keyrush::session::Phase;
use keyrush::GameEngine;

fn key(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Mirrors the binary's loop without a terminal
fn drive(
    engine: &mut GameEngine<Silent>,
    runner: &Runner<TestEventSource>,
    max_steps: u32,
) -> bool {
    for _ in 0..max_steps {
        match runner.step(engine.until_next_tick(Instant::now())) {
            AppEvent::Tick => {
                engine.poll_countdown(Instant::now());
            }
            AppEvent::Resize => {}
            AppEvent::Closed => return true,
            AppEvent::Key(k) => match command_for(&k, engine.is_over()) {
                Command::Quit => return true,
                Command::Restart => engine.restart(Instant::now()),
                Command::Type(c) => engine.on_key(c),
                Command::Ignore => {}
            },
        }
    }
    false
}

#[test]
fn headless_typing_flow_wins() {
    let mut engine = GameEngine::new(GameConfig::default(), Silent);
    engine.start_with(Sequence::try_from("HEADLESSOK").unwrap(), Instant::now());

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx), Duration::from_millis(5));

    for c in "headlessok".chars() {
        tx.send(key(c)).unwrap();
    }
    tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
        .unwrap();

    assert!(drive(&mut engine, &runner, 100), "loop should quit on esc");
    assert_eq!(engine.phase(), Phase::Won);
    assert!(engine.session().score > 0);
    assert_eq!(engine.ranking().len(), 1);
}

#[test]
fn headless_restart_after_loss() {
    let mut engine = GameEngine::new(GameConfig::default(), Silent);
    engine.start_with(Sequence::try_from("AAAAAAAAAA").unwrap(), Instant::now());

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx), Duration::from_millis(5));

    // wrong key loses, the next 'r' restarts instead of typing
    tx.send(key('b')).unwrap();
    tx.send(key('r')).unwrap();
    drop(tx);

    drive(&mut engine, &runner, 2);

    assert_eq!(engine.phase(), Phase::Active);
    assert_eq!(engine.session().current_index, 0);
    assert_eq!(engine.session().time_left, 30);
    assert!(engine.ranking().is_empty());
}

#[test]
fn headless_loop_ends_when_input_closes() {
    let mut engine = GameEngine::new(GameConfig::default(), Silent);
    engine.start(Instant::now());

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx), Duration::from_secs(60));
    drop(tx);

    assert!(drive(&mut engine, &runner, 1000), "loop should stop on hang-up");
    assert_eq!(engine.phase(), Phase::Active);
}

#[test]
fn headless_timed_session_expires() {
    let config = GameConfig {
        tick_interval: Duration::from_millis(2),
        time_limit_secs: 5,
        ..GameConfig::default()
    };
    let mut engine = GameEngine::new(config, Silent);
    engine.start(Instant::now());

    let (_tx, rx) = mpsc::channel();
    let runner = Runner::new(TestEventSource::new(rx), Duration::from_millis(5));

    for _ in 0..200u32 {
        if let AppEvent::Tick = runner.step(engine.until_next_tick(Instant::now())) {
            engine.poll_countdown(Instant::now());
        }
        if engine.is_over() {
            break;
        }
    }

    assert_eq!(engine.phase(), Phase::Lost, "session should expire by time");
    assert_eq!(engine.session().time_left, 0);
    assert!(!engine.is_ticking());
}
