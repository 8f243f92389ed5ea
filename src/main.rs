pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use keyrush::{
    audio::{CuePlayer, Silent, TerminalBell},
    config::GameConfig,
    runtime::{command_for, AppEvent, Command, CrosstermEventSource, EventSource, Runner},
    GameEngine,
};
use log::{info, warn, LevelFilter};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::File,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};

const MAX_WAIT_MS: u64 = 100;

/// type ten random letters before the clock runs out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A timed key-sequence minigame: type the ten letters shown before thirty seconds run out. Faster wins score higher and are ranked for the rest of the session."
)]
pub struct Cli {
    /// silence the audio cues
    #[clap(short = 'm', long)]
    mute: bool,

    /// seed the letter generator for reproducible rounds
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// write diagnostics to this file (nothing is logged otherwise)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// diagnostics verbosity, used with --log-file
    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// print the session ranking as JSON after exiting
    #[clap(long)]
    print_ranking: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    fn to_game_config(&self) -> GameConfig {
        GameConfig {
            sound: !self.mute,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

pub struct App {
    pub engine: GameEngine<Box<dyn CuePlayer>>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let cues: Box<dyn CuePlayer> = if config.sound {
            Box::new(TerminalBell::stdout())
        } else {
            Box::new(Silent)
        };

        Self {
            engine: GameEngine::new(config, cues),
        }
    }
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    // the terminal belongs to the UI, so logs only ever go to a file
    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        env_logger::Builder::new()
            .filter_level(cli.log_level.into())
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
        info!("logging at {} to {}", cli.log_level, path.display());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    init_logging(&cli)?;
    let config = cli.to_game_config();
    info!("starting with {}", serde_json::to_string(&config)?);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(MAX_WAIT_MS),
    );
    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if cli.print_ranking {
        println!("{}", app.engine.ranking().to_json()?);
    }

    Ok(())
}

fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    app.engine.start(Instant::now());
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step(app.engine.until_next_tick(Instant::now())) {
            AppEvent::Tick => {
                if app.engine.poll_countdown(Instant::now()) == 0 {
                    continue;
                }
            }
            AppEvent::Resize => {}
            AppEvent::Closed => {
                warn!("terminal input closed, leaving");
                break;
            }
            AppEvent::Key(key) => match command_for(&key, app.engine.is_over()) {
                Command::Quit => break,
                Command::Restart => app.engine.restart(Instant::now()),
                Command::Type(c) => app.engine.on_key(c),
                Command::Ignore => continue,
            },
        }

        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    app.engine.teardown();
    Ok(())
}
