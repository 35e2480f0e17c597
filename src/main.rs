use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{stdout, Stdout},
    process,
    time::{Duration, Instant},
};

mod app;
mod config;
mod constants;
mod error;
mod game;
mod input;
mod quiz;
mod ui;

use app::App;
use config::Config;
use error::AppError;
use game::Game;
use input::map_key;
use quiz::{build_pool, load_questions, QuizPanel};
use ui::ui;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Owns raw mode and the alternate screen; restores both on drop.
struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, AppError> {
        terminal::enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn main() {
    let config = Config::parse();
    if let Err(e) = run(&config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    config::init_logging(config)?;
    info!("Starting with {:?}", config);

    // Load before touching the terminal so a missing file reads cleanly.
    let records = load_questions(&config.quiz)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pool = build_pool(&records, config.pool_size, &mut rng);
    info!(
        "Loaded {} questions from {}, pool of {}",
        records.len(),
        config.quiz.display(),
        pool.len()
    );

    let game = Game::new(config.tick(), config.seed);
    let mut app = App::new(game, QuizPanel::new(pool));

    let mut tui = TuiGuard::new()?;
    run_loop(&mut tui.terminal, &mut app)
}

fn run_loop(terminal: &mut Term, app: &mut App) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event::read()? {
                if let Some(command) = map_key(code, kind, modifiers, app.focus) {
                    if !app.handle(command, Instant::now()) {
                        break;
                    }
                }
            }
        }

        app.tick(Instant::now());
    }

    info!(
        "Session ended: score {}, {} lines, quiz {}/{}",
        app.game.score, app.game.lines_cleared, app.quiz.correct_answers, app.quiz.wrong_answers
    );
    Ok(())
}
