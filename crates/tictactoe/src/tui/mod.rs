//! Terminal front end.
//!
//! Draws coordinator snapshots and forwards key presses as taps and
//! resets. Holds no game logic.

mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::Action;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe::{GameConfig, Position, TapResponse, TurnCoordinator};
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the terminal game until the player quits.
pub async fn run(config: GameConfig) -> Result<()> {
    // Log to a file so output does not tear the screen
    let log_file = std::fs::File::create("tictactoe.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting tictactoe TUI");
    let coordinator = TurnCoordinator::new(&config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &coordinator).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_game(terminal: &mut Term, coordinator: &TurnCoordinator) -> Result<()> {
    let mut updates = coordinator.subscribe();
    let mut cursor = Position::Center;

    loop {
        let snapshot = updates.borrow_and_update().clone();
        terminal.draw(|frame| ui::draw(frame, &snapshot, cursor))?;

        // Short poll keeps the computer's reply visible promptly
        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match input::action_for(cursor, key.code) {
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Reset => coordinator.on_reset_requested(),
            Action::Cursor(next) => cursor = next,
            Action::Tap(position) => {
                cursor = position;
                if let TapResponse::Ignored(reason) =
                    coordinator.on_cell_tapped(position.to_index())
                {
                    debug!(%position, %reason, "Tap ignored");
                }
            }
            Action::None => {}
        }
    }
}
