//! Turn coordination between the human and the computer.
//!
//! The coordinator owns the game. A human tap places a mark, the board
//! is evaluated, and if the game goes on the computer answers after a
//! configured delay. While the computer is thinking, input is locked.
//!
//! The delayed answer runs as a tokio task tagged with the current
//! epoch. Reset bumps the epoch and aborts the task, so a stale answer
//! can never land on a fresh board.

use crate::config::GameConfig;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tictactoe_core::invariants::assert_invariants;
use tictactoe_core::{Board, GameState, Indicator, Move, Outcome, Player, Position, opponent};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Waiting for the human to tap a free cell.
    AwaitingHumanMove,
    /// The computer's answer is scheduled; input is locked.
    ComputerThinking,
    /// The game ended; only reset is accepted.
    GameOver(Outcome),
}

impl Phase {
    /// True only while waiting for the human.
    pub fn accepts_input(self) -> bool {
        self == Phase::AwaitingHumanMove
    }

    /// The outcome once the game is over.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Why a tap changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum IgnoreReason {
    /// Index outside 0-8.
    #[display("cell index out of range")]
    OutOfRange,
    /// Cell already holds a mark.
    #[display("cell already occupied")]
    Occupied,
    /// The computer is thinking.
    #[display("input locked while the computer moves")]
    InputLocked,
    /// The game is over until reset.
    #[display("game is over")]
    GameOver,
}

/// What a tap did. Ignored taps are normal and not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TapResponse {
    /// The human's mark was placed.
    Placed,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Read-only view of the game for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current board.
    pub board: Board,
    /// Moves of the current game, in order.
    pub history: Vec<Move>,
    /// Current phase.
    pub phase: Phase,
    /// True unless waiting for the human.
    pub input_locked: bool,
    /// Set when the game ends, cleared on reset.
    pub outcome: Option<Outcome>,
    /// Number of resets so far.
    pub epoch: u64,
}

impl Snapshot {
    /// Per-cell owner and glyph, in index order.
    pub fn cells(&self) -> [Option<(Player, Indicator)>; 9] {
        Position::ALL.map(|pos| {
            self.board
                .get(pos)
                .map(|mov| (mov.player, mov.player.indicator()))
        })
    }
}

/// Error creating a coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CoordinatorError {
    /// A delayed computer turn needs a tokio runtime to schedule on.
    #[display("a non-zero computer delay requires a tokio runtime")]
    NoRuntime,
}

#[derive(Debug)]
struct Inner {
    game: GameState,
    phase: Phase,
    epoch: u64,
    rng: StdRng,
    pending: Option<JoinHandle<()>>,
}

impl Inner {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.game.board().clone(),
            history: self.game.history().to_vec(),
            phase: self.phase,
            input_locked: !self.phase.accepts_input(),
            outcome: self.phase.outcome(),
            epoch: self.epoch,
        }
    }

    /// Places a mark for `player` and moves to the phase that follows.
    fn apply(&mut self, player: Player, position: Position) {
        match self.game.place(Move::new(player, position)) {
            Ok(status) => {
                self.phase = match (status.outcome(), player) {
                    (Some(outcome), _) => Phase::GameOver(outcome),
                    (None, Player::Human) => Phase::ComputerThinking,
                    (None, Player::Computer) => Phase::AwaitingHumanMove,
                };
                assert_invariants(&self.game);
                if let Phase::GameOver(outcome) = self.phase {
                    info!(%outcome, moves = self.game.history().len(), "Game over");
                }
            }
            Err(e) => {
                error!(%player, %position, error = %e, "Rejected move from coordinator");
                debug_assert!(false, "coordinator placed an illegal move: {}", e);
            }
        }
    }

    fn play_computer(&mut self) {
        match opponent::decide(self.game.board(), &mut self.rng) {
            Some(decision) => {
                info!(
                    position = %decision.position,
                    reason = %decision.reason,
                    "Computer moves"
                );
                self.apply(Player::Computer, decision.position);
            }
            None => {
                // Unreachable when evaluation order is kept: a full board ends the game first.
                error!("Opponent asked to move on a full board");
                debug_assert!(false, "opponent invoked on a full board");
                self.phase = Phase::GameOver(Outcome::Draw);
            }
        }
    }
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    updates: watch::Sender<Snapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &Inner) {
        self.updates.send_replace(inner.snapshot());
    }

    /// Runs the computer's scheduled turn if it still belongs to this game.
    #[instrument(skip(self))]
    fn computer_turn(&self, epoch: u64) {
        let mut inner = self.lock();
        if inner.epoch != epoch || inner.phase != Phase::ComputerThinking {
            debug!(current_epoch = inner.epoch, "Dropping stale computer turn");
            return;
        }
        inner.pending = None;
        inner.play_computer();
        self.publish(&inner);
    }
}

/// Sequences human and computer turns.
///
/// Cloning is cheap and every clone drives the same game.
#[derive(Debug, Clone)]
pub struct TurnCoordinator {
    shared: Arc<Shared>,
    delay: Duration,
    runtime: Option<Handle>,
}

impl TurnCoordinator {
    /// Creates a coordinator with an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError::NoRuntime`] if the configured delay is
    /// non-zero and no tokio runtime is running.
    #[instrument(skip(config), fields(delay_ms = config.computer_delay_ms(), seeded = config.seed().is_some()))]
    pub fn new(config: &GameConfig) -> Result<Self, CoordinatorError> {
        let delay = config.computer_delay();
        let runtime = Handle::try_current().ok();
        if runtime.is_none() && !delay.is_zero() {
            warn!("No tokio runtime for delayed computer turns");
            return Err(CoordinatorError::NoRuntime);
        }

        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        let inner = Inner {
            game: GameState::new(),
            phase: Phase::AwaitingHumanMove,
            epoch: 0,
            rng,
            pending: None,
        };
        let (updates, _) = watch::channel(inner.snapshot());

        info!("Turn coordinator ready");
        Ok(Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                updates,
            }),
            delay,
            runtime,
        })
    }

    /// Current state of the game.
    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().snapshot()
    }

    /// Receiver that sees a new snapshot after every transition.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.shared.updates.subscribe()
    }

    /// Handles the human tapping cell `index` (0-8).
    ///
    /// Taps on occupied cells, out-of-range indices, or while input is
    /// locked change nothing.
    #[instrument(skip(self))]
    pub fn on_cell_tapped(&self, index: usize) -> TapResponse {
        let Some(position) = Position::from_index(index) else {
            debug!("Ignoring tap outside the board");
            return TapResponse::Ignored(IgnoreReason::OutOfRange);
        };

        let mut inner = self.shared.lock();
        let ignored = match inner.phase {
            Phase::ComputerThinking => Some(IgnoreReason::InputLocked),
            Phase::GameOver(_) => Some(IgnoreReason::GameOver),
            Phase::AwaitingHumanMove if inner.game.board().is_occupied(position) => {
                Some(IgnoreReason::Occupied)
            }
            Phase::AwaitingHumanMove => None,
        };
        if let Some(reason) = ignored {
            debug!(%position, %reason, "Ignoring tap");
            return TapResponse::Ignored(reason);
        }

        info!(%position, "Human moves");
        inner.apply(Player::Human, position);

        if inner.phase == Phase::ComputerThinking {
            self.schedule_computer_turn(&mut inner);
        }
        self.shared.publish(&inner);
        TapResponse::Placed
    }

    /// Starts a new game, cancelling any pending computer turn.
    #[instrument(skip(self))]
    pub fn on_reset_requested(&self) {
        let mut inner = self.shared.lock();
        if let Some(task) = inner.pending.take() {
            debug!("Cancelling pending computer turn");
            task.abort();
        }
        inner.epoch += 1;
        inner.game.reset();
        inner.phase = Phase::AwaitingHumanMove;
        info!(epoch = inner.epoch, "New game");
        self.shared.publish(&inner);
    }

    fn schedule_computer_turn(&self, inner: &mut Inner) {
        let runtime = match &self.runtime {
            Some(runtime) if !self.delay.is_zero() => runtime,
            _ => {
                inner.play_computer();
                return;
            }
        };

        let epoch = inner.epoch;
        let delay = self.delay;
        let shared = Arc::clone(&self.shared);
        debug!(epoch, ?delay, "Scheduling computer turn");
        inner.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            shared.computer_turn(epoch);
        }));
    }
}
