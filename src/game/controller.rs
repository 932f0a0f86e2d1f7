//! Turn controller and the collaborator-facing game surface.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{Board, BoardSnapshot, Cell};
use crate::core::action::MoveOutcome;
use crate::core::config::{GameConfig, StalemateRule};
use crate::core::entity::PieceId;
use crate::core::error::GameError;
use crate::core::player::Side;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::opponent::{OpponentPolicy, RandomOpponent};
use crate::pieces::{PieceKind, PieceRegistry};
use crate::rules::{allocate_standard, in_setup_zone, legal_targets, resolve, validate};

/// Result of one countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tick {
    /// Still in setup; this many ticks remain.
    Remaining(u32),
    /// The countdown ran out and play has begun.
    Started,
    /// Not in setup; the tick did nothing.
    Idle,
}

/// One game instance: board, turn state, randomness and the opponent.
///
/// ## Example
///
/// ```
/// use rust_stratego::core::{GameConfig, Phase, Side};
/// use rust_stratego::game::Game;
///
/// let mut game = Game::new(GameConfig::default().with_seed(7)).unwrap();
/// assert_eq!(game.current_state().phase, Phase::Setup);
///
/// assert!(game.force_start());
/// assert!(!game.force_start());
/// assert_eq!(game.current_state().mover, Side::Player);
/// ```
#[derive(Clone, Debug)]
pub struct Game<P: OpponentPolicy = RandomOpponent> {
    config: GameConfig,
    registry: PieceRegistry,
    policy: P,
    rng: GameRng,
    board: Board,
    state: GameState,
}

impl Game<RandomOpponent> {
    /// Create a game against the random opponent with a freshly dealt board.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_policy(config, RandomOpponent)
    }

    /// Create a game from a prepared board, still in `Setup`.
    #[must_use]
    pub fn from_position(config: GameConfig, board: Board) -> Self {
        Self::from_position_with_policy(config, board, RandomOpponent)
    }
}

impl<P: OpponentPolicy> Game<P> {
    /// Create a game with a custom opponent policy and a freshly dealt board.
    pub fn with_policy(config: GameConfig, policy: P) -> Result<Self, GameError> {
        let mut game = Self::from_position_with_policy(config, Board::new(), policy);
        game.new_game()?;
        Ok(game)
    }

    /// Create a game from a prepared board with a custom opponent policy.
    #[must_use]
    pub fn from_position_with_policy(config: GameConfig, board: Board, policy: P) -> Self {
        let state = GameState::new(config.setup_seconds);
        Self {
            rng: GameRng::new(config.seed),
            registry: PieceRegistry::standard(),
            config,
            policy,
            board,
            state,
        }
    }

    /// Clear the board, deal both sides again and return to `Setup`.
    pub fn new_game(&mut self) -> Result<&GameState, GameError> {
        let deal = self.rng.fork();
        let mut board = Board::new();
        allocate_standard(&mut board, &self.registry, &deal)?;

        self.board = board;
        self.state = GameState::new(self.config.setup_seconds);
        info!(seed = deal.seed(), setup_seconds = self.config.setup_seconds, "new game");
        Ok(&self.state)
    }

    // === Setup ===

    /// End setup now. Returns `false` if setup had already ended.
    pub fn force_start(&mut self) -> bool {
        let started = self.state.start();
        if started {
            info!("setup over, player to move");
        }
        started
    }

    /// Advance the setup countdown by one second.
    pub fn tick(&mut self) -> Tick {
        if !self.state.is_setup() {
            return Tick::Idle;
        }

        self.state.setup_remaining = self.state.setup_remaining.saturating_sub(1);
        if self.state.setup_remaining == 0 {
            self.force_start();
            Tick::Started
        } else {
            Tick::Remaining(self.state.setup_remaining)
        }
    }

    /// Move one of the player's pieces to an empty cell of the player's
    /// setup zone. Only allowed during `Setup`.
    pub fn rearrange(&mut self, piece: PieceId, target: Cell) -> Result<(), GameError> {
        if self.state.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.state.is_setup() {
            return Err(GameError::SetupClosed);
        }

        let owner = self.board.get(piece).ok_or(GameError::UnknownPiece(piece))?.owner;
        if owner != Side::Player {
            return Err(GameError::NotOwnPiece(piece));
        }
        let target = target.ensure_in_bounds()?;
        if !in_setup_zone(Side::Player, target) {
            return Err(GameError::OutsideSetupZone(target));
        }

        self.board.move_piece(piece, target)?;
        Ok(())
    }

    // === Play ===

    /// Player-initiated move or attack.
    ///
    /// Opponent pieces are always refused with `NotOwnPiece`, whatever the
    /// target and whoever is to move.
    pub fn attempt_move(&mut self, piece: PieceId, target: Cell) -> Result<MoveOutcome, GameError> {
        if self.state.is_playing() && self.board.get(piece).is_some_and(|p| p.owner != Side::Player) {
            return Err(GameError::NotOwnPiece(piece));
        }
        validate(&self.board, &self.state, piece, target)?;
        self.play(piece, target)
    }

    /// Let the opponent policy take its ply.
    ///
    /// The policy's choice goes through the same validation as a player
    /// move. If the opponent cannot move, the configured `StalemateRule`
    /// decides the outcome.
    pub fn opponent_turn(&mut self) -> Result<MoveOutcome, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameAlreadyOver);
        }
        if self.state.is_setup() {
            return Err(GameError::NotStarted);
        }
        if self.state.mover != Side::Opponent {
            return Err(GameError::NotMoversTurn(Side::Opponent));
        }

        match self.policy.choose_move(&self.board, &self.state, Side::Opponent, &mut self.rng) {
            Ok(mv) => {
                validate(&self.board, &self.state, mv.piece, mv.to)?;
                self.play(mv.piece, mv.to)
            }
            Err(GameError::NoLegalMove) => Ok(self.stalemate()),
            Err(err) => Err(err),
        }
    }

    /// Apply a validated move for the current mover.
    fn play(&mut self, piece: PieceId, target: Cell) -> Result<MoveOutcome, GameError> {
        let mover = self.state.mover;

        let outcome = match self.board.piece_at(target).map(|p| p.id) {
            Some(defender) => {
                let result = resolve(&mut self.board, &self.registry, piece, defender)?;
                if let Some(winner) = result.winner {
                    return Ok(self.finish(winner));
                }
                MoveOutcome::Combat(result)
            }
            None => {
                let from = self.board.move_piece(piece, target)?;
                MoveOutcome::Moved { piece, from, to: target }
            }
        };
        debug!(side = %mover, ply = self.state.ply, ?outcome, "ply");

        if let Some(winner) = self.flag_home(piece) {
            return Ok(self.finish(winner));
        }

        self.state.end_ply();
        Ok(outcome)
    }

    /// Owner of `piece` if it is a flag standing on the enemy back rank.
    fn flag_home(&self, piece: PieceId) -> Option<Side> {
        let piece = self.board.get(piece)?;
        (piece.kind == PieceKind::Flag && piece.position.row == piece.owner.goal_row()).then_some(piece.owner)
    }

    fn stalemate(&mut self) -> MoveOutcome {
        warn!(rule = ?self.config.stalemate, "opponent has no legal move");
        match self.config.stalemate {
            StalemateRule::PassTurn => {
                self.state.end_ply();
                MoveOutcome::Passed { side: Side::Opponent }
            }
            StalemateRule::PlayerWins => self.finish(Side::Player),
        }
    }

    fn finish(&mut self, winner: Side) -> MoveOutcome {
        self.state.finish(winner);
        info!(winner = %winner, plies = self.state.ply, "game over");
        MoveOutcome::GameOver { winner }
    }

    // === Queries ===

    /// The board as the player sees it.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, Side::Player)
    }

    #[must_use]
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Full board, hidden kinds included.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn registry(&self) -> &PieceRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Cells a piece may currently step onto, for move hints.
    #[must_use]
    pub fn legal_targets(&self, piece: PieceId) -> Vec<Cell> {
        if !self.state.is_playing() {
            return Vec::new();
        }
        legal_targets(&self.board, piece)
    }
}
