//! Tic-tac-toe board engine.

use super::contracts::{LegalMove, assert_invariants};
use super::rules::{is_full, winning_line};
use super::{Board, Player, Position, Square};
use parlor_core::{BoardEngine, IllegalMove, Placement, PlayerKey, RoundOutcome, RoundPhase};
use tracing::{debug, info, instrument};

/// Player who opens every round.
pub const FIRST_PLAYER: Player = Player::X;

/// Outcome type reported by the tic-tac-toe engine.
pub type TicTacToeOutcome = RoundOutcome<Player, Position>;

/// Tic-tac-toe game engine for one round at a time.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) phase: RoundPhase,
    pub(crate) history: Vec<Position>,
}

impl TicTacToe {
    /// Creates a new round with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: FIRST_PLAYER,
            phase: RoundPhase::Active,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the positions played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the positions still open.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Plays a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfBounds`] for indices past 8, otherwise the
    /// same errors as [`BoardEngine::apply_move`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<TicTacToeOutcome, IllegalMove> {
        let pos = Position::from_index(index).ok_or(IllegalMove::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Replays positions from a fresh round.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMove`] hit, including moves after the round ended.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, IllegalMove> {
        let mut game = Self::new();
        for pos in moves {
            game.apply_move(*pos)?;
        }
        Ok(game)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardEngine for TicTacToe {
    type Player = Player;
    type Move = Position;
    type Coord = Position;

    #[instrument(skip(self), fields(player = %self.to_move))]
    fn begin_move(&mut self, pos: Position) -> Result<Placement<Player, Position>, IllegalMove> {
        LegalMove::check(pos, self)?;

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);
        self.phase = RoundPhase::Resolving;

        debug!(position = %pos, moves = self.history.len(), "Mark placed");
        Ok(Placement::new(player, pos))
    }

    #[instrument(skip(self), fields(player = %self.to_move))]
    fn resolve_move(&mut self) -> Result<TicTacToeOutcome, IllegalMove> {
        if self.phase != RoundPhase::Resolving {
            return Err(IllegalMove::NothingPending);
        }

        let player = self.to_move;
        let outcome = if let Some(line) = winning_line(&self.board, player) {
            self.phase = RoundPhase::Won;
            info!(%player, moves = self.history.len(), "Round won");
            RoundOutcome::Win {
                player,
                line: line.to_vec(),
            }
        } else if is_full(&self.board) {
            self.phase = RoundPhase::Drawn;
            info!(moves = self.history.len(), "Round drawn");
            RoundOutcome::Draw
        } else {
            self.phase = RoundPhase::Active;
            self.to_move = player.opponent();
            RoundOutcome::InProgress
        };

        assert_invariants(self);
        Ok(outcome)
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting round");
        *self = Self::new();
    }

    fn phase(&self) -> RoundPhase {
        self.phase
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn move_count(&self) -> usize {
        self.history.len()
    }
}
