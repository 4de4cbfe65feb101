//! Connect-four board engine.

use super::contracts::{LegalDrop, assert_invariants};
use super::rules::{is_full, winning_line};
use super::{Board, Cell, Coord, Player};
use parlor_core::{BoardEngine, IllegalMove, Placement, PlayerKey, RoundOutcome, RoundPhase};
use tracing::{debug, info, instrument};

/// Player who opens every round.
pub const FIRST_PLAYER: Player = Player::One;

/// Outcome type reported by the connect-four engine.
pub type ConnectFourOutcome = RoundOutcome<Player, Coord>;

/// Connect-four game engine for one round at a time.
///
/// Moves name a column; the piece lands on the lowest empty row.
#[derive(Debug, Clone)]
pub struct ConnectFour {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) phase: RoundPhase,
    pub(crate) history: Vec<Coord>,
}

impl ConnectFour {
    /// Creates a new round with player 1 to move.
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

    /// Returns the landing cells of this round's drops, in order.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// Returns the columns that still have room.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..super::COLUMNS)
            .filter(|column| self.board.drop_row(*column).is_some())
            .collect()
    }

    /// Replays column drops from a fresh round.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMove`] hit, including drops after the round ended.
    #[instrument]
    pub fn replay(columns: &[usize]) -> Result<Self, IllegalMove> {
        let mut game = Self::new();
        for column in columns {
            game.apply_move(*column)?;
        }
        Ok(game)
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardEngine for ConnectFour {
    type Player = Player;
    type Move = usize;
    type Coord = Coord;

    #[instrument(skip(self), fields(player = %self.to_move))]
    fn begin_move(&mut self, column: usize) -> Result<Placement<Player, Coord>, IllegalMove> {
        let landing = LegalDrop::check(column, self)?;

        let player = self.to_move;
        self.board.set(landing, Cell::Occupied(player));
        self.history.push(landing);
        self.phase = RoundPhase::Resolving;

        debug!(%landing, moves = self.history.len(), "Piece dropped");
        Ok(Placement::new(player, landing))
    }

    #[instrument(skip(self), fields(player = %self.to_move))]
    fn resolve_move(&mut self) -> Result<ConnectFourOutcome, IllegalMove> {
        let landing = match (self.phase, self.history.last()) {
            (RoundPhase::Resolving, Some(landing)) => *landing,
            _ => return Err(IllegalMove::NothingPending),
        };

        let player = self.to_move;
        let outcome = if let Some(line) = winning_line(&self.board, landing, player) {
            self.phase = RoundPhase::Won;
            info!(%player, moves = self.history.len(), "Round won");
            RoundOutcome::Win { player, line }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ROWS;

    #[test]
    fn test_drops_stack_in_column() {
        let mut game = ConnectFour::new();
        assert_eq!(game.begin_move(2), Ok(Placement::new(Player::One, Coord::new(2, 0))));
        assert_eq!(game.resolve_move(), Ok(RoundOutcome::InProgress));
        assert_eq!(game.begin_move(2), Ok(Placement::new(Player::Two, Coord::new(2, 1))));
        assert_eq!(game.resolve_move(), Ok(RoundOutcome::InProgress));
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_full_column_rejected_without_change() {
        let mut game = ConnectFour::replay(&[0; ROWS]).expect("legal replay");
        assert_eq!(game.open_columns(), vec![1, 2, 3, 4, 5, 6]);
        let before = game.board().clone();

        assert_eq!(game.apply_move(0), Err(IllegalMove::ColumnFull(0)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.move_count(), ROWS);
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_resolve_without_drop() {
        let mut game = ConnectFour::new();
        assert_eq!(game.resolve_move(), Err(IllegalMove::NothingPending));
    }

    #[test]
    fn test_reset_clears_round() {
        let mut game = ConnectFour::replay(&[3, 4, 3]).expect("legal replay");
        game.reset();
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.current_player(), FIRST_PLAYER);
        assert_eq!(game.board(), &Board::new());
    }
}
