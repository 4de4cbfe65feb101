//! Draw detection logic for connect-four.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds a piece.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{COLUMNS, Coord, Player, ROWS};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in 0..COLUMNS {
            for row in 0..ROWS {
                board.set(Coord::new(column, row), Cell::Occupied(Player::One));
            }
        }
        assert!(is_full(&board));

        board.set(Coord::new(6, 5), Cell::Empty);
        assert!(!is_full(&board));
    }
}
