//! Core domain types for connect-four.

use derive_more::{Display, Error};
use parlor_core::PlayerKey;
use serde::{Deserialize, Serialize};

/// Number of columns on the board.
pub const COLUMNS: usize = 7;

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Player in the game.
///
/// Persisted as the integers `1` and `2`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Player 1 (goes first).
    #[display("Player 1")]
    One,
    /// Player 2 (goes second).
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the player's number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl PlayerKey for Player {
    const ALL: [Self; 2] = [Player::One, Player::Two];

    fn key(self) -> &'static str {
        match self {
            Player::One => "1",
            Player::Two => "2",
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

/// A player number other than 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Unknown player number {}", number)]
pub struct UnknownPlayer {
    /// The rejected number.
    pub number: u8,
}

impl TryFrom<u8> for Player {
    type Error = UnknownPlayer;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(UnknownPlayer { number }),
        }
    }
}

/// A cell on the connect-four board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's piece.
    Occupied(Player),
}

/// A board coordinate; row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display("({}, {})", column, row)]
pub struct Coord {
    /// Column, 0 on the left.
    pub column: usize,
    /// Row, 0 at the bottom.
    pub row: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Steps `distance` cells along `(dx, dy)`, staying on the board.
    pub fn offset(self, (dx, dy): (isize, isize), distance: isize) -> Option<Self> {
        let column = self.column.checked_add_signed(dx * distance)?;
        let row = self.row.checked_add_signed(dy * distance)?;
        (column < COLUMNS && row < ROWS).then_some(Self { column, row })
    }

    /// Returns the mirror image across the vertical center line.
    pub fn mirrored(self) -> Self {
        Self::new(COLUMNS - 1 - self.column, self.row)
    }
}

/// 7x6 connect-four board, stored column by column from the bottom up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: [[Cell; ROWS]; COLUMNS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            columns: [[Cell::Empty; ROWS]; COLUMNS],
        }
    }

    /// Gets the cell at the given coordinate, `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.columns
            .get(coord.column)
            .and_then(|column| column.get(coord.row))
            .copied()
    }

    /// Sets the cell at the given coordinate.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.columns[coord.column][coord.row] = cell;
    }

    /// Returns the lowest empty row in `column`, `None` when the column is full.
    pub fn drop_row(&self, column: usize) -> Option<usize> {
        self.columns
            .get(column)?
            .iter()
            .position(|cell| *cell == Cell::Empty)
    }

    /// Returns the cells of one column, bottom first.
    pub fn column(&self, column: usize) -> Option<&[Cell; ROWS]> {
        self.columns.get(column)
    }

    /// Iterates over every cell with its coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.columns.iter().enumerate().flat_map(|(column, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(row, cell)| (Coord::new(column, row), *cell))
        })
    }

    /// Counts the cells holding the given player's piece.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Formats the board top row first, `.` for empty cells.
    pub fn display(&self) -> String {
        (0..ROWS)
            .rev()
            .map(|row| {
                (0..COLUMNS)
                    .map(|column| match self.columns[column][row] {
                        Cell::Empty => '.',
                        Cell::Occupied(Player::One) => '1',
                        Cell::Occupied(Player::Two) => '2',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
