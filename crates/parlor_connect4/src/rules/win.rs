//! Win detection logic for connect-four.
//!
//! Only lines through the piece just dropped can be new, so the scan starts
//! there and walks each axis both ways.

use crate::{Board, Cell, Coord, Player};
use tracing::instrument;

/// Pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Scan axes: vertical, horizontal, diagonal, anti-diagonal.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Returns the run through `origin` that wins for `player`, if any.
///
/// Each direction of an axis is followed for at most three steps. The line is
/// ordered from the far negative end through the origin to the far positive end.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, origin: Coord, player: Player) -> Option<Vec<Coord>> {
    let steps = WIN_LENGTH as isize - 1;
    let run = |axis: (isize, isize), sign: isize| -> Vec<Coord> {
        (1..=steps)
            .map_while(|distance| {
                origin
                    .offset(axis, sign * distance)
                    .filter(|coord| board.get(*coord) == Some(Cell::Occupied(player)))
            })
            .collect()
    };

    AXES.into_iter().find_map(|axis| {
        let forward = run(axis, 1);
        let backward = run(axis, -1);
        if 1 + forward.len() + backward.len() < WIN_LENGTH {
            return None;
        }

        let mut line: Vec<Coord> = backward.into_iter().rev().collect();
        line.push(origin);
        line.extend(forward);
        Some(line)
    })
}
