//! Tests for the connect-four round lifecycle.

use parlor_core::{BoardEngine, IllegalMove, Placement, RoundOutcome, RoundPhase};
use parlor_connect4::{Cell, ConnectFour, Coord, Player, ROWS};

/// Drop order that fills the board with no four in a row.
const DRAWN_GAME: [usize; 42] = [
    2, 0, 0, 1, 0, 3, 0, 0, 1, 0, 2, 1, 2, 1, 1, 1, 5, 2, 5, 2, 2, 3, 3, 3, 3, 4, 4, 5, 4, 6, 4,
    4, 4, 6, 5, 6, 6, 3, 6, 5, 6, 5,
];

#[test]
fn test_vertical_win_in_first_column() {
    let mut game = ConnectFour::new();
    for column in [0, 1, 0, 2, 0, 3] {
        assert_eq!(game.apply_move(column), Ok(RoundOutcome::InProgress));
    }

    let outcome = game.apply_move(0).expect("Valid drop");
    assert_eq!(
        outcome,
        RoundOutcome::Win {
            player: Player::One,
            line: vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(0, 3),
            ],
        }
    );
    assert_eq!(game.phase(), RoundPhase::Won);
    assert_eq!(game.apply_move(4), Err(IllegalMove::RoundNotActive));
}

#[test]
fn test_drop_lands_on_lowest_empty_row() {
    let mut game = ConnectFour::new();
    for expected_row in 0..3 {
        let placement = game.begin_move(5).expect("Valid drop");
        assert_eq!(placement.cell, Coord::new(5, expected_row));
        game.resolve_move().expect("Pending drop");
    }
    assert_eq!(game.board().drop_row(5), Some(3));
}

#[test]
fn test_full_column_rejected() {
    let mut game = ConnectFour::replay(&[6; ROWS]).expect("Valid replay");
    let before = game.board().clone();
    let to_move = game.current_player();

    assert_eq!(game.begin_move(6), Err(IllegalMove::ColumnFull(6)));
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_player(), to_move);
    assert!(game.is_accepting_input());
}

#[test]
fn test_out_of_bounds_column() {
    let mut game = ConnectFour::new();
    assert_eq!(game.apply_move(7), Err(IllegalMove::OutOfBounds(7)));
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_resolution_window_rejects_input() {
    let mut game = ConnectFour::new();
    let placement = game.begin_move(3).expect("Valid drop");
    assert_eq!(placement, Placement::new(Player::One, Coord::new(3, 0)));
    assert_eq!(game.board().get(Coord::new(3, 0)), Some(Cell::Occupied(Player::One)));

    assert_eq!(game.begin_move(4), Err(IllegalMove::MovePending));
    assert_eq!(game.current_player(), Player::One);

    assert_eq!(game.resolve_move(), Ok(RoundOutcome::InProgress));
    assert_eq!(game.current_player(), Player::Two);
    assert!(game.begin_move(4).is_ok());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = ConnectFour::replay(&DRAWN_GAME[..41]).expect("Valid replay");
    assert_eq!(game.phase(), RoundPhase::Active);
    assert_eq!(game.open_columns(), vec![5]);

    assert_eq!(game.apply_move(5), Ok(RoundOutcome::Draw));
    assert_eq!(game.phase(), RoundPhase::Drawn);
    assert_eq!(game.move_count(), 42);
}

#[test]
fn test_mirrored_game_wins_on_mirrored_line() {
    // Player 2 completes a horizontal run along the bottom row
    let columns = [0, 1, 0, 2, 6, 3, 0, 4];
    let mirrored: Vec<usize> = columns.iter().map(|c| 6 - c).collect();

    let original = ConnectFour::replay(&columns[..7])
        .expect("Valid replay")
        .apply_move(columns[7])
        .expect("Valid drop");
    let reflected = ConnectFour::replay(&mirrored[..7])
        .expect("Valid replay")
        .apply_move(mirrored[7])
        .expect("Valid drop");

    assert_eq!(original.winner(), Some(Player::Two));
    assert_eq!(reflected.winner(), Some(Player::Two));

    let mut expected: Vec<Coord> = original.line().iter().map(|c| c.mirrored()).collect();
    let mut actual = reflected.line().to_vec();
    expected.sort();
    actual.sort();
    assert_eq!(expected, actual);
}
