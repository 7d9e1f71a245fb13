//! Scripted games against the controller.

use std::sync::Arc;
use timetravel_tictactoe::{Board, Cell, GameController, GameStatus, Mark, WinLine};

fn cells(board: &Board) -> [Option<Mark>; 9] {
    board.cells().map(Cell::mark)
}

#[test]
fn test_top_row_win() {
    let mut game = GameController::new();
    for index in [0, 3, 1, 4, 2] {
        game.click(index);
    }

    assert_eq!(game.winner(), Some(Mark::X));
    assert_eq!(game.winning_line(), Some(WinLine::TopRow));
    assert_eq!(game.winning_line().map(WinLine::indices), Some([0, 1, 2]));
    assert_eq!(
        cells(&game.board()),
        [
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::O),
            Some(Mark::O),
            None,
            None,
            None,
            None,
        ]
    );
    assert!(!game.is_draw());
}

#[test]
fn test_full_board_draw() {
    let mut game = GameController::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.click(index);
    }

    assert_eq!(game.winner(), None);
    assert!(game.board().is_full());
    assert!(game.is_draw());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.state().history().len(), 10);
}

#[test]
fn test_jump_back_recomputes_turn_and_winner() {
    let mut game = GameController::new();
    for index in [0, 3, 1] {
        game.click(index);
    }
    game.jump_to_move(1);

    assert_eq!(
        cells(&game.board()),
        [Some(Mark::X), None, None, None, None, None, None, None, None]
    );
    assert_eq!(game.current_player(), Mark::O);
    assert_eq!(game.winner(), None);
    assert_eq!(game.state().history().len(), 4);
}

#[test]
fn test_click_on_occupied_cell_is_noop() {
    let mut game = GameController::new();
    let first = game.click(0);
    let second = game.click(0);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.cursor(), 1);
    assert_eq!(second.board().mark_count(), 1);
}

#[test]
fn test_click_out_of_range_is_noop() {
    let mut game = GameController::new();
    let start = game.state();
    let after_negative = game.click(-1);
    let after_nine = game.click(9);

    assert!(Arc::ptr_eq(&start, &after_negative));
    assert!(Arc::ptr_eq(&start, &after_nine));
    assert_eq!(after_nine.cursor(), 0);
    assert_eq!(after_nine.board(), &Board::new());
}

#[test]
fn test_branching_discards_future() {
    let mut game = GameController::new();
    for index in [0, 1, 2] {
        game.click(index);
    }
    game.jump_to_move(1);
    let state = game.click(4);

    assert_eq!(state.history().len(), 3);
    assert_eq!(state.cursor(), 2);
    assert_eq!(state.board().cells()[4], Cell::Marked(Mark::O));
    assert_eq!(state.board().cells()[2], Cell::Empty);
    assert_eq!(state.board().cells()[1], Cell::Empty);
}

#[test]
fn test_click_after_win_is_noop() {
    let mut game = GameController::new();
    for index in [0, 3, 1, 4, 2] {
        game.click(index);
    }
    let won = game.state();
    let after = game.click(8);
    assert!(Arc::ptr_eq(&won, &after));
}

#[test]
fn test_jump_out_of_range_is_noop() {
    let mut game = GameController::new();
    game.click(4);
    let before = game.state();

    assert!(Arc::ptr_eq(&before, &game.jump_to_move(-1)));
    assert!(Arc::ptr_eq(&before, &game.jump_to_move(2)));
    assert_eq!(game.state().cursor(), 1);
}

#[test]
fn test_jump_leaves_finished_game() {
    let mut game = GameController::new();
    for index in [0, 3, 1, 4, 2] {
        game.click(index);
    }
    game.jump_to_move(4);
    assert_eq!(game.status(), GameStatus::InProgress);

    // Playing on from the earlier board takes a different line.
    game.click(8);
    assert_eq!(game.state().history().len(), 6);
    assert_eq!(game.winner(), None);

    game.jump_to_move(5);
    assert_eq!(game.current_player(), Mark::O);
}

#[test]
fn test_accepted_transitions_produce_new_snapshots() {
    let mut game = GameController::new();
    let start = game.state();
    let moved = game.click(4);
    assert!(!Arc::ptr_eq(&start, &moved));

    let jumped = game.jump_to_move(1);
    assert!(!Arc::ptr_eq(&moved, &jumped));
    assert_eq!(*moved, *jumped);

    let reset = game.reset();
    assert!(!Arc::ptr_eq(&jumped, &reset));
    assert_eq!(*reset, GameController::initial_state());
}

#[test]
fn test_reset_from_finished_game() {
    let mut game = GameController::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.click(index);
    }
    let state = game.reset();
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.cursor(), 0);
    assert_eq!(state.winner(), None);
    assert!(!state.is_draw());
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn test_board_at_and_moves() {
    let mut game = GameController::new();
    for index in [4, 0] {
        game.click(index);
    }
    assert_eq!(game.board_at(0), Some(Board::new()));
    assert_eq!(game.board_at(3), None);

    let labels: Vec<String> = game
        .state()
        .history()
        .moves()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, vec!["X -> Center", "O -> Top-left"]);
}
