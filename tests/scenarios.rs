/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use circular_chess::{Board, BoardError, Cell, Color, Move, MoveKind, Piece};

fn cell(annulus: u8, sector: u8) -> Cell {
    Cell::new(annulus, sector).unwrap()
}

fn destinations(board: &Board, from: Cell) -> Vec<Cell> {
    let mut cells = board
        .get_moves_from(from)
        .into_iter()
        .map(|mv| mv.to())
        .collect::<Vec<_>>();
    cells.sort();
    cells
}

#[test]
fn test_start_pawn_advances_one_or_two() {
    let board = Board::default();
    let moves = board.get_moves_from(cell(3, 10));

    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|mv| mv.captured().is_none()));
    assert_eq!(destinations(&board, cell(3, 10)), [cell(3, 8), cell(3, 9)]);

    let double = moves.iter().find(|mv| mv.to() == cell(3, 8)).unwrap();
    assert_eq!(double.kind(), MoveKind::PawnDoublePush);
}

#[test]
fn test_rook_stops_at_first_capture() {
    let mut board = Board::new();
    board.place(Piece::WHITE_ROOK, cell(3, 9));
    board.place(Piece::BLACK_PAWN, cell(2, 9));

    let moves = board.get_moves_from(cell(3, 9));
    let targets = destinations(&board, cell(3, 9));

    assert!(targets.contains(&cell(2, 9)));
    assert!(!targets.contains(&cell(1, 9)));
    assert!(!targets.contains(&cell(0, 9)));

    let capture = moves.iter().find(|mv| mv.to() == cell(2, 9)).unwrap();
    assert_eq!(capture.captured(), Some(Piece::BLACK_PAWN));
    assert_eq!(capture.to_notation(), "Rc4xc3");
    assert_eq!(moves.iter().filter(|mv| mv.captured().is_some()).count(), 1);
}

#[test]
fn test_knight_wraps_around_sector_zero() {
    let mut board = Board::new();
    board.place(Piece::WHITE_KNIGHT, cell(0, 0));

    let targets = destinations(&board, cell(0, 0));
    assert_eq!(targets, [cell(1, 2), cell(1, 14), cell(2, 1), cell(2, 15)]);
}

/// Walks every line to `depth`, checking each generated move against the board it was generated on.
/// Returns the number of positions visited.
fn assert_no_friendly_fire(board: &mut Board, depth: usize) -> u64 {
    let moves = board.get_valid_moves();
    for mv in &moves {
        assert_eq!(mv.piece().color(), board.side_to_move(), "{mv:?}");
        assert_eq!(board.piece_at(mv.from()), Some(mv.piece()), "{mv:?}");
        assert_eq!(board.piece_at(mv.to()), mv.captured(), "{mv:?}");
        if let Some(captured) = mv.captured() {
            assert!(captured.is_enemy_of(&mv.piece()), "{mv:?}\n{board}");
        }
    }

    if depth == 0 {
        return 1;
    }

    moves.into_iter().fold(1, |visited, mv| {
        board.apply_move(mv);
        let visited = visited + assert_no_friendly_fire(board, depth - 1);
        board.undo_move();
        visited
    })
}

#[test]
fn test_no_friendly_fire_anywhere() {
    let mut board = Board::default();
    let visited = assert_no_friendly_fire(&mut board, 3);

    // The root, plus every position at depths 1, 2 and 3
    assert_eq!(visited, 1 + 20 + 400 + 8584);
    assert_eq!(board, Board::default());
}

#[test]
fn test_sequence_then_full_undo() {
    let mut board = Board::default();
    let start = board.clone();

    let played = ["b4d4", "j4l4", "b3c3", "j3k3"];
    for (i, mv) in played.iter().enumerate() {
        let applied = board.make_move_str(mv).unwrap();
        assert_eq!(applied, *mv);
        assert_eq!(board.history().len(), i + 1);
    }
    assert_eq!(board.side_to_move(), Color::White);

    for mv in played.iter().rev() {
        assert_eq!(board.undo_move().unwrap(), *mv);
    }
    assert_eq!(board, start);

    // One more undo changes nothing
    assert!(board.undo_move().is_none());
    assert_eq!(board, start);
}

#[test]
fn test_king_may_be_captured() {
    let mut board = Board::new();
    board.place(Piece::WHITE_QUEEN, cell(1, 0));
    board.place(Piece::BLACK_KING, cell(1, 7));

    let mv = board.make_move_str("l2e2").unwrap();
    assert_eq!(mv.captured(), Some(Piece::BLACK_KING));
    assert_eq!(board.pieces().count(), 1);
    assert!(board.get_valid_moves().is_empty());
}

#[test]
fn test_checked_moves() {
    let mut board = Board::default();

    let rook = cell(3, 11);
    let blocked = Move::new(rook, cell(3, 9), Piece::WHITE_ROOK, None);
    assert_eq!(
        board.make_move_checked(blocked),
        Err(BoardError::IllegalMove {
            mv: blocked,
            side: Color::White,
        })
    );

    assert_eq!(
        Move::from_board(&board, cell(1, 0), cell(1, 1)),
        Err(BoardError::EmptyCell { cell: cell(1, 0) })
    );
    assert!(matches!(
        board.piece_at_checked(0, 16),
        Err(BoardError::OutOfBoundsCell { .. })
    ));

    assert_eq!(board, Board::default());
}

#[test]
fn test_pawn_stops_on_last_sector() {
    let mut board = Board::new();
    board.place(Piece::WHITE_PAWN, cell(2, 4));
    board.place(Piece::BLACK_PAWN, cell(1, 12));

    assert!(board.get_moves_from(cell(2, 4)).is_empty());
    board.toggle_side_to_move();
    assert!(board.get_moves_from(cell(1, 12)).is_empty());
}
