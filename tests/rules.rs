//! Board engine scenarios played through the public API.

use reversi::board::{
    Board, BoardError, Coord, ErrorKind, Geometry, Move, MutableBoard, Occupancy, ReadOnlyBoard,
    Termination,
};
use reversi::movegen::legal_moves;

const B: Occupancy = Occupancy::Black;
const W: Occupancy = Occupancy::White;

/// A full hex-4 game that ends with neither side able to move.
const HEX4_GAME: [(i32, i32, Occupancy); 23] = [
    (4, 1, B),
    (5, 0, W),
    (4, 0, B),
    (1, 4, W),
    (0, 5, B),
    (0, 4, W),
    (0, 3, B),
    (2, 2, W),
    (4, 4, B),
    (2, 5, W),
    (1, 6, B),
    (2, 6, W),
    (6, 0, B),
    (5, 2, W),
    (3, 6, B),
    (4, 5, W),
    (2, 1, B),
    (1, 2, W),
    (5, 4, B),
    (3, 0, W),
    (6, 1, B),
    (6, 2, W),
    (6, 3, B),
];

fn play_all(board: &mut Board, moves: &[(i32, i32, Occupancy)]) {
    for &(q, r, p) in moves {
        board
            .play(Coord::new(q, r), p)
            .unwrap_or_else(|e| panic!("({},{}) for {}: {}", q, r, p, e));
    }
}

#[test]
fn starting_scores_are_equal() {
    for n in 3..10 {
        let board = Board::hexagon(n).unwrap();
        assert_eq!(board.score(B), 3, "hex {}", n);
        assert_eq!(board.score(W), 3, "hex {}", n);
        assert_eq!(board.occupancy(Coord::new(n - 1, n - 1)), Ok(Occupancy::Empty));
    }
    for n in [4, 6, 8, 10, 12] {
        let board = Board::square(n).unwrap();
        assert_eq!(board.score(B), 2, "square {}", n);
        assert_eq!(board.score(W), 2, "square {}", n);
    }
}

#[test]
fn invalid_sizes_are_rejected() {
    assert_eq!(
        Board::square(5).unwrap_err(),
        BoardError::InvalidSize { topology: reversi::board::Topology::Square, size: 5 }
    );
    assert_eq!(Board::hexagon(2).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn hex_four_opening_and_pass() {
    let mut board = Board::hexagon(4).unwrap();
    board.play(Coord::new(4, 1), B).unwrap();
    assert_eq!((board.score(B), board.score(W)), (5, 2));
    board.pass().unwrap();
    board.play(Coord::new(2, 2), B).unwrap();
    assert_eq!((board.score(B), board.score(W)), (7, 1));
    assert_eq!(board.current_player(), W);
}

#[test]
fn hex_six_short_sequence() {
    let mut board = Board::hexagon(6).unwrap();
    play_all(&mut board, &[(6, 3, B), (7, 2, W), (6, 2, B)]);
    assert_eq!((board.score(B), board.score(W)), (5, 4));
}

#[test]
fn square_four_flip_back_and_forth() {
    let mut board = Board::square(4).unwrap();
    board.play(Coord::new(3, 1), B).unwrap();
    assert_eq!((board.score(B), board.score(W)), (4, 1));
    board.play(Coord::new(3, 0), W).unwrap();
    assert_eq!((board.score(B), board.score(W)), (3, 3));
}

#[test]
fn square_four_pass_then_reply() {
    let mut board = Board::square(4).unwrap();
    board.pass().unwrap();
    board.play(Coord::new(0, 1), W).unwrap();
    assert_eq!((board.score(W), board.score(B)), (4, 1));
    board.play(Coord::new(0, 0), B).unwrap();
    assert_eq!((board.score(B), board.score(W)), (3, 3));
}

#[test]
fn full_game_ends_without_passes() {
    let mut board = Board::hexagon(4).unwrap();
    play_all(&mut board, &HEX4_GAME[..9]);
    assert_eq!((board.score(B), board.score(W)), (12, 3));

    play_all(&mut board, &HEX4_GAME[9..20]);
    assert_eq!((board.score(B), board.score(W)), (18, 8));
    assert_eq!(board.current_player(), B);
    assert!(!board.can_move(W));
    assert!(board.can_move(B));
    assert_eq!(legal_moves(&board, B), vec![Coord::new(6, 1)]);
    assert!(!board.is_game_over());

    play_all(&mut board, &HEX4_GAME[20..]);
    assert!(board.is_game_over());
    assert_eq!(board.pass_count(), 0);
    assert_eq!(board.termination(), Some(Termination::NoLegalMoves));
    assert_eq!((board.score(B), board.score(W)), (22, 7));
    assert_eq!(board.current_player(), W);
    assert_eq!(board.winner(), Some(B));
    assert_eq!(board.play(Coord::new(0, 6), W), Err(BoardError::NoCapture { coord: Coord::new(0, 6) }));
}

#[test]
fn pass_counter_needs_consecutive_passes() {
    let mut board = Board::square(6).unwrap();
    board.pass().unwrap();
    board.play(Coord::new(2, 1), W).unwrap();
    board.pass().unwrap();
    assert!(!board.is_game_over());
    board.pass().unwrap();
    assert!(board.is_game_over());
    assert_eq!(board.termination(), Some(Termination::TwoPasses));
    assert_eq!(board.pass(), Err(BoardError::GameOver));
}

#[test]
fn out_of_turn_play_leaves_everything_unchanged() {
    let mut board = Board::hexagon(5).unwrap();
    board.play(Coord::new(5, 2), B).unwrap();
    let before = board.snapshot();
    let err = board.play(Coord::new(6, 1), B).unwrap_err();
    assert_eq!(err, BoardError::NotYourTurn { player: B });
    assert!(err.is_rule_violation());
    assert_eq!(board, before);
    assert_eq!(board.hex_list(), before.hex_list());
}

#[test]
fn copies_never_touch_the_source() {
    let board = Board::hexagon(6).unwrap();
    let mut copy = board.mutable_copy();
    for mv in [Move::place(6, 3, B), Move::pass(W), Move::place(4, 4, B)] {
        copy.apply(&mv).unwrap();
    }
    assert_eq!(board.score(B), 3);
    assert_eq!(board.current_player(), B);
    assert_eq!(board.pass_count(), 0);
    assert_eq!(board.occupancy(Coord::new(6, 3)), Ok(Occupancy::Empty));
    assert_ne!(copy.score(B), 3);
}

#[test]
fn apply_checks_the_passing_color() {
    let mut board = Board::hexagon(4).unwrap();
    assert_eq!(board.apply(&Move::pass(W)), Err(BoardError::NotYourTurn { player: W }));
    assert_eq!(board.apply(&Move::pass(Occupancy::Empty)), Err(BoardError::NoPlayer));
    board.apply(&Move::pass(B)).unwrap();
    assert_eq!(board.current_player(), W);
}

#[test]
fn off_board_queries_fail() {
    let board = Board::hexagon(4).unwrap();
    for c in [Coord::new(0, 0), Coord::new(6, 6), Coord::new(-1, 3), Coord::new(3, 7)] {
        assert_eq!(board.occupancy(c), Err(BoardError::OffBoard { coord: c }));
        assert_eq!(board.can_move_at(c, B), Err(BoardError::OffBoard { coord: c }));
    }
    assert_eq!(board.array_width(), 7);
    assert_eq!(board.board_size(), 4);
}

#[test]
fn legal_moves_match_point_queries() {
    for geometry in [Geometry::hexagon(5).unwrap(), Geometry::square(8).unwrap()] {
        let board = Board::new(geometry);
        let moves = legal_moves(&board, B);
        assert!(!moves.is_empty());
        for c in geometry.cells() {
            assert_eq!(moves.contains(&c), board.can_move_at(c, B).unwrap(), "{}", c);
        }
    }
    let board = Board::square(8).unwrap();
    assert_eq!(
        legal_moves(&board, B),
        vec![Coord::new(4, 2), Coord::new(5, 3), Coord::new(2, 4), Coord::new(3, 5)]
    );
}
