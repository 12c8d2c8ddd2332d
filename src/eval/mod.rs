//! Position evaluation.
//!
//! Measures placements by playing them on a disposable copy of the board, so
//! the board being evaluated is never touched.

use crate::board::{BoardError, Coord, MutableBoard, Occupancy, ReadOnlyBoard};

/// How many cells `player` gains by placing at `coord`: the flipped cells
/// plus the placed piece.
///
/// The placement is checked against the full rule set, including turn order.
pub fn score_gain(
    board: &dyn ReadOnlyBoard,
    coord: Coord,
    player: Occupancy,
) -> Result<usize, BoardError> {
    let before = board.score(player);
    let mut probe = board.mutable_copy();
    probe.play(coord, player)?;
    Ok(probe.score(player) - before)
}

/// Piece difference from `player`'s point of view.
pub fn margin(board: &dyn ReadOnlyBoard, player: Occupancy) -> i64 {
    match player.opponent() {
        Some(other) => board.score(player) as i64 - board.score(other) as i64,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn gain_counts_flips_and_placed_piece() {
        let board = Board::hexagon(4).unwrap();
        assert_eq!(score_gain(&board, Coord::new(4, 1), Occupancy::Black), Ok(2));
        assert_eq!(board.score(Occupancy::Black), 3);
    }

    #[test]
    fn gain_rejects_illegal_placements() {
        let board = Board::hexagon(4).unwrap();
        assert_eq!(
            score_gain(&board, Coord::new(4, 1), Occupancy::White),
            Err(BoardError::NotYourTurn { player: Occupancy::White })
        );
        assert_eq!(
            score_gain(&board, Coord::new(6, 0), Occupancy::Black),
            Err(BoardError::NoCapture { coord: Coord::new(6, 0) })
        );
    }

    #[test]
    fn margin_is_signed() {
        let mut board = Board::square(4).unwrap();
        board.play(Coord::new(0, 2), Occupancy::Black).unwrap();
        assert_eq!(margin(&board, Occupancy::Black), 3);
        assert_eq!(margin(&board, Occupancy::White), -3);
        assert_eq!(margin(&board, Occupancy::Empty), 0);
    }
}
