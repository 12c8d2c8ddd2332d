//! Legal move generation.
//!
//! Enumerates the placements available to a color and picks random ones for
//! varied self-play openings.

use rand::Rng;

use crate::board::{Coord, Move, Occupancy, ReadOnlyBoard};

/// Every cell where `player` may place right now, upper-left first.
///
/// Turn order is not checked; callers that care compare against
/// `current_player` themselves. A finished game has no legal moves.
pub fn legal_moves(board: &dyn ReadOnlyBoard, player: Occupancy) -> Vec<Coord> {
    if !player.is_player() || board.is_game_over() {
        return Vec::new();
    }
    board
        .geometry()
        .cells()
        .filter(|c| matches!(board.can_move_at(*c, player), Ok(true)))
        .collect()
}

/// Picks a uniformly random legal placement for the side to move, or a pass
/// when it has none.
pub fn random_move(board: &dyn ReadOnlyBoard, rng: &mut impl Rng) -> Move {
    let player = board.current_player();
    let legal = legal_moves(board, player);
    if legal.is_empty() {
        return Move::pass(player);
    }
    let idx = rng.gen_range(0..legal.len());
    Move::Place { at: legal[idx], player }
}
