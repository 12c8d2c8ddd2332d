//! Corner-aware policies.
//!
//! Both look at the four corners of the board's topology. `AvoidCorners`
//! stays off the cells touching a corner; `GoForCorners` only takes corners.

use tracing::debug;

use super::{ensure_turn, most_gaining, Strategy, StrategyError};
use crate::board::{Coord, Move, Occupancy, ReadOnlyBoard};
use crate::movegen::legal_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidCorners;

impl Strategy for AvoidCorners {
    fn choose_move(
        &self,
        board: &dyn ReadOnlyBoard,
        player: Occupancy,
    ) -> Result<Move, StrategyError> {
        ensure_turn(board, player)?;
        let legal = legal_moves(board, player);
        if legal.is_empty() {
            return Err(StrategyError::NoLegalMove { player });
        }
        let corners = board.geometry().corners();
        let safe: Vec<Coord> = legal
            .into_iter()
            .filter(|m| !corners.iter().any(|c| c.touches(*m)))
            .collect();
        let at = most_gaining(board, player, &safe)?.ok_or(StrategyError::NoCandidate {
            strategy: "avoid-corners",
            player,
        })?;
        debug!(strategy = "avoid-corners", %player, %at, candidates = safe.len(), "chose move");
        Ok(Move::Place { at, player })
    }

    fn name(&self) -> String {
        "avoid-corners".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoForCorners;

impl Strategy for GoForCorners {
    fn choose_move(
        &self,
        board: &dyn ReadOnlyBoard,
        player: Occupancy,
    ) -> Result<Move, StrategyError> {
        ensure_turn(board, player)?;
        let legal = legal_moves(board, player);
        if legal.is_empty() {
            return Err(StrategyError::NoLegalMove { player });
        }
        let geometry = board.geometry();
        let open: Vec<Coord> = legal.into_iter().filter(|c| geometry.is_corner(*c)).collect();
        let at = most_gaining(board, player, &open)?.ok_or(StrategyError::NoCandidate {
            strategy: "go-for-corners",
            player,
        })?;
        debug!(strategy = "go-for-corners", %player, %at, "took corner");
        Ok(Move::Place { at, player })
    }

    fn name(&self) -> String {
        "go-for-corners".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Geometry};

    #[test]
    fn avoid_corners_skips_corner_neighbours() {
        // every opening move on the 4x4 board touches a corner
        let board = Board::square(4).unwrap();
        assert_eq!(
            AvoidCorners.choose_move(&board, Occupancy::Black),
            Err(StrategyError::NoCandidate { strategy: "avoid-corners", player: Occupancy::Black })
        );
        let board = Board::square(6).unwrap();
        assert_eq!(
            AvoidCorners.choose_move(&board, Occupancy::Black),
            Ok(Move::place(3, 1, Occupancy::Black))
        );
    }

    #[test]
    fn avoid_corners_may_take_the_corner_itself() {
        let g = Geometry::square(6).unwrap();
        let board = Board::from_position(
            g,
            &[(Coord::new(1, 0), Occupancy::White), (Coord::new(2, 0), Occupancy::Black)],
            Occupancy::Black,
        )
        .unwrap();
        assert_eq!(
            AvoidCorners.choose_move(&board, Occupancy::Black),
            Ok(Move::place(0, 0, Occupancy::Black))
        );
    }

    #[test]
    fn go_for_corners_takes_open_corner() {
        let g = Geometry::square(4).unwrap();
        let board = Board::from_position(
            g,
            &[(Coord::new(1, 0), Occupancy::White), (Coord::new(2, 0), Occupancy::Black)],
            Occupancy::Black,
        )
        .unwrap();
        assert_eq!(
            GoForCorners.choose_move(&board, Occupancy::Black),
            Ok(Move::place(0, 0, Occupancy::Black))
        );
    }

    #[test]
    fn go_for_corners_without_corner() {
        let board = Board::hexagon(4).unwrap();
        assert_eq!(
            GoForCorners.choose_move(&board, Occupancy::Black),
            Err(StrategyError::NoCandidate { strategy: "go-for-corners", player: Occupancy::Black })
        );
        assert_eq!(
            GoForCorners.choose_move(&board, Occupancy::White),
            Err(StrategyError::NotYourTurn { player: Occupancy::White })
        );
    }
}
