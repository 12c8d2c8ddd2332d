//! Board access contracts.
//!
//! Strategies and players only ever see a `ReadOnlyBoard`. Whatever drives
//! the game holds the `MutableBoard`. Speculative evaluation goes through
//! `mutable_copy`, which hands out an owned, independent `Board`.

use super::coord::Coord;
use super::error::BoardError;
use super::geometry::Geometry;
use super::moves::Move;
use super::observer::BoardObserver;
use super::occupancy::Occupancy;
use super::state::Board;

pub trait ReadOnlyBoard {
    /// The full backing grid, indexed `[r][q]`. Off-board slots are `None`.
    /// The returned grid is a copy.
    fn hex_list(&self) -> Vec<Vec<Option<Occupancy>>>;

    /// Number of cells holding `player`.
    fn score(&self, player: Occupancy) -> usize;

    /// True once two passes happened back to back, or when neither color has
    /// a legal placement left.
    fn is_game_over(&self) -> bool;

    fn current_player(&self) -> Occupancy;

    fn board_size(&self) -> i32;

    fn geometry(&self) -> Geometry;

    /// Width of the backing grid, for callers that iterate it directly.
    fn array_width(&self) -> i32 {
        self.geometry().array_width()
    }

    fn occupancy(&self, coord: Coord) -> Result<Occupancy, BoardError>;

    /// Returns whether `player` could place at `coord` right now, ignoring
    /// whose turn it is. Fails only for off-board coordinates.
    fn can_move_at(&self, coord: Coord, player: Occupancy) -> Result<bool, BoardError>;

    /// Returns whether `player` has any legal placement on the board.
    fn can_move(&self, player: Occupancy) -> bool;

    fn add_observer(&mut self, observer: Box<dyn BoardObserver>);

    /// An independent copy for reading.
    fn read_only_copy(&self) -> Box<dyn ReadOnlyBoard>;

    /// An independent copy that may be played on. Changes to the copy never
    /// reach this board and the copy has no observers.
    fn mutable_copy(&self) -> Board;
}

pub trait MutableBoard: ReadOnlyBoard {
    /// Places `player` at `coord`, flipping every captured line.
    fn play(&mut self, coord: Coord, player: Occupancy) -> Result<(), BoardError>;

    /// Gives up the current turn. Two passes in a row end the game.
    fn pass(&mut self) -> Result<(), BoardError>;

    /// Announces the start of the game to observers.
    fn start_game(&mut self);

    /// Hands the move to the other color without counting a pass. Used on
    /// snapshots to ask what the opponent would do from this position.
    fn skip_turn(&mut self) -> Result<(), BoardError>;

    /// Applies a move produced by a player.
    fn apply(&mut self, mv: &Move) -> Result<(), BoardError> {
        match *mv {
            Move::Place { at, player } => self.play(at, player),
            Move::Pass { player } => {
                if !player.is_player() {
                    return Err(BoardError::NoPlayer);
                }
                if player != self.current_player() {
                    return Err(BoardError::NotYourTurn { player });
                }
                self.pass()
            }
        }
    }
}
