//! The board engine.
//!
//! Holds cell occupancy, the side to move, the consecutive-pass counter and
//! the ended flag, and implements placement, capture resolution, passing and
//! scoring over any `Geometry`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::contract::{MutableBoard, ReadOnlyBoard};
use super::coord::Coord;
use super::error::BoardError;
use super::geometry::Geometry;
use super::observer::BoardObserver;
use super::occupancy::{Occupancy, PLAYERS};

/// Passes in a row that end the game.
const PASSES_TO_END: u8 = 2;

/// How a finished game came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Both colors passed back to back.
    TwoPasses,
    /// Neither color has a legal placement left.
    NoLegalMoves,
}

pub struct Board {
    geometry: Geometry,
    /// Row-major grid; `None` marks slots that are not part of the board.
    cells: Vec<Option<Occupancy>>,
    current: Occupancy,
    passes: u8,
    ended: bool,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl Board {
    /// Creates a board in the opening position with Black to move.
    pub fn new(geometry: Geometry) -> Self {
        let mut board = Board::empty(geometry);
        for (coord, occupancy) in geometry.starting_layout() {
            board.set(coord, occupancy);
        }
        board
    }

    pub fn hexagon(size: i32) -> Result<Self, BoardError> {
        Ok(Board::new(Geometry::hexagon(size)?))
    }

    pub fn square(size: i32) -> Result<Self, BoardError> {
        Ok(Board::new(Geometry::square(size)?))
    }

    /// Builds an arbitrary position: every listed piece on an otherwise
    /// empty board, with `to_move` to play.
    pub fn from_position(
        geometry: Geometry,
        pieces: &[(Coord, Occupancy)],
        to_move: Occupancy,
    ) -> Result<Self, BoardError> {
        if !to_move.is_player() {
            return Err(BoardError::NoPlayer);
        }
        let mut board = Board::empty(geometry);
        for &(coord, occupancy) in pieces {
            if !geometry.contains(coord) {
                return Err(BoardError::OffBoard { coord });
            }
            board.set(coord, occupancy);
        }
        board.current = to_move;
        Ok(board)
    }

    fn empty(geometry: Geometry) -> Self {
        let width = geometry.array_width();
        let cells = (0..geometry.grid_len())
            .map(|i| {
                let coord = Coord::new(i as i32 % width, i as i32 / width);
                geometry.contains(coord).then_some(Occupancy::Empty)
            })
            .collect();
        Board {
            geometry,
            cells,
            current: Occupancy::Black,
            passes: 0,
            ended: false,
            observers: Vec::new(),
        }
    }

    /// An independent copy of the position without any observers.
    pub fn snapshot(&self) -> Board {
        Board {
            geometry: self.geometry,
            cells: self.cells.clone(),
            current: self.current,
            passes: self.passes,
            ended: self.ended,
            observers: Vec::new(),
        }
    }

    /// Consecutive passes since the last placement.
    pub fn pass_count(&self) -> u8 {
        self.passes
    }

    /// The cells `player` would flip by placing at `coord`, in direction
    /// order. Empty when the placement is illegal.
    pub fn captures(&self, coord: Coord, player: Occupancy) -> Result<Vec<Coord>, BoardError> {
        self.ensure_on_board(coord)?;
        Ok(self.flips(coord, player))
    }

    /// The reason the game ended, or `None` while it is still running.
    pub fn termination(&self) -> Option<Termination> {
        if self.ended {
            Some(Termination::TwoPasses)
        } else if PLAYERS.iter().all(|p| !self.can_move(*p)) {
            Some(Termination::NoLegalMoves)
        } else {
            None
        }
    }

    /// The color with more pieces once the game is over; `None` for a draw
    /// or a game still in progress.
    pub fn winner(&self) -> Option<Occupancy> {
        if !self.is_game_over() {
            return None;
        }
        let black = self.score(Occupancy::Black);
        let white = self.score(Occupancy::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Occupancy::Black),
            std::cmp::Ordering::Less => Some(Occupancy::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn cell(&self, coord: Coord) -> Option<Occupancy> {
        self.geometry.index(coord).and_then(|i| self.cells[i])
    }

    fn set(&mut self, coord: Coord, occupancy: Occupancy) {
        if let Some(i) = self.geometry.index(coord) {
            self.cells[i] = Some(occupancy);
        }
    }

    fn ensure_on_board(&self, coord: Coord) -> Result<(), BoardError> {
        if self.geometry.contains(coord) {
            Ok(())
        } else {
            Err(BoardError::OffBoard { coord })
        }
    }

    /// Walks from `from` along `dir`. Returns the run of opponent cells if it
    /// is closed by one of `player`'s cells, otherwise nothing.
    fn scan(&self, from: Coord, dir: Coord, player: Occupancy) -> Vec<Coord> {
        let mut line = Vec::new();
        let mut at = from + dir;
        while let Some(occupancy) = self.cell(at) {
            if occupancy == Occupancy::Empty {
                return Vec::new();
            }
            if occupancy == player {
                return line;
            }
            line.push(at);
            at = at + dir;
        }
        Vec::new()
    }

    fn flips(&self, coord: Coord, player: Occupancy) -> Vec<Coord> {
        if !player.is_player() || self.cell(coord) != Some(Occupancy::Empty) {
            return Vec::new();
        }
        self.geometry
            .directions()
            .iter()
            .flat_map(|dir| self.scan(coord, *dir, player))
            .collect()
    }

    fn switch_player(&mut self) {
        self.current = self.current.opponent().unwrap_or(Occupancy::Black);
    }

    fn notify_changed(&mut self) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer.on_board_changed(&*self);
        }
        self.observers = observers;
    }
}

impl ReadOnlyBoard for Board {
    fn hex_list(&self) -> Vec<Vec<Option<Occupancy>>> {
        let width = self.geometry.array_width() as usize;
        self.cells.chunks(width).map(|row| row.to_vec()).collect()
    }

    fn score(&self, player: Occupancy) -> usize {
        self.cells.iter().filter(|c| **c == Some(player)).count()
    }

    fn is_game_over(&self) -> bool {
        self.ended || PLAYERS.iter().all(|p| !self.can_move(*p))
    }

    fn current_player(&self) -> Occupancy {
        self.current
    }

    fn board_size(&self) -> i32 {
        self.geometry.size()
    }

    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn occupancy(&self, coord: Coord) -> Result<Occupancy, BoardError> {
        self.cell(coord).ok_or(BoardError::OffBoard { coord })
    }

    fn can_move_at(&self, coord: Coord, player: Occupancy) -> Result<bool, BoardError> {
        self.ensure_on_board(coord)?;
        Ok(!self.flips(coord, player).is_empty())
    }

    fn can_move(&self, player: Occupancy) -> bool {
        self.geometry
            .cells()
            .any(|coord| !self.flips(coord, player).is_empty())
    }

    fn add_observer(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    fn read_only_copy(&self) -> Box<dyn ReadOnlyBoard> {
        Box::new(self.snapshot())
    }

    fn mutable_copy(&self) -> Board {
        self.snapshot()
    }
}

impl MutableBoard for Board {
    fn play(&mut self, coord: Coord, player: Occupancy) -> Result<(), BoardError> {
        if !player.is_player() {
            return Err(BoardError::NoPlayer);
        }
        self.ensure_on_board(coord)?;
        if self.ended {
            return Err(BoardError::GameOver);
        }
        if player != self.current {
            return Err(BoardError::NotYourTurn { player });
        }
        if self.cell(coord) != Some(Occupancy::Empty) {
            return Err(BoardError::Occupied { coord });
        }
        let flipped = self.flips(coord, player);
        if flipped.is_empty() {
            return Err(BoardError::NoCapture { coord });
        }

        for c in &flipped {
            self.set(*c, player);
        }
        self.set(coord, player);
        self.switch_player();
        self.passes = 0;
        trace!(%coord, %player, flipped = flipped.len(), "placed");
        self.notify_changed();
        Ok(())
    }

    fn pass(&mut self) -> Result<(), BoardError> {
        if self.ended {
            return Err(BoardError::GameOver);
        }
        let passer = self.current;
        self.switch_player();
        self.passes += 1;
        if self.passes >= PASSES_TO_END {
            self.ended = true;
        }
        trace!(player = %passer, passes = self.passes, ended = self.ended, "passed");
        self.notify_changed();
        Ok(())
    }

    fn start_game(&mut self) {
        trace!(geometry = ?self.geometry, "game started");
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer.on_game_started(&*self);
        }
        self.observers = observers;
    }

    fn skip_turn(&mut self) -> Result<(), BoardError> {
        if self.ended {
            return Err(BoardError::GameOver);
        }
        self.switch_player();
        self.notify_changed();
        Ok(())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry
            && self.cells == other.cells
            && self.current == other.current
            && self.passes == other.passes
            && self.ended == other.ended
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("geometry", &self.geometry)
            .field("current", &self.current)
            .field("passes", &self.passes)
            .field("ended", &self.ended)
            .field("black", &self.score(Occupancy::Black))
            .field("white", &self.score(Occupancy::White))
            .field("observers", &self.observers.len())
            .finish()
    }
}
