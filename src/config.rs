//! Game configuration.
//!
//! Parses the board shape, board size and player kinds accepted on the
//! command line, validates them, and builds the board and players they
//! describe.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardError, Geometry, Occupancy, Topology};
use crate::player::{AiPlayer, HumanPlayer, Player};
use crate::strategy::{Aggressive, AvoidCorners, Fallback, GoForCorners, Minimax, Strategy};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid shape '{0}', expected 'square' or 'hexagon'")]
    UnknownTopology(String),

    #[error("invalid player type '{0}'")]
    UnknownPlayer(String),

    #[error("invalid board size '{0}'")]
    BadSize(String),

    #[error("board size {size} is not allowed for a {topology} board")]
    SizeNotAllowed { topology: Topology, size: i32 },

    #[error("self-play needs AI players on both sides")]
    HumanNotAllowed,

    #[error("usage: reversi <shape> <size> [player1] [player2]")]
    Usage,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Who makes the moves for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    #[serde(rename = "human")]
    Human,
    /// Greedy capture.
    #[serde(rename = "strategy1")]
    Aggressive,
    #[serde(rename = "strategy2")]
    AvoidCorners,
    #[serde(rename = "strategy3")]
    GoForCorners,
    /// Minimax assuming a greedy opponent.
    #[serde(rename = "strategy4")]
    Minimax,
    /// Avoid corner neighbours, else greedy.
    #[serde(rename = "strategy12")]
    AvoidThenAggressive,
    /// Corners, then avoid corner neighbours, else greedy.
    #[serde(rename = "strategy123")]
    CornersFirst,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 7] = [
        PlayerKind::Human,
        PlayerKind::Aggressive,
        PlayerKind::AvoidCorners,
        PlayerKind::GoForCorners,
        PlayerKind::Minimax,
        PlayerKind::AvoidThenAggressive,
        PlayerKind::CornersFirst,
    ];

    /// Parses a player kind, ignoring case.
    pub fn from_name(name: &str) -> Result<PlayerKind, ConfigError> {
        let lower = name.to_ascii_lowercase();
        PlayerKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| ConfigError::UnknownPlayer(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Aggressive => "strategy1",
            PlayerKind::AvoidCorners => "strategy2",
            PlayerKind::GoForCorners => "strategy3",
            PlayerKind::Minimax => "strategy4",
            PlayerKind::AvoidThenAggressive => "strategy12",
            PlayerKind::CornersFirst => "strategy123",
        }
    }

    /// The strategy behind an AI kind; `None` for humans.
    pub fn strategy(&self) -> Option<Box<dyn Strategy>> {
        let strategy: Box<dyn Strategy> = match self {
            PlayerKind::Human => return None,
            PlayerKind::Aggressive => Box::new(Aggressive),
            PlayerKind::AvoidCorners => Box::new(AvoidCorners),
            PlayerKind::GoForCorners => Box::new(GoForCorners),
            PlayerKind::Minimax => Box::new(Minimax::boxed(Box::new(Aggressive))),
            PlayerKind::AvoidThenAggressive => Box::new(Fallback::try_two(
                Some(Box::new(AvoidCorners)),
                Some(Box::new(Aggressive)),
            )),
            PlayerKind::CornersFirst => Box::new(Fallback::try_two(
                Some(Box::new(GoForCorners)),
                Some(Box::new(Fallback::try_two(
                    Some(Box::new(AvoidCorners)),
                    Some(Box::new(Aggressive)),
                ))),
            )),
        };
        Some(strategy)
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A full game setup: board shape and size plus the kind of each player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub topology: Topology,
    pub board_size: i32,
    pub black: PlayerKind,
    pub white: PlayerKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            topology: Topology::Hexagon,
            board_size: 6,
            black: PlayerKind::Human,
            white: PlayerKind::Aggressive,
        }
    }
}

impl GameConfig {
    /// Builds a config from `<shape> <size> [player1] [player2]`.
    ///
    /// Player one plays black and defaults to `human`; player two plays
    /// white and defaults to `strategy1`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<GameConfig, ConfigError> {
        if args.len() < 2 || args.len() > 4 {
            return Err(ConfigError::Usage);
        }
        let shape = args[0].as_ref();
        let topology = Topology::from_name(shape)
            .ok_or_else(|| ConfigError::UnknownTopology(shape.to_string()))?;
        let size_arg = args[1].as_ref();
        let board_size: i32 = size_arg
            .trim()
            .parse()
            .map_err(|_| ConfigError::BadSize(size_arg.to_string()))?;
        let black = match args.get(2) {
            Some(a) => PlayerKind::from_name(a.as_ref())?,
            None => PlayerKind::Human,
        };
        let white = match args.get(3) {
            Some(a) => PlayerKind::from_name(a.as_ref())?,
            None => PlayerKind::Aggressive,
        };
        let config = GameConfig { topology, board_size, black, white };
        config.validate()?;
        Ok(config)
    }

    /// Hexagonal boards need a size above 3, square boards an even size
    /// above 4.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = match self.topology {
            Topology::Hexagon => self.board_size > 3,
            Topology::Square => self.board_size > 4 && self.board_size % 2 == 0,
        };
        if ok {
            Ok(())
        } else {
            Err(ConfigError::SizeNotAllowed {
                topology: self.topology,
                size: self.board_size,
            })
        }
    }

    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        self.validate()?;
        Ok(Geometry::new(self.topology, self.board_size)?)
    }

    pub fn build_board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.geometry()?))
    }

    pub fn kind_for(&self, color: Occupancy) -> Result<PlayerKind, ConfigError> {
        match color {
            Occupancy::Black => Ok(self.black),
            Occupancy::White => Ok(self.white),
            Occupancy::Empty => Err(BoardError::NoPlayer.into()),
        }
    }

    pub fn build_player(&self, color: Occupancy) -> Result<Box<dyn Player>, ConfigError> {
        let kind = self.kind_for(color)?;
        Ok(match kind.strategy() {
            Some(strategy) => Box::new(AiPlayer::new(color, strategy)),
            None => Box::new(HumanPlayer::new(color)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ReadOnlyBoard;

    #[test]
    fn defaults_fill_missing_players() {
        let c = GameConfig::from_args(&["hexagon", "6"]).unwrap();
        assert_eq!(c, GameConfig::default());
        let c = GameConfig::from_args(&["Square", "8", "strategy4"]).unwrap();
        assert_eq!(c.topology, Topology::Square);
        assert_eq!(c.black, PlayerKind::Minimax);
        assert_eq!(c.white, PlayerKind::Aggressive);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(GameConfig::from_args(&["hexagon"]), Err(ConfigError::Usage));
        assert_eq!(
            GameConfig::from_args(&["triangle", "6"]),
            Err(ConfigError::UnknownTopology("triangle".into()))
        );
        assert_eq!(
            GameConfig::from_args(&["hexagon", "six"]),
            Err(ConfigError::BadSize("six".into()))
        );
        assert_eq!(
            GameConfig::from_args(&["hexagon", "6", "robot"]),
            Err(ConfigError::UnknownPlayer("robot".into()))
        );
        assert_eq!(
            GameConfig::from_args(&["hexagon", "6", "human", "Strategy9"]),
            Err(ConfigError::UnknownPlayer("Strategy9".into()))
        );
    }

    #[test]
    fn size_rules_are_stricter_than_geometry() {
        for (shape, size, ok) in [
            ("hexagon", 3, false),
            ("hexagon", 4, true),
            ("square", 4, false),
            ("square", 5, false),
            ("square", 6, true),
            ("square", 7, false),
        ] {
            let result = GameConfig::from_args(&[shape.to_string(), size.to_string()]);
            assert_eq!(result.is_ok(), ok, "{} {}", shape, size);
        }
    }

    #[test]
    fn player_kinds_round_trip_names() {
        for kind in PlayerKind::ALL {
            assert_eq!(PlayerKind::from_name(&kind.to_string()), Ok(kind));
            assert_eq!(PlayerKind::from_name(&kind.name().to_uppercase()), Ok(kind));
        }
        assert!(PlayerKind::Human.strategy().is_none());
        let s = PlayerKind::CornersFirst.strategy().unwrap();
        assert_eq!(s.name(), "try(go-for-corners, try(avoid-corners, aggressive))");
    }

    #[test]
    fn builds_board_and_players() {
        let c = GameConfig::from_args(&["square", "6", "human", "strategy12"]).unwrap();
        let board = c.build_board().unwrap();
        assert_eq!(board.board_size(), 6);
        assert!(c.build_player(Occupancy::Black).unwrap().is_human());
        let white = c.build_player(Occupancy::White).unwrap();
        assert!(!white.is_human());
        assert_eq!(white.color(), Occupancy::White);
        assert!(c.build_player(Occupancy::Empty).is_err());
    }

    #[test]
    fn serializes_with_cli_names() {
        let c = GameConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"topology":"hexagon","board_size":6,"black":"human","white":"strategy1"}"#
        );
    }
}
