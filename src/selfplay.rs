//! Self-play game generation.
//!
//! Plays complete AI-vs-AI games, optionally opening with a few random
//! plies for variety, and records every move together with the final scores
//! and how the game ended. Records are written as JSONL.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{BoardError, Move, MutableBoard, Occupancy, ReadOnlyBoard, Termination, Topology};
use crate::config::{ConfigError, GameConfig, PlayerKind};
use crate::eval::margin;
use crate::movegen::random_move;
use crate::player::AiPlayer;

#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("illegal move in game {game_id}: {source}")]
    IllegalMove { game_id: usize, source: BoardError },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("self-play worker thread panicked")]
    WorkerPanicked,
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    pub topology: Topology,
    pub board_size: i32,
    pub black: PlayerKind,
    pub white: PlayerKind,
    /// Opening plies picked uniformly at random before the strategies take
    /// over.
    pub random_plies: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            topology: Topology::Hexagon,
            board_size: 6,
            black: PlayerKind::Minimax,
            white: PlayerKind::Aggressive,
            random_plies: 2,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

impl SelfPlayConfig {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            topology: self.topology,
            board_size: self.board_size,
            black: self.black,
            white: self.white,
        }
    }

    /// Board rules as for interactive games, and no human players.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game_config().validate()?;
        for kind in [self.black, self.white] {
            if kind == PlayerKind::Human {
                return Err(ConfigError::HumanNotAllowed);
            }
        }
        Ok(())
    }

    fn game_rng(&self, game_id: usize) -> SmallRng {
        if self.seed != 0 {
            SmallRng::seed_from_u64(self.seed.wrapping_add(game_id as u64))
        } else {
            SmallRng::from_entropy()
        }
    }
}

/// A complete self-play game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    pub config: GameConfig,
    /// Every move in order, passes included.
    pub moves: Vec<Move>,
    pub black_score: usize,
    pub white_score: usize,
    /// `None` for a draw.
    pub winner: Option<Occupancy>,
    pub termination: Termination,
}

impl GameRecord {
    /// Black's score minus White's.
    pub fn margin(&self) -> i64 {
        self.black_score as i64 - self.white_score as i64
    }
}

fn ai_player(kind: PlayerKind, color: Occupancy) -> Result<AiPlayer, ConfigError> {
    let strategy = kind.strategy().ok_or(ConfigError::HumanNotAllowed)?;
    Ok(AiPlayer::new(color, strategy))
}

/// Plays a single game to completion.
pub fn play_game(
    config: &SelfPlayConfig,
    game_id: usize,
    rng: &mut SmallRng,
) -> Result<GameRecord, SelfPlayError> {
    let game_config = config.game_config();
    let mut board = game_config.build_board()?;
    let black = ai_player(config.black, Occupancy::Black)?;
    let white = ai_player(config.white, Occupancy::White)?;
    debug!(
        game_id,
        black = %black.strategy().name(),
        white = %white.strategy().name(),
        "starting game"
    );

    board.start_game();
    let mut moves = Vec::new();
    while !board.is_game_over() {
        let mv = if moves.len() < config.random_plies {
            random_move(&board, rng)
        } else if board.current_player() == Occupancy::Black {
            black.next_move(&board)
        } else {
            white.next_move(&board)
        };
        board
            .apply(&mv)
            .map_err(|source| SelfPlayError::IllegalMove { game_id, source })?;
        moves.push(mv);
    }

    let termination = board.termination().unwrap_or(Termination::NoLegalMoves);
    let record = GameRecord {
        game_id,
        config: game_config,
        moves,
        black_score: board.score(Occupancy::Black),
        white_score: board.score(Occupancy::White),
        winner: board.winner(),
        termination,
    };
    info!(
        game_id,
        moves = record.moves.len(),
        margin = margin(&board, Occupancy::Black),
        ?termination,
        "game finished"
    );
    Ok(record)
}

/// Runs self-play generation, producing the records ordered by game ID.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    })?;
    games.sort_by_key(|g| g.game_id);
    Ok(games)
}

/// Runs self-play generation, calling `on_game` with each completed game record.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord) + Send,
{
    config.validate()?;
    if config.threads > 1 {
        run_self_play_parallel(config, on_game)
    } else {
        run_self_play_sequential(config, on_game)
    }
}

fn report(config: &SelfPlayConfig, n: usize, game: &GameRecord, elapsed: f64) {
    let outcome = match game.winner {
        Some(w) => format!("{} wins", w),
        None => "draw".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} {}-{} after {} moves ({:.2}s)",
        n,
        config.num_games,
        outcome,
        game.black_score,
        game.white_score,
        game.moves.len(),
        elapsed,
    );
}

fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let game_start = Instant::now();
        let mut rng = config.game_rng(i);
        let game = play_game(config, i, &mut rng)?;
        if !config.quiet {
            report(config, i + 1, &game, game_start.elapsed().as_secs_f64());
        }
        on_game(game);
    }
    Ok(())
}

/// Plays games concurrently on a rayon pool and hands finished games to the
/// callback on the calling thread.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let (tx, rx) = mpsc::channel::<Result<GameRecord, SelfPlayError>>();
    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        let completed = AtomicUsize::new(0);
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let game_start = Instant::now();
                    let mut rng = config_clone.game_rng(i);
                    let result = play_game(&config_clone, i, &mut rng);
                    if let (Ok(game), false) = (&result, config_clone.quiet) {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        report(&config_clone, n, game, game_start.elapsed().as_secs_f64());
                    }
                    let _ = tx.send(result);
                });
        });
    });

    let mut first_error = None;
    for result in rx {
        match result {
            Ok(game) => on_game(game),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    handle.join().map_err(|_| SelfPlayError::WorkerPanicked)?;
    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate results over a batch of games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub two_passes: usize,
    /// Mean of black score minus white score.
    pub average_margin: f64,
    pub average_moves: f64,
}

pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut summary = Summary {
        games: games.len(),
        ..Summary::default()
    };
    let mut total_margin = 0i64;
    let mut total_moves = 0usize;
    for game in games {
        match game.winner {
            Some(Occupancy::Black) => summary.black_wins += 1,
            Some(Occupancy::White) => summary.white_wins += 1,
            _ => summary.draws += 1,
        }
        if game.termination == Termination::TwoPasses {
            summary.two_passes += 1;
        }
        total_margin += game.margin();
        total_moves += game.moves.len();
    }
    let n = games.len().max(1) as f64;
    summary.average_margin = total_margin as f64 / n;
    summary.average_moves = total_moves as f64 / n;
    summary
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let s = summarize(games);
    let pct = |count: usize| 100.0 * count as f64 / s.games.max(1) as f64;
    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", s.games);
    eprintln!("Black wins: {} ({:.1}%)", s.black_wins, pct(s.black_wins));
    eprintln!("White wins: {} ({:.1}%)", s.white_wins, pct(s.white_wins));
    eprintln!("Draws: {} ({:.1}%)", s.draws, pct(s.draws));
    eprintln!("Ended by two passes: {}", s.two_passes);
    eprintln!("Avg moves/game: {:.1}", s.average_moves);
    eprintln!("Avg margin (black - white): {:+.2}", s.average_margin);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config(topology: Topology, size: i32) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games: 1,
            topology,
            board_size: size,
            black: PlayerKind::Aggressive,
            white: PlayerKind::Aggressive,
            random_plies: 0,
            threads: 1,
            seed: 42,
            quiet: true,
        }
    }

    #[test]
    fn greedy_game_on_hex_four() {
        let config = quiet_config(Topology::Hexagon, 4);
        let mut rng = config.game_rng(0);
        let game = play_game(&config, 0, &mut rng).unwrap();
        assert_eq!(game.moves.len(), 22);
        assert_eq!(game.black_score, 10);
        assert_eq!(game.white_score, 18);
        assert_eq!(game.winner, Some(Occupancy::White));
        assert_eq!(game.termination, Termination::NoLegalMoves);
        assert_eq!(game.moves[0], Move::place(4, 1, Occupancy::Black));
    }

    #[test]
    fn minimax_against_greedy_on_square_six() {
        let mut config = quiet_config(Topology::Square, 6);
        config.black = PlayerKind::Minimax;
        let mut rng = config.game_rng(0);
        let game = play_game(&config, 0, &mut rng).unwrap();
        // black passes whenever minimax finds nothing to block
        assert_eq!(game.moves.len(), 15);
        assert_eq!(game.moves[2], Move::pass(Occupancy::Black));
        assert_eq!((game.black_score, game.white_score), (3, 12));
        assert_eq!(game.winner, Some(Occupancy::White));
        assert_eq!(game.termination, Termination::TwoPasses);
        assert_eq!(game.margin(), -9);
    }

    #[test]
    fn rejects_human_players() {
        let mut config = quiet_config(Topology::Hexagon, 4);
        config.white = PlayerKind::Human;
        assert!(matches!(
            run_self_play(&config),
            Err(SelfPlayError::Config(ConfigError::HumanNotAllowed))
        ));
    }

    #[test]
    fn sequential_and_parallel_agree_with_a_seed() {
        let mut config = quiet_config(Topology::Hexagon, 5);
        config.num_games = 4;
        config.random_plies = 3;
        config.black = PlayerKind::CornersFirst;
        let sequential = run_self_play(&config).unwrap();
        config.threads = 3;
        let parallel = run_self_play(&config).unwrap();
        assert_eq!(sequential.len(), 4);
        assert_eq!(sequential, parallel);
        assert!(sequential.iter().enumerate().all(|(i, g)| g.game_id == i));
    }

    #[test]
    fn jsonl_output_is_valid() {
        let config = quiet_config(Topology::Hexagon, 4);
        let games = run_self_play(&config).unwrap();
        let mut buf = Vec::new();
        write_jsonl(&games, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["game_id"], 0);
        assert_eq!(value["winner"], "White");
        assert_eq!(value["termination"], "NoLegalMoves");
        assert_eq!(value["config"]["black"], "strategy1");
        let back: GameRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(back, games[0]);
    }

    #[test]
    fn summary_counts_outcomes() {
        let config = quiet_config(Topology::Hexagon, 4);
        let mut games = run_self_play(&config).unwrap();
        let mut draw = games[0].clone();
        draw.game_id = 1;
        draw.winner = None;
        draw.black_score = 14;
        draw.white_score = 14;
        draw.termination = Termination::TwoPasses;
        games.push(draw);
        let s = summarize(&games);
        assert_eq!(s.games, 2);
        assert_eq!(s.white_wins, 1);
        assert_eq!(s.draws, 1);
        assert_eq!(s.two_passes, 1);
        assert_eq!(s.average_margin, -4.0);
    }
}
