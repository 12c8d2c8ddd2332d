//! Self-play game generation CLI.
//!
//! Plays AI-vs-AI Reversi games and writes one JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N         Number of games to play (default: 10)
//!   --shape S         hexagon or square (default: hexagon)
//!   --size N          Board size (default: 6)
//!   --black KIND      Black player kind (default: strategy4)
//!   --white KIND      White player kind (default: strategy1)
//!   --random-plies N  Random opening plies (default: 2)
//!   --threads N       Number of parallel threads (default: 4)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --output FILE     Output file path (default: stdout)
//!   --quiet           Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use reversi::board::Topology;
use reversi::config::PlayerKind;
use reversi::selfplay::{self, SelfPlayConfig};

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    print_usage();
    process::exit(1);
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v.as_str(),
        None => fail(&format!("missing value for {}", flag)),
    }
}

fn number<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = value(args, i, flag);
    match raw.parse() {
        Ok(n) => n,
        Err(_) => fail(&format!("invalid {} value: {}", flag, raw)),
    }
}

fn kind(args: &[String], i: usize, flag: &str) -> PlayerKind {
    match PlayerKind::from_name(value(args, i, flag)) {
        Ok(k) => k,
        Err(e) => fail(&e.to_string()),
    }
}

fn main() {
    reversi::init_logging();
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--games" => {
                i += 1;
                config.num_games = number(&args, i, flag);
            }
            "--shape" => {
                i += 1;
                let shape = value(&args, i, flag);
                config.topology = match Topology::from_name(shape) {
                    Some(t) => t,
                    None => fail(&format!("invalid --shape value: {}", shape)),
                };
            }
            "--size" => {
                i += 1;
                config.board_size = number(&args, i, flag);
            }
            "--black" => {
                i += 1;
                config.black = kind(&args, i, flag);
            }
            "--white" => {
                i += 1;
                config.white = kind(&args, i, flag);
            }
            "--random-plies" => {
                i += 1;
                config.random_plies = number(&args, i, flag);
            }
            "--threads" => {
                i += 1;
                config.threads = number(&args, i, flag);
            }
            "--seed" => {
                i += 1;
                config.seed = number(&args, i, flag);
            }
            "--output" => {
                i += 1;
                output_path = Some(value(&args, i, flag).to_string());
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    let quiet = config.quiet;
    if !quiet {
        eprintln!(
            "Self-play: {} games, {} board size {}, {} vs {}, {} random plies, {} threads",
            config.num_games,
            config.topology,
            config.board_size,
            config.black,
            config.white,
            config.random_plies,
            config.threads
        );
    }

    let start = Instant::now();
    let games = match selfplay::run_self_play(&config) {
        Ok(games) => games,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games);
    }

    let written = match &output_path {
        Some(path) => File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer)
        }),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)
        }
    };
    if let Err(e) = written {
        eprintln!("failed to write output: {}", e);
        process::exit(1);
    }
    if let (Some(path), false) = (&output_path, quiet) {
        eprintln!("Wrote {} games to {}", games.len(), path);
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N         Number of games to play (default: 10)");
    eprintln!("  --shape S         hexagon or square (default: hexagon)");
    eprintln!("  --size N          Board size (default: 6)");
    eprintln!("  --black KIND      Black player kind (default: strategy4)");
    eprintln!("  --white KIND      White player kind (default: strategy1)");
    eprintln!("  --random-plies N  Random opening plies (default: 2)");
    eprintln!("  --threads N       Number of parallel threads (default: 4)");
    eprintln!("  --seed N          Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE     Output file path (default: stdout)");
    eprintln!("  --quiet           Suppress progress and summary output");
    eprintln!("  --help            Show this help");
}
