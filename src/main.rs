//! Reversi -- play a game in the terminal.
//!
//! Usage: `reversi <shape> <size> [player1] [player2]`
//!
//! Player one plays black, player two white. Human turns read one line from
//! stdin: `q r` to place, `pass` to pass, `quit` to stop. AI turns are played
//! automatically.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process;

use reversi::board::{BoardObserver, Coord, Move, MutableBoard, Occupancy, ReadOnlyBoard};
use reversi::config::GameConfig;
use reversi::player::Player;

/// Prints the scores and side to move after every change.
struct StatusLine;

impl StatusLine {
    fn print(board: &dyn ReadOnlyBoard) {
        println!(
            "scores: black {} white {}, to move: {}",
            board.score(Occupancy::Black),
            board.score(Occupancy::White),
            board.current_player()
        );
    }
}

impl BoardObserver for StatusLine {
    fn on_board_changed(&mut self, board: &dyn ReadOnlyBoard) {
        Self::print(board);
    }

    fn on_game_started(&mut self, board: &dyn ReadOnlyBoard) {
        let g = board.geometry();
        println!("new game on a {} board of size {}", g.topology(), g.size());
        Self::print(board);
    }
}

enum Input {
    Move(Move),
    Quit,
    Unreadable(String),
}

fn parse_input(line: &str, player: &dyn Player, board: &dyn ReadOnlyBoard) -> Input {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["q"] => Input::Quit,
        ["pass"] => Input::Move(player.pass()),
        [q, r] => match (q.parse(), r.parse()) {
            (Ok(q), Ok(r)) => Input::Move(player.play(board, Coord::new(q, r))),
            _ => Input::Unreadable(line.to_string()),
        },
        _ => Input::Unreadable(line.to_string()),
    }
}

fn run(config: &GameConfig) -> Result<(), Box<dyn Error>> {
    let mut board = config.build_board()?;
    let black = config.build_player(Occupancy::Black)?;
    let white = config.build_player(Occupancy::White)?;
    board.add_observer(Box::new(StatusLine));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    board.start_game();
    while !board.is_game_over() {
        let player = if board.current_player() == Occupancy::Black {
            &black
        } else {
            &white
        };

        let mv = match player.propose(&board) {
            Some(mv) => {
                println!("{}", mv);
                mv
            }
            None => {
                write!(out, "{} (q r | pass | quit)> ", player.color())?;
                out.flush()?;
                let line = match lines.next() {
                    Some(line) => line?,
                    None => {
                        println!();
                        println!("input closed, game abandoned");
                        return Ok(());
                    }
                };
                match parse_input(&line, &**player, &board) {
                    Input::Move(mv) => mv,
                    Input::Quit => {
                        println!("game abandoned");
                        return Ok(());
                    }
                    Input::Unreadable(text) => {
                        println!("could not read '{}'", text.trim());
                        continue;
                    }
                }
            }
        };

        if let Err(e) = board.apply(&mv) {
            if !player.is_human() {
                return Err(e.into());
            }
            println!("rejected: {}", e);
        }
    }

    println!(
        "game over: black {} white {}",
        board.score(Occupancy::Black),
        board.score(Occupancy::White)
    );
    match board.winner() {
        Some(color) => println!("winner: {}", color),
        None => println!("draw"),
    }
    Ok(())
}

fn main() {
    reversi::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match GameConfig::from_args(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };
    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
