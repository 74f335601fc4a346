//! # Reversi Play CLI
//!
//! Interactive driver for the rules engine: wires strategies to seats,
//! relays engine notifications to the terminal, and loops turns until the
//! game ends. Everything here consumes the engine's public read/write
//! surface; no rule logic lives in the binary.
//!
//! ## Usage
//! `play --geometry hex --size 4 --black combined --white human`

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::{ColoredString, Colorize};

use reversi::{Board, Choice, Color, Coord, Game, GameEvent, GameListener, Geometry, Player};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board topology
    #[arg(long, default_value = "hex", value_parser = ["hex", "square"])]
    geometry: String,

    /// Side length (hex: at least 3; square: even, at least 4)
    #[arg(long, default_value_t = 4)]
    size: i32,

    /// Black seat: most-captures | take-corners | avoid-near-corners | combined | human
    #[arg(long, default_value = "combined")]
    black: String,

    /// White seat: most-captures | take-corners | avoid-near-corners | combined | human
    #[arg(long, default_value = "combined")]
    white: String,
}

/// Prints engine notifications as they arrive.
struct ConsoleListener;

impl GameListener for ConsoleListener {
    fn notify(&mut self, event: GameEvent) {
        let line = event.to_string();
        match event {
            GameEvent::TurnChanged(_) => println!("{}", line.cyan()),
            GameEvent::GameOver => println!("{}", line.yellow().bold()),
            GameEvent::IllegalMove => println!("{}", line.red()),
        }
    }
}

fn paint(color: Color) -> ColoredString {
    match color {
        Color::Black => color.to_string().green().bold(),
        Color::White => color.to_string().magenta().bold(),
    }
}

fn seat(color: Color, name: &str) -> Result<Player, String> {
    if name == "human" {
        Ok(Player::new(color))
    } else {
        Ok(Player::with_strategy(color, name.parse()?))
    }
}

// Reads one human turn from stdin: a "q,r" coordinate or "pass".
fn human_turn(game: &mut Game, color: Color, input: &mut impl BufRead) -> Result<(), Box<dyn Error>> {
    let hints = game.legal_moves(color);
    if hints.is_empty() {
        println!("no legal moves; type pass");
    } else {
        let shown: Vec<String> = hints
            .iter()
            .map(|&c| format!("{}({})", c, game.capture_value(c, color)))
            .collect();
        println!("legal moves: {}", shown.join(" "));
    }
    print!("{} to move (q,r or pass): ", paint(color));
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("input closed".into());
    }
    let entry = line.trim();
    if entry.eq_ignore_ascii_case("pass") {
        game.pass_turn()?;
        return Ok(());
    }
    match entry.parse::<Coord>() {
        // An illegal coordinate was already reported by the listener; the
        // same player is prompted again next loop.
        Ok(c) => {
            let _ = game.place(c);
        }
        Err(e) => println!("{}", e.red()),
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let geometry = match args.geometry.as_str() {
        "square" => Geometry::Square,
        _ => Geometry::Hex,
    };
    let board = Board::new(geometry, args.size)?;
    let players = [
        seat(Color::Black, &args.black)?,
        seat(Color::White, &args.white)?,
    ];
    let mut game = Game::with_players(board, players)?;
    game.add_listener(Box::new(ConsoleListener));

    println!("Reversi on a {} board, side {}", geometry, args.size);
    game.start();
    println!("{}", game);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    while !game.is_over() {
        let color = game.current_color();
        let mover = game
            .players_snapshot()
            .into_iter()
            .find(|p| p.color() == color)
            .ok_or("current player missing")?;
        match mover.choose_move(&game) {
            Some(Choice::Move(c)) => {
                println!("{} plays {}", paint(color), c);
                game.place(c)?;
            }
            Some(Choice::Pass) => {
                println!("{} passes", paint(color));
                game.pass_turn()?;
            }
            None => human_turn(&mut game, color, &mut input)?,
        }
        println!("{}", game);
    }

    let black = game.score(Color::Black);
    let white = game.score(Color::White);
    println!(
        "final score: {} {}, {} {}",
        paint(Color::Black),
        black,
        paint(Color::White),
        white
    );
    if black == white {
        println!("{}", "a draw".yellow());
    } else {
        let winner = if black > white { Color::Black } else { Color::White };
        println!("{} wins", paint(winner));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}
