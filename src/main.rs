//! Knight-Swap: a knight exchange puzzle for the terminal.
//!
//! ## Usage
//!
//! - `knight-swap` - Play the built-in puzzle interactively
//! - `knight-swap --layout board.txt play` - Play a custom layout
//! - `knight-swap demo` - Watch random legal moves being played

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use knight_swap::game::{ClickOutcome, Game};
use knight_swap::layout::{Color, Layout};
use knight_swap::moves::legal_destinations;
use knight_swap::shell::Shell;

/// A single-board knight-swap puzzle
#[derive(Parser)]
#[command(name = "knight-swap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Layout file, one row per line (tags: . void, 0 empty, 1 white, 2 black)
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (the default)
    Play,
    /// Play random legal moves until solved or out of budget
    Demo {
        /// Maximum number of random moves
        #[arg(long, default_value_t = 200)]
        moves: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let layout = load_layout(cli.layout.as_deref())?;

    match cli.command {
        Some(Commands::Demo { moves }) => run_demo(layout, moves),
        Some(Commands::Play) | None => {
            let mut shell = Shell::new(layout);
            shell.run();
        }
    }
    Ok(())
}

/// Load a layout file, falling back to the built-in puzzle when the file is
/// missing, empty or malformed. Only an unreadable explicitly-given path is
/// an error worth stopping for.
fn load_layout(path: Option<&std::path::Path>) -> Result<Layout> {
    let Some(path) = path else {
        return Ok(Layout::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading layout file {}", path.display()))?;
    let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    match Layout::parse(&rows) {
        Ok(layout) => Ok(layout),
        Err(err) => {
            eprintln!("ignoring malformed layout ({err}), using the built-in puzzle");
            Ok(Layout::default())
        }
    }
}

fn run_demo(layout: Layout, budget: u32) {
    let mut game = Game::new(layout);
    println!("{}", game.board());

    for _ in 0..budget {
        // Collect every legal (source, destination) pair on the board.
        let mut hops = Vec::new();
        for src in game
            .board()
            .positions_of(Color::White)
            .into_iter()
            .chain(game.board().positions_of(Color::Black))
        {
            for dst in legal_destinations(game.board(), src) {
                hops.push((src, dst));
            }
        }
        if hops.is_empty() {
            println!("no legal moves left");
            break;
        }
        let (src, dst) = hops[fastrand::usize(..hops.len())];
        if game.selected() != Some(src) {
            game.click(src.0, src.1);
        }
        let outcome = game.click(dst.0, dst.1);
        println!(
            "move {}: ({}, {}) -> ({}, {})",
            game.move_count(),
            src.0,
            src.1,
            dst.0,
            dst.1
        );
        if matches!(outcome, ClickOutcome::Moved { won: true, .. }) {
            println!("{}", game.board());
            println!("solved in {} moves", game.move_count());
            return;
        }
    }
    println!("{}", game.board());
    println!("not solved after {} moves", game.move_count());
}
