use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hexlink::config::AppConfig;
use hexlink::game::{Board, Game, GameOutcome, Move};

/// Play a two-player connection game in the terminal.
#[derive(Parser)]
#[command(name = "hexlink", about = "Two-player hex connection game")]
struct Cli {
    /// Board dimension, overriding the configured value
    #[arg(long)]
    size: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let size = cli.size.unwrap_or(config.game.board_size);

    let mut game = Game::new(size).context("creating game")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_over() {
        render(&game.grid(), config.display.show_coordinates);
        print!(
            "{} to move (row col, or q to quit): ",
            game.current_player().name()
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            println!("Game abandoned.");
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        if input == "q" || input == "quit" {
            println!("Game abandoned.");
            return Ok(());
        }

        let Some(mv) = parse_move(input) else {
            eprintln!("expected two numbers, e.g. `3 4`");
            continue;
        };
        if let Err(err) = game.make_move(mv) {
            eprintln!("illegal move: {err}");
        }
    }

    render(&game.grid(), config.display.show_coordinates);
    match game.outcome() {
        Some(GameOutcome::Winner(player)) => println!("{} wins!", player.name()),
        Some(GameOutcome::Draw) => println!("Draw: the board is full."),
        None => {}
    }
    Ok(())
}

/// Parse `"row col"` into a move.
fn parse_move(input: &str) -> Option<Move> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

/// Print the board, optionally framed with row and column labels.
fn render(grid: &Board, show_coordinates: bool) {
    let rendered = grid.to_string();
    if !show_coordinates {
        print!("{rendered}");
        return;
    }

    print!("   ");
    for col in 0..grid.size() {
        print!("{}", col % 10);
    }
    println!();
    for (row, line) in rendered.lines().enumerate() {
        println!("{row:>2} {line}");
    }
}
