use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use minimax_connect_four::ai::{Difficulty, SearchEngine};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::Cell;
use minimax_connect_four::session::GameSession;

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the search depth (1-2 easy, 3-4 medium, 5+ hard)
    #[arg(long)]
    depth: Option<usize>,

    /// Seed the engine's randomness for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("invalid configuration")?;

    let engine = match cli.seed {
        Some(seed) => SearchEngine::from_config_seeded(&config.search, seed),
        None => SearchEngine::from_config(&config.search),
    };
    let mut session = GameSession::with_engine(config.game.rows, config.game.cols, engine);

    println!("Connect Four: you are X, the computer is O.");
    println!("Enter a column number to move, 'n' for a new round,");
    println!("'d <easy|medium|hard>' to switch difficulty, 'q' to quit.");

    let stdin = io::stdin();
    loop {
        render(&session);
        if session.snapshot().game_over {
            announce(&session);
            print!("[n]ew round or [q]uit> ");
        } else {
            print!("column (0-{})> ", session.board().cols() - 1);
        }
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "q" | "quit" => break,
            "n" | "new" => session.reset_game(),
            _ if input.starts_with('d') => set_difficulty(&mut session, input),
            _ if session.snapshot().game_over => {
                println!("round is over, 'n' starts a new one");
            }
            _ => match input.parse::<usize>() {
                Ok(col) => {
                    if !session.submit_human_move(col) {
                        println!("column {col} is not playable");
                        continue;
                    }
                    if !session.snapshot().game_over {
                        session.request_computer_move();
                    }
                }
                Err(_) => println!("unrecognized input '{input}'"),
            },
        }
    }

    Ok(())
}

fn set_difficulty(session: &mut GameSession, input: &str) {
    let tier = match input.split_whitespace().nth(1) {
        Some("easy") => Some(Difficulty::Easy),
        Some("medium") => Some(Difficulty::Medium),
        Some("hard") => Some(Difficulty::Hard),
        _ => None,
    };
    match tier {
        Some(tier) => {
            session.set_difficulty_preset(tier);
            println!(
                "difficulty set to {} (depth {})",
                tier.name(),
                session.search_depth()
            );
        }
        None => println!("usage: d <easy|medium|hard>"),
    }
}

fn render(session: &GameSession) {
    let snap = session.snapshot();
    println!();
    for row in &snap.grid {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => " .",
                Cell::Human => " X",
                Cell::Computer => " O",
            })
            .collect();
        println!("{line}");
    }
    let header: String = (0..snap.grid[0].len()).map(|c| format!(" {c}")).collect();
    println!("{header}");
}

fn announce(session: &GameSession) {
    let snap = session.snapshot();
    match snap.winner {
        Some(winner) => {
            let cells: Vec<String> = snap
                .winning_positions
                .iter()
                .map(|(r, c)| format!("({r},{c})"))
                .collect();
            println!("{} wins with {}", winner, cells.join(" "));
        }
        None => println!("It's a draw!"),
    }
    let scores = session.scores();
    println!(
        "Score: you {} : {} computer, {} drawn",
        scores.human, scores.computer, scores.draws
    );
}
