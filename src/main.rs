use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tabia_core::{All, Captures, PerftReport, Position, STARTING_FEN, legal_moves};

#[derive(Parser, Debug)]
#[command(author, version, about = "Legal move generation and perft for chess positions", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf nodes below the position, with a per-move breakdown
    Perft {
        depth: usize,

        /// Start from this FEN instead of the initial position
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,

        /// UCI moves to play before counting
        #[arg(long, num_args = 1..)]
        moves: Vec<String>,

        /// Generate capturing moves only at every node
        #[arg(long)]
        captures: bool,
    },
    /// List the legal moves of the position
    Moves {
        #[arg(long, default_value = STARTING_FEN)]
        fen: String,

        /// List capturing moves only
        #[arg(long)]
        captures: bool,
    },
}

fn load_position(fen: &str, moves: &[String]) -> Result<Position> {
    let mut position: Position = fen.parse().with_context(|| format!("invalid FEN \"{fen}\""))?;
    for text in moves {
        let mv = position
            .parse_uci_move(text)
            .with_context(|| format!("cannot play \"{text}\" in {position}"))?;
        // Setup moves are never taken back.
        let _revert = position.make_turn(mv);
    }
    Ok(position)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Perft { depth, fen, moves, captures } => {
            let mut position = load_position(&fen, &moves)?;
            info!(depth, fen = %position, captures, "running perft");
            let report = if captures {
                PerftReport::run::<Captures>(&mut position, depth)
            } else {
                PerftReport::run::<All>(&mut position, depth)
            };
            println!("{report}");
            info!(
                nodes = report.total,
                elapsed_ms = report.elapsed.as_millis() as u64,
                nps = report.nodes_per_second(),
                "perft done"
            );
        }
        Command::Moves { fen, captures } => {
            let mut position = load_position(&fen, &[])?;
            let moves = if captures {
                legal_moves::<Captures>(&mut position)
            } else {
                legal_moves::<All>(&mut position)
            };
            println!("{}\n", position.pretty());
            for mv in &moves {
                println!("{mv}");
            }
            info!(count = moves.len(), "legal moves listed");
        }
    }
    Ok(())
}
