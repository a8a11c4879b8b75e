//! Five-in-a-row self-play
//!
//! Two search players take turns on a 10x10 board until one of them lines
//! up five, or the board fills.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use gomoku::{Config, Game};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Five-in-a-row self-play on a 10x10 board")]
struct Args {
    /// TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Search depth in plies, overriding the config file
    #[arg(long)]
    depth: Option<u32>,

    /// Initial hash salt for the board
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    // Default to 'info' unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(depth) = args.depth {
        config.search.depth = depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    let (first, second) = config.players.build();
    info!(
        "{} vs {}, search depth {}",
        first, second, config.search.depth
    );

    let mut game = match Game::new(
        first,
        second,
        config.search.depth,
        config.search.tt_size_mb,
        config.seed,
    ) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    game.run();

    println!("{}", game.board());
    for line in game.summary() {
        println!("{}", line);
    }
    ExitCode::SUCCESS
}
