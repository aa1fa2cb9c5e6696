//! CLI for maze generation

use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use prim_maze::{maze_generator::MazeGenerator, Maze};
use simple_logger::SimpleLogger;

/// Perfect maze generator, randomized Prim's algorithm
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell columns
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Number of cell rows
    #[arg(long, default_value_t = 10)]
    depth: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the maze before every frontier draw
    #[arg(short, long)]
    debug: bool,

    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new()
        .without_timestamps()
        .with_level(level)
        .env()
        .init()?;

    info!(
        "Generating {}x{} maze, seed {:?}",
        args.width, args.depth, args.seed
    );
    let mut gen = MazeGenerator::new(args.seed);
    let maze = Maze::with_generator(&mut gen, args.width, args.depth, args.debug)?;
    maze.display();
    Ok(())
}
