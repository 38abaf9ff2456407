//! Command-line viewer for decoded crossword puzzle records.
//!
//! Reads a puzzle record in JSON form (the shape written by the `.puz`
//! importer), builds the play grid, and prints it.
//!
//! # Usage
//!
//! ```sh
//! crossplay puzzle.json
//! crossplay puzzle.json --clues --check
//! RUST_LOG=debug crossplay puzzle.json --solution
//! ```

use std::{fs, io, path::PathBuf, process};

use clap::Parser;
use crossplay_core::LogReporter;
use crossplay_game::{Puzzle, PuzzleError, PuzzleRecord};

mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a JSON puzzle record.
    #[arg(value_name = "RECORD")]
    record: PathBuf,

    /// Print the Across and Down clue lists.
    #[arg(long)]
    clues: bool,

    /// Print completion status and the cells holding wrong letters.
    #[arg(long)]
    check: bool,

    /// Render the solution instead of the current fill state.
    #[arg(long)]
    solution: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    #[from(ignore)]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to parse puzzle record: {_0}")]
    Parse(serde_json::Error),
    #[display("failed to load puzzle: {_0}")]
    Puzzle(PuzzleError),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = fs::read_to_string(&args.record).map_err(|source| CliError::Read {
        path: args.record.clone(),
        source,
    })?;
    let record: PuzzleRecord = serde_json::from_str(&text)?;
    log::debug!("loaded record from {}", args.record.display());

    let puzzle = Puzzle::from_record_with_reporter(&record, LogReporter)?;

    print!("{}", render::header(&puzzle));
    print!("{}", render::grid(&puzzle, args.solution));
    if args.clues {
        print!("{}", render::clues(&puzzle));
    }
    if args.check {
        print!("{}", render::status(&puzzle));
    }
    Ok(())
}
