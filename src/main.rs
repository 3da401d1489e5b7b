use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use crossfill::errors::{ParseError, PuzzleError};
use crossfill::grid;
use crossfill::solver::{self, SolveStatus, SolverConfig};
use crossfill::structure::Structure;
use crossfill::word_list::WordList;

/// Fill a crossword grid from a word list
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Structure file: one line per row, '_' for open cells
    structure: String,

    /// Word list file: one word per line
    words: String,

    /// Also write the filled grid to this file
    output: Option<String>,

    /// Give up after this many seconds
    #[arg(short = 't', long)]
    time_limit: Option<f64>,

    /// Print the solution as JSON instead of a grid
    #[arg(long)]
    json: bool,

    /// Enable debug logging (same as setting CROSSFILL_DEBUG)
    #[arg(short, long)]
    debug: bool,
}

/// Entry point of the crossfill CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help text
/// before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let debug_enabled = cli.debug || std::env::var("CROSSFILL_DEBUG").is_ok();
    crossfill::log::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        if let Some(parse_err) = e.downcast_ref::<ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Load the grid and vocabulary, solve, and print the result.
///
/// "No solution" is reported on stdout and is not an error.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let t_load = Instant::now();
    let structure = Structure::load_from_path(&cli.structure)?;
    let word_list = WordList::load_from_path(&cli.words)?;
    let puzzle = structure.to_puzzle()?;
    let load_secs = t_load.elapsed().as_secs_f64();

    log::info!(
        "{}x{} grid with {} variables, {} words",
        structure.width,
        structure.height,
        puzzle.len(),
        word_list.len()
    );

    let time_limit = match cli.time_limit {
        Some(secs) => Some(Duration::try_from_secs_f64(secs)?),
        None => None,
    };
    let config = SolverConfig { time_limit };

    let t_solve = Instant::now();
    let result = solver::solve_puzzle(&puzzle, word_list.words(), config);
    let solve_secs = t_solve.elapsed().as_secs_f64();

    match &result.status {
        SolveStatus::Solved(assignment) => {
            let rendered = grid::render(&structure, assignment);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&assignment.entries())?);
            } else {
                print!("{rendered}");
            }
            if let Some(path) = &cli.output {
                std::fs::write(path, &rendered)?;
                log::info!("wrote grid to {path}");
            }
        }
        SolveStatus::Unsatisfiable => println!("No solution."),
        SolveStatus::TimedOut { elapsed } => {
            println!("No solution found within {:.1}s.", elapsed.as_secs_f64());
        }
    }

    eprintln!(
        "Loaded in {:.3}s; solved in {:.3}s ({}).",
        load_secs, solve_secs, result.stats
    );

    Ok(())
}
