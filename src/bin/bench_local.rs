//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of full solves on *your* machine.
//! - Loads each structure/word-list pair once, then solves it several times and reports
//!   the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the filled grids:         `cargo run --bin bench_local --release -- -p`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Loading and printing are kept outside the timed section.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use crossfill::grid;
use crossfill::solver::{solve_puzzle, SolverConfig};
use crossfill::structure::Structure;
use crossfill::word_list::WordList;

/// Simple local benchmark runner: load each case once, time several solves.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding `structureN.txt` / `wordsN.txt` pairs
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures")
    )]
    dir: String,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print the filled grid of each case
    #[arg(short = 'p', long = "print")]
    print: bool,
}

/// Fixture numbers to time; each names a `structureN.txt` / `wordsN.txt` pair.
const CASES: [usize; 3] = [0, 1, 2];

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut summary: Vec<(String, f64, bool)> = Vec::with_capacity(CASES.len());

    for n in CASES {
        let name = format!("structure{n}");
        let structure = Structure::load_from_path(format!("{}/structure{n}.txt", cli.dir))?;
        let word_list = WordList::load_from_path(format!("{}/words{n}.txt", cli.dir))?;
        let puzzle = structure.to_puzzle()?;
        eprintln!("\n[{name}] {} variables, {} words", puzzle.len(), word_list.len());

        // warm-up, not timed
        let _warmup = solve_puzzle(&puzzle, word_list.words(), SolverConfig::default());

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;
        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let result = solve_puzzle(black_box(&puzzle), word_list.words(), SolverConfig::default());
            let secs = t_solve.elapsed().as_secs_f64();
            times.push(secs);
            eprintln!("  run {:>2}/{:>2}: {:.4}s ({})", rep + 1, cli.num_repeats, secs, result.stats);
            last = Some(result);
        }

        let solved = last.as_ref().and_then(|r| r.assignment()).is_some();
        if cli.print {
            match last.as_ref().and_then(|r| r.assignment()) {
                Some(assignment) => print!("{}", grid::render(&structure, assignment)),
                None => println!("No solution."),
            }
        }

        let med = median(times);
        eprintln!("  → median {med:.4}s over {} run(s)", cli.num_repeats);
        summary.push((name, med, solved));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<12} | {:>10} | {:>6}", "case", "median (s)", "solved");
    eprintln!("{:-<12}-+-{:-<10}-+-{:-<6}", "", "", "");
    for (name, med, solved) in &summary {
        eprintln!("{name:<12} | {med:>10.4} | {:>6}", if *solved { "yes" } else { "no" });
    }

    Ok(())
}
