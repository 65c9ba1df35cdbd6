//! compare-results: grade a candidate JSON file against a reference.
//!
//! Exits 0 when the documents are deeply equal under the default tolerance,
//! 1 when they differ or either file cannot be read or parsed.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use json_grade::{grade_files, logging, Tolerance};
use tracing::debug;

#[derive(Parser)]
#[command(name = "compare-results")]
#[command(
    about = "Compare two JSON files deeply with a threshold for numbers",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Path to the reference (answer) JSON file
    reference: PathBuf,

    /// Path to the candidate (student) JSON file
    candidate: PathBuf,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let tolerance = Tolerance::default();
    debug!(
        reference = %cli.reference.display(),
        candidate = %cli.candidate.display(),
        threshold = tolerance.threshold(),
        "grading"
    );

    match grade_files(&cli.reference, &cli.candidate, tolerance) {
        Ok(verdict) => {
            println!("{}", verdict.message());
            if verdict.is_equal() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            if err.is_not_found() {
                println!("One or both JSON files were not found.");
            }
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
