// ============================================================================
// decimal-sum
// Adds every pair of decimal literals in a file and prints a report
// ============================================================================
//
// Usage: decimal-sum [FILE]
//
// Without FILE the program prompts for a file name on stdin, skipping blank
// lines. An unopenable file (including an empty name when stdin runs dry) is
// reported on stderr and is not treated as a failure.

use exact_decimal::batch::{process_file, read_token, BatchError, ReportWriter};
use exact_decimal::domain::ReportConfig;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    init_logging();

    let filename = match std::env::args().nth(1) {
        Some(name) => name,
        None => match prompt_filename() {
            Ok(name) => name,
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            },
        },
    };

    let stdout = io::stdout();
    let mut sink = match ReportWriter::new(stdout.lock(), ReportConfig::classic()) {
        Ok(sink) => sink,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        },
    };

    match process_file(&filename, &mut sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(BatchError::SourceUnavailable { path, .. }) => {
            eprintln!("Error: Could not open file {}", path.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Ask for a file name; an exhausted stdin yields an empty name.
fn prompt_filename() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter filename: ")?;
    stdout.flush()?;

    Ok(read_token(&mut io::stdin().lock())?.unwrap_or_default())
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
