//! hello-world - Console program that prints a greeting and exits 0

mod cli;
mod greeting;

use anyhow::{Context, Result};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let _args = cli::Args::parse_args();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    greeting::write_greeting(&mut handle).context("Failed to write greeting to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(ExitCode::SUCCESS)
}
