//! CLI argument parsing using clap.

use clap::Parser;

/// Print a greeting to standard output and exit.
///
/// Takes no arguments, reads no configuration, and writes nothing but the
/// greeting itself.
#[derive(Parser, Debug)]
#[command(name = "hello-world", version, about, long_about = None)]
pub struct Args {}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
