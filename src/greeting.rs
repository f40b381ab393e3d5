//! The greeting itself and how it reaches stdout.

use std::io::{self, Write};

/// The greeting literal, without the trailing newline.
pub const GREETING: &str = "Hello, World!";

/// The greeting text as printed.
pub fn greeting() -> &'static str {
    GREETING
}

/// Write the greeting plus a single trailing newline to a sink.
///
/// Errors (e.g. a closed pipe on stdout) are returned to the caller rather
/// than swallowed, so the process can exit non-zero.
pub fn write_greeting(w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{}", GREETING)
}
