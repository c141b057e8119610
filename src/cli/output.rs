//! Terminal output helpers.
//!
//! Stdout is reserved for the login command, so every message here goes to
//! stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints

use std::io::{self, Write};

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ Invalid parameter for KEY`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Write a warning message to `w` (yellow).
///
/// Example: `⚠ credential already expired`
pub fn write_warn<W: Write + ?Sized>(w: &mut W, msg: &str) -> io::Result<()> {
    if colors_enabled() {
        writeln!(w, "{} {}", style("⚠").yellow().for_stderr(), msg)
    } else {
        writeln!(w, "⚠ {}", msg)
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ export REGION before running`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}
