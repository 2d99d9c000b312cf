//! Status and error output for humans.
//!
//! Item lists themselves never go through here; sinks own their output.
//! Status lines go to stdout unless the reporter is quiet or item lists
//! are being written there. Warnings go to stderr unless quiet; errors
//! always go to stderr.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::Declarations;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Decides which status lines are printed.
///
/// Built once at startup from the command line and passed by reference to
/// everything that talks to the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    /// Set by `-q`; silences status lines and warnings.
    quiet: bool,
    verbose: bool,
    /// Item lists go to stdout, so status lines stay off it.
    stdout_data: bool,
}

impl Reporter {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            stdout_data: false,
        }
    }

    pub fn with_stdout_data(mut self, stdout_data: bool) -> Self {
        self.stdout_data = stdout_data;
        self
    }

    fn shows_status(&self) -> bool {
        !self.quiet && !self.stdout_data
    }

    fn shows_warnings(&self) -> bool {
        !self.quiet
    }

    /// Name the config file in use (verbose only).
    pub fn config(&self, path: &Path) {
        if self.verbose && self.shows_status() {
            let _ = writeln!(io::stdout().lock(), "{} {}", "Using config".cyan(), path.display());
        }
    }

    /// Announce that a source is about to be read.
    pub fn reading(&self, source_id: &str) {
        if self.shows_status() {
            self.reading_to(source_id, &mut io::stdout().lock());
        }
    }

    pub fn reading_to<W: Write>(&self, source_id: &str, writer: &mut W) {
        let _ = writeln!(writer, "{} {}", "Reading".cyan(), source_id);
    }

    /// Per-category counts for a source that was read (verbose only).
    pub fn found(&self, source_id: &str, declarations: &Declarations) {
        if self.verbose && self.shows_status() {
            self.found_to(source_id, declarations, &mut io::stdout().lock());
        }
    }

    pub fn found_to<W: Write>(&self, source_id: &str, declarations: &Declarations, writer: &mut W) {
        let _ = writeln!(
            writer,
            "  {} {}: {} classes, {} fonts, {} symbols",
            "=".blue(),
            source_id.dimmed(),
            declarations.classes.len(),
            declarations.fonts.len(),
            declarations.symbols.len()
        );
    }

    /// Confirm that an output file was written.
    pub fn wrote(&self, what: &str, path: &Path) {
        if self.shows_status() {
            self.wrote_to(what, path, &mut io::stdout().lock());
        }
    }

    pub fn wrote_to<W: Write>(&self, what: &str, path: &Path, writer: &mut W) {
        let _ = writeln!(
            writer,
            "{} Wrote {} to {}.",
            SUCCESS_MARK.green(),
            what,
            path.display()
        );
    }

    pub fn warning(&self, message: &str) {
        if self.shows_warnings() {
            print_warning_to(message, &mut io::stderr().lock());
        }
    }
}

/// Print an error; shown even when quiet.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(writer, "{} {:#}", "error:".bold().red(), err);
}

pub fn print_warning_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}
