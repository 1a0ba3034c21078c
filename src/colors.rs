//! ANSI coloring for the help screen and diagnostics.
//!
//! stdout normally carries a command line that gets eval'd, so color is
//! only ever applied where a human is looking: help output on a terminal,
//! and errors/confirmations on stderr. Detection is per stream; anything
//! captured through a pipe stays byte-plain.

use std::io::IsTerminal;

// ============================================================================
// ANSI Color Codes
// ============================================================================

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

// ============================================================================
// Painter
// ============================================================================

/// Colorizer handed to the formatting functions. There is no color flag on
/// this CLI; construction picks the stream and terminal detection does the
/// rest.
#[derive(Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// For text headed to stdout (the `--help` screen).
    pub fn stdout() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    /// For text headed to stderr (errors, usage on failure, confirmations).
    pub fn stderr() -> Self {
        Self {
            enabled: std::io::stderr().is_terminal(),
        }
    }

    /// Colors forced off, for output that must stay byte-plain.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if !self.enabled {
            return s.to_string();
        }
        format!("{code}{s}{RESET}")
    }

    /// Error prefixes - RED
    pub fn error(&self, s: &str) -> String {
        self.paint(RED, s)
    }

    /// The add confirmation prefix - GREEN
    pub fn ok(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    /// Section titles in the help screen - BOLD
    pub fn header(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    /// De-emphasized filler (`=>`, hints) - DIM
    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    /// Alias names in the host listing - CYAN
    pub fn alias(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }
}
