//! Command-line surface.
//!
//! # Module Structure
//!
//! - [`options`] - the [`ParsedOptions`] struct (source of truth for flags)
//! - [`parser`] - the argument scanner
//! - [`usage`] - help text and the host listing
//! - [`entrypoint`] - dispatch and exit-code mapping, shared with tests

pub mod entrypoint;
pub mod options;
pub mod parser;
pub mod usage;

// Re-export the types most callers want
pub use options::ParsedOptions;
pub use parser::parse_args;
