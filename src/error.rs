//! Error types and exit codes.
//!
//! Errors split into two families: [`UsageError`] for anything the caller got
//! wrong on the command line (exit 1) and [`ConfigError`] for failures while
//! persisting a host entry (exit 2). Loading the config never errors; a
//! broken file degrades to an empty registry with a stderr warning.

use std::path::PathBuf;

use thiserror::Error;

/// Command line emitted (or help/version shown).
pub const EXIT_OK: i32 = 0;
/// The invocation itself was wrong; usage text was printed.
pub const EXIT_USAGE: i32 = 1;
/// `--add` failed against the config file.
pub const EXIT_CONFIG: i32 = 2;
/// `--add` succeeded. Deliberately distinct from 0 so the shell wrapper
/// knows there is no command line on stdout to eval.
pub const EXIT_ADDED: i32 = 128;

/// Problems with the invocation itself. Always followed by the usage text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("no host given")]
    MissingHost,

    #[error("too many arguments: expected a single host, got {0}")]
    TooManyArguments(usize),

    #[error("scp mode needs at least a source and a destination")]
    InsufficientArguments,

    #[error("--add requires --name <alias>")]
    MissingName,

    #[error("option '{0}' requires a value")]
    MissingValue(&'static str),

    #[error("invalid port '{0}'")]
    InvalidPort(String),
}

/// Failures while adding a host entry to the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file {} does not exist; create it first", .0.display())]
    NotFound(PathBuf),

    #[error("config file {} is not writable", .0.display())]
    NotWritable(PathBuf),

    #[error("could not back up config to {}: {source}", .path.display())]
    BackupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {} is malformed: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
}
