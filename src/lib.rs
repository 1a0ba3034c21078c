//! # gossh
//!
//! **Shortcut manager for ssh/scp** - resolves short host aliases into
//! fully-formed `ssh` / `scp` command lines, backed by a small TOML
//! registry of named hosts.
//!
//! gossh never runs the network client itself. It prints exactly one
//! command line on stdout and leaves execution to a shell wrapper, which
//! keeps it trivial to audit and to test.
//!
//! ## Features
//!
//! - **Alias resolution** - `gossh web` becomes `ssh bob@h.example.com -p 2222 -A`
//! - **Explicit overrides** - `-u`, `-p`, `-A`/`-a` always beat stored values
//! - **scp expansion** - `gossh -c web:/var/log ./logs` rewrites endpoint paths
//! - **Registry edits** - `--add --name staging deploy@stage.example.com`
//!   appends to `~/.gohosts.toml`, with an automatic backup
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use gossh::cli::parser::parse_args;
//! use gossh::command::{build_ssh_command, render};
//! use gossh::config::{Registry, locate_config};
//! use gossh::resolve::resolve_target;
//!
//! let registry = Registry::load(&locate_config());
//! let args = vec!["-v".to_string(), "web".to_string()];
//! let opts = parse_args(&args).unwrap();
//! let target = resolve_target(&opts.positionals[0], &registry, &opts).unwrap();
//! println!("{}", render(&build_ssh_command(&target, opts.verbose)));
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! gossh web                  # ssh to the 'web' alias
//! gossh -v -p 2222 admin@db  # overrides beat stored values
//! gossh -c -r web:/var/log . # scp mode with alias expansion
//! gossh --add --name db db.internal -u admin
//! ```

// ============================================================================
// Modules
// ============================================================================

/// Command-line surface: option struct, argument scanner, usage text, and
/// the entry point the binary delegates to.
pub mod cli;

/// ANSI colors for usage text and diagnostics.
pub mod colors;

/// Final ssh/scp argv assembly and rendering.
pub mod command;

/// Host registry persistence: the `.gohosts.toml` artifact, tolerant
/// loading, and `--add` with backup.
pub mod config;

/// Error types and process exit codes.
pub mod error;

/// Alias resolution for SSH-mode targets.
pub mod resolve;

/// Remote path expansion for scp mode.
pub mod scp;

// ============================================================================
// Re-exports for convenience
// ============================================================================

/// Parsed command-line options.
pub use cli::ParsedOptions;

/// The loaded host registry.
pub use config::Registry;

/// One saved host entry.
pub use config::HostEntry;

/// A fully resolved connection target.
pub use resolve::ResolvedTarget;
