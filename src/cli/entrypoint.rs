//! Shared CLI entry point for the `gossh` binary.
//!
//! This is the whole lifecycle of an invocation: load the registry, scan
//! the arguments, dispatch to one of the three modes (ssh, scp, add), and
//! map the outcome to an exit code. The binary in `main.rs` is a thin shim
//! over [`run`].
//!
//! stdout discipline matters here: on success the emitted command line is
//! the only thing written to stdout, because callers eval it. Everything
//! else (usage, warnings, the add confirmation) goes to stderr.

use std::path::Path;

use crate::cli::options::ParsedOptions;
use crate::cli::parser::parse_args;
use crate::cli::usage::format_usage;
use crate::colors::Painter;
use crate::command::{build_scp_command, build_ssh_command, render};
use crate::config::{self, HostEntry, Registry};
use crate::error::{EXIT_ADDED, EXIT_CONFIG, EXIT_OK, EXIT_USAGE, UsageError};
use crate::resolve::{parse_port, resolve_target};
use crate::scp::expand_endpoints;

/// Run the CLI against `args` (without the program name) and return the
/// exit code for the process.
pub fn run(args: &[String]) -> i32 {
    let config_path = config::locate_config();
    let registry = Registry::load(&config_path);

    let opts = match parse_args(args) {
        Ok(opts) => opts,
        Err(err) => return fail_usage(&err, &registry),
    };

    if opts.help {
        print!("{}", format_usage(&registry, &Painter::stdout()));
        return EXIT_OK;
    }
    if opts.version {
        println!("gossh {}", env!("CARGO_PKG_VERSION"));
        return EXIT_OK;
    }

    if opts.positionals.is_empty() {
        return fail_usage(&UsageError::MissingHost, &registry);
    }

    // --add beats --scp when someone passes both; the positional is then a
    // host spec, not a path.
    if opts.add {
        run_add(&opts, &registry, &config_path)
    } else if opts.scp {
        run_scp(&opts, &registry)
    } else {
        run_ssh(&opts, &registry)
    }
}

fn run_ssh(opts: &ParsedOptions, registry: &Registry) -> i32 {
    if opts.positionals.len() > 1 {
        return fail_usage(
            &UsageError::TooManyArguments(opts.positionals.len()),
            registry,
        );
    }

    let target = match resolve_target(&opts.positionals[0], registry, opts) {
        Ok(target) => target,
        Err(err) => return fail_usage(&err, registry),
    };

    println!("{}", render(&build_ssh_command(&target, opts.verbose)));
    EXIT_OK
}

fn run_scp(opts: &ParsedOptions, registry: &Registry) -> i32 {
    if opts.positionals.len() < 2 {
        return fail_usage(&UsageError::InsufficientArguments, registry);
    }

    // Stored alias ports are not applied in scp mode; only an explicit
    // flag makes it onto the command line.
    let port = match opts.port.as_deref() {
        Some(raw) => match parse_port(raw) {
            Ok(port) => Some(port),
            Err(err) => return fail_usage(&err, registry),
        },
        None => None,
    };

    let mut paths = opts.positionals.clone();
    expand_endpoints(&mut paths, registry);

    println!(
        "{}",
        render(&build_scp_command(&paths, port, opts.verbose, opts.recursive))
    );
    EXIT_OK
}

/// `--add`: resolve the target like SSH mode would, then persist it.
///
/// Resolving first means `gossh --add --name staging web` snapshots the
/// `web` alias (with any overrides applied) under the new name.
fn run_add(opts: &ParsedOptions, registry: &Registry, config_path: &Path) -> i32 {
    let name = match opts.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => return fail_usage(&UsageError::MissingName, registry),
    };

    if opts.positionals.len() > 1 {
        return fail_usage(
            &UsageError::TooManyArguments(opts.positionals.len()),
            registry,
        );
    }

    let target = match resolve_target(&opts.positionals[0], registry, opts) {
        Ok(target) => target,
        Err(err) => return fail_usage(&err, registry),
    };

    let entry = HostEntry {
        name: name.clone(),
        user: target.user,
        host: target.host,
        port: target.port,
        forward_agent: target.forward_agent,
    };

    let painter = Painter::stderr();
    match config::add_host(config_path, entry) {
        Ok(backup) => {
            eprintln!(
                "{} host entry '{}' saved; previous config backed up to {}",
                painter.ok("[gossh]"),
                name,
                backup.display()
            );
            EXIT_ADDED
        }
        Err(err) => {
            eprintln!("{} {}", painter.error("[gossh]"), err);
            EXIT_CONFIG
        }
    }
}

fn fail_usage(err: &UsageError, registry: &Registry) -> i32 {
    let painter = Painter::stderr();
    eprintln!("{} {}", painter.error("error:"), err);
    eprintln!();
    eprint!("{}", format_usage(registry, &painter));
    EXIT_USAGE
}
