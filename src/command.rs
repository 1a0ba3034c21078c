//! Final ssh/scp command assembly.
//!
//! Builders produce an argv vector; [`render`] joins it into the single
//! line the binary prints. The line is meant for a shell wrapper that
//! evals stdout, so arguments are joined naively with spaces. Paths
//! containing whitespace need quoting by the caller.

use crate::resolve::ResolvedTarget;

/// `ssh [user@]host [-p port] [-v] [-A]`, in exactly that order.
///
/// A target with `forward_agent` off simply omits `-A`; an explicit `-a`
/// never shows up in the output, it only suppresses this flag.
pub fn build_ssh_command(target: &ResolvedTarget, verbose: bool) -> Vec<String> {
    let mut argv = vec!["ssh".to_string()];

    match &target.user {
        Some(user) => argv.push(format!("{}@{}", user, target.host)),
        None => argv.push(target.host.clone()),
    }

    if let Some(port) = target.port {
        argv.push("-p".to_string());
        argv.push(port.to_string());
    }
    if verbose {
        argv.push("-v".to_string());
    }
    if target.forward_agent {
        argv.push("-A".to_string());
    }

    argv
}

/// `scp [-r] [-P port] [-v] <paths...>`.
///
/// scp spells its port flag `-P`; the lowercase `-p` means "preserve
/// times" there, which is not what a stored port wants to say.
pub fn build_scp_command(
    paths: &[String],
    port: Option<u16>,
    verbose: bool,
    recursive: bool,
) -> Vec<String> {
    let mut argv = vec!["scp".to_string()];

    if recursive {
        argv.push("-r".to_string());
    }
    if let Some(port) = port {
        argv.push("-P".to_string());
        argv.push(port.to_string());
    }
    if verbose {
        argv.push("-v".to_string());
    }
    argv.extend(paths.iter().cloned());

    argv
}

/// Join the argv into the one line printed to stdout.
pub fn render(argv: &[String]) -> String {
    argv.join(" ")
}

// ============================================================================
// Tests
// ============================================================================
