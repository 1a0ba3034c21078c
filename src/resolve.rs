//! Alias resolution for SSH-mode targets.
//!
//! Takes the single positional (`host`, `alias`, `user@alias`, ...), the
//! loaded registry, and the explicit flag overrides, and produces the final
//! connection target. Precedence is always explicit-over-stored: a `-u` or
//! `-p` on the command line beats whatever the alias carries.

use crate::cli::options::ParsedOptions;
use crate::config::Registry;
use crate::error::UsageError;

/// Fully resolved connection target, ready for command assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub user: Option<String>,
    pub host: String,
    pub port: Option<u16>,
    pub forward_agent: bool,
}

/// Resolve `spec` against the registry, applying flag overrides.
///
/// `spec` splits at the first `@` into an inline user and an alias-or-host.
/// A `-u` flag beats the inline user, and either beats the alias's stored
/// user. When the remainder matches no alias it is used verbatim as the
/// hostname, and no stored defaults apply.
///
/// Agent forwarding starts from the alias's stored flag (false for raw
/// hosts), then `-A` forces it on and `-a` forces it off, in that order.
/// So `-a` wins whenever both are given, regardless of argument order.
pub fn resolve_target(
    spec: &str,
    registry: &Registry,
    opts: &ParsedOptions,
) -> Result<ResolvedTarget, UsageError> {
    let (inline_user, key) = split_user(spec);
    let explicit_user =
        non_empty(opts.user.as_deref()).or_else(|| inline_user.map(str::to_string));
    let explicit_port = match opts.port.as_deref() {
        Some(raw) => Some(parse_port(raw)?),
        None => None,
    };

    let (user, host, port, mut forward_agent) = match registry.get(key) {
        Some(entry) => (
            explicit_user.or_else(|| non_empty(entry.user.as_deref())),
            entry.host.clone(),
            explicit_port.or(entry.port),
            entry.forward_agent,
        ),
        None => (explicit_user, key.to_string(), explicit_port, false),
    };

    if opts.forward_agent {
        forward_agent = true;
    }
    if opts.no_forward_agent {
        forward_agent = false;
    }

    if host.is_empty() {
        return Err(UsageError::MissingHost);
    }

    Ok(ResolvedTarget {
        user,
        host,
        port,
        forward_agent,
    })
}

/// Parse a port value collected by the option parser. Validation happens
/// here, not in the parser, so scp and add paths share it.
pub fn parse_port(raw: &str) -> Result<u16, UsageError> {
    raw.parse::<u16>()
        .map_err(|_| UsageError::InvalidPort(raw.to_string()))
}

/// Split `user@rest` at the first `@`. An empty user part counts as no
/// user, so `@web` resolves like plain `web`.
pub(crate) fn split_user(spec: &str) -> (Option<&str>, &str) {
    match spec.split_once('@') {
        Some((user, rest)) if !user.is_empty() => (Some(user), rest),
        Some((_, rest)) => (None, rest),
        None => (None, spec),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    match value {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
