//! Remote path expansion for scp mode.
//!
//! scp arguments look like `[user@]host:path` or plain local paths. When the
//! host part names a registry alias, the alias's hostname (and user, unless
//! one was given inline) is substituted before the argument reaches scp.
//! Ports are untouched here: in scp mode a stored port is never applied,
//! only an explicit `-p` flag reaches the command line.

use crate::config::Registry;
use crate::resolve::split_user;

/// Expand a single scp argument against the registry.
///
/// Arguments without a `:` are local paths and pass through unchanged; this
/// also keeps Windows-style `C:\...` paths intact unless someone actually
/// defines an alias named `C`. The result is reassembled as
/// `[user@][host:]path`, dropping each part that ends up empty.
pub fn expand_remote_path(arg: &str, registry: &Registry) -> String {
    let Some((host_part, path)) = arg.split_once(':') else {
        return arg.to_string();
    };

    let (inline_user, key) = split_user(host_part);
    let (user, host) = match registry.get(key) {
        Some(entry) => (
            inline_user
                .map(str::to_string)
                .or_else(|| entry.user.clone().filter(|u| !u.is_empty())),
            entry.host.clone(),
        ),
        None => (inline_user.map(str::to_string), key.to_string()),
    };

    let mut out = String::new();
    if let Some(user) = user {
        out.push_str(&user);
        out.push('@');
    }
    if !host.is_empty() {
        out.push_str(&host);
        out.push(':');
    }
    out.push_str(path);
    out
}

/// Expand the first and last of the scp positionals in place.
///
/// Only the first source and the destination get alias treatment;
/// additional sources in between pass through verbatim. Callers guarantee
/// at least two entries.
pub fn expand_endpoints(paths: &mut [String], registry: &Registry) {
    if paths.is_empty() {
        return;
    }
    let last = paths.len() - 1;
    paths[0] = expand_remote_path(&paths[0], registry);
    if last > 0 {
        paths[last] = expand_remote_path(&paths[last], registry);
    }
}

// ============================================================================
// Tests
// ============================================================================
