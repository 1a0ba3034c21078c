//! Usage text and the host listing printed under it.
//!
//! The listing reflects whatever registry actually loaded, so `gossh -h`
//! doubles as "what aliases do I have". Goes to stdout for `--help` and to
//! stderr when attached to a usage error.

use crate::colors::Painter;
use crate::config::{CONFIG_FILE_NAME, HostEntry, Registry};

const USAGE: &str = "Usage:\n  \
gossh [options] [user@]<alias|host>             print an ssh command line\n  \
gossh -c [options] <source...> <destination>    print an scp command line\n  \
gossh --add --name <alias> [options] <host>     save a host entry\n\n\
The command line is printed to stdout; wrap it in your shell, e.g.\n  \
go() { cmd=$(gossh \"$@\") && eval \"$cmd\"; }\n\n\
Options:\n  \
-A                force agent forwarding on\n  \
-a                force agent forwarding off (wins over -A)\n  \
-v                verbose; passed through to ssh/scp\n  \
-p, --port <n>    port to connect to\n  \
-u, --user <u>    user to log in as\n  \
-c, --scp         scp mode; expands [user@]alias:path endpoints\n  \
-r                recursive copy (scp mode)\n      \
--add             save the target as a host entry (backs up the config)\n      \
--name <a>        alias name for --add\n  \
-h, --help        show this help\n  \
-V, --version     show version\n\n\
Examples:\n  \
gossh web\n  \
gossh -v -p 2222 admin@db\n  \
gossh -c -r web:/var/log ./logs\n  \
gossh --add --name staging deploy@stage.example.com -p 2200\n";

/// Full help text: banner, options, then the current host listing.
pub fn format_usage(registry: &Registry, painter: &Painter) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} - ssh/scp shortcut manager\n\n",
        painter.header(&format!("gossh {}", env!("CARGO_PKG_VERSION")))
    ));
    out.push_str(USAGE);
    out.push('\n');
    out.push_str(&format_host_listing(registry, painter));
    out
}

/// The `Hosts:` section: aliases sorted by name, right-aligned to the
/// longest, each rendered as `name => [user@]host[:port]`.
pub fn format_host_listing(registry: &Registry, painter: &Painter) -> String {
    let mut out = String::new();
    out.push_str(&painter.header("Hosts:"));
    out.push('\n');

    if registry.hosts.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            painter.dim(&format!("none defined in ~/{CONFIG_FILE_NAME}"))
        ));
        return out;
    }

    let mut entries: Vec<&HostEntry> = registry.hosts.iter().collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    for entry in entries {
        let padded = format!("{:>width$}", entry.name);
        out.push_str(&format!(
            "  {} {} {}\n",
            painter.alias(&padded),
            painter.dim("=>"),
            render_target(entry)
        ));
    }

    out
}

fn render_target(entry: &HostEntry) -> String {
    let mut out = String::new();
    if let Some(user) = &entry.user {
        if !user.is_empty() {
            out.push_str(user);
            out.push('@');
        }
    }
    out.push_str(&entry.host);
    if let Some(port) = entry.port {
        out.push(':');
        out.push_str(&port.to_string());
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
