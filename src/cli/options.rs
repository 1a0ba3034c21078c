//! Parsed command-line options.

/// Everything the argument scanner recognized, plus the untouched
/// positionals in their original order.
///
/// Values are kept as raw strings here; the port is not checked to be a
/// number until something actually needs it as one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    /// `-A`: force agent forwarding on
    pub forward_agent: bool,

    /// `-a`: force agent forwarding off (beats `-A`)
    pub no_forward_agent: bool,

    /// `-v`: pass `-v` through to ssh/scp
    pub verbose: bool,

    /// `-r`: recursive copy (scp mode only)
    pub recursive: bool,

    /// `-c` / `--scp`: scp mode
    pub scp: bool,

    /// `--add`: save the target as a host entry instead of connecting
    pub add: bool,

    /// `-h` / `--help`
    pub help: bool,

    /// `-V` / `--version`
    pub version: bool,

    /// `-p` / `--port`: raw port value, validated later
    pub port: Option<String>,

    /// `-u` / `--user`: login user override
    pub user: Option<String>,

    /// `--name`: alias name for `--add`
    pub name: Option<String>,

    /// Tokens that matched no flag, original order preserved
    pub positionals: Vec<String>,
}
