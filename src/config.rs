//! Host registry persistence.
//!
//! The registry lives in a single TOML file, `.gohosts.toml`, in the user's
//! home directory. Loading is deliberately forgiving: a missing file is an
//! empty registry, and a broken one degrades to empty with a stderr warning
//! so plain `host` arguments keep working. Writing is the opposite: `--add`
//! refuses to touch anything it cannot fully re-emit, and always snapshots
//! the previous file to `<file>.bak` first.
//!
//! There is no locking. Two concurrent `--add` runs race on the same file;
//! last writer wins and the loser's entry survives only in the backup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the registry artifact inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".gohosts.toml";

// ============================================================================
// Data model
// ============================================================================

/// One saved host, identified by its alias `name`.
///
/// Serialized as a `[[hosts]]` table so the file keeps entries in the order
/// they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    /// Alias the entry is looked up by. Unique within a file.
    pub name: String,
    /// Login user. Absent means "whatever ssh decides".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Real hostname or address. Never empty for a stored entry.
    pub host: String,
    /// Port override. Absent means the protocol default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Whether `-A` (agent forwarding) is implied for this host.
    #[serde(default)]
    pub forward_agent: bool,
}

/// The loaded registry: ordered host entries plus the opaque `[identities]`
/// table, which this tool stores for other consumers and never interprets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    pub hosts: Vec<HostEntry>,
    pub identities: toml::Table,
}

/// Serde view of the `[[hosts]]` portion of the document. Parsing through
/// this (rather than the whole table) lets a malformed `identities` key
/// degrade independently of the host list, and the reverse.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HostsDoc {
    #[serde(default)]
    hosts: Vec<HostEntry>,
}

#[derive(Serialize)]
struct IdentitiesDoc {
    identities: toml::Table,
}

impl Registry {
    /// Look up an entry by alias name. First match wins; `--add` keeps
    /// names unique so duplicates only appear in hand-edited files.
    pub fn get(&self, name: &str) -> Option<&HostEntry> {
        self.hosts.iter().find(|h| h.name == name)
    }

    /// Load the registry from `path`.
    ///
    /// Missing file is a silent empty registry. Anything else that goes
    /// wrong (unreadable file, invalid TOML, wrong shapes) warns on stderr
    /// and degrades, per key, to empty. This function never fails: an alias
    /// that cannot be resolved simply falls through as a literal hostname.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("[gossh][warn] failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        Self::from_toml(&text, path)
    }

    fn from_toml(text: &str, path: &Path) -> Self {
        let doc: toml::Table = match toml::from_str(text) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!(
                    "[gossh][warn] ignoring malformed config {}: {}",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        let hosts = match toml::from_str::<HostsDoc>(text) {
            Ok(parsed) => parsed.hosts,
            Err(e) => {
                eprintln!(
                    "[gossh][warn] ignoring host entries in {}: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        };

        let identities = match doc.get("identities") {
            None => toml::Table::new(),
            Some(toml::Value::Table(table)) => table.clone(),
            Some(_) => {
                eprintln!(
                    "[gossh][warn] identities in {} is not a table; ignoring",
                    path.display()
                );
                toml::Table::new()
            }
        };

        Registry { hosts, identities }
    }
}

// ============================================================================
// Location
// ============================================================================

/// Resolve the directory the config artifact lives in: `$HOME` when set and
/// non-empty, else the platform home, else the directory of the executable.
pub fn home_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }
    if let Some(dir) = dirs::home_dir() {
        return dir;
    }
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Full path of the config artifact. The file itself may not exist yet;
/// callers decide whether that matters.
pub fn locate_config() -> PathBuf {
    home_dir().join(CONFIG_FILE_NAME)
}

// ============================================================================
// Adding entries
// ============================================================================

/// Insert or replace `entry` in the config file at `path`, backing the
/// previous file up to `<path>.bak` first. Returns the backup path.
///
/// The file must already exist: this tool never creates a registry from
/// scratch, so a typo'd `$HOME` cannot silently spawn a second one. A
/// re-added name replaces the old entry in place, keeping its position.
///
/// Unlike [`Registry::load`], a file that cannot be parsed here is a hard
/// error. Rewriting a document we only half understood would destroy the
/// half we didn't.
pub fn add_host(path: &Path, entry: HostEntry) -> Result<PathBuf, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    // Probe writability before creating the backup, so a read-only config
    // fails cleanly without leaving a fresh .bak behind.
    if fs::OpenOptions::new().write(true).open(path).is_err() {
        return Err(ConfigError::NotWritable(path.to_path_buf()));
    }

    let backup = backup_path(path);
    fs::copy(path, &backup).map_err(|source| ConfigError::BackupFailed {
        path: backup.clone(),
        source,
    })?;

    let text = fs::read_to_string(path).map_err(|e| ConfigError::Malformed {
        path: path.to_path_buf(),
        reason: format!("read failed: {e}"),
    })?;

    let mut doc: toml::Table = toml::from_str(&text).map_err(|e| ConfigError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut hosts = toml::from_str::<HostsDoc>(&text)
        .map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .hosts;

    doc.remove("hosts");
    let identities = match doc.remove("identities") {
        None => None,
        Some(toml::Value::Table(table)) => Some(table),
        Some(_) => {
            return Err(ConfigError::Malformed {
                path: path.to_path_buf(),
                reason: "identities is not a table".into(),
            });
        }
    };

    match hosts.iter_mut().find(|h| h.name == entry.name) {
        Some(slot) => *slot = entry,
        None => hosts.push(entry),
    }

    let rendered = render_document(&leading_comment_block(&text), &doc, &hosts, identities)
        .map_err(|reason| ConfigError::Malformed {
            path: path.to_path_buf(),
            reason,
        })?;

    fs::write(path, rendered).map_err(|_| ConfigError::NotWritable(path.to_path_buf()))?;

    Ok(backup)
}

/// `<path>.bak`, appended to the full file name (`.gohosts.toml.bak`).
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// The contiguous run of blank and `#` comment lines at the top of the
/// file. Preserved across rewrites; comments anywhere else are not.
fn leading_comment_block(text: &str) -> String {
    let mut block = String::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            block.push_str(line);
            block.push('\n');
        } else {
            break;
        }
    }
    block.trim_end().to_string()
}

/// Re-emit the whole document: preamble, unrelated top-level keys, ordered
/// `[[hosts]]` blocks, then `[identities]` when the original had one.
fn render_document(
    preamble: &str,
    extras: &toml::Table,
    hosts: &[HostEntry],
    identities: Option<toml::Table>,
) -> Result<String, String> {
    let mut out = String::new();

    if !preamble.is_empty() {
        out.push_str(preamble);
        out.push_str("\n\n");
    }

    if !extras.is_empty() {
        let rendered = toml::to_string(extras).map_err(|e| e.to_string())?;
        out.push_str(rendered.trim_end());
        out.push_str("\n\n");
    }

    let rendered = toml::to_string(&HostsDoc {
        hosts: hosts.to_vec(),
    })
    .map_err(|e| e.to_string())?;
    out.push_str(rendered.trim_end());
    out.push('\n');

    if let Some(identities) = identities {
        let rendered = toml::to_string(&IdentitiesDoc { identities }).map_err(|e| e.to_string())?;
        out.push('\n');
        out.push_str(rendered.trim_end());
        out.push('\n');
    }

    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
