//! Hand-rolled argument scanner.
//!
//! The flag surface is small and fixed, so this is a single pass over the
//! raw argument vector rather than a framework. Anything unrecognized is a
//! positional: unknown `--long` tokens, a bare `--`, and short groups with
//! a character that is not ours all pass through untouched, which is what
//! lets raw hostnames and scp paths that start with `-` keep working-ish
//! the same way they always did.

use crate::cli::options::ParsedOptions;
use crate::error::UsageError;

/// Short boolean flags; may appear alone or clustered (`-rv`).
const SHORT_BOOLS: &[char] = &['A', 'a', 'v', 'r', 'c'];
/// Short value flags; the value is the rest of the token (`-p2222`) or the
/// next token (`-p 2222`).
const SHORT_VALUES: &[char] = &['p', 'u'];

/// Scan `args` into [`ParsedOptions`].
///
/// Repeated value flags keep the last occurrence; short and long spellings
/// share one field, so `-p 1 --port 2` ends up as port `2`. The only error
/// out of here is a value flag with nothing to consume.
pub fn parse_args(args: &[String]) -> Result<ParsedOptions, UsageError> {
    let mut opts = ParsedOptions::default();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--scp" => {
                opts.scp = true;
                i += 1;
            }
            "--add" => {
                opts.add = true;
                i += 1;
            }
            "--help" | "-h" => {
                opts.help = true;
                i += 1;
            }
            "--version" | "-V" => {
                opts.version = true;
                i += 1;
            }
            "--port" => {
                opts.port = Some(next_value(args, &mut i, "--port")?);
            }
            "--user" => {
                opts.user = Some(next_value(args, &mut i, "--user")?);
            }
            "--name" => {
                opts.name = Some(next_value(args, &mut i, "--name")?);
            }
            _ if arg.starts_with("--port=") => {
                opts.port = Some(arg.trim_start_matches("--port=").to_string());
                i += 1;
            }
            _ if arg.starts_with("--user=") => {
                opts.user = Some(arg.trim_start_matches("--user=").to_string());
                i += 1;
            }
            _ if arg.starts_with("--name=") => {
                opts.name = Some(arg.trim_start_matches("--name=").to_string());
                i += 1;
            }
            _ if arg.len() > 1 && arg.starts_with('-') && !arg.starts_with("--") => {
                match parse_short_group(arg) {
                    Some(group) => apply_short_group(group, args, &mut i, &mut opts)?,
                    None => {
                        opts.positionals.push(arg.clone());
                        i += 1;
                    }
                }
            }
            _ => {
                opts.positionals.push(arg.clone());
                i += 1;
            }
        }
    }

    Ok(opts)
}

/// A `-xyz` token broken into boolean flags plus at most one trailing value
/// flag with its attached remainder.
struct ShortGroup {
    bools: Vec<char>,
    value: Option<(char, Option<String>)>,
}

/// Split a short token. Returns `None` when any character is not one of
/// ours; the caller then treats the whole token as a positional.
fn parse_short_group(arg: &str) -> Option<ShortGroup> {
    let body = arg.strip_prefix('-')?;
    let mut bools = Vec::new();

    for (idx, c) in body.char_indices() {
        if SHORT_BOOLS.contains(&c) {
            bools.push(c);
        } else if SHORT_VALUES.contains(&c) {
            let rest = &body[idx + c.len_utf8()..];
            let attached = if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            };
            return Some(ShortGroup {
                bools,
                value: Some((c, attached)),
            });
        } else {
            return None;
        }
    }

    Some(ShortGroup { bools, value: None })
}

fn apply_short_group(
    group: ShortGroup,
    args: &[String],
    i: &mut usize,
    opts: &mut ParsedOptions,
) -> Result<(), UsageError> {
    for c in group.bools {
        match c {
            'A' => opts.forward_agent = true,
            'a' => opts.no_forward_agent = true,
            'v' => opts.verbose = true,
            'r' => opts.recursive = true,
            'c' => opts.scp = true,
            _ => {}
        }
    }

    match group.value {
        Some((flag, Some(attached))) => {
            set_value_flag(opts, flag, attached);
            *i += 1;
        }
        Some((flag, None)) => {
            let value = args
                .get(*i + 1)
                .cloned()
                .ok_or(UsageError::MissingValue(short_flag_name(flag)))?;
            set_value_flag(opts, flag, value);
            *i += 2;
        }
        None => {
            *i += 1;
        }
    }

    Ok(())
}

fn set_value_flag(opts: &mut ParsedOptions, flag: char, value: String) {
    match flag {
        'p' => opts.port = Some(value),
        'u' => opts.user = Some(value),
        _ => {}
    }
}

fn short_flag_name(flag: char) -> &'static str {
    match flag {
        'p' => "-p",
        'u' => "-u",
        _ => "-?",
    }
}

fn next_value(args: &[String], i: &mut usize, flag: &'static str) -> Result<String, UsageError> {
    let value = args
        .get(*i + 1)
        .cloned()
        .ok_or(UsageError::MissingValue(flag))?;
    *i += 2;
    Ok(value)
}

// ============================================================================
// Tests
// ============================================================================
