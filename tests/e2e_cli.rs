//! End-to-end CLI tests for gossh.
//!
//! Every test drives the real binary with `HOME` pointed at its own temp
//! directory, so registries never leak between tests and nothing touches
//! the developer's real `.gohosts.toml`.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"# managed by gossh

[[hosts]]
name = "web"
user = "bob"
host = "h.example.com"
port = 2222
forward_agent = true

[[hosts]]
name = "db"
host = "db.internal"

[identities]
work = "~/.ssh/id_work"
"#;

/// Get a command pointing to the gossh binary, isolated in `home`.
fn gossh(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("gossh");
    cmd.env("HOME", home.path());
    cmd
}

fn empty_home() -> TempDir {
    TempDir::new().unwrap()
}

fn home_with_config(content: &str) -> TempDir {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".gohosts.toml"), content).unwrap();
    home
}

fn read_config(home: &TempDir) -> String {
    fs::read_to_string(home.path().join(".gohosts.toml")).unwrap()
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("gossh"))
            .stdout(predicate::str::contains("--add"))
            .stdout(predicate::str::contains("Hosts:"));
    }

    #[test]
    fn shows_version() {
        let home = empty_home();
        gossh(&home)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("no host given"))
            .stderr(predicate::str::contains("Usage:"));
    }

    #[test]
    fn help_lists_hosts_sorted_and_aligned() {
        let home = home_with_config(CONFIG);
        let output = gossh(&home).arg("-h").output().unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();

        let db = stdout.find("db => db.internal").expect("db line");
        let web = stdout
            .find("web => bob@h.example.com:2222")
            .expect("web line");
        assert!(db < web, "hosts are listed sorted by alias");
    }
}

// ============================================
// SSH Mode Tests
// ============================================

mod ssh_mode {
    use super::*;

    #[test]
    fn raw_host_passes_through() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .arg("raw.example.org")
            .assert()
            .success()
            .stdout("ssh raw.example.org\n");
    }

    #[test]
    fn alias_resolves_stored_fields() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-v", "web"])
            .assert()
            .success()
            .stdout("ssh bob@h.example.com -p 2222 -v -A\n");
    }

    #[test]
    fn explicit_user_beats_stored() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-u", "alice", "web"])
            .assert()
            .success()
            .stdout("ssh alice@h.example.com -p 2222 -A\n");
    }

    #[test]
    fn inline_user_beats_stored() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .arg("alice@web")
            .assert()
            .success()
            .stdout("ssh alice@h.example.com -p 2222 -A\n");
    }

    #[test]
    fn user_flag_beats_inline_user() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-u", "carol", "alice@web"])
            .assert()
            .success()
            .stdout("ssh carol@h.example.com -p 2222 -A\n");
    }

    #[test]
    fn explicit_port_beats_stored() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-p", "8022", "web"])
            .assert()
            .success()
            .stdout("ssh bob@h.example.com -p 8022 -A\n");
    }

    #[test]
    fn attached_and_separate_port_values_are_equivalent() {
        let home = home_with_config(CONFIG);
        let separate = gossh(&home).args(["-p", "8022", "web"]).output().unwrap();
        let attached = gossh(&home).args(["-p8022", "web"]).output().unwrap();
        assert_eq!(separate.stdout, attached.stdout);
    }

    #[test]
    fn agent_off_wins_in_any_order() {
        let home = home_with_config(CONFIG);
        for args in [&["-A", "-a", "web"][..], &["-a", "-A", "web"][..]] {
            gossh(&home)
                .args(args)
                .assert()
                .success()
                .stdout("ssh bob@h.example.com -p 2222\n");
        }
    }

    #[test]
    fn agent_flag_applies_to_raw_hosts() {
        let home = empty_home();
        gossh(&home)
            .args(["-A", "raw.example.org"])
            .assert()
            .success()
            .stdout("ssh raw.example.org -A\n");
    }

    #[test]
    fn too_many_arguments_is_a_usage_error() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["web", "db"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("too many arguments"));
    }

    #[test]
    fn invalid_port_is_a_usage_error() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-p", "lots", "web"])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("invalid port 'lots'"));
    }

    #[test]
    fn missing_config_still_resolves_raw_hosts() {
        let home = empty_home();
        gossh(&home)
            .arg("somehost")
            .assert()
            .success()
            .stdout("ssh somehost\n")
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn malformed_config_warns_and_continues() {
        let home = home_with_config("this is not toml [[[");
        gossh(&home)
            .arg("somehost")
            .assert()
            .success()
            .stdout("ssh somehost\n")
            .stderr(predicate::str::contains("[gossh][warn]"));
    }
}

// ============================================
// SCP Mode Tests
// ============================================

mod scp_mode {
    use super::*;

    #[test]
    fn expands_source_and_destination() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-c", "web:/var/log", "./logs"])
            .assert()
            .success()
            .stdout("scp bob@h.example.com:/var/log ./logs\n");
    }

    #[test]
    fn recursive_with_explicit_port() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-c", "-r", "-p", "2222", "web:/var/log", "./logs"])
            .assert()
            .success()
            .stdout("scp -r -P 2222 bob@h.example.com:/var/log ./logs\n");
    }

    #[test]
    fn stored_port_is_not_applied_in_scp_mode() {
        // The web alias stores port 2222, but scp only gets a port from
        // an explicit flag.
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-c", "web:/var/log", "./logs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("-P").not());
    }

    #[test]
    fn intermediate_sources_pass_through_verbatim() {
        // Only the first source and the destination are expanded, even
        // when an intermediate argument names a known alias.
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-c", "web:/a", "db:/b", "./c"])
            .assert()
            .success()
            .stdout("scp bob@h.example.com:/a db:/b ./c\n");
    }

    #[test]
    fn destination_alias_is_expanded() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-c", "./local.txt", "db:/backups/"])
            .assert()
            .success()
            .stdout("scp ./local.txt db.internal:/backups/\n");
    }

    #[test]
    fn single_path_is_a_usage_error() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["-c", "web:/var/log"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("source and a destination"));
    }
}

// ============================================
// Add Mode Tests
// ============================================

mod add_mode {
    use super::*;

    #[test]
    fn adds_entry_backs_up_and_exits_128() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["--add", "--name", "staging", "deploy@stage.example.com", "-p", "2200"])
            .assert()
            .code(128)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("host entry 'staging' saved"));

        // Backup holds the pre-add content.
        let backup = fs::read_to_string(home.path().join(".gohosts.toml.bak")).unwrap();
        assert_eq!(backup, CONFIG);

        // The new entry resolves like any other alias.
        gossh(&home)
            .arg("staging")
            .assert()
            .success()
            .stdout("ssh deploy@stage.example.com -p 2200\n");
    }

    #[test]
    fn add_without_name_is_a_usage_error() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["--add", "stage.example.com"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("--add requires --name"));
    }

    #[test]
    fn add_with_missing_config_fails_without_backup() {
        let home = empty_home();
        gossh(&home)
            .args(["--add", "--name", "x", "h.example.com"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("does not exist"));
        assert!(!home.path().join(".gohosts.toml.bak").exists());
    }

    #[test]
    fn add_preserves_identities_and_comments() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["--add", "--name", "cache", "cache.internal"])
            .assert()
            .code(128);

        let text = read_config(&home);
        assert!(text.starts_with("# managed by gossh\n"));
        assert!(text.contains("[identities]"));
        assert!(text.contains("~/.ssh/id_work"));
    }

    #[test]
    fn re_adding_a_name_replaces_in_place() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["--add", "--name", "web", "new.example.com"])
            .assert()
            .code(128);
        gossh(&home)
            .args(["--add", "--name", "web", "newer.example.com"])
            .assert()
            .code(128);

        let text = read_config(&home);
        assert_eq!(text.matches("name = \"web\"").count(), 1);
        assert!(text.contains("[identities]"));

        gossh(&home)
            .arg("web")
            .assert()
            .success()
            .stdout("ssh newer.example.com\n");
    }

    #[test]
    fn add_can_clone_an_alias_under_a_new_name() {
        let home = home_with_config(CONFIG);
        gossh(&home)
            .args(["--add", "--name", "web2", "web"])
            .assert()
            .code(128);

        let direct = gossh(&home).arg("web").output().unwrap();
        let cloned = gossh(&home).arg("web2").output().unwrap();
        assert_eq!(direct.stdout, cloned.stdout);
    }

    #[test]
    fn add_applies_agent_override_to_stored_entry() {
        let home = home_with_config(CONFIG);
        // Clone web but with forwarding forced off.
        gossh(&home)
            .args(["--add", "--name", "web-noagent", "web", "-a"])
            .assert()
            .code(128);

        gossh(&home)
            .arg("web-noagent")
            .assert()
            .success()
            .stdout("ssh bob@h.example.com -p 2222\n");
    }
}
