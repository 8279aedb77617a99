//! End-to-end tests driving the colonsh binary.
//!
//! Every test points HOME at a fresh temp directory so the config file and
//! shell profiles never touch the real home directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use colonsh::config::CONFIG_FILE_NAME;
use colonsh::Config;

fn colonsh(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("colonsh").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

fn write_config(home: &TempDir, json: &str) {
    fs::write(home.path().join(CONFIG_FILE_NAME), json).unwrap();
}

#[test]
fn first_run_creates_the_config() {
    let home = TempDir::new().unwrap();

    colonsh(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Built-in :aliases:"))
        .stderr(predicate::str::contains("created new one"));

    assert!(home.path().join(CONFIG_FILE_NAME).exists());
}

#[test]
fn second_run_is_a_pure_read() {
    let home = TempDir::new().unwrap();

    colonsh(&home).assert().success();
    colonsh(&home)
        .assert()
        .success()
        .stderr(predicate::str::contains("created new one").not());
}

#[test]
fn created_config_reloads_schema_equal() {
    let home = TempDir::new().unwrap();
    colonsh(&home).assert().success();

    let contents = fs::read_to_string(home.path().join(CONFIG_FILE_NAME)).unwrap();
    let reloaded: Config = serde_json::from_str(&contents).unwrap();
    let expected = Config::example();

    assert_eq!(reloaded.open_cmd, expected.open_cmd);
    assert_eq!(reloaded.aliases.len(), expected.aliases.len());
    assert_eq!(reloaded.aliases[0].name, expected.aliases[0].name);
    assert_eq!(reloaded.project_dirs[0].path, expected.project_dirs[0].path);
    assert_eq!(reloaded.git_repos[0].slug, expected.git_repos[0].slug);
}

#[test]
fn help_lists_builtins_metas_and_customs() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"{"aliases": [{"name": "serve", "cmd": "python -m http.server"}]}"#,
    );

    colonsh(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to colonsh!"))
        .stdout(predicate::str::contains(":pd"))
        .stdout(predicate::str::contains("[subcommand]"))
        .stdout(predicate::str::contains("Custom aliases (from config):"))
        .stdout(predicate::str::contains(":serve"))
        .stdout(predicate::str::contains("python -m http.server"));
}

#[test]
fn help_columns_align_with_a_long_alias() {
    let home = TempDir::new().unwrap();
    let long_name = "supercalifragilistic";
    write_config(
        &home,
        &format!(r#"{{"aliases": [{{"name": "{long_name}", "cmd": "echo hi"}}]}}"#),
    );

    // Width is the longest display name: the alias name plus its colon.
    let width = long_name.len() + 1;
    let root_row = format!("  ::{}  Show this help menu", " ".repeat(width - 2));
    let custom_row = format!("  :{long_name}  echo hi");

    colonsh(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains(root_row))
        .stdout(predicate::str::contains(custom_row));
}

#[test]
fn init_zsh_emits_the_posix_contract() {
    let home = TempDir::new().unwrap();

    colonsh(&home)
        .arg("init")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("export COLONSH_BIN="))
        .stdout(predicate::str::contains("alias ::='$COLONSH_BIN'"))
        .stdout(predicate::str::contains(
            r#"alias :pd='cd "$($COLONSH_BIN pd)"'"#,
        ))
        .stdout(predicate::str::contains("alias :gs='git status'"))
        .stdout(predicate::str::contains("alias :init=").not())
        .stdout(predicate::str::contains("alias :setup=").not())
        // custom aliases from the auto-created example config
        .stdout(predicate::str::contains(
            "# --- Custom aliases from colonsh.json ---",
        ))
        .stdout(predicate::str::contains("alias :c='code .'"));
}

#[test]
fn init_quotes_hostile_custom_aliases() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"{"aliases": [{"name": "shout", "cmd": "echo 'hi'"}]}"#,
    );

    colonsh(&home)
        .arg("init")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains(r"alias :shout='echo '\''hi'\'''"));
}

#[test]
fn init_powershell_skips_capture_aliases() {
    let home = TempDir::new().unwrap();

    colonsh(&home)
        .arg("init")
        .arg("powershell")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set-Alias -Name '::' -Value colonsh"))
        .stdout(predicate::str::contains("Function Global:colonsh"))
        .stdout(predicate::str::contains(":pd").not())
        .stdout(predicate::str::contains("':po'"));
}

#[test]
fn setup_appends_and_removes_the_marked_block() {
    let home = TempDir::new().unwrap();
    let zshrc = home.path().join(".zshrc");
    fs::write(&zshrc, "# existing config\n").unwrap();

    colonsh(&home)
        .env("SHELL", "/bin/zsh")
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Appended colonsh setup block"));

    let content = fs::read_to_string(&zshrc).unwrap();
    assert!(content.contains("# >>> colonsh integration >>>"));
    assert!(content.contains("eval \"$(colonsh init zsh)\""));
    assert!(content.contains("# existing config"));

    colonsh(&home)
        .env("SHELL", "/bin/zsh")
        .arg("setup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing changed"));

    colonsh(&home)
        .env("SHELL", "/bin/zsh")
        .args(["setup", "--remove"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed colonsh integration"));

    let content = fs::read_to_string(&zshrc).unwrap();
    assert!(!content.contains("colonsh integration"));
    assert!(content.contains("# existing config"));
}

#[test]
fn setup_refuses_unknown_shells() {
    let home = TempDir::new().unwrap();

    colonsh(&home)
        .env("SHELL", "/bin/tcsh")
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported shell"));
}

#[test]
fn fatal_errors_are_single_line_diagnostics() {
    let home = TempDir::new().unwrap();
    write_config(&home, "{ not json");

    colonsh(&home)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("colonsh: "))
        .stderr(predicate::str::contains(CONFIG_FILE_NAME));
}

#[test]
fn unknown_subcommands_are_rejected() {
    let home = TempDir::new().unwrap();
    colonsh(&home).arg("bogus").assert().failure();
}

#[test]
fn gc_requires_a_message() {
    let home = TempDir::new().unwrap();
    colonsh(&home).arg("gc").assert().failure();
}
