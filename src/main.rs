//! colonsh - CLI entry point and subcommand dispatch.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell as CompletionShell;
use unicode_width::UnicodeWidthStr;

use colonsh::builtins::BUILTINS;
use colonsh::cli::{Cli, Commands};
use colonsh::config::CONFIG_FILE_NAME;
use colonsh::namespace::CommandKind;
use colonsh::{actions, namespace, picker, projects, repo, runner, setup};
use colonsh::{Config, Runner, ShellKind, ShellRunner};

fn main() {
    if let Err(err) = run() {
        eprintln!("colonsh: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = Config::config_path()?;
    let config = Config::load_or_init(&config_path)?;

    match cli.command {
        None => {
            print_help(&config);
            Ok(())
        }
        Some(Commands::Init { shell }) => cmd_init(shell.as_deref(), &config),
        Some(Commands::Setup { remove }) => cmd_setup(remove),
        Some(Commands::Config) => cmd_config(&config_path),
        Some(Commands::Pd) => cmd_pd(&config),
        Some(Commands::Cd) => cmd_cd(),
        Some(Commands::Po) => cmd_po(&config, &ShellRunner),
        Some(Commands::Pa) => cmd_pa(&config, &ShellRunner),
        Some(Commands::Gb) => cmd_gb(),
        Some(Commands::Gnb { name }) => cmd_gnb(&name),
        Some(Commands::Gdb) => cmd_gdb(),
        Some(Commands::Gc { message }) => repo::commit(&message.join(" ")),
        Some(Commands::Gca) => repo::commit_amend(),
        Some(Commands::Gcam { message }) => repo::commit_amend_message(&message.join(" ")),
        Some(Commands::Prs) => cmd_prs(),
        Some(Commands::Completions { shell }) => cmd_completions(shell),
    }
}

/// The merged alias listing shown when no subcommand is given.
fn print_help(config: &Config) {
    println!("Welcome to colonsh! Your config file is at ~/{CONFIG_FILE_NAME}");

    let commands = namespace::build(BUILTINS, &config.aliases);
    let width = namespace::display_width(&commands);

    println!();
    println!("Built-in :aliases:");
    for cmd in commands.iter().filter(|c| c.kind != CommandKind::Custom) {
        let marker = if cmd.kind == CommandKind::Meta {
            " [subcommand]"
        } else {
            ""
        };
        println!(
            "  {}  {}{marker}",
            pad(&cmd.display_name(), width),
            cmd.description
        );
    }

    let customs: Vec<_> = commands
        .iter()
        .filter(|c| c.kind == CommandKind::Custom)
        .collect();
    if !customs.is_empty() {
        println!();
        println!("Custom aliases (from config):");
        for cmd in customs {
            println!("  {}  {}", pad(&cmd.display_name(), width), cmd.description);
        }
    }
    println!();
}

/// Pad `name` with spaces up to `width` display columns.
fn pad(name: &str, width: usize) -> String {
    let padding = width.saturating_sub(name.width());
    format!("{name}{}", " ".repeat(padding))
}

fn cmd_init(shell_arg: Option<&str>, config: &Config) -> Result<()> {
    let kind = ShellKind::resolve(shell_arg);
    let bin = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("colonsh"));
    let commands = namespace::build(BUILTINS, &config.aliases);
    print!("{}", kind.render(&commands, &bin));
    Ok(())
}

fn cmd_setup(remove: bool) -> Result<()> {
    let kind = match ShellKind::from_env() {
        Some(kind) => kind,
        None if cfg!(windows) => ShellKind::PowerShell,
        None => {
            let shell = std::env::var("SHELL").unwrap_or_default();
            return Err(setup::SetupError::UnsupportedShell { shell }.into());
        }
    };

    if kind == ShellKind::PowerShell {
        println!("PowerShell requires manual setup due to dynamic profile paths and security policies.");
        println!("1. Run: colonsh init powershell");
        println!("2. Copy the output into your $PROFILE file.");
        return Ok(());
    }

    let profile = setup::profile_path(kind)?;

    if remove {
        if setup::uninstall(&profile)? {
            println!("Removed colonsh integration from {}.", profile.display());
        } else {
            println!("No colonsh integration found in {}.", profile.display());
        }
        return Ok(());
    }

    if setup::is_installed_in(&profile)? {
        println!(
            "colonsh setup block already found in {}. Nothing changed.",
            profile.display()
        );
        return Ok(());
    }

    setup::install(&profile, kind)?;
    println!("Appended colonsh setup block to {}.", profile.display());
    println!(
        "Run 'source {}' or restart your terminal for changes to take effect.",
        profile.display()
    );
    Ok(())
}

fn cmd_config(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        bail!("config file not found at {}", config_path.display());
    }
    println!("Opening config: {}", config_path.display());
    runner::open_path(&config_path.display().to_string())
}

fn cmd_pd(config: &Config) -> Result<()> {
    let projects = projects::list_projects(config)?;
    if projects.is_empty() {
        bail!("no projects found from project_dirs");
    }

    let options: Vec<String> = projects.iter().map(|p| p.display().to_string()).collect();
    match picker::select_one("Select a project directory", &options)? {
        // stdout feeds `cd "$(colonsh pd)"`; the path must be the only output
        Some(selected) => println!("{selected}"),
        None => eprintln!("No project selected."),
    }
    Ok(())
}

fn cmd_cd() -> Result<()> {
    let subdirs = projects::list_subdirs(Path::new("."))?;
    if subdirs.is_empty() {
        bail!("no subdirectories found");
    }

    match picker::select_one("Select a directory", &subdirs)? {
        Some(selected) => println!("{selected}"),
        None => eprintln!("No directory selected."),
    }
    Ok(())
}

fn cmd_po(config: &Config, runner: &dyn Runner) -> Result<()> {
    if !repo::in_work_tree() {
        bail!("command 'po' expects to be run inside a git repository");
    }
    let root = repo::work_tree_root().context("failed to get git root")?;

    let matched = repo::current_repo(config);
    let open_cmd = actions::effective_open_cmd(config, matched);

    println!("Opening project at {} with: {}", root.display(), open_cmd);
    runner.run(&open_cmd, &root)
}

fn cmd_pa(config: &Config, runner: &dyn Runner) -> Result<()> {
    if !repo::in_work_tree() {
        bail!("not inside a git repository");
    }
    let root = repo::work_tree_root()?;

    let Some(matched) = repo::current_repo(config).filter(|r| !r.actions.is_empty()) else {
        bail!("no actions found for this repository in {CONFIG_FILE_NAME}");
    };

    let options: Vec<String> = matched.actions.iter().map(|a| a.name.clone()).collect();
    let Some(selected) = picker::select_one("Select an action", &options)? else {
        println!("No action selected.");
        return Ok(());
    };

    let prepared = actions::resolve(&root, matched, &selected)
        .with_context(|| format!("action {selected:?} not found for {}", matched.slug))?;

    println!(
        "Executing action {:?} in {}: {}",
        selected,
        prepared.dir.display(),
        prepared.command
    );
    runner.run(&prepared.command, &prepared.dir)
}

fn cmd_gb() -> Result<()> {
    let branches = repo::branches()?;
    if branches.is_empty() {
        bail!("no branches found");
    }

    let Some(selected) = picker::select_one("Select a branch", &branches)? else {
        println!("No branch selected.");
        return Ok(());
    };

    println!("Switching to branch: {selected}");
    repo::checkout(&selected)
}

fn cmd_gnb(parts: &[String]) -> Result<()> {
    let branch = parts.join("-");
    let username = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string());
    let full = format!("{username}/{branch}");

    println!("Creating and switching to branch: {full}");
    repo::checkout_new_branch(&full)
}

fn cmd_gdb() -> Result<()> {
    let branches: Vec<String> = repo::branches()?
        .into_iter()
        .filter(|b| b != "main" && b != "master")
        .collect();
    if branches.is_empty() {
        println!("No branches available for deletion (all filtered).");
        return Ok(());
    }

    let selected = picker::select_many("Select branch(es) to delete", &branches)?;
    if selected.is_empty() {
        println!("No branches selected.");
        return Ok(());
    }

    println!("Branches to delete:");
    for branch in &selected {
        println!("  {branch}");
    }

    if !picker::confirm("Proceed with deletion?")? {
        println!("Aborted.");
        return Ok(());
    }

    for branch in &selected {
        println!("Deleting branch: {branch}");
        // One failed delete must not stop the rest; git already printed why.
        if let Err(err) = repo::delete_branch(branch) {
            tracing::debug!("delete {branch} failed: {err:#}");
        }
    }
    Ok(())
}

fn cmd_prs() -> Result<()> {
    if !repo::in_work_tree() {
        bail!("this is not a git repository");
    }
    let remote = repo::remote_url()?;
    let url = repo::pulls_url(&remote)
        .with_context(|| format!("could not construct pulls URL from remote {remote:?}"))?;

    println!("Opening: {url}");
    runner::open_path(&url)
}

fn cmd_completions(shell: Option<CompletionShell>) -> Result<()> {
    let Some(shell) = shell.or_else(CompletionShell::from_env) else {
        bail!("could not detect shell for completions; pass --shell");
    };
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "colonsh", &mut io::stdout());
    Ok(())
}
