//! Process execution capabilities.
//!
//! Running action commands through the user's shell, and opening paths or
//! URLs with the system default handler.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Executes a shell command in a working directory.
///
/// Injected into the dispatch paths so they can be exercised with a fake
/// instead of spawning real processes.
pub trait Runner {
    fn run(&self, command: &str, dir: &Path) -> Result<()>;
}

/// Runs commands through the user's shell with inherited stdio.
pub struct ShellRunner;

impl ShellRunner {
    fn shell() -> (String, &'static str) {
        if cfg!(windows) {
            return ("powershell".to_string(), "-Command");
        }
        // -l so the user's profile (and its PATH) is loaded
        let shell = std::env::var("SHELL").unwrap_or_else(|_| "bash".to_string());
        (shell, "-lc")
    }
}

impl Runner for ShellRunner {
    fn run(&self, command: &str, dir: &Path) -> Result<()> {
        if command.is_empty() {
            bail!("empty command");
        }
        let (shell, flag) = Self::shell();
        tracing::debug!("running {command:?} in {}", dir.display());
        let status = Command::new(&shell)
            .arg(flag)
            .arg(command)
            .current_dir(dir)
            .status()
            .with_context(|| format!("failed to start {shell}"))?;
        if !status.success() {
            bail!("command exited with {status}");
        }
        Ok(())
    }
}

/// Candidates probed to open a path or URL on Linux, in order.
const LINUX_OPENERS: &[&str] = &[
    "xdg-open",
    "gnome-open",
    "kde-open",
    "x-www-browser",
    "firefox",
    "chromium",
];

/// Open a file path or URL with the system default handler.
pub fn open_path(target: &str) -> Result<()> {
    if cfg!(target_os = "macos") {
        let status = Command::new("open")
            .arg(target)
            .status()
            .context("failed to run open")?;
        if !status.success() {
            bail!("open exited with {status}");
        }
        return Ok(());
    }
    if cfg!(windows) {
        let status = Command::new("cmd")
            .args(["/c", "start", target])
            .status()
            .context("failed to run start")?;
        if !status.success() {
            bail!("start exited with {status}");
        }
        return Ok(());
    }
    for candidate in LINUX_OPENERS {
        if which::which(candidate).is_err() {
            continue;
        }
        let ok = Command::new(candidate)
            .arg(target)
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        if ok {
            return Ok(());
        }
    }
    bail!("could not open {target}: no known opener available")
}
