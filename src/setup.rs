//! Profile-file integration.
//!
//! `colonsh setup` appends a marked section to the user's shell profile that
//! loads the generated aliases on shell start. The section is fenced by
//! marker comments so it can be found, replaced, and removed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::shell::ShellKind;

const MARKER_START: &str = "# >>> colonsh integration >>>";
const MARKER_END: &str = "# <<< colonsh integration <<<";
const MARKER_WARNING: &str = "# DO NOT EDIT - managed by 'colonsh setup'";

/// Errors on the automatic-setup path.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("unsupported shell {shell:?} for automatic setup. Run 'colonsh init' and follow the manual instructions")]
    UnsupportedShell { shell: String },

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("failed to update profile: {0}")]
    Io(#[from] std::io::Error),
}

/// Profile file the integration section goes into for `kind`.
pub fn profile_path(kind: ShellKind) -> Result<PathBuf, SetupError> {
    let home = dirs::home_dir().ok_or(SetupError::NoHomeDir)?;
    let path = match kind {
        ShellKind::Zsh => home.join(".zshrc"),
        ShellKind::Bash => {
            let bashrc = home.join(".bashrc");
            // macOS login shells read .bash_profile instead
            if cfg!(target_os = "macos") && !bashrc.exists() {
                home.join(".bash_profile")
            } else {
                bashrc
            }
        }
        ShellKind::Fish => home.join(".config").join("fish").join("config.fish"),
        ShellKind::PowerShell => {
            return Err(SetupError::UnsupportedShell {
                shell: "powershell".to_string(),
            })
        }
    };
    Ok(path)
}

/// The conditional loading block appended to the profile.
pub fn integration_section(kind: ShellKind, date: &str) -> String {
    let loader = if kind == ShellKind::Fish {
        "if type -q colonsh\n  colonsh init fish | source\nend".to_string()
    } else {
        format!(
            "if command -v colonsh >/dev/null 2>&1; then\n  eval \"$(colonsh init {})\"\nfi",
            kind.name()
        )
    };
    format!("{MARKER_START}\n{MARKER_WARNING}\n# Added by 'colonsh setup' on {date}\n{loader}\n{MARKER_END}")
}

/// Check whether the integration section is present in a profile file.
pub fn is_installed_in(profile: &Path) -> Result<bool, SetupError> {
    if !profile.exists() {
        return Ok(false);
    }
    let content = fs::read_to_string(profile)?;
    Ok(content.contains(MARKER_START) && content.contains(MARKER_END))
}

/// Append the integration section to a profile file.
///
/// An existing section is replaced first, so repeated installs keep a single
/// copy. Parent directories are created when missing (fish keeps its profile
/// under `~/.config`).
pub fn install(profile: &Path, kind: ShellKind) -> Result<(), SetupError> {
    if is_installed_in(profile)? {
        uninstall(profile)?;
    }

    let content = if profile.exists() {
        fs::read_to_string(profile)?
    } else {
        if let Some(parent) = profile.parent() {
            fs::create_dir_all(parent)?;
        }
        String::new()
    };

    let date = Local::now().format("%Y-%m-%d").to_string();
    let section = integration_section(kind, &date);

    let new_content = if content.is_empty() {
        format!("{section}\n")
    } else if content.ends_with('\n') {
        format!("{content}\n{section}\n")
    } else {
        format!("{content}\n\n{section}\n")
    };

    fs::write(profile, new_content)?;
    Ok(())
}

/// Remove the marked section from a profile file.
///
/// `Ok(false)` when no section was present.
pub fn uninstall(profile: &Path) -> Result<bool, SetupError> {
    if !profile.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(profile)?;
    if !content.contains(MARKER_START) {
        return Ok(false);
    }

    let mut new_lines: Vec<&str> = Vec::new();
    let mut in_section = false;
    for line in content.lines() {
        if line.contains(MARKER_START) {
            in_section = true;
            continue;
        }
        if line.contains(MARKER_END) {
            in_section = false;
            continue;
        }
        if !in_section {
            new_lines.push(line);
        }
    }

    while new_lines.last().map(|l| l.is_empty()).unwrap_or(false) {
        new_lines.pop();
    }

    let new_content = if new_lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", new_lines.join("\n"))
    };

    fs::write(profile, new_content)?;
    Ok(true)
}
