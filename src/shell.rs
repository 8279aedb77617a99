//! Shell detection and integration-code generation.
//!
//! Renders the merged command namespace as alias definitions for the target
//! shell. POSIX output single-quotes every alias body, so embedded quotes go
//! through [`quote_single`]; the PowerShell arm emits plain `Set-Alias`
//! pairs.

use std::path::Path;

use crate::builtins::{BIN_PLACEHOLDER, ROOT_ALIAS};
use crate::namespace::{CommandKind, ResolvedCommand};

/// Environment variable the POSIX output exports and the alias bodies expand.
pub const BIN_VAR: &str = "COLONSH_BIN";

/// Shells the generator knows how to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellKind {
    Zsh,
    Bash,
    Fish,
    PowerShell,
}

impl ShellKind {
    pub fn name(self) -> &'static str {
        match self {
            ShellKind::Zsh => "zsh",
            ShellKind::Bash => "bash",
            ShellKind::Fish => "fish",
            ShellKind::PowerShell => "powershell",
        }
    }

    /// Parse an explicit shell token. Unrecognized tokens fall back to
    /// detection at the call site.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "zsh" => Some(ShellKind::Zsh),
            "bash" => Some(ShellKind::Bash),
            "fish" => Some(ShellKind::Fish),
            "powershell" => Some(ShellKind::PowerShell),
            _ => None,
        }
    }

    /// Read the invoking shell from `$SHELL`; `None` when it names no known
    /// shell.
    pub fn from_env() -> Option<Self> {
        let shell_path = std::env::var("SHELL").ok()?;
        let base = Path::new(&shell_path).file_name()?.to_string_lossy();
        if base.contains("zsh") {
            Some(ShellKind::Zsh)
        } else if base.contains("bash") {
            Some(ShellKind::Bash)
        } else if base.contains("fish") {
            Some(ShellKind::Fish)
        } else {
            None
        }
    }

    /// Detected shell with the platform default as fallback.
    pub fn detect() -> Self {
        if let Some(kind) = Self::from_env() {
            return kind;
        }
        if cfg!(windows) {
            ShellKind::PowerShell
        } else {
            ShellKind::Zsh
        }
    }

    /// Resolve an optional explicit token, falling back to detection.
    pub fn resolve(arg: Option<&str>) -> Self {
        arg.and_then(Self::from_name).unwrap_or_else(Self::detect)
    }

    pub fn is_posix(self) -> bool {
        !matches!(self, ShellKind::PowerShell)
    }

    /// Render the merged namespace as integration code for this shell.
    pub fn render(self, commands: &[ResolvedCommand], bin: &Path) -> String {
        if self.is_posix() {
            render_posix(self, commands, bin)
        } else {
            render_powershell(commands, bin)
        }
    }
}

/// Escape single quotes so `s` can sit inside a single-quoted alias body:
/// close the string, emit an escaped quote, reopen (`'` becomes `'\''`).
pub fn quote_single(s: &str) -> String {
    s.replace('\'', r"'\''")
}

fn render_posix(kind: ShellKind, commands: &[ResolvedCommand], bin: &Path) -> String {
    let bin_path = bin.display().to_string();
    let bin_name = bin
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "colonsh".to_string());
    let bin_ref = format!("${BIN_VAR}");

    let mut out = String::new();
    out.push_str("# colonsh shell integration\n");
    out.push_str(&format!("# Generated by: {} init {}\n\n", bin_name, kind.name()));
    out.push_str(&format!("export {BIN_VAR}={bin_path:?}\n\n"));

    for cmd in commands.iter().filter(|c| c.kind == CommandKind::Root) {
        out.push_str("# Root help / entrypoint\n");
        let body = cmd.command.replace(BIN_PLACEHOLDER, &bin_ref);
        out.push_str(&format!(
            "alias {}='{}'\n",
            cmd.display_name(),
            quote_single(&body)
        ));
    }

    out.push_str("\n# --- Built-in Aliases ---\n");
    for cmd in commands.iter().filter(|c| c.kind == CommandKind::Builtin) {
        let body = cmd.command.replace(BIN_PLACEHOLDER, &bin_ref);
        out.push_str(&format!(
            "alias {}='{}'\n",
            cmd.display_name(),
            quote_single(&body)
        ));
    }

    let customs: Vec<&ResolvedCommand> = commands
        .iter()
        .filter(|c| c.kind == CommandKind::Custom)
        .collect();
    if !customs.is_empty() {
        out.push_str("\n# --- Custom aliases from colonsh.json ---\n");
        for cmd in customs {
            out.push_str(&format!(
                "alias {}='{}'\n",
                cmd.display_name(),
                quote_single(&cmd.command)
            ));
        }
    }

    out
}

fn render_powershell(commands: &[ResolvedCommand], bin: &Path) -> String {
    let bin_path = bin.display().to_string();

    let mut out = String::new();
    out.push_str("# colonsh PowerShell Integration\n");
    out.push_str("# Paste the output of 'colonsh init' into your $PROFILE file.\n\n");
    out.push_str(&format!("${BIN_VAR}='{bin_path}'\n\n"));
    out.push_str(&format!("Function Global:colonsh {{ & ${BIN_VAR} @args }}\n"));
    out.push_str(&format!("Set-Alias -Name '{ROOT_ALIAS}' -Value colonsh\n\n"));

    out.push_str("# --- Built-in Aliases (PowerShell) ---\n");
    for cmd in commands.iter().filter(|c| c.kind == CommandKind::Builtin) {
        // Sub-shell capture is not expressible as a simple Set-Alias.
        if cmd.name == "pd" || cmd.name == "cd" {
            continue;
        }
        let body = cmd.command.replace(BIN_PLACEHOLDER, &bin_path);
        out.push_str(&format!("Set-Alias -Name ':{}' -Value '{}'\n", cmd.name, body));
    }

    let customs: Vec<&ResolvedCommand> = commands
        .iter()
        .filter(|c| c.kind == CommandKind::Custom)
        .collect();
    if !customs.is_empty() {
        out.push_str("\n# --- Custom aliases from colonsh.json ---\n");
        for cmd in customs {
            // Known fidelity gap: no quote escaping on this arm.
            out.push_str(&format!(
                "Set-Alias -Name ':{}' -Value '{}'\n",
                cmd.name, cmd.command
            ));
        }
    }

    out
}
