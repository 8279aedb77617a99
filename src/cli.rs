//! CLI definitions for colonsh.
//!
//! Clap structure definitions, separated from main.rs so the completions
//! subcommand and tests can build the command tree without the dispatch
//! logic.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles using the tool's accent colors.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "colonsh")]
#[command(about = "Colon-prefixed shell aliases, project navigation and git shortcuts from one JSON config")]
#[command(
    long_about = "colonsh - a personal command-dispatch shell helper.

All configuration lives in ~/colonsh.json: custom aliases, project
directories and per-repository actions. Running colonsh without a
subcommand prints the merged alias listing.

QUICK START:
    colonsh                        Show the alias listing
    colonsh init zsh               Emit shell integration code
    colonsh setup                  Add the loader to your shell profile

After setup, the generated aliases are available as :pd, :po, :gb, ...
and :: shows this listing again."
)]
#[command(version, styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Emit shell integration code (stdout)
    #[command(long_about = "Emit shell integration code to stdout.

The output defines the :: root alias, one :name alias per builtin and
every custom alias from ~/colonsh.json. The target shell may be given
explicitly (zsh, bash, fish, powershell); anything else falls back to
$SHELL detection.

EXAMPLES:
    colonsh init zsh
    eval \"$(colonsh init)\"")]
    Init {
        /// Target shell; detected from $SHELL when omitted
        shell: Option<String>,
    },

    /// Modify the shell profile to auto-load colonsh
    #[command(long_about = "Append a marked loader section to the shell profile.

The section evals 'colonsh init <shell>' whenever the binary is on PATH
and can be removed again with --remove. PowerShell profiles are never
modified automatically; manual instructions are printed instead.")]
    Setup {
        /// Remove the integration section instead of adding it
        #[arg(long)]
        remove: bool,
    },

    /// Open the colonsh config file
    Config,

    /// Select a project directory (prints the chosen path)
    Pd,

    /// Select a subdirectory of the current directory (prints the name)
    Cd,

    /// Open the current project in its configured IDE
    Po,

    /// Pick and run an action configured for the current repository
    #[command(long_about = "Pick and run an action configured for the current repository.

The repository is matched by the owner/repo slug of its origin remote
against the git_repos entries in ~/colonsh.json. Each action runs in
its declared directory (relative to the repo root) through your shell.")]
    Pa,

    /// Select and check out a git branch
    Gb,

    /// Create and switch to a new user-prefixed branch
    Gnb {
        /// Branch name parts, joined with dashes
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Select and delete git branches
    Gdb,

    /// git commit -m <msg>
    Gc {
        /// Commit message
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// git commit --amend
    Gca,

    /// git commit --amend -m <msg>
    Gcam {
        /// Commit message
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Open the pull-requests page for the current repository
    Prs,

    /// Generate shell completions (internal use)
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Option<CompletionShell>,
    },
}
