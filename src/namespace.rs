//! Merging the builtin table and custom aliases into one command namespace.

use unicode_width::UnicodeWidthStr;

use crate::builtins::{BuiltinCommand, BIN_PLACEHOLDER, ROOT_ALIAS};
use crate::config::Alias;

/// Where a merged entry came from. Decides emission and help rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// The synthesized `::` entry. Always first, never template-driven.
    Root,
    /// A builtin with a shell-alias form.
    Builtin,
    /// A builtin with no alias form (subcommand only); help listing only.
    Meta,
    /// A custom alias from the config file.
    Custom,
}

/// Render-ready merge of a builtin or custom alias.
///
/// `command` still carries the `{{BIN}}` placeholder; substituting it is the
/// shell code generator's job. Built fresh on every generation run.
#[derive(Debug, Clone)]
pub struct ResolvedCommand {
    pub name: String,
    pub description: String,
    pub command: String,
    pub kind: CommandKind,
}

impl ResolvedCommand {
    /// The name as shown in help and in generated alias lines: the root form
    /// as-is, everything else with the leading colon marker.
    pub fn display_name(&self) -> String {
        match self.kind {
            CommandKind::Root => self.name.clone(),
            _ => format!(":{}", self.name),
        }
    }
}

/// Merge the builtin table with custom aliases.
///
/// Order is the contract: the root entry first, builtins in declaration
/// order, custom aliases in config order. The `help` builtin is the root
/// invocation form and is folded into the root entry rather than emitted
/// twice. A custom alias may reuse a builtin name; both are kept, and since
/// the custom one is emitted later its definition wins once the shell
/// sources the output.
pub fn build(builtins: &[BuiltinCommand], aliases: &[Alias]) -> Vec<ResolvedCommand> {
    let mut commands = Vec::with_capacity(builtins.len() + aliases.len() + 1);

    commands.push(ResolvedCommand {
        name: ROOT_ALIAS.to_string(),
        description: "Show this help menu".to_string(),
        command: BIN_PLACEHOLDER.to_string(),
        kind: CommandKind::Root,
    });

    for builtin in builtins {
        if builtin.name == "help" {
            continue;
        }
        let kind = if builtin.template.is_empty() {
            CommandKind::Meta
        } else {
            CommandKind::Builtin
        };
        commands.push(ResolvedCommand {
            name: builtin.name.to_string(),
            description: builtin.description.to_string(),
            command: builtin.template.to_string(),
            kind,
        });
    }

    for alias in aliases {
        if alias.name.is_empty() || alias.cmd.is_empty() {
            continue;
        }
        commands.push(ResolvedCommand {
            name: alias.name.clone(),
            description: alias.cmd.clone(),
            command: alias.cmd.clone(),
            kind: CommandKind::Custom,
        });
    }

    commands
}

/// Column width for the help listing: the widest display name.
///
/// Alignment only, not a data invariant.
pub fn display_width(commands: &[ResolvedCommand]) -> usize {
    commands
        .iter()
        .map(|c| c.display_name().width())
        .max()
        .unwrap_or(0)
}
