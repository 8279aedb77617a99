//! The builtin command table.
//!
//! Process-wide immutable data. Declaration order here is the emission order
//! for generated shell code and for the help listing.

/// A compiled-in command definition.
///
/// `template` is the alias body with [`BIN_PLACEHOLDER`] standing in for the
/// resolved binary. An empty template marks a meta command that only exists
/// as a subcommand and has no shell-alias form.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinCommand {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
}

impl BuiltinCommand {
    const fn new(name: &'static str, description: &'static str, template: &'static str) -> Self {
        Self {
            name,
            description,
            template,
        }
    }
}

/// Placeholder token replaced with a shell-appropriate binary reference.
pub const BIN_PLACEHOLDER: &str = "{{BIN}}";

/// Name of the root alias. Invokes the binary with no arguments.
pub const ROOT_ALIAS: &str = "::";

pub const BUILTINS: &[BuiltinCommand] = &[
    // Core / meta
    BuiltinCommand::new("help", "Show this help menu", "{{BIN}}"),
    BuiltinCommand::new("init", "Emit shell integration code (stdout)", ""),
    BuiltinCommand::new("setup", "Modify profile to auto-load colonsh", ""),
    BuiltinCommand::new("config", "Open colonsh config file", "{{BIN}} config"),
    // Project navigation
    BuiltinCommand::new("pd", "Select a project directory", r#"cd "$({{BIN}} pd)""#),
    BuiltinCommand::new("cd", "Select subdirectory in CWD", r#"cd "$({{BIN}} cd)""#),
    BuiltinCommand::new("po", "Open project in IDE", "{{BIN}} po"),
    BuiltinCommand::new("pa", "Run actions for project", "{{BIN}} pa"),
    // Git helpers (subcommands)
    BuiltinCommand::new("gb", "Select a git branch", "{{BIN}} gb"),
    BuiltinCommand::new("gnb", "Create a new branch", "{{BIN}} gnb"),
    BuiltinCommand::new("gdb", "Delete a branch", "{{BIN}} gdb"),
    BuiltinCommand::new("gc", "git commit -m <msg>", "{{BIN}} gc"),
    BuiltinCommand::new("gca", "git commit --amend", "{{BIN}} gca"),
    BuiltinCommand::new("gcam", "git commit --amend -m <msg>", "{{BIN}} gcam"),
    BuiltinCommand::new("prs", "Open Pull Requests URL", "{{BIN}} prs"),
    // Pure shell aliases with no subcommand counterpart
    BuiltinCommand::new("main", "Switch to main branch", "git checkout main"),
    BuiltinCommand::new("master", "Switch to master branch", "git checkout master"),
    BuiltinCommand::new("gs", "git status", "git status"),
    BuiltinCommand::new("ll", "git pull", "git pull"),
    BuiltinCommand::new("gaa", "git add .", "git add ."),
    BuiltinCommand::new("gp", "git push", "git push"),
    BuiltinCommand::new("gpf", "git push --force", "git push --force"),
    BuiltinCommand::new("gl", "git log --oneline --graph", "git log --oneline --graph --decorate"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_unique() {
        let mut names: Vec<&str> = BUILTINS.iter().map(|b| b.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTINS.len());
    }

    #[test]
    fn only_meta_commands_have_empty_templates() {
        let metas: Vec<&str> = BUILTINS
            .iter()
            .filter(|b| b.template.is_empty())
            .map(|b| b.name)
            .collect();
        assert_eq!(metas, vec!["init", "setup"]);
    }

    #[test]
    fn templated_commands_reference_the_placeholder_or_plain_git() {
        for builtin in BUILTINS.iter().filter(|b| !b.template.is_empty()) {
            assert!(
                builtin.template.contains(BIN_PLACEHOLDER) || builtin.template.starts_with("git "),
                "unexpected template for {}: {}",
                builtin.name,
                builtin.template
            );
        }
    }
}
