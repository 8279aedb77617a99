//! Repo-scoped action resolution.

use std::path::{Path, PathBuf};

use crate::config::{Config, GitRepo, RepoAction};

/// Fallback open command when neither the config nor the repo sets one.
pub const DEFAULT_OPEN_CMD: &str = "code .";

/// A repo action resolved to its execution site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedAction {
    pub dir: PathBuf,
    pub command: String,
}

/// Locate `name` in the repository's action list and prepare it for
/// execution. Exact name match, first hit wins.
pub fn resolve(root: &Path, repo: &GitRepo, name: &str) -> Option<PreparedAction> {
    let action = repo.actions.iter().find(|a| a.name == name)?;
    Some(PreparedAction {
        dir: action_dir(root, action),
        command: action.cmd.clone(),
    })
}

/// The declared directory is relative to the repository root; absent or `.`
/// means the root itself.
fn action_dir(root: &Path, action: &RepoAction) -> PathBuf {
    match action.dir.as_deref() {
        None | Some("") | Some(".") => root.to_path_buf(),
        Some(rel) => root.join(rel),
    }
}

/// Open command for the current project: the matched repository's setting
/// beats the global one, which beats the default.
pub fn effective_open_cmd(config: &Config, repo: Option<&GitRepo>) -> String {
    repo.and_then(|r| r.open_cmd.clone())
        .filter(|cmd| !cmd.is_empty())
        .or_else(|| config.open_cmd.clone().filter(|cmd| !cmd.is_empty()))
        .unwrap_or_else(|| DEFAULT_OPEN_CMD.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with_actions(actions: Vec<RepoAction>) -> GitRepo {
        GitRepo {
            slug: "acme/widget".to_string(),
            name: "widget".to_string(),
            open_cmd: None,
            actions,
        }
    }

    fn action(name: &str, cmd: &str, dir: Option<&str>) -> RepoAction {
        RepoAction {
            name: name.to_string(),
            cmd: cmd.to_string(),
            dir: dir.map(String::from),
        }
    }

    #[test]
    fn resolve_finds_action_by_exact_name() {
        let repo = repo_with_actions(vec![
            action("build", "make", None),
            action("test", "make test", None),
        ]);
        let prepared = resolve(Path::new("/repo"), &repo, "test").unwrap();
        assert_eq!(prepared.command, "make test");
        assert_eq!(prepared.dir, PathBuf::from("/repo"));
    }

    #[test]
    fn resolve_returns_none_for_unknown_action() {
        let repo = repo_with_actions(vec![action("build", "make", None)]);
        assert!(resolve(Path::new("/repo"), &repo, "deploy").is_none());
    }

    #[test]
    fn declared_dir_is_joined_to_the_root() {
        let repo = repo_with_actions(vec![action("web", "npm start", Some("web"))]);
        let prepared = resolve(Path::new("/repo"), &repo, "web").unwrap();
        assert_eq!(prepared.dir, PathBuf::from("/repo/web"));
    }

    #[test]
    fn dot_and_empty_dirs_mean_the_root() {
        let repo = repo_with_actions(vec![
            action("a", "x", Some(".")),
            action("b", "y", Some("")),
        ]);
        assert_eq!(
            resolve(Path::new("/repo"), &repo, "a").unwrap().dir,
            PathBuf::from("/repo")
        );
        assert_eq!(
            resolve(Path::new("/repo"), &repo, "b").unwrap().dir,
            PathBuf::from("/repo")
        );
    }

    #[test]
    fn repo_open_cmd_beats_everything() {
        let mut repo = repo_with_actions(vec![]);
        repo.open_cmd = Some("idea .".to_string());
        let config = Config {
            open_cmd: Some("vim .".to_string()),
            ..Config::default()
        };
        assert_eq!(effective_open_cmd(&config, Some(&repo)), "idea .");
    }

    #[test]
    fn matched_repo_open_cmd_applies_with_global_unset() {
        let mut repo = repo_with_actions(vec![]);
        repo.open_cmd = Some("idea .".to_string());
        assert_eq!(
            effective_open_cmd(&Config::default(), Some(&repo)),
            "idea ."
        );
    }

    #[test]
    fn global_open_cmd_applies_without_a_match() {
        let config = Config {
            open_cmd: Some("vim .".to_string()),
            ..Config::default()
        };
        assert_eq!(effective_open_cmd(&config, None), "vim .");
    }

    #[test]
    fn default_open_cmd_applies_when_nothing_is_set() {
        assert_eq!(effective_open_cmd(&Config::default(), None), DEFAULT_OPEN_CMD);
    }

    #[test]
    fn empty_open_cmds_count_as_unset() {
        let repo = GitRepo {
            open_cmd: Some(String::new()),
            ..repo_with_actions(vec![])
        };
        let config = Config {
            open_cmd: Some(String::new()),
            ..Config::default()
        };
        assert_eq!(effective_open_cmd(&config, Some(&repo)), DEFAULT_OPEN_CMD);
    }
}
