//! Configuration management: the single JSON document at `~/colonsh.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed file name, always directly under the user's home directory.
pub const CONFIG_FILE_NAME: &str = "colonsh.json";

/// Main configuration structure.
///
/// Unknown fields in the file are ignored; every section is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub aliases: Vec<Alias>,
    #[serde(default)]
    pub project_dirs: Vec<ProjectDir>,
    #[serde(default)]
    pub git_repos: Vec<GitRepo>,
    /// Global fallback for `po`; repo entries may override it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_cmd: Option<String>,
}

/// A custom command alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alias {
    pub name: String,
    pub cmd: String,
}

/// A root directory whose immediate subdirectories are offered by `pd`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDir {
    /// May use the `~/` shorthand.
    pub path: String,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Actions and settings for one repository, keyed by its slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitRepo {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_cmd: Option<String>,
    #[serde(default)]
    pub actions: Vec<RepoAction>,
}

/// A single action available within a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoAction {
    pub name: String,
    pub cmd: String,
    /// Relative to the repository root; absent means the root itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Config {
    /// Get the config file path (`~/colonsh.json`).
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`, or `None` when no file exists there.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    /// Write the documented example config to `path` and return it.
    pub fn ensure_default(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let config = Config::example();
        let contents =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the config, creating the example one on first run.
    ///
    /// The creation notice goes to stderr: stdout belongs to commands whose
    /// output is captured by the generated aliases.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if let Some(config) = Self::load(path)? {
            return Ok(config);
        }
        let config = Self::ensure_default(path)?;
        eprintln!(
            "colonsh: no config found, created new one at {}",
            path.display()
        );
        eprintln!("colonsh: edit the file to add your projects and actions.");
        Ok(config)
    }

    /// The example document written on first run.
    pub fn example() -> Self {
        Config {
            open_cmd: Some("code .".to_string()),
            aliases: vec![
                Alias {
                    name: "config".to_string(),
                    cmd: format!("code ~/{CONFIG_FILE_NAME}"),
                },
                Alias {
                    name: "c".to_string(),
                    cmd: "code .".to_string(),
                },
                Alias {
                    name: "source".to_string(),
                    cmd: "source ~/.zshrc".to_string(),
                },
            ],
            project_dirs: vec![ProjectDir {
                path: "~/MyProjects".to_string(),
                exclude: vec!["bin".to_string(), "notes".to_string()],
            }],
            git_repos: vec![GitRepo {
                slug: "octocat/Hello-World".to_string(),
                name: "Hello-World".to_string(),
                open_cmd: None,
                actions: vec![RepoAction {
                    name: "PRs".to_string(),
                    cmd: "open https://github.com/octocat/Hello-World/pulls".to_string(),
                    dir: None,
                }],
            }],
        }
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
