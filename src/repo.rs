//! Repository resolution.
//!
//! Derives the canonical `owner/repo` slug from the working tree's remote
//! URL and looks up the matching configured entry. Also carries the thin git
//! plumbing the subcommands need.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

use crate::config::{Config, GitRepo};

/// Normalize a raw remote URL down to its `owner/repo` slug.
///
/// Handles the ssh form (`git@host:owner/repo`), http(s) URLs, and input
/// that is already a slug (normalization is idempotent on its own output).
/// Returns `None` when fewer than two path segments remain after the host.
pub fn normalize_remote_url(raw: &str) -> Option<String> {
    let mut s = raw.trim().to_string();
    if let Some(stripped) = s.strip_suffix(".git") {
        s = stripped.to_string();
    }

    let mut had_host = false;
    if let Some(rest) = s.strip_prefix("git@") {
        s = rest.replacen(':', "/", 1);
        had_host = true;
    }
    for prefix in ["https://", "http://"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.to_string();
            had_host = true;
        }
    }

    if had_host {
        let (_, rest) = s.split_once('/')?;
        return rest.contains('/').then(|| rest.to_string());
    }

    // No recognizable host prefix: two segments are already a slug, three or
    // more still carry a leading host segment.
    let segments: Vec<&str> = s.split('/').filter(|p| !p.is_empty()).collect();
    match segments.len() {
        0 | 1 => None,
        2 => Some(segments.join("/")),
        _ => Some(segments[1..].join("/")),
    }
}

/// Slug of the current repository, or `None` when it cannot be derived
/// (outside a work tree, no remote, unparseable URL).
pub fn current_slug() -> Option<String> {
    let raw = match remote_url() {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!("no remote url: {err:#}");
            return None;
        }
    };
    let slug = normalize_remote_url(&raw);
    if slug.is_none() {
        tracing::debug!("could not extract slug from remote {raw:?}");
    }
    slug
}

/// Configured entry for `slug`. First match wins; duplicate slugs are not
/// validated.
pub fn find_repo<'a>(config: &'a Config, slug: &str) -> Option<&'a GitRepo> {
    config.git_repos.iter().find(|repo| repo.slug == slug)
}

/// Entry for the current working tree, when one is configured.
pub fn current_repo(config: &Config) -> Option<&GitRepo> {
    current_slug().and_then(|slug| find_repo(config, &slug))
}

/// Pull-requests URL for a raw remote URL.
pub fn pulls_url(remote: &str) -> Option<String> {
    if let Some(rest) = remote.strip_prefix("git@") {
        let (host, path) = rest.split_once(':')?;
        let path = path.strip_suffix(".git").unwrap_or(path);
        return Some(format!("https://{host}/{path}/pulls"));
    }
    if remote.starts_with("https://") || remote.starts_with("http://") {
        let trimmed = remote.strip_suffix(".git").unwrap_or(remote);
        return Some(format!("{trimmed}/pulls"));
    }
    None
}

/// Whether the current directory is inside a git work tree.
pub fn in_work_tree() -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Top-level directory of the current work tree.
pub fn work_tree_root() -> Result<PathBuf> {
    git_output(&["rev-parse", "--show-toplevel"]).map(PathBuf::from)
}

/// Raw `remote.origin.url` of the current work tree.
pub fn remote_url() -> Result<String> {
    git_output(&["config", "--get", "remote.origin.url"])
}

/// Local branch names, short form.
pub fn branches() -> Result<Vec<String>> {
    let out = git_output(&["branch", "--format=%(refname:short)"])?;
    Ok(out
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

pub fn checkout(branch: &str) -> Result<()> {
    git_passthrough(&["checkout", branch])
}

pub fn checkout_new_branch(branch: &str) -> Result<()> {
    git_passthrough(&["checkout", "-b", branch])
}

pub fn delete_branch(branch: &str) -> Result<()> {
    git_passthrough(&["branch", "-d", branch])
}

pub fn commit(message: &str) -> Result<()> {
    git_passthrough(&["commit", "-m", message])
}

pub fn commit_amend() -> Result<()> {
    git_passthrough(&["commit", "--amend"])
}

pub fn commit_amend_message(message: &str) -> Result<()> {
    git_passthrough(&["commit", "--amend", "-m", message])
}

/// Run git and capture trimmed stdout. Quiet: stderr is discarded.
fn git_output(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .stderr(Stdio::null())
        .output()
        .context("failed to run git")?;
    if !output.status.success() {
        bail!("git {} failed", args.join(" "));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run git with inherited stdio; interactive output belongs to the user.
fn git_passthrough(args: &[&str]) -> Result<()> {
    let status = Command::new("git")
        .args(args)
        .status()
        .with_context(|| format!("failed to run git {}", args.join(" ")))?;
    if !status.success() {
        bail!("git {} exited with {status}", args[0]);
    }
    Ok(())
}
