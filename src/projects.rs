//! Project-directory enumeration for the selection commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{expand_tilde, Config};

/// Immediate subdirectories of every configured project dir, minus the
/// excluded names. Unreadable roots are skipped rather than fatal.
pub fn list_projects(config: &Config) -> Result<Vec<PathBuf>> {
    let mut projects = Vec::new();
    for project_dir in &config.project_dirs {
        let root = expand_tilde(&project_dir.path);
        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!("skipping {}: {err}", root.display());
                continue;
            }
        };
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if project_dir.exclude.iter().any(|ex| ex == &name) {
                continue;
            }
            projects.push(root.join(name));
        }
    }
    Ok(projects)
}

/// Non-hidden immediate subdirectory names of `dir`.
pub fn list_subdirs(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        subdirs.push(name);
    }
    Ok(subdirs)
}
