//! Interactive selection prompts.
//!
//! Thin wrapper over dialoguer. Cancelling a prompt (Esc / q) is a normal
//! outcome, reported as `None` or an empty selection rather than an error.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect, Select};

/// Pick one of `options`, or `None` when the prompt is cancelled.
pub fn select_one(title: &str, options: &[String]) -> Result<Option<String>> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(title)
        .items(options)
        .default(0)
        .interact_opt()?;
    Ok(selection.map(|index| options[index].clone()))
}

/// Pick any number of `options`; cancellation yields an empty selection.
pub fn select_many(title: &str, options: &[String]) -> Result<Vec<String>> {
    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(title)
        .items(options)
        .interact_opt()?;
    Ok(selection
        .unwrap_or_default()
        .into_iter()
        .map(|index| options[index].clone())
        .collect())
}

/// Yes/no confirmation, defaulting to no; cancellation counts as no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact_opt()?
        .unwrap_or(false))
}
