//! Interactive service picker for `show` without a service argument

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Select};
use stackview_core::StackOverview;
use std::io::IsTerminal;

/// Whether an interactive picker can be shown
pub fn can_prompt() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Ask the user to pick one of the stack's services. Returns the compose name.
pub fn select_service(overview: &StackOverview) -> Result<String> {
    if overview.is_empty() {
        bail!("Stack '{}' has no services", overview.name);
    }

    let items: Vec<String> = overview
        .services
        .iter()
        .map(|s| format!("{:<24} {}", s.name, s.image))
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select a service of {}", overview.name))
        .items(&items)
        .default(0)
        .interact_opt()?;

    match selection {
        Some(index) => Ok(overview.services[index].name.clone()),
        None => bail!("Selection cancelled"),
    }
}
