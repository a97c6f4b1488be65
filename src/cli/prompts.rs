//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

/// Prompt the user to pick one column from the table.
pub fn select_column(prompt: &str, columns: &[String]) -> Result<String> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(columns)
        .default(0)
        .interact()?;
    Ok(columns[choice].clone())
}

/// Whether prompts can be shown (stdout is a terminal).
pub fn is_interactive() -> bool {
    console::user_attended()
}
