use dialoguer::{Confirm, Select};

use crate::error::Result;
use crate::models::Diet;

/// Prompt for the diet to pick a recipe for.
pub fn prompt_diet() -> Result<Diet> {
    let options: Vec<String> = Diet::ALL.iter().map(|d| d.to_string()).collect();

    let selection = Select::new()
        .with_prompt("Which diet are you cooking for?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Diet::ALL.get(selection).copied().unwrap_or_default())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
