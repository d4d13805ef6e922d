use crate::types::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, Password, Select};

/// Standardized yes/no prompt used across the consoles.
pub fn ask_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let choice = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default_yes)
        .show_default(true)
        .interact()?;
    Ok(choice)
}

/// Reads one line. Empty input is allowed so callers decide what blank means.
pub fn ask_line(prompt: &str) -> Result<String> {
    let line: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(line)
}

/// Reads a secret without echoing it.
pub fn ask_secret(prompt: &str) -> Result<String> {
    let secret = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(secret)
}

/// Opens `$EDITOR` on `initial`. Returns `None` when the editor was closed without saving.
pub fn edit_text(initial: &str) -> Result<Option<String>> {
    let edited = Editor::new().require_save(true).edit(initial)?;
    Ok(edited)
}

/// Menu selection; returns the index of the chosen item.
pub fn ask_choice(prompt: &str, items: &[&str]) -> Result<usize> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;
    Ok(index)
}
