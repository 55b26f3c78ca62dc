//! Interactive overwrite confirmation

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm as Prompt};
use repogen::scaffold::Confirm;
use repogen::{RepogenError, Result};

/// Asks on the terminal before overwriting an existing file
#[derive(Default)]
pub struct TerminalConfirm {
    theme: ColorfulTheme,
}

impl Confirm for TerminalConfirm {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        Prompt::with_theme(&self.theme)
            .with_prompt(format!(
                "File {} already exists, do you want to overwrite it?",
                path.display()
            ))
            .default(false)
            .interact()
            .map_err(|err| RepogenError::Prompt(err.to_string()))
    }
}
