//! Post-generation notifications

use std::path::PathBuf;
use std::process::Command;

use crate::error::{RepogenError, Result};

/// Raised once every artifact of an entity has been processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationEvent {
    /// Base path the files were generated under
    pub base_path: String,
    /// User-chosen subdirectory, possibly empty
    pub user_subpath: String,
    /// Entity the files were generated for
    pub entity_name: String,
}

/// Reacts to a finished generation, e.g. to register routes
pub trait GenerationListener {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Handle the event
    ///
    /// # Errors
    ///
    /// Returns an error if the listener's side effect fails; the generator
    /// logs it and carries on.
    fn on_generated(&mut self, event: &GenerationEvent) -> Result<()>;
}

/// Runs the project's autoload refresh command (e.g. `composer dump-autoload`)
#[derive(Debug, Clone)]
pub struct AutoloadRefresh {
    command: String,
    working_dir: PathBuf,
}

impl AutoloadRefresh {
    /// Run `command` (program and whitespace-separated arguments) in `working_dir`
    pub fn new(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_dir: working_dir.into(),
        }
    }

    /// The command line this hook runs
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl GenerationListener for AutoloadRefresh {
    fn name(&self) -> &'static str {
        "autoload"
    }

    fn on_generated(&mut self, _event: &GenerationEvent) -> Result<()> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| RepogenError::Hook("Autoload command is empty".to_string()))?;

        tracing::info!(command = %self.command, dir = %self.working_dir.display(), "refreshing autoload");

        let output = Command::new(program)
            .args(parts)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| RepogenError::Hook(format!("Failed to run '{}': {e}", self.command)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RepogenError::Hook(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
