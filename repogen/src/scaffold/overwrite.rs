//! Overwrite policy for existing files

use std::path::Path;

use crate::error::Result;

/// How to treat a destination that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Overwrite without asking
    Force,
    /// Never overwrite
    NoOverride,
    /// Ask the operator
    #[default]
    Ask,
}

impl OverwritePolicy {
    /// Policy from the `--force` / `--no-override` flags; `force` wins
    #[must_use]
    pub const fn from_flags(force: bool, no_override: bool) -> Self {
        if force {
            Self::Force
        } else if no_override {
            Self::NoOverride
        } else {
            Self::Ask
        }
    }

    /// Decide whether to write `destination`
    ///
    /// `confirm` is only consulted for an existing file under [`Self::Ask`].
    ///
    /// # Errors
    ///
    /// Propagates a failure to read the operator's answer.
    pub fn decide(
        self,
        destination: &Path,
        exists: bool,
        confirm: &mut dyn Confirm,
    ) -> Result<Decision> {
        if !exists {
            return Ok(Decision::Write);
        }

        let decision = match self {
            Self::Force => Decision::Write,
            Self::NoOverride => Decision::Skip,
            Self::Ask => {
                if confirm.confirm_overwrite(destination)? {
                    Decision::Write
                } else {
                    Decision::Skip
                }
            }
        };

        tracing::debug!(path = %destination.display(), policy = ?self, ?decision, "existing file");
        Ok(decision)
    }
}

/// Outcome of the overwrite check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render and write the file
    Write,
    /// Leave the existing file alone
    Skip,
}

/// Asks whether an existing file may be overwritten
pub trait Confirm {
    /// `true` to overwrite `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained.
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

/// Declines every overwrite; for non-interactive use
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

impl Confirm for AlwaysDecline {
    fn confirm_overwrite(&mut self, _path: &Path) -> Result<bool> {
        Ok(false)
    }
}

impl<F> Confirm for F
where
    F: FnMut(&Path) -> bool,
{
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        Ok(self(path))
    }
}
