//! CLI command implementations

pub mod generate;
pub mod stubs;

pub use generate::GenerateCommand;
pub use stubs::StubsCommand;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Project root: the explicit `--project` directory or the current one
fn project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(
        || std::env::current_dir().context("Failed to get current directory"),
        |path| Ok(path.to_path_buf()),
    )
}
