//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Generator error type
#[derive(Debug, Error)]
pub enum RepogenError {
    /// The entity-name argument is empty or not a usable identifier
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A stub file was expected at a path that does not exist or cannot be read
    #[error("Template not found: {}", path.display())]
    TemplateNotFound {
        /// Location the stub was expected at
        path: PathBuf,
    },

    /// Creating the destination directory or writing the file failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The operator's answer to an overwrite prompt could not be read
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// A post-generation listener failed
    #[error("Hook error: {0}")]
    Hook(String),
}

impl From<figment::Error> for RepogenError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<toml::ser::Error> for RepogenError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(Box::new(figment::Error::from(err.to_string())))
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = RepogenError> = std::result::Result<T, E>;
