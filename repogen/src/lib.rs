//! repogen: repository-pattern scaffolding engine
//!
//! Renders the model, repository, controller, request, resource, collection
//! and policy files for an entity from stub templates and writes them into a
//! project tree.
//!
//! # Example
//!
//! ```rust,no_run
//! use repogen::config::GeneratorConfig;
//! use repogen::scaffold::{AlwaysDecline, GenerationContext, RepositoryGenerator};
//!
//! # fn example() -> repogen::Result<()> {
//! let config = GeneratorConfig::default();
//! let context = GenerationContext::parse("Admin/Order", &config.base_path)?;
//! let mut generator = RepositoryGenerator::new(context, config, ".");
//! let report = generator.generate(&mut AlwaysDecline);
//! assert!(!report.has_failures());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;

pub use config::{ConfigLoader, GeneratorConfig};
pub use error::{RepogenError, Result};
pub use scaffold::{
    ArtifactType, GenerationContext, GenerationReport, NamingHelpers, PathResolver,
    PlaceholderSet, RepositoryGenerator, Stub,
};
