//! Repository-pattern scaffold engine
//!
//! Resolves where each artifact of an entity lives, renders its stub and
//! writes it according to the overwrite policy.

pub mod artifact;
pub mod context;
pub mod generator;
pub mod helpers;
pub mod hooks;
pub mod overwrite;
pub mod paths;
pub mod placeholders;
pub mod stub;

pub use artifact::ArtifactType;
pub use context::GenerationContext;
pub use generator::{GenerationReport, HookFailure, Outcome, RenderResult, RepositoryGenerator};
pub use helpers::NamingHelpers;
pub use hooks::{AutoloadRefresh, GenerationEvent, GenerationListener};
pub use overwrite::{AlwaysDecline, Confirm, Decision, OverwritePolicy};
pub use paths::{PathResolver, StubLocation};
pub use placeholders::PlaceholderSet;
pub use stub::Stub;
