//! Repository-pattern generator orchestrator
//!
//! Coordinates generation of every artifact for one entity:
//! - Controller
//! - Model
//! - Request
//! - Repository
//! - Resource
//! - Collection
//! - Policy
//!
//! Each artifact is independent: a failure is recorded and generation moves
//! on to the next one. Nothing already written is rolled back.

use std::path::{Path, PathBuf};

use super::artifact::ArtifactType;
use super::context::GenerationContext;
use super::hooks::{GenerationEvent, GenerationListener};
use super::overwrite::{Confirm, Decision, OverwritePolicy};
use super::paths::PathResolver;
use super::placeholders::PlaceholderSet;
use super::stub::Stub;
use crate::config::GeneratorConfig;
use crate::error::{RepogenError, Result};

/// Repository-pattern scaffold generator
pub struct RepositoryGenerator {
    context: GenerationContext,
    config: GeneratorConfig,
    project_root: PathBuf,
    policy: OverwritePolicy,
    listeners: Vec<Box<dyn GenerationListener>>,
}

impl RepositoryGenerator {
    /// Create a generator writing below `project_root`
    ///
    /// The overwrite policy defaults to [`OverwritePolicy::Ask`].
    pub fn new(
        context: GenerationContext,
        config: GeneratorConfig,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            context,
            config,
            project_root: project_root.into(),
            policy: OverwritePolicy::default(),
            listeners: Vec::new(),
        }
    }

    /// Set the overwrite policy
    #[must_use]
    pub const fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register a listener notified after generation
    #[must_use]
    pub fn with_listener(mut self, listener: impl GenerationListener + 'static) -> Self {
        self.listeners.push(Box::new(listener));
        self
    }

    /// The generation context
    #[must_use]
    pub const fn context(&self) -> &GenerationContext {
        &self.context
    }

    /// Resolver over this generator's context and configuration
    #[must_use]
    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.context, &self.config, &self.project_root)
    }

    /// Absolute destination of `artifact`
    #[must_use]
    pub fn destination(&self, artifact: ArtifactType) -> PathBuf {
        self.project_root.join(self.resolver().output_path(artifact))
    }

    /// Generate every artifact in order, then notify listeners
    pub fn generate(&mut self, confirm: &mut dyn Confirm) -> GenerationReport {
        let mut results = Vec::with_capacity(ArtifactType::ALL.len());
        for artifact in ArtifactType::ALL {
            results.push(self.generate_artifact(artifact, confirm));
        }

        let event = GenerationEvent {
            base_path: self.context.base_path().to_string(),
            user_subpath: self.context.user_subpath().to_string(),
            entity_name: self.context.entity_name().to_string(),
        };

        let mut hook_failures = Vec::new();
        for listener in &mut self.listeners {
            if let Err(err) = listener.on_generated(&event) {
                tracing::warn!(listener = listener.name(), error = %err, "post-generation hook failed");
                hook_failures.push(HookFailure {
                    listener: listener.name().to_string(),
                    error: err,
                });
            }
        }

        GenerationReport {
            event,
            results,
            hook_failures,
        }
    }

    /// Generate one artifact, applying the overwrite policy
    pub fn generate_artifact(
        &self,
        artifact: ArtifactType,
        confirm: &mut dyn Confirm,
    ) -> RenderResult {
        let path = self.destination(artifact);
        let outcome = match self.write_artifact(artifact, &path, confirm) {
            Ok(Decision::Write) => Outcome::Written,
            Ok(Decision::Skip) => {
                tracing::warn!(%artifact, path = %path.display(), "existing file kept");
                Outcome::Skipped
            }
            Err(err) => {
                tracing::error!(%artifact, path = %path.display(), error = %err, "generation failed");
                Outcome::Failed(err)
            }
        };

        RenderResult {
            artifact,
            path,
            outcome,
        }
    }

    /// Rendered contents of `artifact`, without touching the destination
    ///
    /// # Errors
    ///
    /// Returns [`RepogenError::TemplateNotFound`] if a customized stub
    /// disappears between resolution and loading.
    pub fn render_artifact(&self, artifact: ArtifactType) -> Result<String> {
        Ok(self.prepared_stub(artifact)?.render())
    }

    /// Stub for `artifact` with its placeholders queued
    fn prepared_stub(&self, artifact: ArtifactType) -> Result<Stub> {
        let resolver = self.resolver();
        let placeholders =
            PlaceholderSet::for_artifact(artifact, &self.context, &self.config, &resolver);

        Ok(Stub::load(&resolver.stub_path(artifact))?.replace_all(&placeholders))
    }

    fn write_artifact(
        &self,
        artifact: ArtifactType,
        path: &Path,
        confirm: &mut dyn Confirm,
    ) -> Result<Decision> {
        let decision = self.policy.decide(path, path.exists(), confirm)?;
        if decision == Decision::Write {
            self.prepared_stub(artifact)?.output(path)?;
        }

        Ok(decision)
    }
}

/// What happened to one artifact
#[derive(Debug)]
pub enum Outcome {
    /// The file was rendered and written
    Written,
    /// An existing file was kept
    Skipped,
    /// Loading the stub or writing the file failed
    Failed(RepogenError),
}

/// Result of generating one artifact
#[derive(Debug)]
pub struct RenderResult {
    /// Artifact type
    pub artifact: ArtifactType,
    /// Destination path
    pub path: PathBuf,
    /// What happened
    pub outcome: Outcome,
}

impl RenderResult {
    /// Whether the file was written
    #[must_use]
    pub const fn written(&self) -> bool {
        matches!(self.outcome, Outcome::Written)
    }
}

/// A listener that failed after generation
#[derive(Debug)]
pub struct HookFailure {
    /// Listener name
    pub listener: String,
    /// Its error
    pub error: RepogenError,
}

/// Results of a full generation run
#[derive(Debug)]
pub struct GenerationReport {
    /// Event delivered to listeners
    pub event: GenerationEvent,
    /// One result per artifact, in generation order
    pub results: Vec<RenderResult>,
    /// Listeners that failed
    pub hook_failures: Vec<HookFailure>,
}

impl GenerationReport {
    /// Artifacts that were written
    pub fn written(&self) -> impl Iterator<Item = &RenderResult> {
        self.results.iter().filter(|r| r.written())
    }

    /// Artifacts whose existing file was kept
    pub fn skipped(&self) -> impl Iterator<Item = &RenderResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Skipped))
    }

    /// Artifacts that failed
    pub fn failures(&self) -> impl Iterator<Item = (&RenderResult, &RepogenError)> {
        self.results.iter().filter_map(|r| match &r.outcome {
            Outcome::Failed(err) => Some((r, err)),
            _ => None,
        })
    }

    /// Whether any artifact failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
