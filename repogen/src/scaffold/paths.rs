//! Output path, namespace and stub resolution
//!
//! Everything here is a pure string transform over the generation context
//! and configuration, apart from checking whether a customized stub exists.

use std::fmt;
use std::path::{Path, PathBuf};

use super::artifact::ArtifactType;
use super::context::GenerationContext;
use super::helpers::NamingHelpers;
use crate::config::GeneratorConfig;

/// Separator used in generated namespaces
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Where a stub's text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubLocation {
    /// Customized stub on disk
    File(PathBuf),
    /// Default stub compiled into the binary
    Builtin(ArtifactType),
}

impl fmt::Display for StubLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin(artifact) => write!(f, "<builtin>/{}", artifact.stub_file_name()),
        }
    }
}

/// Resolves output paths, namespaces and stubs for one context
#[derive(Debug)]
pub struct PathResolver<'a> {
    context: &'a GenerationContext,
    config: &'a GeneratorConfig,
    stubs_dir: Option<PathBuf>,
}

impl<'a> PathResolver<'a> {
    /// Create a resolver; a relative custom stub directory is resolved
    /// against `project_root`
    #[must_use]
    pub fn new(
        context: &'a GenerationContext,
        config: &'a GeneratorConfig,
        project_root: &Path,
    ) -> Self {
        Self {
            context,
            config,
            stubs_dir: config.resolved_stubs_path(project_root),
        }
    }

    /// Output path relative to the project root, always `/`-separated
    ///
    /// `base_path/<folder>/<user_subpath>/<Entity><Suffix>.<extension>`
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::Path;
    /// # use repogen::config::GeneratorConfig;
    /// # use repogen::scaffold::{ArtifactType, GenerationContext, PathResolver};
    /// let config = GeneratorConfig::default();
    /// let context = GenerationContext::new("Order", "Admin", "app").unwrap();
    /// let resolver = PathResolver::new(&context, &config, Path::new("."));
    /// assert_eq!(
    ///     resolver.output_path(ArtifactType::Repository),
    ///     "app/Repositories/Admin/OrderRepository.php"
    /// );
    /// ```
    #[must_use]
    pub fn output_path(&self, artifact: ArtifactType) -> String {
        let mut segments: Vec<&str> = self.context.base_segments().collect();
        segments.extend(artifact.folder().split('/'));
        segments.extend(self.context.user_segments());

        let extension = self.config.extension.trim_start_matches('.');
        let file_name = if extension.is_empty() {
            format!("{}{}", self.context.entity_name(), artifact.suffix())
        } else {
            format!(
                "{}{}.{extension}",
                self.context.entity_name(),
                artifact.suffix()
            )
        };

        let mut path = segments.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&file_name);
        path
    }

    /// Namespace of the class generated for `artifact`
    ///
    /// Root namespace, then the type folder, then the user subpath.
    #[must_use]
    pub fn type_namespace(&self, artifact: ArtifactType) -> String {
        let root = self.root_namespace();
        let mut segments: Vec<&str> = root
            .split(NAMESPACE_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();
        segments.extend(artifact.folder().split('/'));
        segments.extend(self.context.user_segments());
        segments.join(NAMESPACE_SEPARATOR)
    }

    /// Configured root namespace, or the base path segments in `PascalCase`
    #[must_use]
    pub fn root_namespace(&self) -> String {
        self.config.root_namespace.as_ref().map_or_else(
            || {
                self.context
                    .base_segments()
                    .map(NamingHelpers::to_pascal_case)
                    .collect::<Vec<_>>()
                    .join(NAMESPACE_SEPARATOR)
            },
            |ns| ns.trim_matches('\\').to_string(),
        )
    }

    /// Stub to render for `artifact`
    ///
    /// A customized `<Type>.stub` in the configured stub directory wins over
    /// the built-in default.
    #[must_use]
    pub fn stub_path(&self, artifact: ArtifactType) -> StubLocation {
        if let Some(dir) = &self.stubs_dir {
            let custom = dir.join(artifact.stub_file_name());
            if custom.is_file() {
                tracing::debug!(%artifact, path = %custom.display(), "using customized stub");
                return StubLocation::File(custom);
            }
        }
        StubLocation::Builtin(artifact)
    }
}
