//! Configuration management for repogen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `REPOGEN_` prefix, `__` for nesting)
//! 2. `<project>/repogen.toml`
//! 3. `~/.config/repogen/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # repogen.toml
//! base_path = "app"
//! extension = "php"
//! responses = "api"
//! stubs_path = "stubs/repository"
//!
//! [parents]
//! model = "App\\Models\\BaseModel"
//! controller = "App\\Http\\Controllers\\Controller"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::scaffold::ArtifactType;

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "repogen.toml";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "REPOGEN_";

/// Which kinds of responses generated controllers serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Server-rendered views only
    Web,
    /// JSON resources only
    Api,
    /// Views and JSON resources
    #[default]
    Both,
}

impl ResponseMode {
    /// Whether web-view placeholders should be populated
    #[must_use]
    pub const fn allows_web(self) -> bool {
        matches!(self, Self::Web | Self::Both)
    }
}

/// Parent class for each generated artifact type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentClasses {
    /// Base class for models
    pub model: String,
    /// Base class for repositories
    pub repository: String,
    /// Base class for controllers
    pub controller: String,
    /// Base class for form requests
    pub request: String,
    /// Base class for JSON resources
    pub resource: String,
    /// Base class for resource collections
    pub collection: String,
}

impl Default for ParentClasses {
    fn default() -> Self {
        Self {
            model: "Illuminate\\Database\\Eloquent\\Model".to_string(),
            repository: "App\\Repositories\\AbstractRepository".to_string(),
            controller: "App\\Http\\Controllers\\Controller".to_string(),
            request: "Illuminate\\Foundation\\Http\\FormRequest".to_string(),
            resource: "Illuminate\\Http\\Resources\\Json\\JsonResource".to_string(),
            collection: "Illuminate\\Http\\Resources\\Json\\ResourceCollection".to_string(),
        }
    }
}

impl ParentClasses {
    /// Parent class for an artifact type; policies have none
    #[must_use]
    pub fn for_artifact(&self, artifact: ArtifactType) -> &str {
        match artifact {
            ArtifactType::Controller => &self.controller,
            ArtifactType::Model => &self.model,
            ArtifactType::Request => &self.request,
            ArtifactType::Repository => &self.repository,
            ArtifactType::Resource => &self.resource,
            ArtifactType::Collection => &self.collection,
            ArtifactType::Policy => "",
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root directory for generated files, relative to the project root
    pub base_path: String,

    /// Namespace matching `base_path`; derived from it when unset
    pub root_namespace: Option<String>,

    /// Extension of generated files, without the dot
    pub extension: String,

    /// Directory holding customized stubs, relative to the project root
    pub stubs_path: Option<PathBuf>,

    /// Response kinds controllers are generated for
    pub responses: ResponseMode,

    /// Command run in the project root once files are generated
    pub autoload_command: Option<String>,

    /// Parent classes per artifact type
    pub parents: ParentClasses,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_path: "app".to_string(),
            root_namespace: None,
            extension: "php".to_string(),
            stubs_path: None,
            responses: ResponseMode::Both,
            autoload_command: Some("composer dump-autoload".to_string()),
            parents: ParentClasses::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration for a project
    ///
    /// Searches, in increasing precedence: defaults, the user config file,
    /// `<project_root>/repogen.toml`, then `REPOGEN_*` environment variables.
    /// Use [`ConfigLoader`] to choose which of these outer sources apply.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but cannot be parsed
    /// - Configuration values fail type conversion
    pub fn load_for_project(project_root: &Path) -> Result<Self> {
        ConfigLoader::default().load(project_root)
    }

    /// Load configuration from a specific file
    ///
    /// Missing files fall back to defaults; environment variables still
    /// override everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values of the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// The XDG user configuration path, `~/.config/repogen/config.toml`
    #[must_use]
    pub fn recommended_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("repogen").join("config.toml"))
    }

    /// Custom stub directory resolved against the project root
    #[must_use]
    pub fn resolved_stubs_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.stubs_path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                project_root.join(path)
            }
        })
    }
}

/// Chooses the sources merged on top of the defaults and the project file
///
/// The default loader reads the user config file and `REPOGEN_*`
/// variables. [`ConfigLoader::project_only`] ignores both, which keeps a
/// run independent of the machine it happens on.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    user_config: Option<PathBuf>,
    env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            user_config: GeneratorConfig::recommended_path(),
            env: true,
        }
    }
}

impl ConfigLoader {
    /// Defaults and the project file only
    #[must_use]
    pub const fn project_only() -> Self {
        Self {
            user_config: None,
            env: false,
        }
    }

    /// Read the user config from `path` instead of the XDG location
    #[must_use]
    pub fn with_user_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_config = Some(path.into());
        self
    }

    /// Toggle `REPOGEN_*` environment variables
    #[must_use]
    pub const fn with_env(mut self, env: bool) -> Self {
        self.env = env;
        self
    }

    /// Merge the sources for `project_root`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but cannot be parsed
    /// - Configuration values fail type conversion
    pub fn load(&self, project_root: &Path) -> Result<GeneratorConfig> {
        let defaults = toml::to_string(&GeneratorConfig::default())?;
        let mut figment = Figment::new().merge(Toml::string(&defaults));

        if let Some(user_config) = self.user_config.as_deref().filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(user_config));
        }

        let project_config = project_root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        if self.env {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));
        }

        let config: GeneratorConfig = figment.extract()?;
        tracing::debug!(?config, project = %project_root.display(), "configuration loaded");
        Ok(config)
    }
}
