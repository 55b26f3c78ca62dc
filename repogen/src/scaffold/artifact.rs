//! Artifact types produced for each entity

use std::fmt;
use std::str::FromStr;

/// Category of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactType {
    /// HTTP controller
    Controller,
    /// ORM model
    Model,
    /// Form request (validation)
    Request,
    /// Repository wrapping the model
    Repository,
    /// JSON resource
    Resource,
    /// JSON resource collection
    Collection,
    /// Authorization policy
    Policy,
}

impl ArtifactType {
    /// Every artifact type, in generation order
    pub const ALL: [Self; 7] = [
        Self::Controller,
        Self::Model,
        Self::Request,
        Self::Repository,
        Self::Resource,
        Self::Collection,
        Self::Policy,
    ];

    /// Type name as used in stub file names
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Controller => "Controller",
            Self::Model => "Model",
            Self::Request => "Request",
            Self::Repository => "Repository",
            Self::Resource => "Resource",
            Self::Collection => "Collection",
            Self::Policy => "Policy",
        }
    }

    /// Subfolder below the base path, `/`-separated
    #[must_use]
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Controller => "Http/Controllers",
            Self::Model => "Models",
            Self::Request => "Http/Requests",
            Self::Repository => "Repositories",
            Self::Resource | Self::Collection => "Http/Resources",
            Self::Policy => "Policies",
        }
    }

    /// Suffix appended to the entity name in the file name
    ///
    /// Models are named after the entity alone.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Model => "",
            other => other.name(),
        }
    }

    /// File name of the stub template for this type
    #[must_use]
    pub fn stub_file_name(self) -> String {
        format!("{}.stub", self.name())
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArtifactType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|artifact| artifact.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown artifact type '{s}'"))
    }
}
