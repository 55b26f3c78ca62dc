//! Placeholder token to replacement mapping

use std::collections::BTreeMap;

use super::artifact::ArtifactType;
use super::context::GenerationContext;
use super::helpers::NamingHelpers;
use super::paths::PathResolver;
use super::stub::{Stub, VIEW_PROPERTIES_STUB};
use crate::config::GeneratorConfig;

/// Tokens understood by the built-in stubs
pub mod tokens {
    /// Parent class of the generated class
    pub const PARENT_CLASS: &str = "parentClass";
    /// Entity name as given
    pub const MODEL_NAME: &str = "modelName";
    /// Lowercase entity name
    pub const LC_MODEL_NAME: &str = "lcModelName";
    /// Plural of the lowercase entity name
    pub const LC_PLURAL_MODEL_NAME: &str = "lcPluralModelName";
    /// `snake_case` entity name
    pub const SNAKE_MODEL_NAME: &str = "snackLcPluralModelName";
    /// Web view route/view properties for controllers
    pub const VIEW_PROPERTIES: &str = "viewProperties";
    /// Namespace of the class being generated
    pub const NAMESPACE: &str = "namespace";
    /// Namespace of the entity's form request
    pub const REQUESTS_NAMESPACE: &str = "RequestsNamespace";
    /// Namespace of the entity's repository
    pub const REPOSITORIES_NAMESPACE: &str = "RepositoriesNamespace";
    /// Namespace of the entity's resources
    pub const RESOURCES_NAMESPACE: &str = "ResourcesNamespace";
    /// Namespace of the entity's model
    pub const MODEL_NAMESPACE: &str = "ModelNamespace";
    /// Namespace of the entity's policy
    pub const POLICIES_NAMESPACE: &str = "PoliciesNamespace";

    /// Every token, in the order they are populated
    pub const ALL: [&str; 12] = [
        PARENT_CLASS,
        MODEL_NAME,
        LC_MODEL_NAME,
        LC_PLURAL_MODEL_NAME,
        SNAKE_MODEL_NAME,
        VIEW_PROPERTIES,
        NAMESPACE,
        REQUESTS_NAMESPACE,
        REPOSITORIES_NAMESPACE,
        RESOURCES_NAMESPACE,
        MODEL_NAMESPACE,
        POLICIES_NAMESPACE,
    ];
}

/// Mapping from placeholder token (without braces) to its replacement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderSet {
    values: BTreeMap<String, String>,
}

impl PlaceholderSet {
    /// Empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the placeholders for one artifact of an entity
    #[must_use]
    pub fn for_artifact(
        artifact: ArtifactType,
        context: &GenerationContext,
        config: &GeneratorConfig,
        resolver: &PathResolver<'_>,
    ) -> Self {
        let entity = context.entity_name();
        let lc_plural = NamingHelpers::to_plural_lowercase(entity);
        let view_properties = if config.responses.allows_web() {
            view_properties(&lc_plural)
        } else {
            String::new()
        };

        let mut set = Self::new();
        set.insert(tokens::PARENT_CLASS, config.parents.for_artifact(artifact));
        set.insert(tokens::MODEL_NAME, entity);
        set.insert(tokens::LC_MODEL_NAME, NamingHelpers::to_lowercase(entity));
        set.insert(tokens::LC_PLURAL_MODEL_NAME, lc_plural);
        set.insert(tokens::SNAKE_MODEL_NAME, NamingHelpers::to_snake_case(entity));
        set.insert(tokens::VIEW_PROPERTIES, view_properties);
        set.insert(tokens::NAMESPACE, resolver.type_namespace(artifact));
        set.insert(
            tokens::REQUESTS_NAMESPACE,
            resolver.type_namespace(ArtifactType::Request),
        );
        set.insert(
            tokens::REPOSITORIES_NAMESPACE,
            resolver.type_namespace(ArtifactType::Repository),
        );
        set.insert(
            tokens::RESOURCES_NAMESPACE,
            resolver.type_namespace(ArtifactType::Resource),
        );
        set.insert(
            tokens::MODEL_NAMESPACE,
            resolver.type_namespace(ArtifactType::Model),
        );
        set.insert(
            tokens::POLICIES_NAMESPACE,
            resolver.type_namespace(ArtifactType::Policy),
        );
        set
    }

    /// Insert or replace a token's value
    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.values.insert(token.into(), value.into());
    }

    /// Replacement for `token`
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    /// Whether `token` has a replacement
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.values.contains_key(token)
    }

    /// Number of tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Tokens and values in token order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Controller route and view names for web responses
fn view_properties(lc_plural: &str) -> String {
    Stub::from_text(VIEW_PROPERTIES_STUB)
        .replace(tokens::LC_PLURAL_MODEL_NAME, lc_plural)
        .render()
}
