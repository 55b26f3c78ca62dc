//! Stub loading, placeholder substitution and output

use std::fs;
use std::path::Path;

use super::artifact::ArtifactType;
use super::paths::StubLocation;
use super::placeholders::PlaceholderSet;
use crate::error::{RepogenError, Result};

const CONTROLLER_STUB: &str = include_str!("../../stubs/Controller.stub");
const MODEL_STUB: &str = include_str!("../../stubs/Model.stub");
const REQUEST_STUB: &str = include_str!("../../stubs/Request.stub");
const REPOSITORY_STUB: &str = include_str!("../../stubs/Repository.stub");
const RESOURCE_STUB: &str = include_str!("../../stubs/Resource.stub");
const COLLECTION_STUB: &str = include_str!("../../stubs/Collection.stub");
const POLICY_STUB: &str = include_str!("../../stubs/Policy.stub");

/// Controller properties inserted as `{{viewProperties}}` when web
/// responses are enabled
pub const VIEW_PROPERTIES_STUB: &str = include_str!("../../stubs/ViewProperties.stub");

/// Built-in stub text for an artifact type
#[must_use]
pub const fn builtin_text(artifact: ArtifactType) -> &'static str {
    match artifact {
        ArtifactType::Controller => CONTROLLER_STUB,
        ArtifactType::Model => MODEL_STUB,
        ArtifactType::Request => REQUEST_STUB,
        ArtifactType::Repository => REPOSITORY_STUB,
        ArtifactType::Resource => RESOURCE_STUB,
        ArtifactType::Collection => COLLECTION_STUB,
        ArtifactType::Policy => POLICY_STUB,
    }
}

/// A loaded stub plus the substitutions to apply to it
///
/// Substitutions are collected first and applied in a single scan of the
/// original text, so the order of [`Stub::replace`] calls never matters and
/// a replacement value is never scanned for further tokens.
#[derive(Debug, Clone)]
pub struct Stub {
    text: String,
    replacements: PlaceholderSet,
}

impl Stub {
    /// Load a stub from disk or from the built-in set
    ///
    /// # Errors
    ///
    /// Returns [`RepogenError::TemplateNotFound`] if a file location cannot
    /// be read.
    pub fn load(location: &StubLocation) -> Result<Self> {
        let text = match location {
            StubLocation::File(path) => fs::read_to_string(path).map_err(|err| {
                tracing::debug!(path = %path.display(), error = %err, "stub unreadable");
                RepogenError::TemplateNotFound { path: path.clone() }
            })?,
            StubLocation::Builtin(artifact) => builtin_text(*artifact).to_string(),
        };

        tracing::debug!(stub = %location, bytes = text.len(), "stub loaded");
        Ok(Self::from_text(text))
    }

    /// Wrap raw stub text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            replacements: PlaceholderSet::new(),
        }
    }

    /// Replace every `{{token}}` with `value`
    #[must_use]
    pub fn replace(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.replacements.insert(token, value);
        self
    }

    /// Queue every substitution in `placeholders`
    #[must_use]
    pub fn replace_all(mut self, placeholders: &PlaceholderSet) -> Self {
        for (token, value) in placeholders.iter() {
            self.replacements.insert(token, value);
        }
        self
    }

    /// Raw stub text, before substitution
    #[must_use]
    pub fn source(&self) -> &str {
        &self.text
    }

    /// Substituted text
    ///
    /// Tokens without a replacement are kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// # use repogen::scaffold::Stub;
    /// let rendered = Stub::from_text("class {{modelName}} {{unknown}}")
    ///     .replace("modelName", "Order")
    ///     .render();
    /// assert_eq!(rendered, "class Order {{unknown}}");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let candidate = &rest[open..];

            let replaced = candidate[2..].find("}}").and_then(|close| {
                let token = &candidate[2..2 + close];
                self.replacements
                    .get(token)
                    .map(|value| (value, 2 + close + 2))
            });

            if let Some((value, consumed)) = replaced {
                out.push_str(value);
                rest = &candidate[consumed..];
            } else {
                // not a known token: keep one brace and rescan from the next char
                out.push('{');
                rest = &candidate[1..];
            }
        }

        out.push_str(rest);
        out
    }

    /// Render and write to `destination`, creating parent directories and
    /// overwriting any existing file
    ///
    /// # Errors
    ///
    /// Returns [`RepogenError::Write`] if a directory cannot be created or
    /// the file cannot be written.
    pub fn output(&self, destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|source| RepogenError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(destination, self.render()).map_err(|source| RepogenError::Write {
            path: destination.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %destination.display(), "file written");
        Ok(())
    }
}
