//! Per-invocation generation context

use super::helpers::NamingHelpers;
use crate::error::{RepogenError, Result};

/// Immutable inputs every derived path and name depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    entity_name: String,
    user_subpath: String,
    base_path: String,
}

impl GenerationContext {
    /// Create a context from already-split parts
    ///
    /// Backslashes are normalized to `/` and empty or `.` segments are
    /// dropped, so `Admin\\Sales/` becomes `Admin/Sales`.
    ///
    /// # Errors
    ///
    /// Returns [`RepogenError::InvalidArgument`] if:
    /// - `entity_name` is empty, contains a path separator, or is not a
    ///   `PascalCase` identifier
    /// - a `user_subpath` segment is not a namespace identifier
    /// - either path contains a `..` segment
    pub fn new(entity_name: &str, user_subpath: &str, base_path: &str) -> Result<Self> {
        if entity_name.is_empty() {
            return Err(RepogenError::InvalidArgument(
                "Entity name must not be empty".to_string(),
            ));
        }

        if entity_name.contains(['/', '\\']) {
            return Err(RepogenError::InvalidArgument(format!(
                "Entity name must not contain path separators: '{entity_name}'"
            )));
        }

        if !NamingHelpers::is_class_name(entity_name) {
            return Err(RepogenError::InvalidArgument(format!(
                "Entity name must be PascalCase (start with uppercase): '{entity_name}'"
            )));
        }

        let user_segments = normalize_segments(user_subpath)?;
        if let Some(segment) = user_segments
            .iter()
            .find(|segment| !NamingHelpers::is_namespace_segment(segment))
        {
            return Err(RepogenError::InvalidArgument(format!(
                "Subdirectory '{segment}' is not a valid namespace name"
            )));
        }

        Ok(Self {
            entity_name: entity_name.to_string(),
            user_subpath: user_segments.join("/"),
            base_path: normalize_segments(base_path)?.join("/"),
        })
    }

    /// Split a command-line name argument such as `Admin/Sales/Order`
    ///
    /// The last segment is the entity; the rest, separated by `/` or `\`,
    /// become the user subpath.
    ///
    /// # Errors
    ///
    /// Returns [`RepogenError::InvalidArgument`] if the argument is blank,
    /// ends in a separator, or its last segment is not a valid entity name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use repogen::scaffold::GenerationContext;
    /// let context = GenerationContext::parse("Admin\\Order", "app").unwrap();
    /// assert_eq!(context.entity_name(), "Order");
    /// assert_eq!(context.user_subpath(), "Admin");
    /// ```
    pub fn parse(name_argument: &str, base_path: &str) -> Result<Self> {
        let trimmed = name_argument.trim();
        if trimmed.is_empty() {
            return Err(RepogenError::InvalidArgument(
                "Name argument is not correct.".to_string(),
            ));
        }

        let mut segments: Vec<&str> = trimmed.split(['/', '\\']).collect();
        let entity = segments.pop().unwrap_or_default();
        if entity.is_empty() {
            return Err(RepogenError::InvalidArgument(format!(
                "Name argument is not correct: '{name_argument}' has no entity name"
            )));
        }

        Self::new(entity, &segments.join("/"), base_path)
    }

    /// Singular `PascalCase` entity name
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// `/`-separated subdirectory chosen by the user, possibly empty
    #[must_use]
    pub fn user_subpath(&self) -> &str {
        &self.user_subpath
    }

    /// `/`-separated root directory for generated files, possibly empty
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Segments of the user subpath
    pub fn user_segments(&self) -> impl Iterator<Item = &str> {
        self.user_subpath.split('/').filter(|s| !s.is_empty())
    }

    /// Segments of the base path
    pub fn base_segments(&self) -> impl Iterator<Item = &str> {
        self.base_path.split('/').filter(|s| !s.is_empty())
    }
}

/// Split on either separator, dropping empty and `.` segments
///
/// `..` is refused so generated files cannot leave the base path.
fn normalize_segments(path: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = path
        .split(['/', '\\'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    if segments.contains(&"..") {
        return Err(RepogenError::InvalidArgument(format!(
            "Path must not contain '..': '{path}'"
        )));
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_name() {
        let context = GenerationContext::parse("Order", "app").unwrap();
        assert_eq!(context.entity_name(), "Order");
        assert_eq!(context.user_subpath(), "");
        assert_eq!(context.base_path(), "app");
    }

    #[test]
    fn test_parse_mixed_separators() {
        let context = GenerationContext::parse("Admin\\Sales/Order", "app").unwrap();
        assert_eq!(context.entity_name(), "Order");
        assert_eq!(context.user_subpath(), "Admin/Sales");
        assert_eq!(context.user_segments().collect::<Vec<_>>(), vec!["Admin", "Sales"]);
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let context = GenerationContext::parse("/Admin//Order", "./app/").unwrap();
        assert_eq!(context.user_subpath(), "Admin");
        assert_eq!(context.base_path(), "app");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(matches!(
            GenerationContext::parse("   ", "app"),
            Err(RepogenError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_rejects_trailing_separator() {
        assert!(matches!(
            GenerationContext::parse("Admin/", "app"),
            Err(RepogenError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_new_rejects_separator_in_entity() {
        assert!(GenerationContext::new("Admin/Order", "", "app").is_err());
        assert!(GenerationContext::new("Admin\\Order", "", "app").is_err());
    }

    #[test]
    fn test_new_rejects_lowercase_entity() {
        assert!(GenerationContext::new("order", "", "app").is_err());
    }

    #[test]
    fn test_parent_segments_rejected() {
        for (name, base) in [("../../Order", "app"), ("Admin/../Order", "app"), ("Order", "../app")] {
            assert!(
                matches!(
                    GenerationContext::parse(name, base),
                    Err(RepogenError::InvalidArgument(_))
                ),
                "{name} under {base} should be rejected"
            );
        }
    }

    #[test]
    fn test_subpath_segments_must_be_namespace_names() {
        assert!(matches!(
            GenerationContext::parse("admin panel/Order", "app"),
            Err(RepogenError::InvalidArgument(_))
        ));
        assert!(GenerationContext::parse("Admin/2fa/Order", "app").is_err());

        let context = GenerationContext::parse("admin/Zürich/Order", "app").unwrap();
        assert_eq!(context.user_subpath(), "admin/Zürich");
    }

    #[test]
    fn test_base_path_keeps_directory_names() {
        let context = GenerationContext::parse("Order", "src/shop-core").unwrap();
        assert_eq!(context.base_path(), "src/shop-core");
    }

    #[test]
    fn test_new_accepts_non_ascii_entity() {
        let context = GenerationContext::new("Café", "", "app").unwrap();
        assert_eq!(context.entity_name(), "Café");
    }

    #[test]
    fn test_new_normalizes_subpath() {
        let context = GenerationContext::new("Order", "Admin\\Sales", "app").unwrap();
        assert_eq!(context.user_subpath(), "Admin/Sales");
    }
}
