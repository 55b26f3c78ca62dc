//! Naming helpers for placeholder values
//!
//! Case conversion and pluralization go through the `Inflector` crate so the
//! derived names follow one consistent set of English rules.

use inflector::Inflector;

/// Naming-convention helpers used to build placeholder values
pub struct NamingHelpers;

impl NamingHelpers {
    /// Lowercase form of an entity name
    ///
    /// # Examples
    ///
    /// ```
    /// # use repogen::scaffold::helpers::NamingHelpers;
    /// assert_eq!(NamingHelpers::to_lowercase("UserProfile"), "userprofile");
    /// ```
    #[must_use]
    pub fn to_lowercase(input: &str) -> String {
        input.to_lowercase()
    }

    /// Pluralize a word
    ///
    /// # Examples
    ///
    /// ```
    /// # use repogen::scaffold::helpers::NamingHelpers;
    /// assert_eq!(NamingHelpers::pluralize("category"), "categories");
    /// assert_eq!(NamingHelpers::pluralize("box"), "boxes");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        input.to_plural()
    }

    /// Plural of the lowercase form
    ///
    /// # Examples
    ///
    /// ```
    /// # use repogen::scaffold::helpers::NamingHelpers;
    /// assert_eq!(NamingHelpers::to_plural_lowercase("City"), "cities");
    /// assert_eq!(NamingHelpers::to_plural_lowercase("User"), "users");
    /// ```
    #[must_use]
    pub fn to_plural_lowercase(input: &str) -> String {
        Self::pluralize(&Self::to_lowercase(input))
    }

    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use repogen::scaffold::helpers::NamingHelpers;
    /// assert_eq!(NamingHelpers::to_snake_case("UserProfile"), "user_profile");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        input.to_snake_case()
    }

    /// Convert string to `PascalCase`
    ///
    /// # Examples
    ///
    /// ```
    /// # use repogen::scaffold::helpers::NamingHelpers;
    /// assert_eq!(NamingHelpers::to_pascal_case("app"), "App");
    /// assert_eq!(NamingHelpers::to_pascal_case("my-module"), "MyModule");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Whether `input` is usable as a class name: letters, digits and
    /// underscores, starting with an uppercase letter
    ///
    /// # Examples
    ///
    /// ```
    /// # use repogen::scaffold::helpers::NamingHelpers;
    /// assert!(NamingHelpers::is_class_name("Café"));
    /// assert!(!NamingHelpers::is_class_name("order"));
    /// ```
    #[must_use]
    pub fn is_class_name(input: &str) -> bool {
        let mut chars = input.chars();
        chars.next().is_some_and(char::is_uppercase) && chars.all(is_identifier_char)
    }

    /// Whether `input` is usable as one namespace segment: letters, digits
    /// and underscores, not starting with a digit
    #[must_use]
    pub fn is_namespace_segment(input: &str) -> bool {
        let mut chars = input.chars();
        chars.next().is_some_and(|c| c.is_alphabetic() || c == '_')
            && chars.all(is_identifier_char)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
