//! Option shapes shared by several operations.
//!
//! Most customization endpoints take nothing but identifiers, so one struct
//! per identifier set is aliased under each operation's name.

use std::collections::HashMap;

/// Options for operations without parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub headers: HashMap<String, String>,
}

impl ListOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Options for listing custom models, optionally limited to one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCustomizationsOptions {
    /// Language code such as `en-US`; all languages when unset.
    pub language: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListCustomizationsOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Options naming one custom model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomizationOptions {
    pub customization_id: String,
    pub headers: HashMap<String, String>,
}

impl CustomizationOptions {
    #[must_use]
    pub fn new(customization_id: impl Into<String>) -> Self {
        Self {
            customization_id: customization_id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options naming one resource (corpus, word, grammar, audio) of a custom
/// model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceOptions {
    pub customization_id: String,
    pub name: String,
    pub headers: HashMap<String, String>,
}

impl ResourceOptions {
    #[must_use]
    pub fn new(customization_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            customization_id: customization_id.into(),
            name: name.into(),
            headers: HashMap::new(),
        }
    }
}

watson_core::impl_with_header!(
    ListOptions,
    ListCustomizationsOptions,
    CustomizationOptions,
    ResourceOptions,
);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resource_options_keep_both_ids() {
        let options = ResourceOptions::new("cust-1", "corpus-1").with_header("X-Trace", "1");
        assert_eq!(options.customization_id, "cust-1");
        assert_eq!(options.name, "corpus-1");
        assert_eq!(options.headers.len(), 1);
    }

    #[test]
    fn language_filter_is_optional() {
        assert!(ListCustomizationsOptions::new().language.is_none());
        assert_eq!(
            ListCustomizationsOptions::new()
                .with_language("en-US")
                .language
                .as_deref(),
            Some("en-US")
        );
    }
}
