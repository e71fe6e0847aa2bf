//! Shared language registry.
//!
//! The registry owns one validated [`LanguageConfig`] per language name
//! and hands out `Arc` clones for read-only sharing across documents.
//! Registration is the fail-fast point for malformed configurations:
//! errors surface here, before any document is opened with the language.
//! The lock guards registration only - tokenization holds an `Arc` and
//! never touches the registry on the scan path.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::config::{ConfigError, LanguageConfig, LanguageOptions};

/// Registry of validated, immutable language configurations.
///
/// # Examples
///
/// ```
/// use glint_lang::LanguageRegistry;
///
/// let registry = LanguageRegistry::with_builtins();
/// let js = registry.get("JavaScript").unwrap();
/// assert!(js.is_reserved_identifier("const"));
/// ```
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: RwLock<IndexMap<String, Arc<LanguageConfig>>>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            languages: RwLock::new(IndexMap::new()),
        }
    }

    /// Create a registry with the built-in languages registered.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        {
            let mut languages = registry.languages.write();
            let javascript = LanguageConfig::javascript();
            languages.insert(javascript.name.clone(), Arc::new(javascript));
        }
        registry
    }

    /// Validate and register a language from enumerated options.
    ///
    /// # Errors
    ///
    /// Returns the first structural [`ConfigError`] in the options, or
    /// [`ConfigError::DuplicateLanguage`] if the name is already taken.
    pub fn register(&self, options: LanguageOptions) -> Result<Arc<LanguageConfig>, ConfigError> {
        let config = LanguageConfig::new(options)?;
        self.register_config(config)
    }

    /// Register an already-validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateLanguage`] if the name is taken.
    pub fn register_config(
        &self,
        config: LanguageConfig,
    ) -> Result<Arc<LanguageConfig>, ConfigError> {
        let mut languages = self.languages.write();
        if languages.contains_key(&config.name) {
            return Err(ConfigError::DuplicateLanguage(config.name));
        }
        let config = Arc::new(config);
        languages.insert(config.name.clone(), Arc::clone(&config));
        Ok(config)
    }

    /// Look up a language by exact name.
    pub fn get(&self, name: &str) -> Option<Arc<LanguageConfig>> {
        self.languages.read().get(name).map(Arc::clone)
    }

    /// Look up a language by name, ignoring ASCII case.
    ///
    /// Useful for user-facing lookups (`--language javascript`).
    pub fn resolve(&self, name: &str) -> Option<Arc<LanguageConfig>> {
        let languages = self.languages.read();
        languages
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, config)| Arc::clone(config))
    }

    /// Registered language names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.languages.read().keys().cloned().collect()
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.read().len()
    }

    /// Returns true if no language is registered.
    pub fn is_empty(&self) -> bool {
        self.languages.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{CharClass, Pattern};
    use crate::quoting::{QuoteStyle, StringPattern};

    fn toy_options(name: &str) -> LanguageOptions {
        LanguageOptions {
            name: name.to_string(),
            supports_square_brackets: false,
            supports_curly_brackets: false,
            string_pattern: StringPattern::new(vec![QuoteStyle::new('"', '\\')]),
            character_pattern: None,
            number_pattern: Pattern::repeat1(Pattern::class(CharClass::AsciiDigit)),
            single_line_comment: None,
            nested_comment: None,
            identifier_pattern: Pattern::repeat1(Pattern::class(CharClass::Alphabetic)),
            operator_pattern: Pattern::literal("="),
            reserved_identifiers: vec![],
            reserved_operators: vec![],
            language_service: None,
        }
    }

    #[test]
    fn test_builtins_present() {
        let registry = LanguageRegistry::with_builtins();
        assert!(registry.get("JavaScript").is_some());
        assert_eq!(registry.names(), vec!["JavaScript".to_string()]);
    }

    #[test]
    fn test_register_and_get() {
        let registry = LanguageRegistry::new();
        registry.register(toy_options("Toy")).unwrap();
        assert!(registry.get("Toy").is_some());
        assert!(registry.get("toy").is_none());
        assert!(registry.resolve("toy").is_some());
    }

    #[test]
    fn test_duplicate_rejected() {
        let registry = LanguageRegistry::new();
        registry.register(toy_options("Toy")).unwrap();
        let err = registry.register(toy_options("Toy")).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateLanguage(name) if name == "Toy"));
    }

    #[test]
    fn test_malformed_options_rejected_at_registration() {
        let registry = LanguageRegistry::new();
        let mut options = toy_options("Broken");
        options.operator_pattern = Pattern::literal("");
        assert!(registry.register(options).is_err());
        assert!(registry.get("Broken").is_none());
    }

    #[test]
    fn test_shared_config_is_same_instance() {
        let registry = LanguageRegistry::with_builtins();
        let a = registry.get("JavaScript").unwrap();
        let b = registry.get("JavaScript").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_names_keep_registration_order() {
        let registry = LanguageRegistry::new();
        registry.register(toy_options("B")).unwrap();
        registry.register(toy_options("A")).unwrap();
        assert_eq!(registry.names(), vec!["B".to_string(), "A".to_string()]);
    }
}
