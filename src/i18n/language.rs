//! Language type: flexible, validated language representation.
//!
//! `Language` is a thin, copyable handle over a registry entry. It can only
//! be constructed for codes the registry knows, so every instance is valid
//! by construction.

use std::fmt;

use anyhow::{bail, Result};

use crate::i18n::strings::LanguageStrings;
use crate::i18n::{LanguageConfig, LanguageRegistry};

/// A validated language.
///
/// Only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    /// Constant for English, the canonical language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Constant for Spanish.
    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (fallback) language.
    ///
    /// This is the language every missing string resolves to.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// `Language` constructed via `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the localized string table for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_spanish_constant() {
        let spanish = Language::SPANISH;
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.name(), "Spanish");
        assert!(!spanish.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_all_supported_languages() {
        for code in ["en", "es", "fr", "zh", "ar", "hi", "gu"] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("de");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_case_sensitive() {
        // Codes are stored lowercase; "EN" is not a registered code.
        assert!(Language::from_code("EN").is_err());
    }

    // ==================== canonical Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        let canonical = Language::canonical();
        assert_eq!(canonical.code(), "en");
        assert!(canonical.is_canonical());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::ENGLISH;
        let lang2 = Language::from_code("en").unwrap();
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_language_inequality() {
        assert_ne!(Language::ENGLISH, Language::SPANISH);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::ENGLISH;
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2); // Both still valid
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::SPANISH.to_string(), "es");
    }

    // ==================== Config Access Tests ====================

    #[test]
    fn test_config_access() {
        let lang = Language::from_code("fr").unwrap();
        let config = lang.config();
        assert_eq!(config.code, "fr");
        assert_eq!(config.name, "French");
        assert_eq!(config.native_name, "Français");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::ENGLISH.native_name(), "English");
        assert_eq!(Language::SPANISH.native_name(), "Español");
        assert_eq!(Language::from_code("hi").unwrap().native_name(), "हिन्दी");
    }

    #[test]
    fn test_strings_access() {
        // Every language exposes a string table; the canonical one is
        // complete by construction.
        let strings = Language::ENGLISH.strings();
        assert!(!strings.welcome.is_empty());
    }
}
