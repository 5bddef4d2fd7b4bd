//! Language registry: single source of truth for all supported languages.
//!
//! The registry holds every language the app can display, together with its
//! metadata and localized string table. It uses a singleton pattern with
//! `OnceLock` to ensure thread-safe initialization and access.

use std::sync::OnceLock;

use crate::i18n::strings::{
    LanguageStrings, ARABIC_STRINGS, CHINESE_STRINGS, ENGLISH_STRINGS, FRENCH_STRINGS,
    GUJARATI_STRINGS, HINDI_STRINGS, SPANISH_STRINGS,
};

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es", "gu")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español", "ગુજરાતી")
    pub native_name: &'static str,

    /// Whether this is the canonical/fallback language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for selection
    pub enabled: bool,

    /// Localized string table for this language
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Returns `None` if the code is not registered.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in registration order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the fallback for every missing string
    /// (English). There must be exactly one canonical language.
    ///
    /// # Panics
    /// Panics if zero or multiple canonical languages are registered, which
    /// indicates a configuration error.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is registered and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The languages ParentConnect ships with.
///
/// English is the canonical language; every other table falls back to it
/// for strings it does not localize.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
            enabled: true,
            strings: &SPANISH_STRINGS,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_canonical: false,
            enabled: true,
            strings: &FRENCH_STRINGS,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_canonical: false,
            enabled: true,
            strings: &CHINESE_STRINGS,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            is_canonical: false,
            enabled: true,
            strings: &ARABIC_STRINGS,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            is_canonical: false,
            enabled: true,
            strings: &HINDI_STRINGS,
        },
        LanguageConfig {
            code: "gu",
            name: "Gujarati",
            native_name: "ગુજરાતી",
            is_canonical: false,
            enabled: true,
            strings: &GUJARATI_STRINGS,
        },
    ]
}
