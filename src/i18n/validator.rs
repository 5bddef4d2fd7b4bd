//! Locale catalog validation module.
//!
//! Checks every registered language's string table against the set of
//! recognized translation keys. Gaps in a non-canonical table are
//! acceptable (they fall back to English at lookup time) but are worth
//! surfacing; gaps in the canonical table break the fallback chain and are
//! reported as errors.

use crate::i18n::strings::ALL_KEYS;
use crate::i18n::LanguageRegistry;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical problems: the canonical table is missing a key
    pub errors: Vec<String>,

    /// Non-critical gaps: a language falls back to English for a key
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale catalog completeness.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate every enabled language against the recognized key set.
    ///
    /// # Returns
    /// A `ValidationReport`: one error per key the canonical table is
    /// missing, one warning per key a non-canonical table leaves empty.
    pub fn validate() -> ValidationReport {
        let mut report = ValidationReport::new();
        let registry = LanguageRegistry::get();
        let canonical = registry.canonical();

        for key in ALL_KEYS {
            if canonical.strings.lookup(key).is_none() {
                report.errors.push(format!(
                    "Canonical language '{}' is missing '{}'",
                    canonical.code, key
                ));
            }
        }

        for config in registry.list_enabled() {
            if config.is_canonical {
                continue;
            }
            for key in ALL_KEYS {
                if config.strings.lookup(key).is_none() {
                    report.warnings.push(format!(
                        "Language '{}' is missing '{}' (falls back to '{}')",
                        config.code, key, canonical.code
                    ));
                }
            }
        }

        report
    }
}
